use crossgen_core::OutputBuffer;
use crossgen_ir::{Declaration, Field, FunctionTypeDecl, Method, Param, Visibility};

use super::constructor;
use crate::{EmitError, Result, Target};

/// Writes a single declaration into a fresh buffer.
pub(super) struct DeclarationWriter<'a> {
    target: &'a dyn Target,
    decl: &'a Declaration,
    out: OutputBuffer,
    /// Whether anything was written inside the current type body.
    body_started: bool,
}

impl<'a> DeclarationWriter<'a> {
    pub fn new(target: &'a dyn Target, decl: &'a Declaration) -> Self {
        Self {
            target,
            decl,
            out: OutputBuffer::with_delimiters(target.delimiters()),
            body_started: false,
        }
    }

    pub fn write(mut self, imports: &[String]) -> Result<OutputBuffer> {
        self.check()?;
        self.write_file_header(imports);

        let namespaced = !self.decl.package.is_empty();
        if namespaced {
            let namespace = self.target.namespace(&self.decl.package);
            self.out.write_line(&self.target.namespace_header(&namespace));
            self.out.block_open();
        }

        if self.decl.is_interface() {
            self.write_interface();
        } else {
            self.write_class()?;
        }

        if namespaced {
            self.out.block_close();
        }
        Ok(self.out)
    }

    fn check(&self) -> Result<()> {
        let decl = self.decl;
        if decl.is_interface()
            && let Some(field) = decl.fields.first()
        {
            return Err(EmitError::InterfaceField {
                declaration: decl.qualified_name(),
                field: field.name.clone(),
            });
        }
        if let Some(method) = decl
            .methods
            .iter()
            .find(|m| m.is_constructor() && m.is_accessor())
        {
            return Err(EmitError::AccessorConstructor {
                declaration: decl.qualified_name(),
                method: method.name.clone(),
            });
        }
        Ok(())
    }

    fn write_file_header(&mut self, imports: &[String]) {
        let preamble = self.target.preamble();
        for line in preamble {
            self.out.write_line(line);
        }
        if !preamble.is_empty() {
            self.out.blank();
        }

        for package in imports {
            let namespace = self.target.namespace(package);
            self.out.write_line(&self.target.import_statement(&namespace));
        }
        if !imports.is_empty() {
            self.out.blank();
        }
    }

    // =========================================================================
    // Interfaces
    // =========================================================================

    fn write_interface(&mut self) {
        let target = self.target;
        let decl = self.decl;

        for function_type in &decl.function_types {
            let delegate = self.delegate(function_type);
            self.out.write_line(&delegate);
        }
        if !decl.function_types.is_empty() {
            self.out.blank();
        }

        let name = target.naming().type_name(&decl.name);
        let parents: Vec<String> = decl.interfaces.iter().map(|t| target.render_type(t)).collect();
        self.out.write(&target.interface_header(&name));
        if let Some(clause) = target.inheritance_clause(None, &parents) {
            self.out.write(&clause);
        }
        self.out.end_line();
        self.out.block_open();

        for method in decl.methods.iter().filter(|m| !m.is_constructor()) {
            let ret = target.return_type(method.return_type.as_ref());
            let name = self.method_name(method);
            let params = self.params(&method.params);
            self.out.write_line(&format!("{ret} {name}({params});"));
        }

        self.out.block_close();
    }

    // =========================================================================
    // Classes
    // =========================================================================

    fn write_class(&mut self) -> Result<()> {
        let target = self.target;
        let decl = self.decl;

        let name = target.naming().type_name(&decl.name);
        let extends = decl.extends_type().map(|t| target.render_type(t));
        let interfaces: Vec<String> = decl.interfaces.iter().map(|t| target.render_type(t)).collect();

        self.out.write(&target.class_header(&name, decl.is_final));
        if let Some(clause) = target.inheritance_clause(extends.as_deref(), &interfaces) {
            self.out.write(&clause);
        }
        self.out.end_line();
        self.out.block_open();
        self.body_started = false;

        if !decl.function_types.is_empty() {
            self.section();
            for function_type in &decl.function_types {
                let delegate = self.delegate(function_type);
                self.out.write_line(&delegate);
            }
        }

        if !decl.fields.is_empty() {
            self.section();
            for field in &decl.fields {
                self.write_field(field);
            }
        }

        let deferred: Vec<&Field> = decl
            .fields
            .iter()
            .filter(|f| f.initializer.is_some() && !target.is_inline_safe(f))
            .collect();
        if !deferred.is_empty() {
            self.section();
            self.write_field_initializer(&deferred);
        }

        for method in &decl.methods {
            self.section();
            if method.is_constructor() {
                self.write_constructor(method, !deferred.is_empty())?;
            } else {
                self.write_method(method);
            }
        }

        self.out.block_close();
        Ok(())
    }

    /// Separate a new section of the type body from what came before.
    fn section(&mut self) {
        if self.body_started {
            self.out.blank();
        }
        self.body_started = true;
    }

    fn write_field(&mut self, field: &Field) {
        let target = self.target;

        self.out.write(target.visibility(field.visibility));
        self.out.write(" ");
        if field.is_const {
            self.out.write(target.const_keyword(&field.ty)).write(" ");
        } else if field.is_static {
            self.out.write(target.static_keyword()).write(" ");
        }

        let ty = target.render_type(&field.ty);
        let name = target.identifier(&field.name);
        self.out.write(&format!("{ty} {name}"));

        if let Some(init) = &field.initializer
            && target.is_inline_safe(field)
        {
            self.out.write(&format!(" = {init}"));
        }
        self.out.write_line(";");
    }

    fn write_field_initializer(&mut self, deferred: &[&Field]) {
        let target = self.target;

        self.out.write_line(&format!(
            "{} {} {}()",
            target.visibility(Visibility::Private),
            target.void_type(),
            target.field_initializer_method()
        ));
        self.out.block_open();
        for field in deferred {
            if let Some(init) = &field.initializer {
                self.out
                    .write_line(&target.assignment(&target.identifier(&field.name), init));
            }
        }
        self.out.block_close();
    }

    fn write_constructor(&mut self, method: &Method, init_fields: bool) -> Result<()> {
        let target = self.target;

        let rewritten = constructor::rewrite(
            target,
            &self.decl.qualified_name(),
            &method.body,
            init_fields,
        )?;

        let name = target.naming().type_name(&self.decl.name);
        let params = self.params(&method.params);
        self.out.write(target.visibility(method.visibility));
        self.out.write(&format!(" {name}({params})"));
        if let Some(clause) = &rewritten.clause {
            self.out.write(clause);
        }
        self.out.end_line();

        self.out.block_open();
        self.out.splice(&rewritten.body);
        self.out.block_close();
        Ok(())
    }

    fn write_method(&mut self, method: &Method) {
        let target = self.target;

        let modifier = self.modifier(method);
        self.out.write(target.visibility(method.visibility));
        self.out.write(" ");
        if let Some(modifier) = modifier {
            self.out.write(modifier).write(" ");
        }

        let ret = target.return_type(method.return_type.as_ref());
        let name = self.method_name(method);
        let params = self.params(&method.params);
        self.out.write_line(&format!("{ret} {name}({params})"));

        self.out.block_open();
        self.out.splice(&method.body);
        self.out.block_close();
    }

    /// Resolve the single modifier of a non-constructor method.
    ///
    /// Precedence: static, then override, then the target's overridable
    /// qualifier for non-private members of non-final classes.
    fn modifier(&self, method: &Method) -> Option<&'static str> {
        let target = self.target;
        if method.flags.is_static {
            Some(target.static_keyword())
        } else if method.flags.is_override {
            Some(target.override_keyword())
        } else if !method.visibility.is_private() && !self.decl.is_final {
            target.virtual_keyword()
        } else {
            None
        }
    }

    fn method_name(&self, method: &Method) -> String {
        let target = self.target;
        if method.flags.is_getter {
            target.identifier(&target.getter_name(&method.name))
        } else if method.flags.is_setter {
            target.identifier(&target.setter_name(&method.name))
        } else {
            target.identifier(&method.name)
        }
    }

    fn params(&self, params: &[Param]) -> String {
        params
            .iter()
            .map(|p| {
                self.target
                    .param(&self.target.render_type(&p.ty), &self.target.identifier(&p.name))
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn delegate(&self, function_type: &FunctionTypeDecl) -> String {
        let target = self.target;
        let ret = target.return_type(function_type.return_type.as_ref());
        let name = target.naming().type_name(&function_type.name);
        target.delegate_declaration(&name, &ret, &self.params(&function_type.params))
    }
}
