//! Target formatting strategy.
//!
//! The [`Emitter`](crate::Emitter) never spells a keyword, a type or a
//! delimiter itself: every such decision goes through [`Target`]. Most
//! methods have C-family defaults so a new target only overrides what its
//! syntax actually changes.

use crossgen_core::{Delimiters, Indent, OutputBuffer};
use crossgen_ir::{Field, PrimitiveType, TypeRef, Visibility};
use serde::{Deserialize, Serialize};

use crate::NamingConvention;

/// Rule deciding which field initializers can stay at the declaration site.
///
/// Instance fields whose initializer is not inline-safe are assigned by a
/// synthesized method that every constructor calls. `const` and `static`
/// fields are always inlined: a per-instance method cannot initialize them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldInitPolicy {
    /// Inline every initializer.
    Inline,
    /// Defer initializers that construct an object.
    #[default]
    DeferConstructions,
    /// Defer everything except plain literals.
    DeferNonLiteral,
}

impl FieldInitPolicy {
    /// Check whether the field's initializer may be written inline.
    pub fn is_inline_safe(&self, field: &Field) -> bool {
        let Some(init) = &field.initializer else {
            return true;
        };
        if field.is_const || field.is_static {
            return true;
        }
        match self {
            Self::Inline => true,
            Self::DeferConstructions => !has_construction(init),
            Self::DeferNonLiteral => is_literal(init),
        }
    }
}

fn has_construction(expr: &str) -> bool {
    let mut code = String::with_capacity(expr.len());
    let mut quote: Option<char> = None;
    let mut escaped = false;
    for c in expr.chars() {
        match quote {
            Some(_) if escaped => escaped = false,
            Some(_) if c == '\\' => escaped = true,
            Some(q) if c == q => {
                quote = None;
                code.push(' ');
            }
            Some(_) => {}
            None if c == '"' || c == '\'' => quote = Some(c),
            None => code.push(c),
        }
    }
    code.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .any(|word| word == "new")
}

fn is_literal(expr: &str) -> bool {
    let expr = expr.trim();
    let quoted = |q: char| expr.len() >= 2 && expr.starts_with(q) && expr.ends_with(q);
    if quoted('"') || quoted('\'') {
        return true;
    }
    if matches!(expr, "true" | "false" | "null") {
        return true;
    }
    let digits = expr.strip_prefix('-').unwrap_or(expr);
    if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        return !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    let digits = digits.trim_end_matches(['f', 'F', 'd', 'D', 'u', 'U', 'l', 'L']);
    digits.starts_with(|c: char| c.is_ascii_digit() || c == '.') && digits.parse::<f64>().is_ok()
}

/// Formatting capabilities of one target language.
///
/// Implement this trait to add a new target. Object-safe: the emitter holds
/// a `&dyn Target` selected at call time.
pub trait Target: Send + Sync {
    /// Target identifier (e.g., "csharp").
    fn language(&self) -> &'static str;

    /// File extension of generated sources, without the dot.
    fn file_extension(&self) -> &'static str;

    /// Naming rules for identifiers.
    fn naming(&self) -> &NamingConvention;

    /// Indentation used when rendering output.
    fn indent(&self) -> Indent {
        Indent::default()
    }

    /// Block delimiters.
    fn delimiters(&self) -> Delimiters {
        Delimiters::BRACES
    }

    /// Rule for deferring field initializers.
    fn field_init_policy(&self) -> FieldInitPolicy {
        FieldInitPolicy::default()
    }

    /// Check whether the field's initializer may be written inline.
    fn is_inline_safe(&self, field: &Field) -> bool {
        self.field_init_policy().is_inline_safe(field)
    }

    // =========================================================================
    // Lexical choices
    // =========================================================================

    /// Spell a member or parameter name.
    fn identifier(&self, name: &str) -> String {
        self.naming().member_name(name)
    }

    /// Spell a package name as a namespace.
    fn namespace(&self, package: &str) -> String {
        package
            .split('.')
            .map(|segment| self.naming().safe_name(segment))
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Name of the accessor method generated for a getter.
    fn getter_name(&self, name: &str) -> String;

    /// Name of the accessor method generated for a setter.
    fn setter_name(&self, name: &str) -> String;

    /// The null literal.
    fn literal_null(&self) -> &'static str {
        "null"
    }

    /// Keyword for a visibility.
    fn visibility(&self, visibility: Visibility) -> &'static str {
        visibility.as_str()
    }

    /// Special-case a built-in class name; `None` keeps the default mapping.
    fn class_type_override(&self, _name: &str) -> Option<String> {
        None
    }

    /// Spell a class name.
    fn class_type(&self, name: &str) -> String {
        self.class_type_override(name)
            .unwrap_or_else(|| self.naming().type_name(name))
    }

    // =========================================================================
    // Types
    // =========================================================================

    /// Map a primitive type.
    fn map_primitive(&self, ty: PrimitiveType) -> String;

    /// The "no value" return type.
    fn void_type(&self) -> &'static str {
        "void"
    }

    /// Generic container type around an already rendered element type.
    fn vector_type(&self, element: &str) -> String;

    /// Function type from already rendered parts.
    fn function_type(&self, ret: Option<&str>, params: &[String]) -> String;

    /// Render a complete type reference.
    fn render_type(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Primitive { name } => self.map_primitive(*name),
            // User classes keep their own name even when it shadows a built-in.
            TypeRef::Class {
                name,
                decl: Some(_),
            } => self.naming().type_name(name),
            TypeRef::Class { name, decl: None } => self.class_type(name),
            TypeRef::Vector { element } => {
                let element = self.render_type(element);
                self.vector_type(&element)
            }
            TypeRef::Function { ret, params } => {
                let ret = ret.as_deref().map(|r| self.render_type(r));
                let params: Vec<_> = params.iter().map(|p| self.render_type(p)).collect();
                self.function_type(ret.as_deref(), &params)
            }
        }
    }

    /// Render an optional return type, falling back to [`Target::void_type`].
    fn return_type(&self, ty: Option<&TypeRef>) -> String {
        ty.map_or_else(|| self.void_type().to_string(), |ty| self.render_type(ty))
    }

    // =========================================================================
    // Declarations
    // =========================================================================

    /// Lines written at the top of every file.
    fn preamble(&self) -> &'static [&'static str] {
        &[]
    }

    /// Import statement for a namespace.
    fn import_statement(&self, namespace: &str) -> String;

    /// Header line opening a namespace block.
    fn namespace_header(&self, namespace: &str) -> String {
        format!("namespace {namespace}")
    }

    /// Class header without the inheritance clause.
    fn class_header(&self, name: &str, is_final: bool) -> String;

    /// Interface header without the inheritance clause.
    fn interface_header(&self, name: &str) -> String {
        format!("public interface {name}")
    }

    /// Inheritance clause appended to a class or interface header.
    ///
    /// Returns `None` when there is nothing to inherit.
    fn inheritance_clause(&self, extends: Option<&str>, interfaces: &[String]) -> Option<String> {
        let parents: Vec<&str> = extends
            .into_iter()
            .chain(interfaces.iter().map(String::as_str))
            .collect();
        if parents.is_empty() {
            None
        } else {
            Some(format!(" : {}", parents.join(", ")))
        }
    }

    /// Keyword of a static member.
    fn static_keyword(&self) -> &'static str {
        "static"
    }

    /// Keyword of a constant field of the given type.
    fn const_keyword(&self, ty: &TypeRef) -> &'static str;

    /// Keyword of an overriding method.
    fn override_keyword(&self) -> &'static str {
        "override"
    }

    /// Qualifier making a method overridable, if the target needs one.
    fn virtual_keyword(&self) -> Option<&'static str>;

    /// A parameter in a parameter list.
    fn param(&self, ty: &str, name: &str) -> String {
        format!("{ty} {name}")
    }

    /// A nested function-type declaration.
    fn delegate_declaration(&self, name: &str, ret: &str, params: &str) -> String;

    /// Keyword substituted for the same-class delegation marker.
    fn self_call_keyword(&self) -> &'static str {
        "this"
    }

    /// Keyword substituted for the base-class delegation marker.
    fn base_call_keyword(&self) -> &'static str;

    /// Clause appended to a constructor signature for a delegating call.
    fn delegation_clause(&self, call: &str) -> String {
        format!(" : {call}")
    }

    /// Name of the synthesized field initializer method.
    fn field_initializer_method(&self) -> &'static str {
        "__internalInitializeFields"
    }

    /// Statement calling a method without arguments.
    fn call_statement(&self, method: &str) -> String {
        format!("{method}();")
    }

    /// Statement assigning a value to a field.
    fn assignment(&self, target: &str, value: &str) -> String {
        format!("{target} = {value};")
    }

    // =========================================================================
    // Expressions
    // =========================================================================

    /// Construct an instance of a class.
    fn construct(&self, ty: &str, args: &str) -> String {
        format!("new {}({args})", self.class_type(ty))
    }

    /// Construct a vector from constructor arguments.
    fn construct_vector(&self, element: &TypeRef, args: &str) -> String {
        let element = self.render_type(element);
        format!("new {}({args})", self.vector_type(&element))
    }

    /// Construct a vector from a literal element list.
    ///
    /// Both source forms build the same value, so they share one idiom.
    fn construct_literal_vector(&self, element: &TypeRef, args: &str) -> String {
        self.construct_vector(element, args)
    }

    /// Runtime type test.
    fn operator_is(&self, lhs: &str, rhs: &str) -> String;

    /// Null-guarded loop over a collection.
    fn write_foreach(
        &self,
        out: &mut OutputBuffer,
        var: &str,
        var_ty: &TypeRef,
        collection: &str,
        collection_ty: &TypeRef,
        body: &OutputBuffer,
    );
}
