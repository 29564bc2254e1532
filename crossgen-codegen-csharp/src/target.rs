//! C# formatting strategy.

use crossgen_codegen::{FieldInitPolicy, NamingConvention, Target};
use crossgen_core::{Indent, OutputBuffer, capitalize};
use crossgen_ir::{PrimitiveType, TypeRef};

use crate::CS_NAMING;

const VECTOR_TYPE: &str = "Vector";

/// The C# target.
///
/// # Example
///
/// ```
/// use crossgen_codegen::Target;
/// use crossgen_codegen_csharp::CSharpTarget;
/// use crossgen_ir::TypeRef;
///
/// let cs = CSharpTarget::new();
/// assert_eq!(cs.render_type(&TypeRef::vector(TypeRef::int())), "Vector<int>");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CSharpTarget {
    indent: Indent,
    field_init: FieldInitPolicy,
}

impl CSharpTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different indentation.
    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// Use a different rule for deferring field initializers.
    pub fn with_field_init(mut self, policy: FieldInitPolicy) -> Self {
        self.field_init = policy;
        self
    }
}

impl Default for CSharpTarget {
    fn default() -> Self {
        Self {
            indent: Indent::CSHARP,
            field_init: FieldInitPolicy::default(),
        }
    }
}

impl Target for CSharpTarget {
    fn language(&self) -> &'static str {
        "csharp"
    }

    fn file_extension(&self) -> &'static str {
        "cs"
    }

    fn naming(&self) -> &NamingConvention {
        &CS_NAMING
    }

    fn indent(&self) -> Indent {
        self.indent
    }

    fn field_init_policy(&self) -> FieldInitPolicy {
        self.field_init
    }

    fn getter_name(&self, name: &str) -> String {
        format!("get{}", capitalize(name))
    }

    fn setter_name(&self, name: &str) -> String {
        format!("set{}", capitalize(name))
    }

    fn class_type_override(&self, name: &str) -> Option<String> {
        let mapped = match name {
            "String" | "Object" => name,
            "Function" => "Delegate",
            "Error" => "Exception",
            _ => return None,
        };
        Some(mapped.to_string())
    }

    fn map_primitive(&self, ty: PrimitiveType) -> String {
        match ty {
            PrimitiveType::Int => "int",
            PrimitiveType::UInt => "uint",
            PrimitiveType::Number => "float",
            PrimitiveType::Boolean => "bool",
            PrimitiveType::Any => "Object",
        }
        .to_string()
    }

    fn vector_type(&self, element: &str) -> String {
        format!("{}<{}>", self.class_type(VECTOR_TYPE), element)
    }

    fn function_type(&self, ret: Option<&str>, params: &[String]) -> String {
        match (ret, params.is_empty()) {
            (None, true) => "Action".to_string(),
            (None, false) => format!("Action<{}>", params.join(", ")),
            (Some(ret), true) => format!("Func<{ret}>"),
            (Some(ret), false) => format!("Func<{}, {ret}>", params.join(", ")),
        }
    }

    fn preamble(&self) -> &'static [&'static str] {
        &["using System;"]
    }

    fn import_statement(&self, namespace: &str) -> String {
        format!("using {namespace};")
    }

    fn class_header(&self, name: &str, is_final: bool) -> String {
        if is_final {
            format!("public sealed class {name}")
        } else {
            format!("public class {name}")
        }
    }

    fn const_keyword(&self, ty: &TypeRef) -> &'static str {
        // C# constants must be compile-time values.
        if ty.is_class_like() { "static" } else { "const" }
    }

    fn virtual_keyword(&self) -> Option<&'static str> {
        Some("virtual")
    }

    fn delegate_declaration(&self, name: &str, ret: &str, params: &str) -> String {
        format!("public delegate {ret} {name}({params});")
    }

    fn base_call_keyword(&self) -> &'static str {
        "base"
    }

    fn operator_is(&self, lhs: &str, rhs: &str) -> String {
        format!("{lhs} is {}", self.class_type(rhs))
    }

    fn write_foreach(
        &self,
        out: &mut OutputBuffer,
        var: &str,
        var_ty: &TypeRef,
        collection: &str,
        collection_ty: &TypeRef,
        body: &OutputBuffer,
    ) {
        let temp = format!("__{var}s_");
        out.write_line(&format!(
            "{} {temp} = {collection};",
            self.render_type(collection_ty)
        ));
        out.write_line(&format!("if ({temp} != {})", self.literal_null()));
        out.block_open();
        out.write_line(&format!(
            "foreach ({} {var} in {temp})",
            self.render_type(var_ty)
        ));
        out.block_open();
        out.splice(body);
        out.block_close();
        out.block_close();
    }
}

#[cfg(test)]
mod tests {
    use crossgen_ir::DeclId;

    use super::*;

    #[test]
    fn test_primitives() {
        let cs = CSharpTarget::new();
        assert_eq!(cs.render_type(&TypeRef::int()), "int");
        assert_eq!(cs.render_type(&TypeRef::uint()), "uint");
        assert_eq!(cs.render_type(&TypeRef::number()), "float");
        assert_eq!(cs.render_type(&TypeRef::boolean()), "bool");
        assert_eq!(cs.render_type(&TypeRef::primitive(PrimitiveType::Any)), "Object");
    }

    #[test]
    fn test_class_overrides() {
        let cs = CSharpTarget::new();
        assert_eq!(cs.render_type(&TypeRef::class("String")), "String");
        assert_eq!(cs.render_type(&TypeRef::class("Function")), "Delegate");
        assert_eq!(cs.render_type(&TypeRef::class("Error")), "Exception");
        assert_eq!(
            cs.render_type(&TypeRef::user_class("Sprite", DeclId::new(0))),
            "Sprite"
        );
    }

    #[test]
    fn test_user_class_shadowing_builtin_keeps_its_name() {
        let cs = CSharpTarget::new();
        let id = DeclId::new(0);
        assert_eq!(cs.render_type(&TypeRef::user_class("Error", id)), "Error");
        assert_eq!(cs.render_type(&TypeRef::user_class("Function", id)), "Function");
        assert_eq!(
            cs.render_type(&TypeRef::vector(TypeRef::user_class("Error", id))),
            "Vector<Error>"
        );
        assert_eq!(cs.render_type(&TypeRef::class("Error")), "Exception");
    }

    #[test]
    fn test_nested_vectors() {
        let cs = CSharpTarget::new();
        let ty = TypeRef::vector(TypeRef::vector(TypeRef::class("Point")));
        assert_eq!(cs.render_type(&ty), "Vector<Vector<Point>>");
    }

    #[test]
    fn test_function_types() {
        let cs = CSharpTarget::new();
        assert_eq!(cs.render_type(&TypeRef::function(None, vec![])), "Action");
        assert_eq!(
            cs.render_type(&TypeRef::function(None, vec![TypeRef::int()])),
            "Action<int>"
        );
        assert_eq!(
            cs.render_type(&TypeRef::function(Some(TypeRef::boolean()), vec![])),
            "Func<bool>"
        );
        assert_eq!(
            cs.render_type(&TypeRef::function(
                Some(TypeRef::boolean()),
                vec![TypeRef::int(), TypeRef::class("String")]
            )),
            "Func<int, String, bool>"
        );
    }

    #[test]
    fn test_accessor_names() {
        let cs = CSharpTarget::new();
        assert_eq!(cs.getter_name("width"), "getWidth");
        assert_eq!(cs.setter_name("width"), "setWidth");
    }

    #[test]
    fn test_const_keyword() {
        let cs = CSharpTarget::new();
        assert_eq!(cs.const_keyword(&TypeRef::int()), "const");
        assert_eq!(cs.const_keyword(&TypeRef::class("String")), "static");
        assert_eq!(cs.const_keyword(&TypeRef::vector(TypeRef::int())), "static");
    }

    #[test]
    fn test_expressions() {
        let cs = CSharpTarget::new();
        assert_eq!(cs.construct("Point", "1, 2"), "new Point(1, 2)");
        assert_eq!(cs.operator_is("shape", "Circle"), "shape is Circle");
        assert_eq!(cs.operator_is("value", "String"), "value is String");
    }

    #[test]
    fn test_namespace_escaping() {
        let cs = CSharpTarget::new();
        assert_eq!(cs.namespace("game.event.input"), "game.@event.input");
        assert_eq!(cs.import_statement("game.ui"), "using game.ui;");
    }

    #[test]
    fn test_foreach() {
        let cs = CSharpTarget::new();
        let mut out = OutputBuffer::new();
        let body = OutputBuffer::from_lines(["total += item;"]);
        cs.write_foreach(
            &mut out,
            "item",
            &TypeRef::int(),
            "items",
            &TypeRef::vector(TypeRef::int()),
            &body,
        );

        let expected = "\
Vector<int> __items_ = items;
if (__items_ != null)
{
    foreach (int item in __items_)
    {
        total += item;
    }
}
";
        assert_eq!(out.render(cs.indent()), expected);
    }

    #[test]
    fn test_builder() {
        let cs = CSharpTarget::new()
            .with_indent(Indent::Tab)
            .with_field_init(FieldInitPolicy::Inline);
        assert_eq!(cs.indent(), Indent::Tab);
        assert_eq!(cs.field_init_policy(), FieldInitPolicy::Inline);
    }
}
