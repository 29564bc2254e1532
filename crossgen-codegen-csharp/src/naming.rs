//! C#-specific naming conventions.

use crossgen_codegen::NamingConvention;

fn keep(name: &str) -> String {
    name.to_string()
}

fn escape_csharp_reserved(name: &str) -> String {
    format!("@{}", name)
}

/// C# naming conventions.
///
/// Names are kept as written in the source: method bodies arrive
/// pre-rendered and refer to members by their original spelling.
pub const CS_NAMING: NamingConvention = NamingConvention {
    type_case: keep,
    member_case: keep,
    reserved_words: &[
        "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
        "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
        "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
        "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
        "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
        "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed",
        "short", "sizeof", "stackalloc", "static", "string", "struct", "switch", "this",
        "throw", "true", "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort",
        "using", "virtual", "void", "volatile", "while",
    ],
    escape_reserved: escape_csharp_reserved,
};
