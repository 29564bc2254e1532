//! Naming conventions for target languages.

/// Language-specific naming conventions.
///
/// Defines how source names are cased in the target and how names that
/// collide with target keywords are escaped.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a class name to a target type name
    pub type_case: fn(&str) -> String,
    /// Transform a field, method or parameter name
    pub member_case: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "event" -> "@event" in C#)
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Transform and make safe for use as a type name.
    pub fn type_name(&self, name: &str) -> String {
        let transformed = (self.type_case)(name);
        self.safe_name(&transformed)
    }

    /// Transform and make safe for use as a member name.
    pub fn member_name(&self, name: &str) -> String {
        let transformed = (self.member_case)(name);
        self.safe_name(&transformed)
    }
}
