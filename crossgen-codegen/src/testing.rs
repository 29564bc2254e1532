//! Test utilities for targets and the emitter.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use crossgen_core::OutputBuffer;
use crossgen_ir::{Declaration, DeclarationTable, PrimitiveType, TypeRef};

use crate::{Emitter, NamingConvention, Target};

fn keep(name: &str) -> String {
    name.to_string()
}

fn escape(name: &str) -> String {
    format!("{name}_")
}

const BRACE_NAMING: NamingConvention = NamingConvention {
    type_case: keep,
    member_case: keep,
    reserved_words: &["class", "new", "this", "base"],
    escape_reserved: escape,
};

/// A small C-family target with readable, predictable output.
///
/// Only overrides what the trait requires; everything else is the trait's
/// default behavior, which makes it useful for testing those defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct BraceTarget;

impl Target for BraceTarget {
    fn language(&self) -> &'static str {
        "brace"
    }

    fn file_extension(&self) -> &'static str {
        "txt"
    }

    fn naming(&self) -> &NamingConvention {
        &BRACE_NAMING
    }

    fn getter_name(&self, name: &str) -> String {
        format!("get_{name}")
    }

    fn setter_name(&self, name: &str) -> String {
        format!("set_{name}")
    }

    fn map_primitive(&self, ty: PrimitiveType) -> String {
        ty.as_str().to_string()
    }

    fn vector_type(&self, element: &str) -> String {
        format!("List<{element}>")
    }

    fn function_type(&self, ret: Option<&str>, params: &[String]) -> String {
        format!("fn({}) -> {}", params.join(", "), ret.unwrap_or("void"))
    }

    fn import_statement(&self, namespace: &str) -> String {
        format!("import {namespace};")
    }

    fn class_header(&self, name: &str, is_final: bool) -> String {
        if is_final {
            format!("public final class {name}")
        } else {
            format!("public class {name}")
        }
    }

    fn const_keyword(&self, _ty: &TypeRef) -> &'static str {
        "const"
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
        format!("{lhs} is {rhs}")
    }

    fn write_foreach(
        &self,
        out: &mut OutputBuffer,
        var: &str,
        var_ty: &TypeRef,
        collection: &str,
        _collection_ty: &TypeRef,
        body: &OutputBuffer,
    ) {
        out.write_line(&format!("for ({} {var} : {collection})", self.render_type(var_ty)));
        out.block_open();
        out.splice(body);
        out.block_close();
    }
}

/// Render a single declaration with a throwaway table.
///
/// Panics on emission errors; meant for tests only.
pub fn render(target: &dyn Target, decl: &Declaration) -> String {
    let table = DeclarationTable::new();
    render_in(&table, target, decl)
}

/// Render a declaration against an existing table.
///
/// Panics on emission errors; meant for tests only.
pub fn render_in(table: &DeclarationTable, target: &dyn Target, decl: &Declaration) -> String {
    let buffer = Emitter::new(table, target)
        .render(decl)
        .unwrap_or_else(|e| panic!("failed to render '{}': {e}", decl.qualified_name()));
    buffer.render(target.indent())
}
