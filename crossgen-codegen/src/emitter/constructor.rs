//! Constructor post-processing.
//!
//! The front end encodes a delegating constructor call as the first body
//! statement, using a marker instead of target syntax. Targets that place
//! the delegating call in the constructor header get it moved there.

use crossgen_core::OutputBuffer;

use crate::{EmitError, Result, Target};

/// Marker of a call to another constructor of the same class.
pub const THIS_CALL_MARKER: &str = "this-call";

/// Marker of a call to a base-class constructor.
pub const SUPER_CALL_MARKER: &str = "super-call";

const MARKER_SUFFIX: &str = "-call";

/// A constructor body after delegation rewriting.
#[derive(Debug)]
pub(super) struct Constructor {
    /// Clause to append to the constructor signature.
    pub clause: Option<String>,
    pub body: OutputBuffer,
}

#[derive(Debug, PartialEq, Eq)]
enum Delegation<'a> {
    SameClass(&'a str),
    Base(&'a str),
}

/// Rewrite a constructor body.
///
/// Order of the resulting constructor: delegating call (in the signature),
/// then the field initializer call, then the original statements.
pub(super) fn rewrite(
    target: &dyn Target,
    declaration: &str,
    body: &OutputBuffer,
    init_fields: bool,
) -> Result<Constructor> {
    let mut body = body.clone();
    let mut clause = None;

    if let Some(index) = body.first_statement() {
        let line = body.lines()[index].text.trim().to_string();
        let delegation = parse_delegation(&line).map_err(|()| EmitError::UnknownDelegationMarker {
            declaration: declaration.to_string(),
            line: line.clone(),
        })?;

        if let Some(delegation) = delegation {
            let (keyword, args) = match delegation {
                Delegation::SameClass(args) => (target.self_call_keyword(), args),
                Delegation::Base(args) => (target.base_call_keyword(), args),
            };
            let call = format!("{keyword}{args}");
            let call = call.trim_end().trim_end_matches(';').trim_end();
            tracing::trace!(%declaration, %call, "moved delegating call into signature");
            clause = Some(target.delegation_clause(call));
            body.remove_line(index);
        }
    }

    if init_fields {
        let at = body.first_statement().unwrap_or(0);
        body.insert_line(at, target.call_statement(target.field_initializer_method()));
    }

    Ok(Constructor { clause, body })
}

/// Detect a delegation marker at the start of a statement.
///
/// `Err` means the statement starts with something shaped like a marker
/// that is not one of the known markers.
fn parse_delegation(line: &str) -> std::result::Result<Option<Delegation<'_>>, ()> {
    if let Some(args) = marker_args(line, THIS_CALL_MARKER) {
        return Ok(Some(Delegation::SameClass(args)));
    }
    if let Some(args) = marker_args(line, SUPER_CALL_MARKER) {
        return Ok(Some(Delegation::Base(args)));
    }

    let head = line.split('(').next().unwrap_or_default().trim_end();
    match head.strip_suffix(MARKER_SUFFIX) {
        Some(word) if line.contains('(') && !word.is_empty() && word.chars().all(char::is_alphabetic) => {
            Err(())
        }
        _ => Ok(None),
    }
}

fn marker_args<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    let args = line.strip_prefix(marker)?.trim_start();
    args.starts_with('(').then_some(args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::BraceTarget;

    fn texts(body: &OutputBuffer) -> Vec<&str> {
        body.lines().iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn test_parse_markers() {
        assert_eq!(
            parse_delegation("this-call(x, y);"),
            Ok(Some(Delegation::SameClass("(x, y);")))
        );
        assert_eq!(
            parse_delegation("super-call ();"),
            Ok(Some(Delegation::Base("();")))
        );
        assert_eq!(parse_delegation("callback();"), Ok(None));
        assert_eq!(parse_delegation("this-callback(1);"), Ok(None));
        assert_eq!(parse_delegation("x = a - call(1);"), Ok(None));
        assert_eq!(parse_delegation("outer-call(1);"), Err(()));
    }

    #[test]
    fn test_this_call_moves_to_signature() {
        let body = OutputBuffer::from_lines(["this-call(x, y);", "count++;"]);
        let ctor = rewrite(&BraceTarget, "a.Pair", &body, false).unwrap();

        assert_eq!(ctor.clause.as_deref(), Some(" : this(x, y)"));
        assert_eq!(texts(&ctor.body), ["count++;"]);
    }

    #[test]
    fn test_super_call_with_initializer() {
        let body = OutputBuffer::from_lines(["super-call(name);", "ready = true;"]);
        let ctor = rewrite(&BraceTarget, "a.Pair", &body, true).unwrap();

        assert_eq!(ctor.clause.as_deref(), Some(" : base(name)"));
        assert_eq!(texts(&ctor.body), ["__internalInitializeFields();", "ready = true;"]);
    }

    #[test]
    fn test_no_delegation_only_initializer() {
        let body = OutputBuffer::from_lines(["ready = true;"]);
        let ctor = rewrite(&BraceTarget, "a.Pair", &body, true).unwrap();

        assert!(ctor.clause.is_none());
        assert_eq!(texts(&ctor.body), ["__internalInitializeFields();", "ready = true;"]);
    }

    #[test]
    fn test_empty_body() {
        let ctor = rewrite(&BraceTarget, "a.Pair", &OutputBuffer::new(), false).unwrap();
        assert!(ctor.clause.is_none());
        assert!(ctor.body.is_empty());

        let ctor = rewrite(&BraceTarget, "a.Pair", &OutputBuffer::new(), true).unwrap();
        assert_eq!(texts(&ctor.body), ["__internalInitializeFields();"]);
    }

    #[test]
    fn test_leading_blank_lines_are_skipped() {
        let body = OutputBuffer::from_lines(["", "  super-call();"]);
        let ctor = rewrite(&BraceTarget, "a.Pair", &body, false).unwrap();

        assert_eq!(ctor.clause.as_deref(), Some(" : base()"));
        assert_eq!(texts(&ctor.body), [""]);
    }

    #[test]
    fn test_unknown_marker_is_fatal() {
        let body = OutputBuffer::from_lines(["outer-call(1);"]);
        let err = rewrite(&BraceTarget, "a.Pair", &body, false).unwrap_err();
        assert!(matches!(err, EmitError::UnknownDelegationMarker { ref declaration, .. } if declaration == "a.Pair"));
    }

    #[test]
    fn test_source_body_untouched() {
        let body = OutputBuffer::from_lines(["this-call(1);"]);
        rewrite(&BraceTarget, "a.Pair", &body, true).unwrap();
        assert_eq!(texts(&body), ["this-call(1);"]);
    }
}
