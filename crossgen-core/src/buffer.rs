//! Line-addressable output buffer.

use serde::{Deserialize, Serialize};

use crate::Indent;

/// Opening and closing block delimiters of a target language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
    pub open: &'static str,
    pub close: &'static str,
}

impl Delimiters {
    /// Curly braces, used by every C-family target.
    pub const BRACES: Self = Self {
        open: "{",
        close: "}",
    };
}

impl Default for Delimiters {
    fn default() -> Self {
        Self::BRACES
    }
}

/// A single buffered line.
///
/// `depth` is the nesting level relative to the start of the buffer; the
/// actual indentation is only produced by [`OutputBuffer::render`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub depth: usize,
    pub text: String,
}

impl Line {
    pub fn new(depth: usize, text: impl Into<String>) -> Self {
        Self {
            depth,
            text: text.into(),
        }
    }

    /// Check if the line has no visible content.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// An ordered, mutable sequence of text lines.
///
/// Unlike a plain string builder, a buffer keeps its line boundaries so it
/// can be spliced into another buffer as a unit and still be edited by line
/// index afterwards.
///
/// # Example
///
/// ```
/// use crossgen_core::{Indent, OutputBuffer};
///
/// let mut out = OutputBuffer::new();
/// out.write_line("class Foo");
/// out.block_open();
/// out.write("int ").write_line("x;");
/// out.block_close();
///
/// assert_eq!(out.render(Indent::CSHARP), "class Foo\n{\n    int x;\n}\n");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct OutputBuffer {
    lines: Vec<Line>,
    pending: Option<String>,
    depth: usize,
    delimiters: Delimiters,
}

impl OutputBuffer {
    /// Create an empty buffer using curly-brace blocks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty buffer with custom block delimiters.
    pub fn with_delimiters(delimiters: Delimiters) -> Self {
        Self {
            delimiters,
            ..Self::default()
        }
    }

    /// Build a buffer from raw statement lines at depth zero.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(|l| Line::new(0, l)).collect(),
            ..Self::default()
        }
    }

    /// Append text to the current line without terminating it.
    pub fn write(&mut self, text: &str) -> &mut Self {
        self.pending.get_or_insert_with(String::new).push_str(text);
        self
    }

    /// Append text and terminate the current line.
    pub fn write_line(&mut self, text: &str) -> &mut Self {
        let mut line = self.pending.take().unwrap_or_default();
        line.push_str(text);
        self.lines.push(Line::new(self.depth, line));
        self
    }

    /// Terminate the current line if anything was written to it.
    pub fn end_line(&mut self) -> &mut Self {
        if let Some(line) = self.pending.take() {
            self.lines.push(Line::new(self.depth, line));
        }
        self
    }

    /// Add an empty line.
    pub fn blank(&mut self) -> &mut Self {
        self.end_line();
        self.lines.push(Line::default());
        self
    }

    /// Write the opening delimiter on its own line and nest one level.
    pub fn block_open(&mut self) -> &mut Self {
        self.end_line();
        let open = self.delimiters.open;
        self.write_line(open);
        self.depth += 1;
        self
    }

    /// Leave one nesting level and write the closing delimiter.
    pub fn block_close(&mut self) -> &mut Self {
        self.end_line();
        self.depth = self.depth.saturating_sub(1);
        let close = self.delimiters.close;
        self.write_line(close);
        self
    }

    /// Increase nesting without writing a delimiter.
    pub fn indent(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    /// Decrease nesting without writing a delimiter.
    pub fn dedent(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    /// Append every line of `other`, re-based at the current depth.
    pub fn splice(&mut self, other: &OutputBuffer) -> &mut Self {
        self.end_line();
        let base = self.depth;
        self.lines.extend(
            other
                .lines
                .iter()
                .map(|line| Line::new(base + line.depth, line.text.clone())),
        );
        if let Some(pending) = &other.pending {
            self.lines.push(Line::new(base + other.depth, pending.clone()));
        }
        self
    }

    /// Completed lines in order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Completed lines in order, for in-place edits.
    pub fn lines_mut(&mut self) -> &mut [Line] {
        &mut self.lines
    }

    /// Remove the line at `index`, if there is one.
    pub fn remove_line(&mut self, index: usize) -> Option<Line> {
        if index < self.lines.len() {
            Some(self.lines.remove(index))
        } else {
            None
        }
    }

    /// Insert a line before `index` (clamped to the end of the buffer).
    ///
    /// The new line takes the depth of the line it displaces.
    pub fn insert_line(&mut self, index: usize, text: impl Into<String>) -> &mut Self {
        let index = index.min(self.lines.len());
        let depth = self
            .lines
            .get(index)
            .or_else(|| self.lines.last())
            .map_or(0, |line| line.depth);
        self.lines.insert(index, Line::new(depth, text));
        self
    }

    /// Index of the first line with visible content.
    pub fn first_statement(&self) -> Option<usize> {
        self.lines.iter().position(|line| !line.is_blank())
    }

    /// Number of completed lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.pending.is_none()
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Render the buffer to text with the given indentation.
    pub fn render(&self, indent: Indent) -> String {
        let mut out = String::new();
        for line in &self.lines {
            if !line.text.is_empty() {
                for _ in 0..line.depth {
                    out.push_str(indent.as_str());
                }
                out.push_str(&line.text);
            }
            out.push('\n');
        }
        if let Some(pending) = &self.pending {
            for _ in 0..self.depth {
                out.push_str(indent.as_str());
            }
            out.push_str(pending);
        }
        out
    }
}

impl From<Vec<String>> for OutputBuffer {
    fn from(lines: Vec<String>) -> Self {
        Self::from_lines(lines)
    }
}

impl From<OutputBuffer> for Vec<String> {
    fn from(buffer: OutputBuffer) -> Self {
        let mut lines: Vec<String> = buffer
            .lines
            .into_iter()
            .map(|line| format!("{}{}", "\t".repeat(line.depth), line.text))
            .collect();
        if let Some(pending) = buffer.pending {
            lines.push(format!("{}{}", "\t".repeat(buffer.depth), pending));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_joins_partial_line() {
        let mut out = OutputBuffer::new();
        out.write("public ").write("class Foo").end_line();
        assert_eq!(out.len(), 1);
        assert_eq!(out.lines()[0].text, "public class Foo");
    }

    #[test]
    fn test_block_nesting() {
        let mut out = OutputBuffer::new();
        out.write_line("namespace a")
            .block_open()
            .write_line("class B")
            .block_open()
            .block_close()
            .block_close();

        assert_eq!(
            out.render(Indent::CSHARP),
            "namespace a\n{\n    class B\n    {\n    }\n}\n"
        );
    }

    #[test]
    fn test_blank_lines_are_not_indented() {
        let mut out = OutputBuffer::new();
        out.indent().write_line("a").blank().write_line("b");
        assert_eq!(out.render(Indent::Tab), "\ta\n\n\tb\n");
    }

    #[test]
    fn test_splice_keeps_line_boundaries() {
        let body = OutputBuffer::from_lines(["x = 1;", "y = 2;"]);

        let mut out = OutputBuffer::new();
        out.write_line("void f()").block_open().splice(&body).block_close();

        assert_eq!(out.len(), 5);
        assert_eq!(out.lines()[2], Line::new(1, "x = 1;"));
        assert_eq!(out.lines()[3], Line::new(1, "y = 2;"));
    }

    #[test]
    fn test_remove_and_insert() {
        let mut body = OutputBuffer::from_lines(["first();", "second();"]);

        let removed = body.remove_line(0);
        assert_eq!(removed.map(|l| l.text), Some("first();".to_string()));
        assert!(body.remove_line(5).is_none());

        body.insert_line(0, "init();");
        let texts: Vec<_> = body.lines().iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, ["init();", "second();"]);
    }

    #[test]
    fn test_insert_into_empty_buffer() {
        let mut body = OutputBuffer::new();
        body.insert_line(3, "only();");
        assert_eq!(body.lines(), [Line::new(0, "only();")]);
    }

    #[test]
    fn test_first_statement_skips_blank_lines() {
        let body = OutputBuffer::from_lines(["", "   ", "go();"]);
        assert_eq!(body.first_statement(), Some(2));
        assert_eq!(OutputBuffer::new().first_statement(), None);
    }

    #[test]
    fn test_deserialize_from_string_array() {
        let body: OutputBuffer = serde_json::from_str(r#"["a();", "b();"]"#).unwrap();
        assert_eq!(body.len(), 2);
        assert_eq!(body.lines()[1].text, "b();");
    }

    #[test]
    fn test_custom_delimiters() {
        let mut out = OutputBuffer::with_delimiters(Delimiters {
            open: "begin",
            close: "end",
        });
        out.block_open().write_line("x").block_close();
        assert_eq!(out.render(Indent::COMPACT), "begin\n  x\nend\n");
    }
}
