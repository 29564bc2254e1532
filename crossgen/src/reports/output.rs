//! Rendering targets for command reports.

/// Semantic sink a report writes into.
///
/// Reports only say what kind of line they produce; the sink decides how it
/// looks and which stream it goes to.
pub trait Output {
    /// Heading for a group of lines.
    fn section(&mut self, name: &str);

    /// A `key: value` line inside a section.
    fn key_value_indented(&mut self, key: &str, value: &str);

    /// A list entry for something created (e.g., a written file).
    fn added_item(&mut self, text: &str);

    /// A diagnostic that fails the command.
    fn error(&mut self, msg: &str);

    /// A diagnostic that does not fail the command.
    fn warning(&mut self, msg: &str);

    /// A labelled separator, e.g. between previewed files.
    fn divider(&mut self, label: &str);

    /// Text printed exactly as given.
    fn preformatted(&mut self, text: &str);

    fn newline(&mut self);
}

/// Data produced by an operation, rendered after the fact.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Prints reports to stdout, diagnostics to stderr.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn key_value_indented(&mut self, key: &str, value: &str) {
        println!("  {}: {}", key, value);
    }

    fn added_item(&mut self, text: &str) {
        println!("  + {}", text);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("error: {}", msg);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("warning: {}", msg);
    }

    fn divider(&mut self, label: &str) {
        println!("── {} ──", label);
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }

    fn newline(&mut self) {
        println!();
    }
}

/// Collects rendered lines, for asserting on report output.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl Output for RecordingOutput {
    fn section(&mut self, name: &str) {
        self.lines.push(format!("{}:", name));
    }

    fn key_value_indented(&mut self, key: &str, value: &str) {
        self.lines.push(format!("  {}: {}", key, value));
    }

    fn added_item(&mut self, text: &str) {
        self.lines.push(format!("  + {}", text));
    }

    fn error(&mut self, msg: &str) {
        self.lines.push(format!("error: {}", msg));
    }

    fn warning(&mut self, msg: &str) {
        self.lines.push(format!("warning: {}", msg));
    }

    fn divider(&mut self, label: &str) {
        self.lines.push(format!("── {} ──", label));
    }

    fn preformatted(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn newline(&mut self) {
        self.lines.push(String::new());
    }
}
