//! Indentation-tracking text builder for nested brace-delimited blocks.
//!
//! Callers write fragments and lines; the builder prefixes each line with
//! the indentation in effect when its first content arrives, so nobody has
//! to track whitespace by hand.

pub struct IndentedTextBuilder {
    indent: String,
    level: usize,
    lines: Vec<String>,
}

impl IndentedTextBuilder {
    /// Create a builder using `indent` as the per-level indent unit.
    /// The buffer starts with a single open line.
    pub fn new(indent: &str) -> Self {
        Self {
            indent: indent.to_string(),
            level: 0,
            lines: vec![String::new()],
        }
    }

    /// Start a new line. Its indentation is not materialized yet: the
    /// indent level can change between this call and the first append.
    pub fn newline(&mut self) {
        self.lines.push(String::new());
    }

    /// Append a fragment to the current line, indenting it first if the
    /// line has no content yet.
    pub fn append(&mut self, fragment: &str) {
        if let Some(line) = self.lines.last_mut() {
            if line.is_empty() {
                line.push_str(&self.indent.repeat(self.level));
            }
            line.push_str(fragment);
        }
    }

    /// Append a complete line and advance to a fresh one.
    pub fn append_line(&mut self, line: &str) {
        self.append(line);
        self.newline();
    }

    /// Append one complete line per fragment.
    pub fn append_lines<'a>(&mut self, lines: impl IntoIterator<Item = &'a str>) {
        for line in lines {
            self.append_line(line);
        }
    }

    /// Run `f` with the indent level raised by one. The previous level is
    /// restored by a drop guard, so it holds even if `f` unwinds.
    pub fn indented(&mut self, f: impl FnOnce(&mut Self)) {
        struct DepthGuard<'a>(&'a mut IndentedTextBuilder);

        impl Drop for DepthGuard<'_> {
            fn drop(&mut self) {
                self.0.level -= 1;
            }
        }

        self.level += 1;
        let guard = DepthGuard(self);
        f(&mut *guard.0);
    }

    /// Write an opening brace, run `f` indented, write the closing brace.
    pub fn block(&mut self, f: impl FnOnce(&mut Self)) {
        self.append_line("{");
        self.indented(f);
        self.append_line("}");
    }

    /// Join the accumulated lines into the final document. Does not mutate
    /// the buffer; calling it repeatedly yields the same string.
    pub fn build(&self) -> String {
        self.lines.join("\n")
    }
}
