//! Builder-style helper for constructing **Markdown prompts**.
//!
//! Writing verbose Markdown strings inline is tedious and error-prone.
//! `PromptBuilder` offers a fluent API that lets you focus on the *content*
//! instead of the syntax.  Every method returns `self`, enabling
//! call-chaining:
//!
//! ```rust
//! use vitrina_prompt::builder::PromptBuilder;
//!
//! let md = PromptBuilder::new()
//!     .add_section_h1("Catalog Filter Request")
//!     .add_blank_line()
//!     .add_line("The customer asks:")
//!     .add_quoted_line("red polo, size M")
//!     .finalize();
//!
//! assert!(md.starts_with("# Catalog Filter Request"));
//! ```
//!
//! The builder performs **no validation** besides `expect`ing that writing to
//! the internal `String` never fails (which it shouldn't).  It also refrains
//! from smart-formatting to stay predictable — newlines and whitespace are
//! emitted exactly as requested.

use std::fmt::{Display, Write as _};

/// Fluent helper to produce markdown fragments.
///
/// Internally it owns a `String` buffer that grows with each chained call.
/// Once you're done, call [`Self::finalize`] to obtain the assembled
/// markdown.
pub struct PromptBuilder {
    buffer: String,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptBuilder {
    /// Create a fresh, empty builder.
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Add a level-1 (`#`) heading.
    pub fn add_section_h1(mut self, line: impl Display) -> Self {
        writeln!(self.buffer, "# {line}").expect("failed to write buffer");
        self
    }

    /// Add a level-2 (`##`) heading.
    pub fn add_section_h2(mut self, line: impl Display) -> Self {
        writeln!(self.buffer, "## {line}").expect("failed to write buffer");
        self
    }

    /// Add a plain line of text and a trailing newline.
    pub fn add_line(mut self, line: impl Display) -> Self {
        writeln!(self.buffer, "{line}").expect("failed to write buffer");
        self
    }

    /// Add a line wrapped in double quotes, for verbatim user input.
    pub fn add_quoted_line(mut self, line: impl Display) -> Self {
        writeln!(self.buffer, "\"{line}\"").expect("failed to write buffer");
        self
    }

    /// Embed a code block fenced as `json`.
    pub fn add_text_json(self, content: impl Display) -> Self {
        self.add_line("```json").add_line(content).add_line("```")
    }

    /// Insert a single blank line.
    pub fn add_blank_line(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Retrieve the accumulated markdown and consume the builder.
    pub fn finalize(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_exactly_what_was_requested() {
        let md = PromptBuilder::new()
            .add_section_h2("Customer Query")
            .add_quoted_line("blue shoes")
            .add_blank_line()
            .add_text_json("{ \"brand\": \"Stride\" }")
            .finalize();

        assert_eq!(
            md,
            "## Customer Query\n\"blue shoes\"\n\n```json\n{ \"brand\": \"Stride\" }\n```\n"
        );
    }
}
