//! The instruction string sent to the external model for one filter request.
//!
//! The prompt carries three things: the product schema descriptor
//! **verbatim** (the model relies on seeing exact field names — never
//! truncate or summarize it), the user's query verbatim, and a strict
//! output-format instruction: a single flat JSON object mapping dotted field
//! paths to filter values, nothing else.  One illustrative example keeps
//! weaker models on the rails.
//!
//! Building the prompt is pure string formatting; it cannot fail and has no
//! side effects.

use crate::builder::PromptBuilder;

const EXAMPLE_MAPPING: &str = r#"{
  "productName": "Polo",
  "skuSpecifications.field.name": "Color",
  "skuSpecifications.values.name": "Red"
}"#;

/// A single filter request for one free-text customer query.
pub struct FilterPrompt<'a> {
    query: &'a str,
}

impl<'a> FilterPrompt<'a> {
    pub fn new(query: &'a str) -> Self {
        Self { query }
    }

    /// Render the full instruction string around `schema`, the product
    /// schema descriptor.
    pub fn render(&self, schema: &str) -> String {
        PromptBuilder::new()
            .add_section_h1("Catalog Filter Request")
            .add_blank_line()
            .add_section_h2("Product Schema")
            .add_text_json(schema)
            .add_blank_line()
            .add_section_h2("Customer Query")
            .add_quoted_line(self.query)
            .add_blank_line()
            .add_line(
                "Based only on the field names and types in the schema above, \
                 decide exactly which product fields to filter on to satisfy \
                 the customer query.",
            )
            .add_line(
                "Respond with a single flat JSON object mapping each chosen \
                 field to its filter value. Use dotted paths for nested \
                 fields. A value may be a string, a number, a boolean, or a \
                 list of those. For example:",
            )
            .add_text_json(EXAMPLE_MAPPING)
            .add_line(
                "Only include the fields needed to satisfy the request. \
                 Return ONLY the JSON object, with no commentary before or \
                 after it.",
            )
            .finalize()
    }
}
