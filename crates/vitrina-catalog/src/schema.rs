//! The schema descriptor shipped alongside the filter prompt.
//!
//! The external model is only useful if it proposes filter keys that
//! actually exist, so the prompt carries the full JSON Schema of
//! [`Product`] — draft-07 with every subschema inlined, since the model
//! cannot resolve `$ref` pointers.  Rendered once and cached; the prompt
//! builder treats it as an opaque constant and must never truncate it.

use once_cell::sync::Lazy;
use schemars::r#gen::{SchemaGenerator, SchemaSettings};

use crate::product::Product;

static SCHEMA_DESCRIPTOR: Lazy<String> = Lazy::new(|| {
    let mut settings = SchemaSettings::draft07();
    settings.inline_subschemas = true;

    let generator = SchemaGenerator::new(settings);
    let root = generator.into_root_schema_for::<Product>();

    serde_json::to_string_pretty(&root).expect("product schema should be serialisable")
});

/// The product schema as pretty-printed JSON.
pub fn schema_descriptor() -> &'static str {
    &SCHEMA_DESCRIPTOR
}
