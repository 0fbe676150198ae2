//! Closed variant set for dynamically shaped product data.
//!
//! Filter keys are dotted paths produced by an external model, so the engine
//! has to walk product records whose nesting it cannot know statically.
//! Instead of probing untyped JSON we convert every record once into a small
//! closed algebra:
//!
//! * [`Scalar`] – `null`, boolean, number or string.
//! * [`FieldValue`] – a scalar, a list of scalars, a nested [`Record`], or a
//!   list of nested records.
//!
//! Path traversal then becomes a typed recursive match where both *absence*
//! and *shape mismatch* resolve to a non-match, never a panic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Leaf value of a product record or a filter mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Bool(bool),
    Num(serde_json::Number),
    Str(String),
}

/// One field of a [`Record`], covering every shape that occurs in product
/// data.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Scalar(Scalar),
    ScalarList(Vec<Scalar>),
    Record(Record),
    RecordList(Vec<Record>),
}

/// A nested object: field name → [`FieldValue`].
///
/// The map is ordered so record iteration (and therefore keyword scoring) is
/// deterministic.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record(BTreeMap<String, FieldValue>);

impl Record {
    /// Look up a field by name at this nesting level.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    /// Iterate over the top-level fields in name order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => FieldValue::Record(record_from(map)),
            Value::Array(items) => classify_list(items),
            other => FieldValue::Scalar(scalar_from(other)),
        }
    }
}

impl From<Value> for Record {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => record_from(map),
            _ => Record::default(),
        }
    }
}

fn record_from(map: serde_json::Map<String, Value>) -> Record {
    Record(map.into_iter().map(|(name, value)| (name, value.into())).collect())
}

/// A list holding any object classifies as a record list; scalar stragglers
/// in such a list are dropped.  Product data never mixes shapes, so this
/// only matters for adversarial inputs, which simply fail to match.
fn classify_list(items: Vec<Value>) -> FieldValue {
    let mut records = Vec::new();
    let mut scalars = Vec::new();
    for item in items {
        match item {
            Value::Object(map) => records.push(record_from(map)),
            // doubly nested lists don't occur in product data
            Value::Array(_) => {}
            other => scalars.push(scalar_from(other)),
        }
    }
    if records.is_empty() {
        FieldValue::ScalarList(scalars)
    } else {
        FieldValue::RecordList(records)
    }
}

fn scalar_from(value: Value) -> Scalar {
    match value {
        Value::Bool(b) => Scalar::Bool(b),
        Value::Number(n) => Scalar::Num(n),
        Value::String(s) => Scalar::Str(s),
        _ => Scalar::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars_and_scalar_lists_classify() {
        let record = Record::from(json!({
            "name": "Polo",
            "stock": 3,
            "active": true,
            "tags": ["red", "summer"],
        }));

        assert_eq!(
            record.get("name"),
            Some(&FieldValue::Scalar(Scalar::Str("Polo".into())))
        );
        assert_eq!(
            record.get("tags"),
            Some(&FieldValue::ScalarList(vec![
                Scalar::Str("red".into()),
                Scalar::Str("summer".into()),
            ]))
        );
        assert!(record.get("missing").is_none());
    }

    #[test]
    fn object_lists_classify_as_record_lists() {
        let record = Record::from(json!({
            "specs": [{ "name": "Color" }, { "name": "Size" }],
        }));

        match record.get("specs") {
            Some(FieldValue::RecordList(specs)) => {
                assert_eq!(specs.len(), 2);
                assert_eq!(
                    specs[0].get("name"),
                    Some(&FieldValue::Scalar(Scalar::Str("Color".into())))
                );
            }
            other => panic!("expected record list, got {other:?}"),
        }
    }

    #[test]
    fn mixed_lists_prefer_records() {
        let record = Record::from(json!({ "mixed": [{ "a": 1 }, "loose"] }));

        match record.get("mixed") {
            Some(FieldValue::RecordList(items)) => assert_eq!(items.len(), 1),
            other => panic!("expected record list, got {other:?}"),
        }
    }

    #[test]
    fn null_fields_stay_addressable() {
        let record = Record::from(json!({ "brandImageUrl": null }));
        assert_eq!(
            record.get("brandImageUrl"),
            Some(&FieldValue::Scalar(Scalar::Null))
        );
    }
}
