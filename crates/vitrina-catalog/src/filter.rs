//! Cascading filter-resolution engine.
//!
//! The external model turns a free-text query into a [`FilterMap`]: dotted
//! field paths mapped to one or more target values.  Resolution runs three
//! tiers in order and the first tier that yields at least one record wins:
//!
//! 1. **Strict** – AND across keys, OR across each key's values.
//! 2. **Relaxed** – OR across keys, same per-key matchers.
//! 3. **Keyword** – frequency ranking of the filter values' words over the
//!    record's *top-level* string fields.
//!
//! Tiers 1–2 preserve the catalog's original order; tier 3 sorts by
//! descending score with stable ties.  The engine is pure and synchronous:
//! it only reads its inputs, never errors on data shape, and is fully
//! deterministic for a fixed catalog and filter mapping.
//!
//! The keyword tier deliberately does **not** recurse into nested records,
//! unlike tiers 1–2.  The asymmetry is inherited behavior; see DESIGN.md.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value::{FieldValue, Record, Scalar};

/// One filter entry: a single target value or a set of alternatives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    One(Scalar),
    Many(Vec<Scalar>),
}

impl FilterValue {
    /// The target values this entry ORs over.
    pub fn values(&self) -> &[Scalar] {
        match self {
            FilterValue::One(value) => std::slice::from_ref(value),
            FilterValue::Many(values) => values,
        }
    }
}

/// Dotted-path key → target value(s), as returned by the external model.
///
/// Entry order is irrelevant to the result; the map is only ordered to keep
/// iteration deterministic.
pub type FilterMap = BTreeMap<String, FilterValue>;

/// A per-key matcher: succeeds if the record matches *any* of the key's
/// target values at the key's dotted path.
struct KeyMatcher {
    path: Vec<String>,
    values: Vec<Scalar>,
}

impl KeyMatcher {
    fn compile(key: &str, value: &FilterValue) -> Self {
        Self {
            path: key.split('.').map(str::to_owned).collect(),
            values: value.values().to_vec(),
        }
    }

    fn matches(&self, record: &Record) -> bool {
        let path: Vec<&str> = self.path.iter().map(String::as_str).collect();
        self.values.iter().any(|value| matches_path(record, &path, value))
    }
}

/// Matchers and keywords compiled once per resolution request.
struct CompiledFilter {
    matchers: Vec<KeyMatcher>,
    keywords: Vec<String>,
}

impl CompiledFilter {
    fn new(filters: &FilterMap) -> Self {
        let matchers = filters
            .iter()
            .map(|(key, value)| KeyMatcher::compile(key, value))
            .collect();

        let keywords = filters
            .values()
            .flat_map(FilterValue::values)
            .filter_map(|value| match value {
                Scalar::Str(text) => Some(text.to_lowercase()),
                _ => None,
            })
            .flat_map(|text| {
                text.split_whitespace().map(str::to_owned).collect::<Vec<_>>()
            })
            .collect();

        Self { matchers, keywords }
    }
}

type Tier = fn(&[Record], &CompiledFilter) -> Vec<usize>;

/// Evaluated in order; reordering or dropping a tier only means editing this
/// list.
const TIERS: [Tier; 3] = [strict_tier, relaxed_tier, keyword_tier];

/// Resolve `filters` against `records`, returning matching indices under the
/// first successful tier.
///
/// An empty filter map is a vacuous AND: the strict tier admits every record
/// and the fallback tiers never run.  Zero matches at every tier yield an
/// empty result, which is not an error.
pub fn resolve_indices(records: &[Record], filters: &FilterMap) -> Vec<usize> {
    let compiled = CompiledFilter::new(filters);
    for tier in TIERS {
        let hits = tier(records, &compiled);
        if !hits.is_empty() {
            return hits;
        }
    }
    Vec::new()
}

/// Tier 1: every key's matcher must pass.
fn strict_tier(records: &[Record], filter: &CompiledFilter) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| filter.matchers.iter().all(|m| m.matches(record)))
        .map(|(idx, _)| idx)
        .collect()
}

/// Tier 2: at least one key's matcher must pass.
fn relaxed_tier(records: &[Record], filter: &CompiledFilter) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| filter.matchers.iter().any(|m| m.matches(record)))
        .map(|(idx, _)| idx)
        .collect()
}

/// Tier 3: rank by how often the filter keywords occur in the record's
/// top-level string content, dropping zero scores.
fn keyword_tier(records: &[Record], filter: &CompiledFilter) -> Vec<usize> {
    let mut scored: Vec<(usize, usize)> = records
        .iter()
        .enumerate()
        .map(|(idx, record)| (idx, keyword_score(record, &filter.keywords)))
        .filter(|(_, score)| *score > 0)
        .collect();
    // sort_by is stable, so ties keep input order
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.into_iter().map(|(idx, _)| idx).collect()
}

fn keyword_score(record: &Record, keywords: &[String]) -> usize {
    record
        .fields()
        .map(|(_, field)| match field {
            FieldValue::Scalar(Scalar::Str(text)) => count_occurrences(text, keywords),
            FieldValue::ScalarList(items) => items
                .iter()
                .map(|item| match item {
                    Scalar::Str(text) => count_occurrences(text, keywords),
                    _ => 0,
                })
                .sum(),
            // top-level only: nested records are not scanned
            _ => 0,
        })
        .sum()
}

/// Non-overlapping, case-insensitive occurrence count of every keyword.
fn count_occurrences(text: &str, keywords: &[String]) -> usize {
    let haystack = text.to_lowercase();
    keywords
        .iter()
        .map(|keyword| haystack.matches(keyword.as_str()).count())
        .sum()
}

/// Walk `record` along the dotted `path` and test the final field against
/// `target`.
///
/// * A missing segment fails the match (no error).
/// * At the final segment a scalar list matches if *any* element matches;
///   a lone scalar is compared directly; record-shaped fields never match a
///   scalar target.
/// * At an intermediate segment a record recurses, a record list recurses
///   into *any* element, and a scalar met before the path is exhausted
///   fails.
fn matches_path(record: &Record, path: &[&str], target: &Scalar) -> bool {
    let Some((head, rest)) = path.split_first() else {
        return false;
    };
    let Some(field) = record.get(head) else {
        return false;
    };
    if rest.is_empty() {
        match field {
            FieldValue::Scalar(value) => compare(value, target),
            FieldValue::ScalarList(values) => values.iter().any(|value| compare(value, target)),
            FieldValue::Record(_) | FieldValue::RecordList(_) => false,
        }
    } else {
        match field {
            FieldValue::Record(inner) => matches_path(inner, rest, target),
            FieldValue::RecordList(inners) => {
                inners.iter().any(|inner| matches_path(inner, rest, target))
            }
            FieldValue::Scalar(_) | FieldValue::ScalarList(_) => false,
        }
    }
}

/// String against string matches by case-insensitive substring containment
/// (the model often answers with partial values like "Red" for "Bright
/// Red"); every other pairing is strict equality, with no numeric
/// normalization.
fn compare(field: &Scalar, target: &Scalar) -> bool {
    match (field, target) {
        (Scalar::Str(field), Scalar::Str(target)) => {
            field.to_lowercase().contains(&target.to_lowercase())
        }
        _ => field == target,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(values: Vec<serde_json::Value>) -> Vec<Record> {
        values.into_iter().map(Record::from).collect()
    }

    fn one(value: serde_json::Value) -> FilterValue {
        serde_json::from_value(value).expect("filter value")
    }

    fn filters(entries: &[(&str, serde_json::Value)]) -> FilterMap {
        entries
            .iter()
            .map(|(key, value)| ((*key).to_owned(), one(value.clone())))
            .collect()
    }

    fn sample() -> Vec<Record> {
        records(vec![
            json!({
                "productName": "Bright Red Polo",
                "brand": "Northline",
                "available": true,
                "categories": ["Apparel", "Shirts"],
                "skuSpecifications": [
                    { "field": { "name": "Color" }, "values": [{ "name": "Bright Red" }] },
                ],
            }),
            json!({
                "productName": "Navy Runner",
                "brand": "Stride",
                "available": false,
                "categories": ["Footwear"],
                "skuSpecifications": [
                    { "field": { "name": "Color" }, "values": [{ "name": "Navy Blue" }] },
                ],
            }),
            json!({
                "productName": "Canvas Tote",
                "brand": "Harborline",
                "categories": ["Bags"],
                "skuSpecifications": [],
            }),
        ])
    }

    #[test]
    fn strict_tier_wins_and_preserves_order() {
        let data = sample();
        let found = resolve_indices(
            &data,
            &filters(&[("productName", json!("polo")), ("brand", json!("north"))]),
        );
        assert_eq!(found, vec![0]);
    }

    #[test]
    fn strict_result_suppresses_fallbacks() {
        let data = sample();
        // "line" hits both Northline and Harborline strictly; the relaxed
        // tier would add nothing and the keyword tier must not reorder.
        let found = resolve_indices(&data, &filters(&[("brand", json!("line"))]));
        assert_eq!(found, vec![0, 2]);
    }

    #[test]
    fn relaxed_tier_kicks_in_when_and_fails() {
        let data = sample();
        // No record is both a Polo and branded Stride; OR-across-keys finds
        // each separately, in catalog order.
        let found = resolve_indices(
            &data,
            &filters(&[("productName", json!("Polo")), ("brand", json!("Stride"))]),
        );
        assert_eq!(found, vec![0, 1]);
    }

    #[test]
    fn relaxed_tier_is_superset_of_strict() {
        let data = sample();
        let compiled = CompiledFilter::new(&filters(&[
            ("productName", json!("Polo")),
            ("brand", json!("Stride")),
        ]));
        let strict = strict_tier(&data, &compiled);
        let relaxed = relaxed_tier(&data, &compiled);
        assert!(strict.iter().all(|idx| relaxed.contains(idx)));
    }

    #[test]
    fn substring_match_is_case_insensitive() {
        let data = sample();
        for needle in ["red", "RED", "Bright Red"] {
            let found = resolve_indices(&data, &filters(&[("productName", json!(needle))]));
            assert_eq!(found, vec![0], "needle {needle:?}");
        }
    }

    #[test]
    fn falsy_targets_match_only_present_fields() {
        let data = sample();
        // Record 1 carries `available: false`; record 2 lacks the field
        // entirely and must not match.
        let found = resolve_indices(&data, &filters(&[("available", json!(false))]));
        assert_eq!(found, vec![1]);
    }

    #[test]
    fn numeric_zero_is_a_real_target() {
        let data = records(vec![
            json!({ "stock": 0 }),
            json!({ "stock": 5 }),
            json!({ "name": "no stock field" }),
        ]);
        let found = resolve_indices(&data, &filters(&[("stock", json!(0))]));
        assert_eq!(found, vec![0]);
    }

    #[test]
    fn numbers_do_not_match_stringified_numbers() {
        let data = records(vec![json!({ "stock": "2" })]);
        let compiled = CompiledFilter::new(&filters(&[("stock", json!(2))]));
        assert!(strict_tier(&data, &compiled).is_empty());
    }

    #[test]
    fn list_valued_filters_or_over_values() {
        let data = sample();
        let found = resolve_indices(
            &data,
            &filters(&[("skuSpecifications.values.name", json!(["red", "blue"]))]),
        );
        assert_eq!(found, vec![0, 1]);
    }

    #[test]
    fn nested_record_lists_match_any_element() {
        let data = sample();
        let found = resolve_indices(
            &data,
            &filters(&[("skuSpecifications.field.name", json!("Color"))]),
        );
        assert_eq!(found, vec![0, 1]);
    }

    #[test]
    fn scalar_mid_path_is_a_non_match() {
        let data = sample();
        let compiled = CompiledFilter::new(&filters(&[("brand.name", json!("North"))]));
        assert!(strict_tier(&data, &compiled).is_empty());
    }

    #[test]
    fn keyword_tier_ranks_by_frequency_with_stable_ties() {
        let data = records(vec![
            json!({ "description": "red shoes" }),
            json!({ "description": "red red shoes" }),
            json!({ "description": "blue boots" }),
        ]);
        // "crimson red" matches nothing strictly or relaxed; the keyword
        // tier splits it into words and ranks by occurrence count.
        let found = resolve_indices(&data, &filters(&[("description", json!("crimson red"))]));
        assert_eq!(found, vec![1, 0]);
    }

    #[test]
    fn keyword_tier_ignores_nested_records() {
        let data = records(vec![
            json!({ "specs": [{ "note": "red red red" }] }),
            json!({ "description": "red" }),
        ]);
        let found = resolve_indices(&data, &filters(&[("description", json!("crimson red"))]));
        assert_eq!(found, vec![1]);
    }

    #[test]
    fn empty_filter_map_returns_everything() {
        let data = sample();
        let found = resolve_indices(&data, &FilterMap::new());
        assert_eq!(found, vec![0, 1, 2]);
    }

    #[test]
    fn no_tier_matching_yields_empty() {
        let data = sample();
        let found = resolve_indices(&data, &filters(&[("productName", json!("zeppelin"))]));
        assert!(found.is_empty());
    }
}
