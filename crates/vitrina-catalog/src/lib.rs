//! Product catalog and filter semantics of the **vitrina** workspace.
//!
//! * [`product`] – typed product records and the simplified storefront view.
//! * [`dataset`] – the bundled, immutable [`dataset::Catalog`].
//! * [`schema`] – the JSON-Schema descriptor shipped inside the filter
//!   prompt.
//! * [`value`] – the closed `Scalar | ScalarList | Record | RecordList`
//!   algebra records are walked through.
//! * [`filter`] – the three-tier cascading filter-resolution engine.
//! * [`extract`] – fence-stripping parser for the model's filter reply.

pub mod dataset;
pub mod extract;
pub mod filter;
pub mod product;
pub mod schema;
pub mod value;

pub use dataset::Catalog;
pub use extract::parse_filter_reply;
pub use filter::{FilterMap, FilterValue, resolve_indices};
pub use product::{Product, ProductSummary};
pub use schema::schema_descriptor;
pub use value::{FieldValue, Record, Scalar};
