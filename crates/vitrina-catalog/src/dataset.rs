//! The bundled product collection.
//!
//! There is no server behind the storefront: the dataset ships inside the
//! binary, is parsed exactly once, and stays immutable for the process
//! lifetime.  Alongside each typed [`Product`] the catalog keeps its
//! [`Record`] form so the filter engine never re-serializes products on the
//! hot path.

use std::sync::Arc;

use once_cell::sync::Lazy;

use vitrina_core::{Result, VitrinaError};

use crate::{
    filter::{FilterMap, resolve_indices},
    product::{Product, ProductSummary},
    value::Record,
};

static PRODUCTS_JSON: &str = include_str!("../data/products.json");

static BUNDLED: Lazy<Arc<Catalog>> = Lazy::new(|| {
    let products: Vec<Product> =
        serde_json::from_str(PRODUCTS_JSON).expect("bundled dataset should deserialize");
    Arc::new(Catalog::from_products(products).expect("bundled dataset should convert"))
});

/// An immutable product collection plus its pre-built record forms.
#[derive(Debug)]
pub struct Catalog {
    products: Vec<Product>,
    records: Vec<Record>,
}

impl Catalog {
    /// Shared handle to the dataset embedded at build time.
    pub fn bundled() -> Arc<Catalog> {
        Arc::clone(&BUNDLED)
    }

    /// Build a catalog from an arbitrary product list.
    pub fn from_products(products: Vec<Product>) -> Result<Self> {
        let records = products
            .iter()
            .map(|product| Ok(Record::from(serde_json::to_value(product)?)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { products, records })
    }

    /// All products, in dataset order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up one product by id.
    pub fn find(&self, product_id: &str) -> Result<&Product> {
        self.products
            .iter()
            .find(|product| product.product_id == product_id)
            .ok_or_else(|| VitrinaError::Invalid(format!("product with id {product_id} not found")))
    }

    /// Summaries of the first `limit` products, e.g. for a landing page.
    pub fn related(&self, limit: usize) -> Vec<ProductSummary> {
        self.products
            .iter()
            .take(limit)
            .filter_map(Product::summary)
            .collect()
    }

    /// Run the cascading filter-resolution engine over the whole catalog.
    pub fn resolve(&self, filters: &FilterMap) -> Vec<&Product> {
        resolve_indices(&self.records, filters)
            .into_iter()
            .map(|idx| &self.products[idx])
            .collect()
    }
}
