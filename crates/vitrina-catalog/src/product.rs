//! Typed product records and the simplified view the storefront renders.
//!
//! The structs mirror the bundled dataset: camelCase JSON, nested sale items
//! with sellers and offers, and sku specifications as an array of
//! `{ field, values }` objects.  The same types drive the schema descriptor
//! (via `schemars`), so the external model sees exactly the field names the
//! filter engine will walk.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One catalog entry as stored in the dataset.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: String,
    pub product_name: String,
    pub brand: String,
    pub link_text: String,
    pub reference_code: String,
    pub description: String,
    pub categories: Vec<String>,
    pub release_date: String,
    pub items: Vec<Item>,
    pub sku_specifications: Vec<SkuSpecification>,
}

/// A sellable variant of a product.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub item_id: String,
    pub name: String,
    pub ean: String,
    pub images: Vec<Image>,
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
    pub sellers: Vec<Seller>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub image_url: String,
    pub image_label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Seller {
    pub seller_id: String,
    pub seller_name: String,
    pub seller_default: bool,
    pub commercial_offer: CommercialOffer,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommercialOffer {
    pub price: f64,
    pub list_price: f64,
    pub available_quantity: i64,
    pub is_available: bool,
}

/// A named axis of variation (e.g. Color, Size) with its values.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkuSpecification {
    pub field: SpecField,
    pub values: Vec<SpecValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpecField {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpecValue {
    pub id: String,
    pub name: String,
}

/// Flattened view of a product, ready for a card or detail page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: String,
    pub title: String,
    pub brand: String,
    pub sku: String,
    pub description: String,
    pub images: Vec<String>,
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
    pub price: f64,
    pub discount_price: Option<f64>,
    pub available: bool,
}

impl Product {
    /// Build the simplified view from the first item's default offer.
    ///
    /// Colors and sizes prefer the `Color`/`Size` sku specifications and fall
    /// back to the first item's own lists; the discount price is only set
    /// when the offered price undercuts the list price.
    pub fn summary(&self) -> Option<ProductSummary> {
        let first_item = self.items.first()?;
        let offer = &first_item.sellers.first()?.commercial_offer;

        let colors = self
            .spec_values("Color")
            .unwrap_or_else(|| first_item.colors.clone());
        let sizes = self
            .spec_values("Size")
            .unwrap_or_else(|| first_item.sizes.clone());

        Some(ProductSummary {
            id: self.product_id.clone(),
            title: self.product_name.clone(),
            brand: self.brand.clone(),
            sku: self.reference_code.clone(),
            description: self.description.clone(),
            images: first_item.images.iter().map(|i| i.image_url.clone()).collect(),
            colors,
            sizes,
            price: offer.list_price,
            discount_price: (offer.price < offer.list_price).then_some(offer.price),
            available: offer.is_available,
        })
    }

    fn spec_values(&self, field_name: &str) -> Option<Vec<String>> {
        self.sku_specifications
            .iter()
            .find(|spec| spec.field.name == field_name)
            .map(|spec| spec.values.iter().map(|v| v.name.clone()).collect())
    }
}
