//! Offline walk through the filter-resolution cascade: no network, just the
//! bundled catalog and a few hand-written model replies.
//!
//! ```bash
//! cargo run --example filter_demo
//! ```

use vitrina::catalog::{Catalog, parse_filter_reply};

fn main() -> anyhow::Result<()> {
    let catalog = Catalog::bundled();

    let replies = [
        // strict tier: AND across keys
        "```json\n{ \"productName\": \"polo\", \"skuSpecifications.values.name\": \"Red\" }\n```",
        // list-valued filter: OR across values
        "{ \"skuSpecifications.values.name\": [\"red\", \"navy\"] }",
        // nothing matches strictly, keyword ranking takes over
        "{ \"description\": \"waterproof rain hood\" }",
    ];

    for reply in replies {
        let filters = parse_filter_reply(reply)?;
        println!("filters: {filters:?}");
        for product in catalog.resolve(&filters) {
            println!("  -> {} ({})", product.product_name, product.product_id);
        }
        println!();
    }

    Ok(())
}
