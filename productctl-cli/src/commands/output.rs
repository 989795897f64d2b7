//! Rendering products to stdout

use anyhow::{Context, Result};
use productctl_store::Product;

pub fn print_product(product: &Product, json: bool) -> Result<()> {
    if json {
        let rendered =
            serde_json::to_string_pretty(product).context("Failed to serialize product")?;
        println!("{rendered}");
    } else {
        println!("{product}");
    }
    Ok(())
}

pub fn print_products(products: &[Product], json: bool) -> Result<()> {
    if json {
        let rendered =
            serde_json::to_string_pretty(products).context("Failed to serialize products")?;
        println!("{rendered}");
        return Ok(());
    }

    if products.is_empty() {
        println!("(no products)");
    }
    for product in products {
        println!("{product}");
    }
    Ok(())
}
