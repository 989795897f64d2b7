//! Demo command - the full CRUD sequence against one product
//!
//! create -> insert -> mutate -> update -> select one -> select all -> delete
//!
//! Each step waits for the previous one; the first failure aborts the run.

use anyhow::{Context, Result};
use clap::Parser;
use productctl_store::{Product, ProductStore};
use tracing::info;

use super::output::{print_product, print_products};

#[derive(Parser, Debug)]
pub struct DemoArgs {
    /// Name the product is created with
    #[arg(long, default_value = "SpaceShip")]
    pub name: String,

    /// Price the product is created with
    #[arg(long, default_value_t = 10.02, allow_negative_numbers = true)]
    pub price: f64,

    /// Name written by the update step
    #[arg(long, default_value = "updatedSpaceShip")]
    pub new_name: String,

    /// Price written by the update step
    #[arg(long, default_value_t = 11.05, allow_negative_numbers = true)]
    pub new_price: f64,

    /// Skip the final delete and leave the product in the table
    #[arg(long)]
    pub keep: bool,
}

/// What the read steps returned, printed once the sequence finishes.
#[derive(Debug)]
struct DemoReport {
    fetched: Product,
    listed: Vec<Product>,
}

pub async fn run_demo(store: &ProductStore, args: DemoArgs, json: bool) -> Result<()> {
    let report = run_sequence(store, args).await?;

    print_product(&report.fetched, json)?;
    print_products(&report.listed, json)?;
    Ok(())
}

async fn run_sequence(store: &ProductStore, args: DemoArgs) -> Result<DemoReport> {
    let mut product = Product::new(args.name, args.price);
    store
        .insert(&product)
        .await
        .context("Failed to insert product")?;
    info!(id = product.id(), name = %product.name, price = product.price, "inserted");

    product.name = args.new_name;
    product.price = args.new_price;
    store
        .update(&product)
        .await
        .context("Failed to update product")?;
    info!(id = product.id(), name = %product.name, price = product.price, "updated");

    let found = store
        .find(product.id())
        .await
        .context("Failed to fetch product")?;
    info!(id = found.id(), "fetched");

    let listed = store.list().await.context("Failed to list products")?;
    info!(count = listed.len(), "listed");

    if !args.keep {
        store
            .delete(product.id())
            .await
            .context("Failed to delete product")?;
        info!(id = product.id(), "deleted");
    }

    Ok(DemoReport {
        fetched: found,
        listed,
    })
}
