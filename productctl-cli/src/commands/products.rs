//! Single-operation product commands (init, add, get, list, update, delete)

use anyhow::{bail, Context, Result};
use clap::Parser;
use productctl_store::{Product, ProductStore};
use tracing::{info, warn};

use super::output::{print_product, print_products};

#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Product name
    pub name: String,

    /// Product price
    #[arg(allow_negative_numbers = true)]
    pub price: f64,
}

#[derive(Parser, Debug)]
pub struct GetArgs {
    /// Product ID
    pub id: String,
}

#[derive(Parser, Debug)]
pub struct UpdateArgs {
    /// Product ID
    pub id: String,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New price
    #[arg(long, allow_negative_numbers = true)]
    pub price: Option<f64>,
}

#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Product ID
    pub id: String,
}

pub async fn run_init(store: &ProductStore) -> Result<()> {
    store
        .ensure_schema()
        .await
        .context("Failed to create products table")?;
    info!("products table ready");
    Ok(())
}

pub async fn run_add(store: &ProductStore, args: AddArgs) -> Result<()> {
    let product = Product::new(args.name, args.price);
    store
        .insert(&product)
        .await
        .context("Failed to insert product")?;

    info!(id = product.id(), "inserted product");
    println!("{}", product.id());
    Ok(())
}

pub async fn run_get(store: &ProductStore, args: GetArgs, json: bool) -> Result<()> {
    let product = store
        .find(&args.id)
        .await
        .context("Failed to fetch product")?;
    print_product(&product, json)
}

pub async fn run_list(store: &ProductStore, json: bool) -> Result<()> {
    let products = store.list().await.context("Failed to list products")?;
    print_products(&products, json)
}

/// Fetch, apply the given fields, write back.
pub async fn run_update(store: &ProductStore, args: UpdateArgs, json: bool) -> Result<()> {
    if args.name.is_none() && args.price.is_none() {
        bail!("Nothing to update: pass --name and/or --price");
    }

    let mut product = store
        .find(&args.id)
        .await
        .context("Failed to fetch product")?;

    if let Some(name) = args.name {
        product.name = name;
    }
    if let Some(price) = args.price {
        product.price = price;
    }

    let affected = store
        .update(&product)
        .await
        .context("Failed to update product")?;
    if affected == 0 {
        // Row vanished between fetch and update
        warn!(id = product.id(), "product was removed before the update ran");
    }

    print_product(&product, json)
}

pub async fn run_delete(store: &ProductStore, args: DeleteArgs) -> Result<()> {
    let affected = store
        .delete(&args.id)
        .await
        .context("Failed to delete product")?;

    if affected == 0 {
        warn!(id = %args.id, "no product with that id");
    } else {
        info!(id = %args.id, "deleted product");
    }
    Ok(())
}
