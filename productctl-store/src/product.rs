//! Product entity

use std::fmt;

use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A row of the `products` table.
///
/// `id` is fixed at construction and has no setter; `name` and `price` may be
/// changed freely and written back with [`ProductStore::update`].
///
/// [`ProductStore::update`]: crate::ProductStore::update
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Product {
    id: String,
    pub name: String,
    pub price: f64,
}

impl Product {
    /// Create a product with a freshly generated v4 UUID.
    ///
    /// Purely in-memory; nothing is written until the product is inserted.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            price,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.id, self.name, self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn new_assigns_v4_uuid() {
        let product = Product::new("SpaceShip", 10.02);
        let parsed = Uuid::parse_str(product.id()).expect("id should be a uuid");

        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(product.id(), parsed.hyphenated().to_string());
        assert_eq!(product.name, "SpaceShip");
        assert_eq!(product.price, 10.02);
    }

    #[test]
    fn ids_are_unique_across_calls() {
        let ids: HashSet<String> = (0..1000)
            .map(|_| Product::new("same", 1.0).id().to_owned())
            .collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn mutation_keeps_identity() {
        let mut product = Product::new("SpaceShip", 10.02);
        let id = product.id().to_owned();

        product.name = "updatedSpaceShip".into();
        product.price = 11.05;

        assert_eq!(product.id(), id);
    }

    #[test]
    fn display_and_json() {
        let product = Product::new("Rocket", 2.5);
        assert_eq!(product.to_string(), format!("{} Rocket 2.5", product.id()));

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["id"], product.id());
        assert_eq!(json["name"], "Rocket");
        assert_eq!(json["price"], 2.5);
    }
}
