//! The fixed set of SQL statements the store issues

use std::fmt;

/// Each statement the store knows how to run.
///
/// Placeholders are positional `?`, which MySQL and SQLite both accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statement {
    CreateTable,
    Insert,
    Update,
    SelectOne,
    SelectAll,
    Delete,
}

impl Statement {
    pub const fn sql(self) -> &'static str {
        match self {
            // DDL kept to types both MySQL and SQLite accept
            Self::CreateTable => {
                "CREATE TABLE IF NOT EXISTS products (\
                 id VARCHAR(36) NOT NULL PRIMARY KEY, \
                 name VARCHAR(255) NOT NULL, \
                 price DOUBLE NOT NULL)"
            }
            Self::Insert => "INSERT INTO products(id, name, price) VALUES (?, ?, ?)",
            Self::Update => "UPDATE products SET name = ?, price = ? WHERE id = ?",
            Self::SelectOne => "SELECT id, name, price FROM products WHERE id = ?",
            Self::SelectAll => "SELECT id, name, price FROM products",
            Self::Delete => "DELETE FROM products WHERE id = ?",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::CreateTable => "create-table",
            Self::Insert => "insert",
            Self::Update => "update",
            Self::SelectOne => "select-one",
            Self::SelectAll => "select-all",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_counts() {
        let count = |s: Statement| s.sql().matches('?').count();

        assert_eq!(count(Statement::Insert), 3);
        assert_eq!(count(Statement::Update), 3);
        assert_eq!(count(Statement::SelectOne), 1);
        assert_eq!(count(Statement::SelectAll), 0);
        assert_eq!(count(Statement::Delete), 1);
    }

    #[test]
    fn select_all_has_no_ordering() {
        assert!(!Statement::SelectAll.sql().to_uppercase().contains("ORDER BY"));
    }
}
