//! Command implementations for productctl CLI

pub mod demo;
pub mod output;
pub mod products;

// Re-export dispatcher functions for flat access from main.rs
pub use demo::run_demo;
pub use products::{run_add, run_delete, run_get, run_init, run_list, run_update};
