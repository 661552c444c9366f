//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Single-row queries keyed by the surrogate id
//! - Writes wrapped in a transaction, committed only on success
//! - Constraint violations mapped to `DbError::Integrity`

pub mod products;
pub mod models;
pub mod receipts;

pub use super::DbError;
pub use products::{Product, ProductRepo};
pub use models::{Model, ModelPatch, ModelRepo, NewModel};
pub use receipts::{NewReceipt, Receipt, ReceiptPatch, ReceiptRepo};
