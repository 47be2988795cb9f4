//! Data models
//!
//! Shared between checkout-server and API consumers.
//! DB-adjacent enums use `#[cfg_attr(feature = "db", derive(sqlx::Type))]`.
//! Catalog/cart/order-line IDs are `i64` (SQLite INTEGER PRIMARY KEY);
//! transaction IDs are client-visible `ORDER-` strings.

pub mod cart;
pub mod transaction;

// Re-exports
pub use cart::*;
pub use transaction::*;
