//! Inventory domain module.
//!
//! Stock-on-hand lookups used while composing an order. Pure and read-only:
//! placing an order never decrements stock here.

pub mod stock;

pub use stock::{StockEntry, filter_stock};
