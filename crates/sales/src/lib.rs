//! Order domain module.
//!
//! This crate contains the order model, its pricing rules and the order
//! management screen's state, implemented purely as deterministic domain
//! logic (no IO, no HTTP, no storage).

pub mod book;
pub mod line_item;
pub mod order;
pub mod report;
pub mod totals;

pub use book::{Dialog, ManagementState, OrderBook};
pub use line_item::{LineItem, LineItemField};
pub use order::{EditOutcome, Order, OrderEdit, OrderField, OrderStatus};
pub use report::SalesReport;
pub use totals::{OrderTotals, compute_line_total, compute_order_totals};
