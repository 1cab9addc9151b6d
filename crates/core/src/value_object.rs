//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Line items, computed totals and stock entries have no identity of their
/// own: two line items with the same name, quantities, price and discount are
/// interchangeable. A line item's position in its order is what tells it
/// apart, and that position belongs to the order, not the item.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
