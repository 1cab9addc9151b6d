use serde::{Deserialize, Serialize};

use orderdesk_core::ValueObject;

/// Quantity on hand for one stocked product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockEntry {
    pub name: String,
    #[serde(alias = "stock")]
    pub on_hand: i64,
}

impl ValueObject for StockEntry {}

impl StockEntry {
    pub fn new(name: impl Into<String>, on_hand: i64) -> Self {
        Self {
            name: name.into(),
            on_hand,
        }
    }
}

/// Stock entries relevant to the names typed into an order's line items.
///
/// An entry matches when its name contains any typed name, ignoring case.
/// Blank names match nothing. Read-only: this is a hint for the operator,
/// nothing is reserved or debited.
pub fn filter_stock<'a, I, S>(stock: &'a [StockEntry], names: I) -> Vec<&'a StockEntry>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let needles: Vec<String> = names
        .into_iter()
        .filter(|name| !name.as_ref().is_empty())
        .map(|name| name.as_ref().to_lowercase())
        .collect();

    if needles.is_empty() {
        return Vec::new();
    }

    stock
        .iter()
        .filter(|entry| {
            let haystack = entry.name.to_lowercase();
            needles.iter().any(|needle| haystack.contains(needle.as_str()))
        })
        .collect()
}
