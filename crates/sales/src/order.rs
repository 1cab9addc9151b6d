use core::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};

use orderdesk_core::{DomainError, DomainResult, Entity, OrderId};

use crate::line_item::{LineItem, LineItemField};
use crate::totals::OrderTotals;

/// Order status. No transition rules are enforced between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum OrderStatus {
    #[default]
    Pending,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "completed" | "delivered" => Ok(OrderStatus::Completed),
            "cancelled" | "canceled" => Ok(OrderStatus::Cancelled),
            other => Err(DomainError::validation(format!("unknown order status: {other}"))),
        }
    }
}

impl<'de> Deserialize<'de> for OrderStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Editable order header fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderField {
    Shop,
    Salesman,
    Sector,
    Date,
    Time,
    Status,
}

impl FromStr for OrderField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "shop" => Ok(OrderField::Shop),
            "salesman" => Ok(OrderField::Salesman),
            "sector" => Ok(OrderField::Sector),
            "date" => Ok(OrderField::Date),
            "time" => Ok(OrderField::Time),
            "status" => Ok(OrderField::Status),
            other => Err(DomainError::validation(format!("unknown order field: {other}"))),
        }
    }
}

/// A single mutation of an order, as sent by an editing screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum OrderEdit {
    AddLineItem,
    RemoveLineItem {
        index: usize,
    },
    UpdateLineItem {
        index: usize,
        field: LineItemField,
        value: String,
    },
    SetField {
        field: OrderField,
        value: String,
    },
}

/// What an edit did. Stale references degrade to `Ignored`, never to an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Applied,
    Ignored,
}

/// A customer order: header fields plus line items in display order.
///
/// Totals are not stored. [`Order::totals`] recomputes them from the current
/// items on every call, so edits need no invalidation step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    id: OrderId,
    #[serde(default)]
    shop: String,
    #[serde(default)]
    salesman: String,
    #[serde(default)]
    sector: String,
    #[serde(default, deserialize_with = "lenient_date")]
    date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_time")]
    time: Option<NaiveTime>,
    #[serde(default, deserialize_with = "lenient_status")]
    status: OrderStatus,
    #[serde(default)]
    items: Vec<LineItem>,
}

impl Order {
    /// A fresh order as the add-order form starts it: pending, one blank line.
    pub fn new(id: OrderId) -> Self {
        let mut order = Self::empty(id);
        order.items.push(LineItem::default());
        order
    }

    /// An order with no line items.
    pub fn empty(id: OrderId) -> Self {
        Self {
            id,
            shop: String::new(),
            salesman: String::new(),
            sector: String::new(),
            date: None,
            time: None,
            status: OrderStatus::Pending,
            items: Vec::new(),
        }
    }

    pub fn with_shop(mut self, shop: impl Into<String>) -> Self {
        self.shop = shop.into();
        self
    }

    pub fn with_salesman(mut self, salesman: impl Into<String>) -> Self {
        self.salesman = salesman.into();
        self
    }

    pub fn with_sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = sector.into();
        self
    }

    pub fn with_placed_at(mut self, date: NaiveDate, time: NaiveTime) -> Self {
        self.date = Some(date);
        self.time = Some(time);
        self
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_item(mut self, item: LineItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    pub fn shop(&self) -> &str {
        &self.shop
    }

    pub fn salesman(&self) -> &str {
        &self.salesman
    }

    pub fn sector(&self) -> &str {
        &self.sector
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn time(&self) -> Option<NaiveTime> {
        self.time
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Names typed into the line items, in order (blank names included).
    pub fn item_names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.name.as_str())
    }

    /// Append a blank line item; returns its index.
    pub fn add_line_item(&mut self) -> usize {
        self.items.push(LineItem::default());
        self.items.len() - 1
    }

    /// Remove the line item at `index`, keeping the others in order.
    ///
    /// Returns `None` without touching the order when `index` is out of range.
    pub fn remove_line_item(&mut self, index: usize) -> Option<LineItem> {
        if index >= self.items.len() {
            tracing::debug!(
                order_id = %self.id,
                index,
                len = self.items.len(),
                "ignoring removal of missing line item"
            );
            return None;
        }
        Some(self.items.remove(index))
    }

    /// Set one field of the line item at `index` from raw form text.
    pub fn update_line_item(
        &mut self,
        index: usize,
        field: LineItemField,
        raw: &str,
    ) -> EditOutcome {
        if index >= self.items.len() {
            tracing::debug!(
                order_id = %self.id,
                index,
                ?field,
                "ignoring update of missing line item"
            );
            return EditOutcome::Ignored;
        }
        self.items[index].set_field(field, raw);
        EditOutcome::Applied
    }

    /// Set one header field from raw form text.
    ///
    /// A date or time that does not parse clears the field. Unknown status
    /// text is rejected and leaves the order unchanged.
    pub fn set_field(&mut self, field: OrderField, raw: &str) -> DomainResult<()> {
        match field {
            OrderField::Shop => self.shop = raw.to_string(),
            OrderField::Salesman => self.salesman = raw.to_string(),
            OrderField::Sector => self.sector = raw.to_string(),
            OrderField::Date => self.date = parse_date(raw),
            OrderField::Time => self.time = parse_time(raw),
            OrderField::Status => self.status = raw.parse()?,
        }
        Ok(())
    }

    /// Apply an edit command.
    pub fn apply_edit(&mut self, edit: &OrderEdit) -> DomainResult<EditOutcome> {
        match edit {
            OrderEdit::AddLineItem => {
                self.add_line_item();
                Ok(EditOutcome::Applied)
            }
            OrderEdit::RemoveLineItem { index } => Ok(match self.remove_line_item(*index) {
                Some(_) => EditOutcome::Applied,
                None => EditOutcome::Ignored,
            }),
            OrderEdit::UpdateLineItem {
                index,
                field,
                value,
            } => Ok(self.update_line_item(*index, *field, value)),
            OrderEdit::SetField { field, value } => {
                self.set_field(*field, value)?;
                Ok(EditOutcome::Applied)
            }
        }
    }

    /// Aggregate totals over the current line items.
    pub fn totals(&self) -> OrderTotals {
        OrderTotals::from_items(&self.items)
    }

    /// Pre-save checks: at least one line item, and every item valid.
    ///
    /// Never called by pricing or rendering, which accept any order.
    pub fn validate(&self) -> DomainResult<()> {
        if self.items.is_empty() {
            return Err(DomainError::validation("order has no line items"));
        }
        for (index, item) in self.items.iter().enumerate() {
            item.validate().map_err(|e| match e {
                DomainError::Validation(msg) => {
                    DomainError::validation(format!("line item {index}: {msg}"))
                }
                other => other,
            })?;
        }
        Ok(())
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// `YYYY-MM-DD`, as produced by a date input. Anything else is no date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// `HH:MM` or `HH:MM:SS`. Anything else is no time.
pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .ok()
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_date))
}

fn lenient_time<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_time))
}

/// Unknown, blank or missing status text reads as `Pending`.
fn lenient_status<'de, D>(deserializer: D) -> Result<OrderStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .as_deref()
        .and_then(|text| text.parse().ok())
        .unwrap_or_default())
}
