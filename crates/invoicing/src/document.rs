//! Printable projection of an order.
//!
//! Every cell is formatted here, once, so the template only places strings.
//! Building a document never fails: missing order data becomes an empty cell.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use orderdesk_core::Entity;
use orderdesk_sales::{LineItem, Order, OrderTotals};

/// Fixed line-item table columns, in print order.
pub const COLUMNS: [&str; 10] = [
    "Product Name",
    "Carton",
    "Qty Pieces",
    "Qty Loose",
    "Bins",
    "Price",
    "Disc%",
    "Disc.Value",
    "S-Tax%",
    "Value",
];

/// Order-derived header block: invoice number, customer and salesman on the
/// left; date, time and sector on the right.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct InvoiceDetails {
    pub invoice_number: String,
    pub customer: String,
    pub salesman: String,
    pub date: String,
    pub time: String,
    pub sector: String,
}

/// One printed table row.
///
/// `qty_loose`, `bins` and `sales_tax_percent` are placeholders that always
/// print zero; no loose-quantity, bin or tax figures are tracked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceRow {
    pub product_name: String,
    pub cartons: String,
    pub pieces: String,
    pub qty_loose: String,
    pub bins: String,
    pub price: String,
    pub discount_percent: String,
    pub discount_value: String,
    pub sales_tax_percent: String,
    pub value: String,
}

/// Totals block. Previous balance and received are blank, so the balance is
/// the net invoice value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceSummary {
    pub item_count: String,
    pub total_pieces: String,
    pub gross_value: String,
    pub net_invoice_value: String,
    pub previous_balance: String,
    pub received: String,
    pub balance: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceDocument {
    pub details: InvoiceDetails,
    pub rows: Vec<InvoiceRow>,
    pub summary: InvoiceSummary,
}

impl InvoiceDocument {
    pub fn from_order(order: &Order) -> Self {
        let details = InvoiceDetails {
            invoice_number: order.id().to_string(),
            customer: order.shop().to_string(),
            salesman: order.salesman().to_string(),
            date: order
                .date()
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            time: order
                .time()
                .map(|t| t.format("%H:%M").to_string())
                .unwrap_or_default(),
            sector: order.sector().to_string(),
        };

        Self {
            details,
            rows: order.items().iter().map(InvoiceRow::from_item).collect(),
            summary: InvoiceSummary::from_totals(&order.totals()),
        }
    }
}

impl InvoiceRow {
    fn from_item(item: &LineItem) -> Self {
        Self {
            product_name: item.name.clone(),
            cartons: item.carton_count.to_string(),
            pieces: item.piece_count.to_string(),
            qty_loose: "0".to_string(),
            bins: "0".to_string(),
            price: format_amount(item.unit_price),
            discount_percent: format_amount(item.discount_percent),
            discount_value: format_amount(item.discount_value()),
            sales_tax_percent: format_amount(Decimal::ZERO),
            value: format_amount(item.line_total()),
        }
    }
}

impl InvoiceSummary {
    fn from_totals(totals: &OrderTotals) -> Self {
        let net = format_amount(totals.net_invoice_value);
        Self {
            item_count: totals.total_items.to_string(),
            total_pieces: totals.total_pieces.to_string(),
            gross_value: format_amount(totals.gross_value),
            net_invoice_value: net.clone(),
            previous_balance: String::new(),
            received: String::new(),
            balance: net,
        }
    }
}

/// Two decimal places, rounding half away from zero: `1234.5` → `"1234.50"`.
///
/// Values too wide for `rescale(2)` (near `Decimal::MAX`) are padded as text.
pub fn format_amount(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        // Avoid printing "-0.00" for tiny negative inputs.
        rounded.set_sign_positive(true);
    }
    let mut text = rounded.to_string();
    let digits = text.find('.').map_or(0, |dot| text.len() - dot - 1);
    if digits == 0 {
        text.push('.');
    }
    text.extend(core::iter::repeat_n('0', 2usize.saturating_sub(digits)));
    text
}
