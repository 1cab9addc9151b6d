//! Sales totals over a date range.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::book::OrderBook;
use crate::order::OrderStatus;

/// Net sales for the orders placed within an inclusive date range.
///
/// Cancelled orders and orders without a date are left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesReport {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub order_count: usize,
    pub total_sales: Decimal,
    /// Net sales per salesman, ordered by name.
    pub by_salesman: BTreeMap<String, Decimal>,
}

impl SalesReport {
    /// Build the report for `[start, end]`. An inverted range is simply empty.
    pub fn for_range(book: &OrderBook, start: NaiveDate, end: NaiveDate) -> Self {
        let mut report = SalesReport {
            start,
            end,
            order_count: 0,
            total_sales: Decimal::ZERO,
            by_salesman: BTreeMap::new(),
        };

        let in_range = book.iter().filter(|order| {
            order.status() != OrderStatus::Cancelled
                && order.date().is_some_and(|date| start <= date && date <= end)
        });

        for order in in_range {
            let net = order.totals().net_invoice_value;
            report.order_count += 1;
            report.total_sales = report.total_sales.saturating_add(net);
            let entry = report
                .by_salesman
                .entry(order.salesman().to_string())
                .or_insert(Decimal::ZERO);
            *entry = entry.saturating_add(net);
        }

        tracing::debug!(
            %start,
            %end,
            orders = report.order_count,
            total = %report.total_sales,
            "sales report built"
        );
        report
    }
}
