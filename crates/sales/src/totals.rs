//! Line and order totals.
//!
//! Nothing here is cached. Every figure is derived from the items passed in,
//! so a total is always consistent with the fields it was computed from.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use orderdesk_core::ValueObject;

use crate::line_item::LineItem;
use crate::order::Order;

/// Order-level aggregates shown on screen and printed on the invoice.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotals {
    /// Number of line items.
    pub total_items: usize,
    /// Sum of billed pieces.
    pub total_pieces: u64,
    /// Sum of `unit_price * piece_count`, before discount.
    pub gross_value: Decimal,
    /// Sum of line totals, after discount.
    pub net_invoice_value: Decimal,
    /// `gross_value - net_invoice_value`.
    pub total_discount_value: Decimal,
}

impl ValueObject for OrderTotals {}

impl OrderTotals {
    /// Aggregate a sequence of line items in a single pass.
    pub fn from_items<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a LineItem>,
    {
        let mut totals = items
            .into_iter()
            .fold(OrderTotals::default(), |mut acc, item| {
                acc.total_items += 1;
                acc.total_pieces += u64::from(item.piece_count);
                acc.gross_value = acc.gross_value.saturating_add(item.gross_value());
                acc.net_invoice_value = acc.net_invoice_value.saturating_add(item.line_total());
                acc
            });
        totals.total_discount_value = totals.gross_value.saturating_sub(totals.net_invoice_value);
        totals
    }
}

/// `(unit_price - unit_price * discount_percent / 100) * piece_count`.
pub fn compute_line_total(item: &LineItem) -> Decimal {
    item.line_total()
}

/// Totals for every line item of `order`.
pub fn compute_order_totals(order: &Order) -> OrderTotals {
    order.totals()
}

#[cfg(test)]
mod tests {
    use super::*;
    use orderdesk_core::OrderId;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn order_with(items: Vec<LineItem>) -> Order {
        items
            .into_iter()
            .fold(Order::empty(OrderId::new(1)), Order::with_item)
    }

    #[test]
    fn single_item_scenario() {
        let order = order_with(vec![LineItem::new(
            "Phone",
            100,
            2,
            dec!(50000),
            dec!(10),
        )]);
        let totals = compute_order_totals(&order);

        assert_eq!(compute_line_total(&order.items()[0]), dec!(90000));
        assert_eq!(totals.total_items, 1);
        assert_eq!(totals.total_pieces, 2);
        assert_eq!(totals.gross_value, dec!(100000));
        assert_eq!(totals.net_invoice_value, dec!(90000));
        assert_eq!(totals.total_discount_value, dec!(10000));
    }

    #[test]
    fn two_item_scenario() {
        let order = order_with(vec![
            LineItem::new("A", 0, 3, dec!(2000), dec!(5)),
            LineItem::new("B", 0, 2, dec!(4000), dec!(10)),
        ]);
        let lines: Vec<Decimal> = order.items().iter().map(compute_line_total).collect();
        assert_eq!(lines, vec![dec!(5700), dec!(7200)]);
        assert_eq!(order.totals().net_invoice_value, dec!(12900));
        assert_eq!(order.totals().total_pieces, 5);
    }

    #[test]
    fn empty_order_totals_are_zero() {
        let totals = compute_order_totals(&Order::empty(OrderId::new(1)));
        assert_eq!(totals, OrderTotals::default());
    }

    #[test]
    fn totals_serialize_as_camel_case_strings() {
        let order = order_with(vec![LineItem::new("A", 0, 1, dec!(9.99), dec!(0))]);
        let json = serde_json::to_value(order.totals()).unwrap();
        assert_eq!(json["totalItems"], 1);
        assert_eq!(json["netInvoiceValue"], "9.99");
    }

    fn line_item_strategy() -> impl Strategy<Value = LineItem> {
        (
            "[A-Za-z ]{0,12}",
            0u32..500,
            0u32..10_000,
            0i64..10_000_000,
            0i64..=10_000,
        )
            .prop_map(|(name, cartons, pieces, price_cents, discount_bp)| {
                LineItem::new(
                    name,
                    cartons,
                    pieces,
                    Decimal::new(price_cents, 2),
                    Decimal::new(discount_bp, 2),
                )
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the line total follows the pricing formula exactly.
        #[test]
        fn line_total_matches_formula(item in line_item_strategy()) {
            let pieces = Decimal::from(item.piece_count);
            let expected = (item.unit_price
                - item.unit_price * item.discount_percent / Decimal::ONE_HUNDRED)
                * pieces;
            prop_assert_eq!(compute_line_total(&item), expected);
            prop_assert!(compute_line_total(&item) >= Decimal::ZERO);
        }

        /// Property: net value is the sum of line totals and the discount is
        /// exactly gross minus net.
        #[test]
        fn aggregates_are_consistent(items in prop::collection::vec(line_item_strategy(), 0..20)) {
            let order = order_with(items.clone());
            let totals = order.totals();

            let net: Decimal = items.iter().map(compute_line_total).sum();
            let gross: Decimal = items.iter().map(LineItem::gross_value).sum();
            let pieces: u64 = items.iter().map(|i| u64::from(i.piece_count)).sum();

            prop_assert_eq!(totals.total_items, items.len());
            prop_assert_eq!(totals.total_pieces, pieces);
            prop_assert_eq!(totals.net_invoice_value, net);
            prop_assert_eq!(totals.gross_value, gross);
            prop_assert_eq!(totals.total_discount_value, gross - net);
            prop_assert!(totals.net_invoice_value <= totals.gross_value);
        }

        /// Property: a full discount zeroes any line.
        #[test]
        fn full_discount_zeroes_line(mut item in line_item_strategy()) {
            item.discount_percent = Decimal::ONE_HUNDRED;
            prop_assert_eq!(compute_line_total(&item), Decimal::ZERO);
        }
    }
}
