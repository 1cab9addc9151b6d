use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use orderdesk_core::numeric::{self, lenient};
use orderdesk_core::{DomainError, DomainResult, ValueObject};

/// One product entry within an order.
///
/// Only the five entered fields are stored. Discount value, net unit price
/// and line total are derived on every call so they can never go stale.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Product name as typed; not checked against inventory.
    #[serde(default)]
    pub name: String,
    /// Packaging count. Printed, never priced.
    #[serde(default, alias = "corton", deserialize_with = "lenient::count")]
    pub carton_count: u32,
    /// Individual units billed.
    #[serde(default, alias = "pieces", deserialize_with = "lenient::count")]
    pub piece_count: u32,
    /// Price per piece before discount.
    #[serde(default, alias = "price", deserialize_with = "lenient::decimal")]
    pub unit_price: Decimal,
    /// Percentage deducted from `unit_price`, nominally in `[0, 100]`.
    #[serde(default, alias = "discount", deserialize_with = "lenient::decimal")]
    pub discount_percent: Decimal,
}

impl ValueObject for LineItem {}

/// Editable line item fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineItemField {
    Name,
    CartonCount,
    PieceCount,
    UnitPrice,
    DiscountPercent,
}

impl FromStr for LineItemField {
    type Err = DomainError;

    /// Accepts both the camelCase field names and the short form-control names
    /// (`corton`, `pieces`, `price`, `discount`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "name" => Ok(Self::Name),
            "cartonCount" | "carton" | "corton" => Ok(Self::CartonCount),
            "pieceCount" | "pieces" => Ok(Self::PieceCount),
            "unitPrice" | "price" => Ok(Self::UnitPrice),
            "discountPercent" | "discount" => Ok(Self::DiscountPercent),
            other => Err(DomainError::validation(format!(
                "unknown line item field: {other}"
            ))),
        }
    }
}

impl LineItem {
    pub fn new(
        name: impl Into<String>,
        carton_count: u32,
        piece_count: u32,
        unit_price: Decimal,
        discount_percent: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            carton_count,
            piece_count,
            unit_price,
            discount_percent,
        }
    }

    /// Set one field from raw form text.
    ///
    /// Numeric fields follow the silent-zero policy: blank or unparseable
    /// input stores `0`.
    pub fn set_field(&mut self, field: LineItemField, raw: &str) {
        match field {
            LineItemField::Name => self.name = raw.to_string(),
            LineItemField::CartonCount => self.carton_count = numeric::count_or_zero(raw),
            LineItemField::PieceCount => self.piece_count = numeric::count_or_zero(raw),
            LineItemField::UnitPrice => self.unit_price = numeric::decimal_or_zero(raw),
            LineItemField::DiscountPercent => {
                self.discount_percent = numeric::decimal_or_zero(raw)
            }
        }
    }

    /// Per-piece discount: `unit_price * discount_percent / 100`.
    pub fn discount_value(&self) -> Decimal {
        self.unit_price.saturating_mul(self.discount_percent) / Decimal::ONE_HUNDRED
    }

    /// Per-piece price after discount.
    pub fn net_unit_price(&self) -> Decimal {
        self.unit_price.saturating_sub(self.discount_value())
    }

    /// Value before discount: `unit_price * piece_count`.
    pub fn gross_value(&self) -> Decimal {
        self.unit_price.saturating_mul(Decimal::from(self.piece_count))
    }

    /// Value after discount: `net_unit_price * piece_count`.
    pub fn line_total(&self) -> Decimal {
        self.net_unit_price()
            .saturating_mul(Decimal::from(self.piece_count))
    }

    /// Pre-save checks. Pricing never calls this.
    pub fn validate(&self) -> DomainResult<()> {
        if self.unit_price < Decimal::ZERO {
            return Err(DomainError::validation("unit_price must not be negative"));
        }
        if self.discount_percent < Decimal::ZERO || self.discount_percent > Decimal::ONE_HUNDRED {
            return Err(DomainError::validation(
                "discount_percent must be between 0 and 100",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn phone() -> LineItem {
        LineItem::new("Phone", 100, 2, dec!(50000), dec!(10))
    }

    #[test]
    fn derives_discount_and_totals() {
        let item = phone();
        assert_eq!(item.discount_value(), dec!(5000));
        assert_eq!(item.net_unit_price(), dec!(45000));
        assert_eq!(item.gross_value(), dec!(100000));
        assert_eq!(item.line_total(), dec!(90000));
    }

    #[test]
    fn cartons_do_not_affect_pricing() {
        let mut item = phone();
        let before = item.line_total();
        item.carton_count = 0;
        assert_eq!(item.line_total(), before);
    }

    #[test]
    fn full_discount_zeroes_the_line() {
        let item = LineItem::new("Free", 1, 7, dec!(123.45), dec!(100));
        assert_eq!(item.line_total(), Decimal::ZERO);
    }

    #[test]
    fn zero_pieces_or_price_zeroes_the_line() {
        assert!(LineItem::new("A", 0, 0, dec!(10), dec!(5)).line_total().is_zero());
        assert!(LineItem::new("B", 0, 4, dec!(0), dec!(5)).line_total().is_zero());
    }

    #[test]
    fn set_field_parses_leniently() {
        let mut item = LineItem::default();
        item.set_field(LineItemField::Name, "Jeans");
        item.set_field(LineItemField::PieceCount, "3");
        item.set_field(LineItemField::UnitPrice, "40.5");
        item.set_field(LineItemField::DiscountPercent, "");
        assert_eq!(item.name, "Jeans");
        assert_eq!(item.piece_count, 3);
        assert_eq!(item.unit_price, dec!(40.5));
        assert_eq!(item.discount_percent, Decimal::ZERO);

        // Mid-edit text.
        item.set_field(LineItemField::UnitPrice, "4a");
        assert_eq!(item.unit_price, Decimal::ZERO);
        assert_eq!(item.line_total(), Decimal::ZERO);
    }

    #[test]
    fn field_names_parse_from_form_and_camel_case() {
        assert_eq!("corton".parse::<LineItemField>().unwrap(), LineItemField::CartonCount);
        assert_eq!("pieceCount".parse::<LineItemField>().unwrap(), LineItemField::PieceCount);
        assert_eq!("price".parse::<LineItemField>().unwrap(), LineItemField::UnitPrice);
        assert!("colour".parse::<LineItemField>().is_err());
    }

    #[test]
    fn validate_rejects_out_of_range_discount() {
        assert!(phone().validate().is_ok());

        let over = LineItem::new("X", 0, 1, dec!(10), dec!(100.01));
        match over.validate().unwrap_err() {
            DomainError::Validation(msg) if msg.contains("discount_percent") => {}
            other => panic!("Expected Validation error, got {other:?}"),
        }

        let negative = LineItem::new("X", 0, 1, dec!(10), dec!(-1));
        assert!(negative.validate().is_err());
    }

    #[test]
    fn validate_rejects_negative_price() {
        let item = LineItem::new("X", 0, 1, dec!(-10), dec!(0));
        assert!(item.validate().is_err());
    }

    #[test]
    fn deserializes_form_shaped_json() {
        let item: LineItem = serde_json::from_str(
            r#"{"name": "Milk", "corton": "", "pieces": "5", "price": 3, "discount": ""}"#,
        )
        .unwrap();
        assert_eq!(item.name, "Milk");
        assert_eq!(item.carton_count, 0);
        assert_eq!(item.piece_count, 5);
        assert_eq!(item.unit_price, dec!(3));
        assert_eq!(item.discount_percent, Decimal::ZERO);
        assert_eq!(item.line_total(), dec!(15));
    }
}
