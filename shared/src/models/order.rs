//! Order Model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::util::parse_iso_date;

/// Order entity as persisted in `orders.json`
///
/// Only the fields the reminder logic reads are typed. Everything else
/// (platform, sell price, delivery status, attachments, ...) is carried
/// through untouched in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(default)]
    pub order_number: String,
    /// Raw `YYYY-MM-DD` text; may be empty or malformed
    #[serde(default)]
    pub order_date: Option<String>,
    /// Free-text payment label, e.g. "HDFC 4321 EMI"
    #[serde(default)]
    pub payment_mode: Option<String>,
    /// Purchase amount in currency unit
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub purchase: Decimal,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Order {
    /// Create an order with the fields the reminder logic cares about
    pub fn new(
        order_number: impl Into<String>,
        order_date: impl Into<String>,
        payment_mode: impl Into<String>,
        purchase: Decimal,
    ) -> Self {
        Self {
            order_number: order_number.into(),
            order_date: Some(order_date.into()),
            payment_mode: Some(payment_mode.into()),
            purchase,
            extra: Map::new(),
        }
    }

    /// Parsed order date, `None` when missing or unreadable
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        self.order_date.as_deref().and_then(parse_iso_date)
    }

    /// Payment mode label, empty when absent
    pub fn payment_mode(&self) -> &str {
        self.payment_mode.as_deref().unwrap_or_default()
    }

    /// Whether the order was paid on EMI ("emi" anywhere in the payment mode, any case)
    pub fn is_emi(&self) -> bool {
        self.payment_mode().to_lowercase().contains("emi")
    }
}

/// `null` and absent amounts both read as zero
fn deserialize_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Decimal>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_persisted_order() {
        let json = r#"{
            "platform": "Amazon",
            "order_number": "403-1234567-7654321",
            "model_number": "SM-S928B",
            "purchase": 124999.5,
            "sell": 0,
            "payment_mode": "ICICI 4321 EMI",
            "order_date": "2024-01-24",
            "delivery_status": 0,
            "screenshots": []
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.order_number, "403-1234567-7654321");
        assert_eq!(order.purchase, Decimal::from_str("124999.5").unwrap());
        assert_eq!(order.parsed_date(), NaiveDate::from_ymd_opt(2024, 1, 24));
        assert!(order.is_emi());
        assert_eq!(order.extra["platform"], "Amazon");
        assert_eq!(order.extra["delivery_status"], 0);
    }

    #[test]
    fn test_deserialize_sparse_order() {
        let json = r#"{"order_number": "A1", "order_date": null, "purchase": null}"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.purchase, Decimal::ZERO);
        assert_eq!(order.parsed_date(), None);
        assert_eq!(order.payment_mode(), "");
        assert!(!order.is_emi());
    }

    #[test]
    fn test_integer_purchase() {
        let order: Order = serde_json::from_str(r#"{"order_number": "A2", "purchase": 45999}"#).unwrap();
        assert_eq!(order.purchase, Decimal::from(45999));
    }

    #[test]
    fn test_unparsable_date() {
        let order = Order::new("A3", "", "Card EMI", Decimal::ONE);
        assert_eq!(order.parsed_date(), None);

        let order = Order::new("A4", "26/01/2024", "Card EMI", Decimal::ONE);
        assert_eq!(order.parsed_date(), None);
    }

    #[test]
    fn test_is_emi_case_insensitive() {
        assert!(Order::new("B1", "2024-01-01", "Card EMI", Decimal::ONE).is_emi());
        assert!(Order::new("B2", "2024-01-01", "no-cost emi", Decimal::ONE).is_emi());
        assert!(Order::new("B3", "2024-01-01", "Premium", Decimal::ONE).is_emi());
        assert!(!Order::new("B4", "2024-01-01", "UPI", Decimal::ONE).is_emi());
    }

    #[test]
    fn test_extra_fields_survive_round_trip() {
        let json = r#"{"order_number":"C1","order_date":"2024-02-01","payment_mode":"UPI","purchase":10,"memo":"gift"}"#;
        let order: Order = serde_json::from_str(json).unwrap();
        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["memo"], "gift");
        assert_eq!(value["order_number"], "C1");
    }
}
