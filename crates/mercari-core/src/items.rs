use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

/// One listing card recovered from a search-results page.
///
/// Field order matches the emitted JSON key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    /// Marketplace item id, `"m"` followed by digits (e.g. `"m12345678901"`).
    pub id: String,
    /// Listing state as rendered, e.g. `"on_sale"` or `"sold_out"`.
    pub status: String,
    pub price_cents: u64,
    /// Always `price_cents` with two decimal places.
    #[serde(serialize_with = "serialize_decimal_as_number")]
    pub price: Decimal,
    /// Display price text, e.g. `"¥1,200"`.
    pub price_text: Option<String>,
    pub href: Option<String>,
    pub image: Option<ItemImage>,
    /// Badge label such as a discount percentage.
    pub discount: Option<String>,
}

impl ItemRecord {
    /// Builds a record with the derived `price` filled in and every optional
    /// field empty.
    #[must_use]
    pub fn new(id: impl Into<String>, status: impl Into<String>, price_cents: u64) -> Self {
        Self {
            id: id.into(),
            status: status.into(),
            price_cents,
            price: cents_to_price(price_cents),
            price_text: None,
            href: None,
            image: None,
            discount: None,
        }
    }
}

/// Thumbnail attributes. Only built when all four were found together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemImage {
    pub alt: String,
    pub title: String,
    pub srcset: String,
    pub src: String,
}

/// Exact conversion from minor units to a two-place decimal.
#[must_use]
pub fn cents_to_price(price_cents: u64) -> Decimal {
    Decimal::from_i128_with_scale(i128::from(price_cents), 2)
}

/// Writes a decimal as a bare JSON number in its shortest form: `5` rather
/// than `5.00`, `12.5` rather than `12.50`.
fn serialize_decimal_as_number<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let normalized = value.normalize();
    if normalized.scale() == 0 {
        if let Some(whole) = normalized.to_u64() {
            return serializer.serialize_u64(whole);
        }
        if let Some(whole) = normalized.to_i64() {
            return serializer.serialize_i64(whole);
        }
    }
    // Parsing the decimal's own text keeps the nearest f64 to the exact value.
    match normalized.to_string().parse::<f64>() {
        Ok(float) => serializer.serialize_f64(float),
        Err(e) => Err(serde::ser::Error::custom(format!(
            "decimal {normalized} cannot be represented as a JSON number: {e}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_derives_price_from_cents() {
        let item = ItemRecord::new("m100", "on_sale", 500);
        assert_eq!(item.price, Decimal::new(500, 2));
        assert_eq!(item.price * Decimal::from(100), Decimal::from(item.price_cents));
    }

    #[test]
    fn cents_to_price_is_exact_for_odd_values() {
        assert_eq!(cents_to_price(1), Decimal::new(1, 2));
        assert_eq!(cents_to_price(12_345), Decimal::new(12_345, 2));
        assert_eq!(cents_to_price(0), Decimal::ZERO);
    }

    #[test]
    fn serializes_camel_case_keys_in_declared_order() {
        let item = ItemRecord::new("m100", "on_sale", 500);
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(
            json,
            r#"{"id":"m100","status":"on_sale","priceCents":500,"price":5,"priceText":null,"href":null,"image":null,"discount":null}"#
        );
    }

    #[test]
    fn fractional_price_serializes_in_shortest_form() {
        let json = serde_json::to_value(ItemRecord::new("m1", "on_sale", 1250)).unwrap();
        assert_eq!(json["price"], serde_json::json!(12.5));

        let json = serde_json::to_value(ItemRecord::new("m1", "on_sale", 1234)).unwrap();
        assert_eq!(json["price"], serde_json::json!(12.34));
    }

    #[test]
    fn image_serializes_all_four_fields() {
        let mut item = ItemRecord::new("m1", "on_sale", 100);
        item.image = Some(ItemImage {
            alt: "A".into(),
            title: "B".into(),
            srcset: "s".into(),
            src: "u".into(),
        });
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json["image"],
            serde_json::json!({"alt": "A", "title": "B", "srcset": "s", "src": "u"})
        );
    }
}
