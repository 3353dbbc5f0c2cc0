//! Catalog item types.
//!
//! Items are loaded as a whole from the record store (`GET /store`) and are
//! never mutated afterwards. The wire format is camelCase JSON with the
//! category carried in a `type` field.

use core::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::id::ItemId;
use super::price::Price;

/// Items entered fewer than this many whole days ago carry a "new" label.
pub const NEW_ITEM_DAYS: i64 = 10;

/// Catalog category tag.
///
/// The storefront only filters on `Girls` and `Guys`; any other tag found in
/// the catalog is kept verbatim so it still shows on the Home tab.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Girls,
    Guys,
    Other(String),
}

impl Category {
    /// The tag as it appears on the wire.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Girls => "Girls",
            Self::Guys => "Guys",
            Self::Other(tag) => tag,
        }
    }
}

impl From<String> for Category {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "Girls" => Self::Girls,
            "Guys" => Self::Guys,
            _ => Self::Other(tag),
        }
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Other(tag) => tag,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    #[serde(rename = "type")]
    pub category: Category,
    pub name: String,
    /// Base image URL; renderers append a size policy query.
    pub image: String,
    pub price: Decimal,
    /// `None` when the item is not on sale. A listed discount of `0` is
    /// treated the same as no discount.
    #[serde(default, deserialize_with = "zero_as_none")]
    pub discounted_price: Option<Decimal>,
    /// `None` when the record carries no date or one that cannot be parsed;
    /// such items are never labelled new.
    #[serde(default, with = "entry_date")]
    pub date_entered: Option<DateTime<Utc>>,
    /// Units in stock as recorded. Fractions are truncated and anything
    /// that is not a number reads as 0, so one odd record cannot fail the
    /// whole catalog.
    #[serde(default, deserialize_with = "lenient_stock")]
    pub stock: i64,
}

impl Item {
    /// Whether the item carries a discount (and so appears on the Sale tab).
    #[must_use]
    pub const fn is_discounted(&self) -> bool {
        self.discounted_price.is_some()
    }

    /// The price actually charged: the discounted price when present.
    #[must_use]
    pub fn effective_price(&self) -> Decimal {
        self.discounted_price.unwrap_or(self.price)
    }

    /// The listed (undiscounted) price.
    #[must_use]
    pub const fn list_price(&self) -> Price {
        Price::gbp(self.price)
    }

    /// The discounted price, if any.
    #[must_use]
    pub fn sale_price(&self) -> Option<Price> {
        self.discounted_price.map(Price::gbp)
    }

    /// Whole days elapsed since the item was entered, truncated.
    #[must_use]
    pub fn days_since_entered(&self, now: DateTime<Utc>) -> Option<i64> {
        self.date_entered.map(|entered| (now - entered).num_days())
    }

    /// Whether the item should carry the "new" label at `now`.
    #[must_use]
    pub fn is_new(&self, now: DateTime<Utc>) -> bool {
        self.days_since_entered(now)
            .is_some_and(|days| days < NEW_ITEM_DAYS)
    }
}

fn zero_as_none<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Decimal> = Option::deserialize(deserializer)?;
    Ok(value.filter(|amount| !amount.is_zero()))
}

#[allow(clippy::cast_possible_truncation)]
fn lenient_stock<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(match raw {
        serde_json::Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(0),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

/// Lenient entry date (de)serialisation.
///
/// The record store holds dates as free-form strings; RFC 3339 timestamps,
/// `YYYY-MM-DD` and `YYYY/MM/DD` are understood.
mod entry_date {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::ref_option)]
    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&date.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(super::parse_entry_date))
    }
}

/// Parse an entry date in any of the accepted formats.
#[must_use]
pub fn parse_entry_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    ["%Y-%m-%d", "%Y/%m/%d"]
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn item_json(extra: &str) -> String {
        format!(
            r#"{{"id": 1, "type": "Girls", "name": "Crop Top", "image": "https://img/1",
                "price": 20, "stock": 3{extra}}}"#
        )
    }

    #[test]
    fn test_deserialize_wire_item() {
        let item: Item = serde_json::from_str(&item_json(
            r#", "discountedPrice": 15.5, "dateEntered": "2021/08/10""#,
        ))
        .unwrap();
        assert_eq!(item.id, ItemId::new(1));
        assert_eq!(item.category, Category::Girls);
        assert_eq!(item.price, Decimal::new(20, 0));
        assert_eq!(item.discounted_price, Some(Decimal::new(155, 1)));
        assert_eq!(
            item.date_entered,
            Some(Utc.with_ymd_and_hms(2021, 8, 10, 0, 0, 0).unwrap())
        );
        assert_eq!(item.stock, 3);
    }

    #[test]
    fn test_zero_or_null_discount_means_not_discounted() {
        let zero: Item =
            serde_json::from_str(&item_json(r#", "discountedPrice": 0"#)).unwrap();
        let null: Item =
            serde_json::from_str(&item_json(r#", "discountedPrice": null"#)).unwrap();
        let missing: Item = serde_json::from_str(&item_json("")).unwrap();
        assert!(!zero.is_discounted());
        assert!(!null.is_discounted());
        assert!(!missing.is_discounted());
        assert_eq!(missing.effective_price(), Decimal::new(20, 0));
    }

    #[test]
    fn test_odd_stock_values_do_not_fail_the_catalog() {
        let catalog: Vec<Item> = serde_json::from_str(
            r#"[
                {"id": 1, "type": "Girls", "name": "A", "image": "x", "price": 5, "stock": -2},
                {"id": 2, "type": "Girls", "name": "B", "image": "x", "price": 5, "stock": 4.7},
                {"id": 3, "type": "Guys", "name": "C", "image": "x", "price": 5, "stock": "7"},
                {"id": 4, "type": "Guys", "name": "D", "image": "x", "price": 5, "stock": "lots"},
                {"id": 5, "type": "Guys", "name": "E", "image": "x", "price": 5, "stock": null}
            ]"#,
        )
        .unwrap();
        let stock: Vec<i64> = catalog.iter().map(|item| item.stock).collect();
        assert_eq!(stock, vec![-2, 4, 7, 0, 0]);
    }

    #[test]
    fn test_unknown_category_is_kept() {
        let item: Item = serde_json::from_str(
            r#"{"id": 2, "type": "Kids", "name": "Cap", "image": "x", "price": 5}"#,
        )
        .unwrap();
        assert_eq!(item.category, Category::Other("Kids".to_string()));
        assert_eq!(item.category.to_string(), "Kids");
    }

    #[test]
    fn test_parse_entry_date_formats() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        assert_eq!(parse_entry_date("2024-03-01"), Some(expected));
        assert_eq!(parse_entry_date("2024/03/01"), Some(expected));
        assert_eq!(parse_entry_date("2024-03-01T00:00:00Z"), Some(expected));
        assert_eq!(parse_entry_date("last tuesday"), None);
    }

    #[test]
    fn test_is_new_uses_whole_days() {
        let now = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
        let mut item: Item = serde_json::from_str(&item_json("")).unwrap();

        // 9 days 12 hours ago
        item.date_entered = Some(Utc.with_ymd_and_hms(2024, 3, 11, 0, 0, 0).unwrap());
        assert_eq!(item.days_since_entered(now), Some(9));
        assert!(item.is_new(now));

        // exactly 10 days ago
        item.date_entered = Some(Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap());
        assert!(!item.is_new(now));

        item.date_entered = None;
        assert!(!item.is_new(now));
    }
}
