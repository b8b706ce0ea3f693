//! Line items, shipping lines and the attributes attached to them.
//!
//! Two fields come back from the API with inconsistent JSON types on older
//! records. They are decoded by inspecting the raw value first:
//!
//! - `LineItem.properties`: usually an array of `{name, value}` pairs, but
//!   sometimes a single object (wrapped into a one-element list) or an empty
//!   object `{}` (treated as absent).
//! - `ShippingLine.requested_fulfillment_service_id`: a string, a number or
//!   `null`; numbers are kept as their decimal text.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A `{name, value}` pair attached to an order or line item.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct NoteAttribute {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl NoteAttribute {
    fn is_empty(&self) -> bool {
        self.name.is_empty() && self.value.is_none()
    }
}

/// A tax applied to an order, line item or shipping line.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TaxLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Amount as decimal text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_liable: Option<bool>,
}

/// A product or variant being purchased.
///
/// # Example
///
/// ```rust
/// use shopify_rest::rest::resources::LineItem;
///
/// let item: LineItem = serde_json::from_str(
///     r#"{"id": 1, "quantity": 2, "properties": {"name": "engraving", "value": "Hi"}}"#,
/// ).unwrap();
///
/// let properties = item.properties.unwrap();
/// assert_eq!(properties.len(), 1);
/// assert_eq!(properties[0].name, "engraving");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LineItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    /// Price per item as decimal text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_discount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grams: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillable_quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_shipping: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gift_card: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_lines: Option<Vec<TaxLine>>,
    #[serde(
        default,
        deserialize_with = "deserialize_properties",
        skip_serializing_if = "Option::is_none"
    )]
    pub properties: Option<Vec<NoteAttribute>>,
}

/// A shipping method applied to an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ShippingLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_loose_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub requested_fulfillment_service_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discounted_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_lines: Option<Vec<TaxLine>>,
}

fn deserialize_properties<'de, D>(deserializer: D) -> Result<Option<Vec<NoteAttribute>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None => Ok(None),
        Some(items @ Value::Array(_)) => serde_json::from_value(items)
            .map(Some)
            .map_err(D::Error::custom),
        Some(single) => {
            let attribute: NoteAttribute =
                serde_json::from_value(single).map_err(D::Error::custom)?;
            if attribute.is_empty() {
                Ok(None)
            } else {
                Ok(Some(vec![attribute]))
            }
        }
    }
}

fn deserialize_loose_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected string, number or null, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn line_item(properties: Value) -> LineItem {
        serde_json::from_value(json!({"id": 1, "properties": properties})).unwrap()
    }

    #[test]
    fn test_properties_array() {
        let item = line_item(json!([
            {"name": "color", "value": "red"},
            {"name": "size", "value": 10}
        ]));
        let properties = item.properties.unwrap();
        assert_eq!(properties.len(), 2);
        assert_eq!(properties[1].value, Some(json!(10)));
    }

    #[test]
    fn test_properties_single_object_becomes_list() {
        let item = line_item(json!({"name": "gift", "value": true}));
        assert_eq!(
            item.properties,
            Some(vec![NoteAttribute {
                name: "gift".to_string(),
                value: Some(json!(true)),
            }])
        );
    }

    #[test]
    fn test_properties_empty_object_or_missing_is_none() {
        assert_eq!(line_item(json!({})).properties, None);
        assert_eq!(line_item(Value::Null).properties, None);

        let item: LineItem = serde_json::from_value(json!({"id": 2})).unwrap();
        assert_eq!(item.properties, None);
    }

    #[test]
    fn test_properties_invalid_shape_is_an_error() {
        let result = serde_json::from_value::<LineItem>(json!({"properties": "oops"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_requested_fulfillment_service_id_variants() {
        let decode = |value: Value| -> Option<String> {
            serde_json::from_value::<ShippingLine>(
                json!({"requested_fulfillment_service_id": value}),
            )
            .unwrap()
            .requested_fulfillment_service_id
        };

        assert_eq!(decode(json!("third-party")), Some("third-party".to_string()));
        assert_eq!(decode(json!(123_456)), Some("123456".to_string()));
        assert_eq!(decode(Value::Null), None);

        let missing: ShippingLine = serde_json::from_value(json!({"title": "Ground"})).unwrap();
        assert_eq!(missing.requested_fulfillment_service_id, None);
    }

    #[test]
    fn test_shims_serialize_plainly() {
        let line = ShippingLine {
            requested_fulfillment_service_id: Some("42".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&line).unwrap(),
            json!({"requested_fulfillment_service_id": "42"})
        );
    }
}
