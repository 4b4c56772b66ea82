//! Quantity wire codec
//!
//! One encode/decode pair serves both the transport boundary (HTTP body) and
//! the storage boundary (relational JSON column); the object shape is
//! identical: `{"value": 26.0, "unit": "[in_i]", "scale": "ABSOLUTE"}`.
//!
//! Fields are checked in order value, unit, scale and the first failure
//! wins. Every error message carries the raw JSON text for diagnostics.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::debug;

use loaddev_core::decimal::{decimal_to_number, parse_decimal};
use loaddev_core::DecodeError;

use crate::units::parse_unit;
use crate::{Dimension, Quantity, Scale};

/// Encode a quantity as the three-key wire object.
///
/// The value is rendered as a JSON number with its decimal digits intact.
pub fn encode_quantity(quantity: &Quantity) -> Value {
    let mut object = Map::with_capacity(3);
    object.insert("value".to_string(), Value::Number(decimal_to_number(&quantity.value)));
    object.insert("unit".to_string(), Value::String(quantity.unit.token().to_string()));
    object.insert("scale".to_string(), Value::String(quantity.scale.as_str().to_string()));
    Value::Object(object)
}

/// Encode a quantity to the compact JSON text stored in a relational column.
pub fn encode_quantity_json(quantity: &Quantity) -> String {
    encode_quantity(quantity).to_string()
}

/// Decode a quantity from a JSON value, requiring the given dimension.
///
/// A token that parses but belongs to another dimension is rejected as
/// `InvalidUnit`: from the caller's perspective it is not a valid unit for
/// the field being decoded.
pub fn decode_quantity(json: &Value, expected: Dimension) -> Result<Quantity, DecodeError> {
    decode_fields(json, Some(expected), &json.to_string())
}

/// Decode a quantity from raw JSON column text.
pub fn decode_quantity_json(raw: &str, expected: Dimension) -> Result<Quantity, DecodeError> {
    let json: Value = serde_json::from_str(raw).map_err(|e| {
        debug!(error = %e, "quantity column is not valid JSON");
        DecodeError::Malformed { raw: raw.to_string() }
    })?;
    decode_fields(&json, Some(expected), raw)
}

fn decode_fields(
    json: &Value,
    expected: Option<Dimension>,
    raw: &str,
) -> Result<Quantity, DecodeError> {
    let value_node = require_field(json, "value", raw)?;
    let unit_node = require_field(json, "unit", raw)?;
    let scale_node = require_field(json, "scale", raw)?;

    let value = match value_node {
        Value::Number(n) => parse_decimal(&n.to_string())
            .map_err(|_| DecodeError::invalid_value("value", raw))?,
        _ => return Err(DecodeError::invalid_value("value", raw)),
    };

    let token = unit_node.as_str().ok_or_else(|| DecodeError::InvalidUnit {
        token: unit_node.to_string(),
        raw: raw.to_string(),
    })?;
    let unit = parse_unit(token).map_err(|_| DecodeError::InvalidUnit {
        token: token.to_string(),
        raw: raw.to_string(),
    })?;
    if let Some(dimension) = expected {
        if unit.dimension() != dimension {
            debug!(%token, %dimension, "unit token has wrong dimension for field");
            return Err(DecodeError::InvalidUnit {
                token: token.to_string(),
                raw: raw.to_string(),
            });
        }
    }

    let scale_text = scale_node.as_str().ok_or_else(|| DecodeError::InvalidScale {
        text: scale_node.to_string(),
        raw: raw.to_string(),
    })?;
    let scale = Scale::parse(scale_text).ok_or_else(|| DecodeError::InvalidScale {
        text: scale_text.to_string(),
        raw: raw.to_string(),
    })?;

    Ok(Quantity { value, unit, scale })
}

fn require_field<'a>(json: &'a Value, field: &'static str, raw: &str) -> Result<&'a Value, DecodeError> {
    json.get(field).ok_or_else(|| DecodeError::missing_field(field, raw))
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        encode_quantity(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Quantity {
    // Dimension-unchecked: embedded record fields are dimension-validated
    // by the record constructors, not at the serde layer.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = Value::deserialize(deserializer)?;
        decode_fields(&json, None, &json.to_string()).map_err(D::Error::custom)
    }
}
