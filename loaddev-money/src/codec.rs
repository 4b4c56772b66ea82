//! Monetary amount wire codec
//!
//! Wire shape: `{"amount": 45.99, "currency": "USD"}`, identical on the
//! transport and JSON-column storage boundaries. Amounts decode to the
//! exact decimal that was encoded - no silent rounding.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::debug;

use loaddev_core::decimal::{decimal_to_number, parse_decimal};
use loaddev_core::DecodeError;

use crate::money::is_valid_currency;
use crate::MonetaryAmount;

/// Encode a monetary amount as the two-key wire object.
pub fn encode_money(money: &MonetaryAmount) -> Value {
    let mut object = Map::with_capacity(2);
    object.insert("amount".to_string(), Value::Number(decimal_to_number(&money.amount)));
    object.insert("currency".to_string(), Value::String(money.currency.clone()));
    Value::Object(object)
}

/// Encode to the compact JSON text stored in a relational column.
pub fn encode_money_json(money: &MonetaryAmount) -> String {
    encode_money(money).to_string()
}

/// Decode a monetary amount from a JSON value.
pub fn decode_money(json: &Value) -> Result<MonetaryAmount, DecodeError> {
    decode_fields(json, &json.to_string())
}

/// Decode a monetary amount from raw JSON column text.
pub fn decode_money_json(raw: &str) -> Result<MonetaryAmount, DecodeError> {
    let json: Value = serde_json::from_str(raw).map_err(|e| {
        debug!(error = %e, "monetary column is not valid JSON");
        DecodeError::Malformed { raw: raw.to_string() }
    })?;
    decode_fields(&json, raw)
}

fn decode_fields(json: &Value, raw: &str) -> Result<MonetaryAmount, DecodeError> {
    let amount_node = json
        .get("amount")
        .ok_or_else(|| DecodeError::missing_field("amount", raw))?;
    let currency_node = json
        .get("currency")
        .ok_or_else(|| DecodeError::missing_field("currency", raw))?;

    let amount = match amount_node {
        Value::Number(n) => parse_decimal(&n.to_string())
            .map_err(|_| DecodeError::invalid_value("amount", raw))?,
        _ => return Err(DecodeError::invalid_value("amount", raw)),
    };

    let code = currency_node.as_str().ok_or_else(|| DecodeError::InvalidCurrency {
        code: currency_node.to_string(),
        raw: raw.to_string(),
    })?;
    if !is_valid_currency(code) {
        return Err(DecodeError::InvalidCurrency {
            code: code.to_string(),
            raw: raw.to_string(),
        });
    }

    Ok(MonetaryAmount::new(amount, code))
}

impl Serialize for MonetaryAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        encode_money(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MonetaryAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = Value::deserialize(deserializer)?;
        decode_fields(&json, &json.to_string()).map_err(D::Error::custom)
    }
}
