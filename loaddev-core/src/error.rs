//! Decode failures for the quantity and monetary wire formats
//!
//! Every variant carries the offending raw JSON text: callers surface these
//! messages to API clients verbatim, and the raw payload is what makes a
//! rejected request diagnosable after the fact.

use thiserror::Error;

/// A malformed quantity or monetary amount on the wire.
///
/// Decode failures are never retried and never swallowed; the surrounding
/// CRUD layer translates them into client-visible bad-request responses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A required field is absent from the JSON object.
    #[error("missing required field '{field}' in {raw}")]
    MissingField { field: &'static str, raw: String },

    /// The unit token is not in the registry, or names the wrong kind of
    /// unit for the field being decoded.
    #[error("invalid unit '{token}' in {raw}")]
    InvalidUnit { token: String, raw: String },

    /// The scale literal is not one of the two recognized values.
    #[error("invalid scale '{text}' in {raw}: expected ABSOLUTE or RELATIVE")]
    InvalidScale { text: String, raw: String },

    /// The numeric field is null or not a well-formed decimal.
    #[error("invalid numeric value for '{field}' field in {raw}")]
    InvalidValue { field: &'static str, raw: String },

    /// The currency code is not a 3-letter ISO-4217 style code.
    #[error("invalid currency code '{code}' in {raw}")]
    InvalidCurrency { code: String, raw: String },

    /// The stored column text is not JSON at all. Only reachable through the
    /// storage-boundary entry points that decode from raw text.
    #[error("malformed JSON: {raw}")]
    Malformed { raw: String },
}

impl DecodeError {
    pub fn missing_field(field: &'static str, raw: &str) -> Self {
        DecodeError::MissingField { field, raw: raw.to_string() }
    }

    pub fn invalid_value(field: &'static str, raw: &str) -> Self {
        DecodeError::InvalidValue { field, raw: raw.to_string() }
    }
}
