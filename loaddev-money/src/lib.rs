//! Loaddev Money - Monetary amounts
//!
//! A monetary amount is an exact decimal plus a fixed ISO-4217 style
//! currency code. No arithmetic across currencies is defined and no
//! conversion ever happens; the code is stored and round-tripped as-is.

mod codec;
mod money;

pub use codec::{decode_money, decode_money_json, encode_money, encode_money_json};
pub use money::{is_non_negative, is_valid_currency, MonetaryAmount};
