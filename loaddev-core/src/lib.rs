//! Loaddev Core - Fundamental types
//!
//! This crate provides the pieces shared by both wire codecs:
//! - `decimal`: lossless bridging between `rust_decimal::Decimal` and JSON numbers
//! - `DecodeError`: the typed failure taxonomy for malformed wire input

pub mod decimal;
mod error;

pub use error::DecodeError;
