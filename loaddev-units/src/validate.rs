//! Pure quantity predicates
//!
//! These pair up for "required and positive" checks: `is_positive` treats an
//! absent quantity as valid so that presence stays `is_present`'s concern.

use rust_decimal::Decimal;

use crate::Quantity;

/// True iff the quantity is present.
pub fn is_present(quantity: Option<&Quantity>) -> bool {
    quantity.is_some()
}

/// True if absent or strictly positive.
///
/// Positivity is unit-independent: no registered unit has a negative
/// conversion factor, so no conversion happens here.
pub fn is_positive(quantity: Option<&Quantity>) -> bool {
    match quantity {
        None => true,
        Some(q) => q.value > Decimal::ZERO,
    }
}
