//! Loaddev Units - Physical Quantity and Unit Conversion
//!
//! Unit-aware measurement values for hand-load records, with a fixed UCUM
//! token registry and a strict JSON wire codec.
//!
//! The supported dimensions are closed: Length, Mass, Speed, Dimensionless.
//! Compound speed tokens (`m/s`, `[ft_i]/s`) are pre-registered table rows,
//! not derived at runtime.

mod codec;
mod dimension;
mod quantity;
mod unit;
pub mod units;
mod validate;

pub use codec::{decode_quantity, decode_quantity_json, encode_quantity, encode_quantity_json};
pub use dimension::Dimension;
pub use quantity::{Quantity, Scale};
pub use unit::{convert, Unit, UnitError};
pub use units::{format_unit, parse_unit, UnitRegistry, UNITS};
pub use validate::{is_positive, is_present};
