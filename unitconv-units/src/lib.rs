//! unitconv Units - Unit Catalog and Converter
//!
//! Converts plain `f64` values between units of a single category.
//!
//! Categories:
//! - Length (mm, cm, m, km, in, ft, yd, mi), base unit meter
//! - Weight, alias mass (mg, g, kg, oz, lb), base unit kilogram
//! - Temperature (c, f, k), converted through Celsius
//!
//! Unit symbols are matched after trimming and lowercasing, so `" KM "`
//! and `"km"` name the same unit.

mod category;
mod convert;
mod error;
mod parse;
mod temperature;
mod unit;
mod units;

pub use category::Category;
pub use convert::{convert, convert_request, ConversionRequest};
pub use error::{codes, ConversionError, Side};
pub use parse::normalize_symbol;
pub use temperature::TemperatureScale;
pub use unit::{Unit, UnitKind};
pub use units::{list_units, UnitCatalog, CATALOG};
