//! Unit conversion
//!
//! Length and weight convert through the ratio of scale factors; temperature
//! goes through Celsius.

use serde::Deserialize;
use tracing::debug;
use crate::{Category, ConversionError, Side, Unit};
use crate::parse::normalize_symbol;
use crate::units::CATALOG;

/// A value to convert between two units of one category.
///
/// Missing fields decode to their zero values so that validation, not the
/// decoder, reports an empty unit.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct ConversionRequest {
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
}

impl ConversionRequest {
    pub fn new(value: f64, from: impl Into<String>, to: impl Into<String>) -> Self {
        ConversionRequest { value, from: from.into(), to: to.into() }
    }
}

/// Validate a request and convert it within the named category.
///
/// Checks run in a fixed order so that error messages are deterministic:
/// empty units, then value finiteness, then the category name, then unit
/// existence (from before to).
pub fn convert_request(category_name: &str, request: &ConversionRequest) -> Result<f64, ConversionError> {
    let from = normalize_symbol(&request.from);
    let to = normalize_symbol(&request.to);

    if from.is_empty() || to.is_empty() {
        return Err(ConversionError::missing_unit());
    }
    if !request.value.is_finite() {
        return Err(ConversionError::invalid_value());
    }

    let category = Category::resolve(category_name)
        .ok_or_else(|| ConversionError::UnknownCategory(category_name.to_string()))?;

    convert(category, request.value, &from, &to)
}

/// Convert `value` from one unit to another within `category`.
///
/// Symbols are normalized before lookup.
pub fn convert(category: Category, value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
    let from = normalize_symbol(from);
    let to = normalize_symbol(to);

    let result = if category.is_linear() {
        convert_linear(category, value, &from, &to)?
    } else {
        convert_temperature(value, &from, &to)?
    };

    debug!(%category, value, %from, %to, result, "converted");
    Ok(result)
}

fn lookup(category: Category, symbol: &str, side: Side) -> Result<&'static Unit, ConversionError> {
    CATALOG.get(category, symbol)
        .ok_or_else(|| ConversionError::unknown_unit(side, symbol))
}

fn convert_linear(category: Category, value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
    let from_ratio = CATALOG.scale_factor(category, from, Side::From)?;
    let to_ratio = CATALOG.scale_factor(category, to, Side::To)?;

    // Linear tables have no aliases, so equal symbols are the same unit
    if from == to {
        return Ok(value);
    }

    // value_in_base = value * from_ratio
    Ok((value * from_ratio) / to_ratio)
}

fn convert_temperature(value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
    if from == to {
        return Ok(value);
    }

    let from_scale = lookup(Category::Temperature, from, Side::From)?
        .temperature_scale()
        .ok_or_else(|| ConversionError::unknown_unit(Side::From, from))?;
    let celsius = from_scale.to_celsius(value);

    let to_scale = lookup(Category::Temperature, to, Side::To)?
        .temperature_scale()
        .ok_or_else(|| ConversionError::unknown_unit(Side::To, to))?;
    Ok(to_scale.from_celsius(celsius))
}
