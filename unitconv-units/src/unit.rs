//! Unit representation with conversion rules

use std::fmt;
use crate::{Category, TemperatureScale};

/// How a unit relates to the rest of its category
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnitKind {
    /// Base units per 1 of this unit (value_base = value * to_base)
    Linear { to_base: f64 },
    /// Affine scale, converted through Celsius
    Temperature(TemperatureScale),
}

/// A unit within a category
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    /// The unit symbol (e.g., "m", "kg", "f")
    pub symbol: String,
    /// The unit name (e.g., "meter", "kilogram", "fahrenheit")
    pub name: String,
    /// Category the unit belongs to
    pub category: Category,
    /// Conversion rule
    pub kind: UnitKind,
    /// Whether unit listing reports this symbol
    pub listed: bool,
}

impl Unit {
    /// Create a unit with proportional conversion
    pub fn linear(symbol: &str, name: &str, category: Category, to_base: f64) -> Self {
        Unit {
            symbol: symbol.to_string(),
            name: name.to_string(),
            category,
            kind: UnitKind::Linear { to_base },
            listed: true,
        }
    }

    /// Create a temperature unit
    pub fn temperature(symbol: &str, name: &str, scale: TemperatureScale) -> Self {
        Unit {
            symbol: symbol.to_string(),
            name: name.to_string(),
            category: Category::Temperature,
            kind: UnitKind::Temperature(scale),
            listed: true,
        }
    }

    /// Builder: accepted for conversion but left out of listings
    pub fn unlisted(mut self) -> Self {
        self.listed = false;
        self
    }

    /// Scale factor to the category base unit, for linear units
    pub fn scale_factor(&self) -> Option<f64> {
        match self.kind {
            UnitKind::Linear { to_base } => Some(to_base),
            UnitKind::Temperature(_) => None,
        }
    }

    /// Temperature scale, for temperature units
    pub fn temperature_scale(&self) -> Option<TemperatureScale> {
        match self.kind {
            UnitKind::Temperature(scale) => Some(scale),
            UnitKind::Linear { .. } => None,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}
