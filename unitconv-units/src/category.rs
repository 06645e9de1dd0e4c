//! Conversion categories
//!
//! A category groups the units that can be converted into one another.
//! Length and weight are linear (a scale factor to a base unit); temperature
//! is affine and goes through Celsius.

use std::fmt;

/// One of the closed set of conversion domains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Base unit: meter
    Length,
    /// Base unit: kilogram
    Weight,
    /// Celsius, Fahrenheit, Kelvin
    Temperature,
}

impl Category {
    /// All categories, in listing order
    pub const ALL: [Category; 3] = [Category::Length, Category::Weight, Category::Temperature];

    /// Look up a category by its canonical name only.
    ///
    /// This is what unit listing accepts: `"mass"` is not a canonical name.
    pub fn from_name(name: &str) -> Option<Category> {
        match name {
            "length" => Some(Category::Length),
            "weight" => Some(Category::Weight),
            "temperature" => Some(Category::Temperature),
            _ => None,
        }
    }

    /// Look up a category by canonical name or alias (`"mass"` for weight).
    pub fn resolve(name: &str) -> Option<Category> {
        match name {
            "mass" => Some(Category::Weight),
            other => Category::from_name(other),
        }
    }

    /// Canonical name
    pub fn name(&self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Weight => "weight",
            Category::Temperature => "temperature",
        }
    }

    /// Whether conversion is a pure ratio of scale factors
    pub fn is_linear(&self) -> bool {
        !matches!(self, Category::Temperature)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
