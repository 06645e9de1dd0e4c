//! Unit definitions - the static catalog of every category's units

use std::collections::HashMap;
use std::sync::LazyLock;
use crate::{Category, ConversionError, Side, TemperatureScale, Unit};

/// Global unit catalog
pub static CATALOG: LazyLock<UnitCatalog> = LazyLock::new(UnitCatalog::new);

/// List the symbols reported for a category, in listing order.
///
/// Only canonical category names are accepted here; the `mass` alias that
/// conversion understands is an unknown category for listing.
pub fn list_units(category_name: &str) -> Result<&'static [&'static str], ConversionError> {
    let category = Category::from_name(category_name)
        .ok_or_else(|| ConversionError::UnknownCategory(category_name.to_string()))?;
    Ok(CATALOG.listed_symbols(category))
}

/// Catalog of all known units, keyed by category then symbol
pub struct UnitCatalog {
    units: HashMap<Category, Vec<Unit>>,
    aliases: HashMap<(Category, String), String>,
    listings: HashMap<Category, &'static [&'static str]>,
}

impl UnitCatalog {
    pub fn new() -> Self {
        let mut catalog = UnitCatalog {
            units: HashMap::new(),
            aliases: HashMap::new(),
            listings: HashMap::new(),
        };
        catalog.register_all_units();
        catalog
    }

    /// Get a unit by normalized symbol or alias
    pub fn get(&self, category: Category, symbol: &str) -> Option<&Unit> {
        let units = self.units.get(&category)?;
        // Try direct lookup first
        if let Some(unit) = units.iter().find(|u| u.symbol == symbol) {
            return Some(unit);
        }
        let canonical = self.aliases.get(&(category, symbol.to_string()))?;
        units.iter().find(|u| &u.symbol == canonical)
    }

    /// Scale factor of a linear unit relative to its category base unit.
    ///
    /// Fails with `UnknownUnit` on `side` when the symbol is not in the
    /// category table or the category is not linear.
    pub fn scale_factor(&self, category: Category, symbol: &str, side: Side) -> Result<f64, ConversionError> {
        self.get(category, symbol)
            .and_then(Unit::scale_factor)
            .ok_or_else(|| ConversionError::unknown_unit(side, symbol))
    }

    /// All units accepted for conversion in a category, in registration order
    #[cfg(test)]
    pub(crate) fn by_category(&self, category: Category) -> &[Unit] {
        self.units.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Symbols reported by unit listing
    pub fn listed_symbols(&self, category: Category) -> &'static [&'static str] {
        self.listings.get(&category).copied().unwrap_or(&[])
    }

    fn register(&mut self, unit: Unit) {
        self.units.entry(unit.category).or_default().push(unit);
    }

    fn alias(&mut self, category: Category, alias: &str, symbol: &str) {
        self.aliases.insert((category, alias.to_string()), symbol.to_string());
    }

    fn register_all_units(&mut self) {
        self.register_length_units();
        self.register_weight_units();
        self.register_temperature_units();
    }

    fn register_length_units(&mut self) {
        let length = Category::Length;
        self.register(Unit::linear("mm", "millimeter", length, 0.001));
        self.register(Unit::linear("cm", "centimeter", length, 0.01));
        self.register(Unit::linear("m", "meter", length, 1.0));
        self.register(Unit::linear("km", "kilometer", length, 1000.0));
        self.register(Unit::linear("in", "inch", length, 0.0254));
        self.register(Unit::linear("ft", "foot", length, 0.3048));
        self.register(Unit::linear("yd", "yard", length, 0.9144).unlisted());
        self.register(Unit::linear("mi", "mile", length, 1609.344).unlisted());

        self.listings.insert(length, &["mm", "cm", "m", "km", "in", "ft"]);
    }

    fn register_weight_units(&mut self) {
        let weight = Category::Weight;
        self.register(Unit::linear("mg", "milligram", weight, 0.000001).unlisted());
        self.register(Unit::linear("g", "gram", weight, 0.001));
        self.register(Unit::linear("kg", "kilogram", weight, 1.0));
        self.register(Unit::linear("oz", "ounce", weight, 0.028349523125));
        self.register(Unit::linear("lb", "pound", weight, 0.45359237));

        // Listing order differs from table order
        self.listings.insert(weight, &["g", "kg", "lb", "oz"]);
    }

    fn register_temperature_units(&mut self) {
        let temperature = Category::Temperature;
        self.register(Unit::temperature("c", "celsius", TemperatureScale::Celsius));
        self.register(Unit::temperature("f", "fahrenheit", TemperatureScale::Fahrenheit));
        self.register(Unit::temperature("k", "kelvin", TemperatureScale::Kelvin));

        self.alias(temperature, "°c", "c");
        self.alias(temperature, "celsius", "c");
        self.alias(temperature, "°f", "f");
        self.alias(temperature, "fahrenheit", "f");
        self.alias(temperature, "kelvin", "k");

        self.listings.insert(temperature, &["c", "f", "k"]);
    }
}

impl Default for UnitCatalog {
    fn default() -> Self {
        Self::new()
    }
}
