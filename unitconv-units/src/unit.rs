//! Unit representation with its conversion factor

use std::fmt;
use serde::{Serialize, Deserialize};

/// A unit of measure inside one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// Display name, unique within the category (e.g., "Kilometer")
    pub name: String,
    /// Display abbreviation (e.g., "km"); never used in arithmetic
    pub symbol: String,
    /// How many of this unit make one of the category's base unit
    pub conversion_factor: f64,
    /// Extra lookup keys, e.g. ASCII spellings of the symbol
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

impl Unit {
    pub fn new(name: &str, conversion_factor: f64, symbol: &str) -> Self {
        Unit {
            name: name.to_string(),
            symbol: symbol.to_string(),
            conversion_factor,
            aliases: Vec::new(),
        }
    }

    /// Builder: add a lookup alias
    pub fn with_alias(mut self, alias: &str) -> Self {
        self.aliases.push(alias.to_string());
        self
    }

    /// The base unit of a category carries a factor of exactly 1
    pub fn is_base(&self) -> bool {
        self.conversion_factor == 1.0
    }

    /// Rescale `value` of this unit into `target`.
    ///
    /// Both units must come from the same category; the catalog guarantees the
    /// factors are positive so the ratio is always defined.
    pub fn convert_to(&self, value: f64, target: &Unit) -> f64 {
        value * (target.conversion_factor / self.conversion_factor)
    }

    /// Lower-cased keys this unit answers to, besides its name
    pub(crate) fn lookup_keys(&self) -> impl Iterator<Item = String> + '_ {
        std::iter::once(&self.symbol)
            .chain(self.aliases.iter())
            .map(|k| normalize(k))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// Lookup key for names, symbols and aliases
pub(crate) fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meter() -> Unit {
        Unit::new("Meter", 1.0, "m")
    }

    fn kilometer() -> Unit {
        Unit::new("Kilometer", 0.001, "km")
    }

    #[test]
    fn test_base_unit() {
        assert!(meter().is_base());
        assert!(!kilometer().is_base());
    }

    #[test]
    fn test_unit_conversion() {
        let m = meter();
        let km = kilometer();
        assert!((m.convert_to(5000.0, &km) - 5.0).abs() < 1e-12);
        assert!((km.convert_to(5.0, &m) - 5000.0).abs() < 1e-9);
    }

    #[test]
    fn test_same_unit_is_exact() {
        let km = kilometer();
        assert_eq!(km.convert_to(0.1, &km), 0.1);
    }

    #[test]
    fn test_lookup_keys() {
        let cubic = Unit::new("Cubic meter", 1.0, "m³").with_alias("M3");
        let keys: Vec<String> = cubic.lookup_keys().collect();
        assert_eq!(keys, vec!["m³".to_string(), "m3".to_string()]);
    }

    #[test]
    fn test_display_is_symbol() {
        assert_eq!(format!("{}", kilometer()), "km");
    }
}
