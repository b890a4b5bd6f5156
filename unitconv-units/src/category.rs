//! Categories: named groups of units sharing one base quantity

use std::collections::HashMap;
use serde::{Serialize, Deserialize};
use unitconv_core::{ConvertError, Result};
use crate::unit::{normalize, Unit};

/// A family of units measured against one base unit (e.g. Length in meters)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    /// Name of the unit whose factor is 1.0
    pub base_unit: String,
    /// Display order only; conversion does not depend on it
    pub units: Vec<Unit>,
    #[serde(skip)]
    by_name: HashMap<String, usize>,
    #[serde(skip)]
    by_key: HashMap<String, usize>,
}

impl Category {
    pub fn new(name: &str, base_unit: &str) -> Self {
        Category {
            name: name.to_string(),
            base_unit: base_unit.to_string(),
            units: Vec::new(),
            by_name: HashMap::new(),
            by_key: HashMap::new(),
        }
    }

    /// Builder: append a unit
    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.units.push(unit);
        self
    }

    /// Check the invariants and build the lookup tables.
    ///
    /// Called by [`crate::Catalog::new`]; a category that was not sealed
    /// resolves nothing.
    pub(crate) fn seal(mut self) -> Result<Self> {
        let invalid = |msg: String| ConvertError::InvalidCatalog(msg);

        if self.units.is_empty() {
            return Err(invalid(format!("category '{}' has no units", self.name)));
        }

        let mut by_name = HashMap::new();
        for (i, unit) in self.units.iter().enumerate() {
            if !(unit.conversion_factor.is_finite() && unit.conversion_factor > 0.0) {
                return Err(invalid(format!(
                    "unit '{}' in '{}' has non-positive factor {}",
                    unit.name, self.name, unit.conversion_factor
                )));
            }
            if by_name.insert(normalize(&unit.name), i).is_some() {
                return Err(invalid(format!(
                    "duplicate unit '{}' in '{}'", unit.name, self.name
                )));
            }
        }

        match by_name.get(&normalize(&self.base_unit)) {
            Some(&i) if self.units[i].is_base() => {}
            Some(_) => {
                return Err(invalid(format!(
                    "base unit '{}' of '{}' must have factor 1.0", self.base_unit, self.name
                )));
            }
            None => {
                return Err(invalid(format!(
                    "base unit '{}' missing from '{}'", self.base_unit, self.name
                )));
            }
        }

        let mut by_key: HashMap<String, usize> = HashMap::new();
        for (i, unit) in self.units.iter().enumerate() {
            for key in unit.lookup_keys() {
                let clash = by_name.get(&key).into_iter().chain(by_key.get(&key)).any(|&j| j != i);
                if clash {
                    return Err(invalid(format!(
                        "key '{}' of unit '{}' in '{}' is already taken", key, unit.name, self.name
                    )));
                }
                by_key.insert(key, i);
            }
        }

        self.by_name = by_name;
        self.by_key = by_key;
        Ok(self)
    }

    /// Resolve a unit by name, then by symbol or alias. Case-insensitive.
    pub fn unit(&self, name: &str) -> Option<&Unit> {
        let key = normalize(name);
        self.by_name.get(&key)
            .or_else(|| self.by_key.get(&key))
            .map(|&i| &self.units[i])
    }

    /// Resolve a unit or fail with `UnknownUnit`
    pub fn require_unit(&self, name: &str) -> Result<&Unit> {
        self.unit(name)
            .ok_or_else(|| ConvertError::unknown_unit(&self.name, vec![name.to_string()]))
    }

    /// Unit names in display order
    pub fn unit_names(&self) -> Vec<&str> {
        self.units.iter().map(|u| u.name.as_str()).collect()
    }

    /// The unit with factor 1.0
    pub fn base(&self) -> Option<&Unit> {
        self.unit(&self.base_unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn length() -> Category {
        Category::new("Length", "Meter")
            .with_unit(Unit::new("Meter", 1.0, "m"))
            .with_unit(Unit::new("Kilometer", 0.001, "km"))
    }

    #[test]
    fn test_seal_valid() {
        let cat = length().seal().unwrap();
        assert_eq!(cat.unit_names(), vec!["Meter", "Kilometer"]);
        assert_eq!(cat.base().unwrap().name, "Meter");
    }

    #[test]
    fn test_lookup_case_insensitive() {
        let cat = length().seal().unwrap();
        assert_eq!(cat.unit("METER").unwrap().name, "Meter");
        assert_eq!(cat.unit("  kilometer ").unwrap().name, "Kilometer");
        assert_eq!(cat.unit("KM").unwrap().name, "Kilometer");
        assert!(cat.unit("mile").is_none());
    }

    #[test]
    fn test_require_unit_error() {
        let cat = length().seal().unwrap();
        let err = cat.require_unit("mile").unwrap_err();
        assert_eq!(
            err,
            ConvertError::unknown_unit("Length", vec!["mile".to_string()])
        );
    }

    #[test]
    fn test_unsealed_resolves_nothing() {
        assert!(length().unit("Meter").is_none());
    }

    #[test]
    fn test_reject_duplicate_name() {
        let cat = length().with_unit(Unit::new("meter", 1.0, "mm"));
        assert!(matches!(cat.seal(), Err(ConvertError::InvalidCatalog(_))));
    }

    #[test]
    fn test_reject_non_positive_factor() {
        let zero = length().with_unit(Unit::new("Nothing", 0.0, "n"));
        assert!(matches!(zero.seal(), Err(ConvertError::InvalidCatalog(_))));

        let negative = length().with_unit(Unit::new("Backwards", -1.0, "b"));
        assert!(matches!(negative.seal(), Err(ConvertError::InvalidCatalog(_))));

        let nan = length().with_unit(Unit::new("Nan", f64::NAN, "nan"));
        assert!(matches!(nan.seal(), Err(ConvertError::InvalidCatalog(_))));
    }

    #[test]
    fn test_reject_missing_base() {
        let cat = Category::new("Length", "Meter")
            .with_unit(Unit::new("Kilometer", 0.001, "km"));
        assert!(matches!(cat.seal(), Err(ConvertError::InvalidCatalog(_))));
    }

    #[test]
    fn test_reject_base_with_wrong_factor() {
        let cat = Category::new("Length", "Kilometer")
            .with_unit(Unit::new("Meter", 1.0, "m"))
            .with_unit(Unit::new("Kilometer", 0.001, "km"));
        assert!(matches!(cat.seal(), Err(ConvertError::InvalidCatalog(_))));
    }

    #[test]
    fn test_reject_symbol_clash() {
        let cat = length().with_unit(Unit::new("Mile", 0.000621, "km"));
        assert!(matches!(cat.seal(), Err(ConvertError::InvalidCatalog(_))));

        // A symbol may not shadow another unit's name either
        let cat = length().with_unit(Unit::new("Mile", 0.000621, "meter"));
        assert!(matches!(cat.seal(), Err(ConvertError::InvalidCatalog(_))));
    }

    #[test]
    fn test_reject_empty() {
        let cat = Category::new("Empty", "Nothing");
        assert!(matches!(cat.seal(), Err(ConvertError::InvalidCatalog(_))));
    }
}
