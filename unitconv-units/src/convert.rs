//! The converter: linear rescaling through a category's base unit

use tracing::debug;
use unitconv_core::{ConvertError, Result};
use crate::parse::{parse_conversion, parse_quantity};
use crate::{Catalog, Category, Conversion, Quantity, Unit, CATALOG};

/// Stateless converter over a borrowed catalog
#[derive(Debug, Clone, Copy)]
pub struct Converter<'a> {
    catalog: &'a Catalog,
}

impl<'a> Converter<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Converter { catalog }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Convert `value` from one unit to another inside `category`.
    ///
    /// Result is `value * (to_factor / from_factor)` with no rounding.
    pub fn convert(&self, category: &str, from_unit: &str, to_unit: &str, value: f64) -> Result<f64> {
        let (_, from, to) = self.resolve(category, from_unit, to_unit)?;
        Ok(rescale(from, to, value))
    }

    /// Like [`Converter::convert`] but keeps both sides for display
    pub fn convert_detailed(
        &self,
        category: &str,
        from_unit: &str,
        to_unit: &str,
        value: f64,
    ) -> Result<Conversion> {
        let (category, from, to) = self.resolve(category, from_unit, to_unit)?;
        Ok(conversion(category, from, to, value))
    }

    /// Evaluate an expression like `"1000 m -> km"` or `"2 kg to g"`.
    ///
    /// Units are looked up across the whole catalog and must end up in the
    /// same category.
    pub fn convert_expression(&self, text: &str) -> Result<Conversion> {
        let (quantity, target) = parse_conversion(text)?;
        let (value, source) = parse_quantity(&quantity)?;

        let (from_category, from) = self.catalog.find_unit(&source)?;
        let to = match from_category.unit(&target) {
            Some(unit) => unit,
            None => {
                let (to_category, _) = self.catalog.find_unit(&target)?;
                debug!(from = %from_category.name, to = %to_category.name, "category mismatch");
                return Err(ConvertError::IncompatibleUnits { from: source, to: target });
            }
        };

        Ok(conversion(from_category, from, to, value))
    }

    fn resolve(
        &self,
        category: &str,
        from_unit: &str,
        to_unit: &str,
    ) -> Result<(&'a Category, &'a Unit, &'a Unit)> {
        let category = self.catalog.category(category)?;

        match (category.unit(from_unit), category.unit(to_unit)) {
            (Some(from), Some(to)) => Ok((category, from, to)),
            (from, to) => {
                let mut names: Vec<String> = [(from, from_unit), (to, to_unit)]
                    .into_iter()
                    .filter(|(found, _)| found.is_none())
                    .map(|(_, name)| name.trim().to_string())
                    .collect();
                names.dedup();
                Err(ConvertError::unknown_unit(&category.name, names))
            }
        }
    }
}

impl Default for Converter<'static> {
    fn default() -> Self {
        Converter::new(&CATALOG)
    }
}

/// Convert with the built-in catalog
pub fn convert(category: &str, from_unit: &str, to_unit: &str, value: f64) -> Result<f64> {
    Converter::default().convert(category, from_unit, to_unit, value)
}

fn rescale(from: &Unit, to: &Unit, value: f64) -> f64 {
    let result = from.convert_to(value, to);
    debug!(from = %from.name, to = %to.name, value, result, "converted");
    result
}

fn conversion(category: &Category, from: &Unit, to: &Unit, value: f64) -> Conversion {
    Conversion {
        category: category.name.clone(),
        from: Quantity::new(value, from.clone()),
        to: Quantity::new(rescale(from, to, value), to.clone()),
    }
}
