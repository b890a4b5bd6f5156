//! The unit catalog: read-only lookup surface over the category table

use std::collections::HashMap;
use std::sync::LazyLock;
use unitconv_core::{ConvertError, Result};
use crate::unit::normalize;
use crate::units::standard_categories;
use crate::{Category, Unit};

/// The built-in catalog, built on first use and never mutated afterwards
pub static CATALOG: LazyLock<Catalog> = LazyLock::new(Catalog::standard);

/// Validated, immutable collection of categories
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Validate `categories` and build the lookup tables
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        if categories.is_empty() {
            return Err(ConvertError::InvalidCatalog("catalog has no categories".to_string()));
        }

        let mut sealed = Vec::with_capacity(categories.len());
        let mut index = HashMap::new();
        for (i, category) in categories.into_iter().enumerate() {
            let category = category.seal()?;
            if index.insert(normalize(&category.name), i).is_some() {
                return Err(ConvertError::InvalidCatalog(format!(
                    "duplicate category '{}'", category.name
                )));
            }
            sealed.push(category);
        }

        Ok(Catalog { categories: sealed, index })
    }

    /// The seven built-in categories
    pub fn standard() -> Self {
        Catalog::new(standard_categories()).expect("built-in unit table is valid")
    }

    /// Category names in table order
    pub fn list_categories(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    /// Unit names of one category in table order
    pub fn list_units(&self, category: &str) -> Result<Vec<&str>> {
        Ok(self.category(category)?.unit_names())
    }

    /// Stored conversion factor of a unit
    pub fn get_factor(&self, category: &str, unit: &str) -> Result<f64> {
        Ok(self.category(category)?.require_unit(unit)?.conversion_factor)
    }

    /// Display symbol of a unit
    pub fn get_symbol(&self, category: &str, unit: &str) -> Result<&str> {
        Ok(self.category(category)?.require_unit(unit)?.symbol.as_str())
    }

    /// Look up a category by name, case-insensitively
    pub fn category(&self, name: &str) -> Result<&Category> {
        self.index.get(&normalize(name))
            .map(|&i| &self.categories[i])
            .ok_or_else(|| ConvertError::unknown_category(name.trim()))
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Find a unit by name or symbol without knowing its category.
    ///
    /// Fails with `AmbiguousUnit` if the token resolves in more than one
    /// category.
    pub fn find_unit(&self, token: &str) -> Result<(&Category, &Unit)> {
        let matches: Vec<(&Category, &Unit)> = self.categories.iter()
            .filter_map(|c| c.unit(token).map(|u| (c, u)))
            .collect();

        match matches.as_slice() {
            [] => Err(ConvertError::unit_not_found(token.trim())),
            [found] => Ok(*found),
            _ => Err(ConvertError::AmbiguousUnit {
                name: token.trim().to_string(),
                categories: matches.iter().map(|(c, _)| c.name.clone()).collect(),
            }),
        }
    }
}
