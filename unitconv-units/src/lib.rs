//! Unitconv Units - Unit catalog and linear conversion
//!
//! Every category is a list of units with a factor relative to one base unit;
//! converting is `value * (to_factor / from_factor)`.
//!
//! Categories:
//! - Length (Meter, Kilometer, Centimeter)
//! - Weight (Gram, Kilogram, Milligram, Pound)
//! - Time (Second, Minute, Hour, Millisecond)
//! - Temperature (Celsius, Fahrenheit), scale factor only
//! - Speed (m/s, km/h, mph)
//! - Energy (J, kJ, cal, kcal, Wh)
//! - Volume (m³, cm³, l, ml, fl oz)

mod unit;
mod category;
mod catalog;
mod units;
mod quantity;
mod convert;
mod parse;

pub use unit::Unit;
pub use category::Category;
pub use catalog::{Catalog, CATALOG};
pub use quantity::{Quantity, Conversion, DEFAULT_PRECISION};
pub use convert::{convert, Converter};
pub use parse::{parse_value, parse_quantity, parse_conversion};
pub use unitconv_core::{ConvertError, ErrorReport, Result};

/// Category names of the built-in catalog
pub fn list_categories() -> Vec<&'static str> {
    CATALOG.list_categories()
}

/// Unit names of one built-in category
pub fn list_units(category: &str) -> Result<Vec<&'static str>> {
    CATALOG.list_units(category)
}

/// Display symbol of a unit in the built-in catalog
pub fn get_symbol(category: &str, unit: &str) -> Result<&'static str> {
    CATALOG.get_symbol(category, unit)
}
