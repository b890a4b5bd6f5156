//! Quantity type - a value with an associated unit

use std::fmt;
use serde::{Serialize, Deserialize};
use crate::Unit;

/// Decimal places used when no precision is requested (`%.8f` style)
pub const DEFAULT_PRECISION: usize = 8;

/// A numeric value expressed in a unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub value: f64,
    pub unit: Unit,
}

impl Quantity {
    pub fn new(value: f64, unit: Unit) -> Self {
        Quantity { value, unit }
    }

    /// Fixed-point rendering with `precision` decimals and the unit symbol
    pub fn format(&self, precision: usize) -> String {
        format!("{:.*}", precision, self)
    }
}

/// Honors the formatter precision (`{:.3}`), otherwise prints the shortest
/// exact representation.
impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*} {}", p, self.value, self.unit.symbol),
            None => write!(f, "{} {}", self.value, self.unit.symbol),
        }
    }
}

/// The outcome of one conversion, both sides kept for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    pub category: String,
    pub from: Quantity,
    pub to: Quantity,
}

impl Conversion {
    /// `"<from> = <to>"` with both values fixed to `precision` decimals
    pub fn format(&self, precision: usize) -> String {
        format!("{} = {}", self.from.format(precision), self.to.format(precision))
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.from, self.to)
    }
}
