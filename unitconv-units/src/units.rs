//! Unit definitions - the built-in table of seven categories

use crate::{Category, Unit};

/// Every built-in category, in display order
pub(crate) fn standard_categories() -> Vec<Category> {
    vec![
        length_units(),
        weight_units(),
        time_units(),
        temperature_units(),
        speed_units(),
        energy_units(),
        volume_units(),
    ]
}

fn length_units() -> Category {
    Category::new("Length", "Meter")
        .with_unit(Unit::new("Meter", 1.0, "m"))
        .with_unit(Unit::new("Kilometer", 0.001, "km"))
        .with_unit(Unit::new("Centimeter", 100.0, "cm"))
}

fn weight_units() -> Category {
    Category::new("Weight", "Gram")
        .with_unit(Unit::new("Gram", 1.0, "g"))
        .with_unit(Unit::new("Kilogram", 0.001, "kg"))
        .with_unit(Unit::new("Milligram", 1000.0, "mg"))
        .with_unit(Unit::new("Pound", 0.0022, "lbs"))
}

fn time_units() -> Category {
    Category::new("Time", "Second")
        .with_unit(Unit::new("Second", 1.0, "s"))
        .with_unit(Unit::new("Minute", 1.0 / 60.0, "min"))
        .with_unit(Unit::new("Hour", 1.0 / 3600.0, "h"))
        .with_unit(Unit::new("Millisecond", 1000.0, "ms"))
}

// Linear factor only: 100 C reads as 180 F, not 212 F.
fn temperature_units() -> Category {
    Category::new("Temperature", "Celsius")
        .with_unit(Unit::new("Celsius", 1.0, "C"))
        .with_unit(Unit::new("Fahrenheit", 1.8, "F"))
}

fn speed_units() -> Category {
    Category::new("Speed", "Meter per Second")
        .with_unit(Unit::new("Meter per Second", 1.0, "m/s"))
        .with_unit(Unit::new("Kilometer per Hour", 3.6, "km/h"))
        .with_unit(Unit::new("Miles per Hour", 2.24, "mph"))
}

fn energy_units() -> Category {
    Category::new("Energy", "Joule")
        .with_unit(Unit::new("Joule", 1.0, "J"))
        .with_unit(Unit::new("Kilojoule", 1.0 / 1000.0, "kJ"))
        .with_unit(Unit::new("Calorie", 1.0 / 4.184, "cal"))
        .with_unit(Unit::new("Kilocalorie", 1.0 / 4184.0, "kcal"))
        .with_unit(Unit::new("Watt-hour", 1.0 / 3600.0, "Wh"))
}

// Cubic centimeter and Milliliter share a factor.
fn volume_units() -> Category {
    Category::new("Volume", "Cubic meter")
        .with_unit(Unit::new("Cubic meter", 1.0, "m³").with_alias("m3"))
        .with_unit(Unit::new("Cubic centimeter", 1_000_000.0, "cm³").with_alias("cm3"))
        .with_unit(Unit::new("Liter", 1000.0, "l"))
        .with_unit(Unit::new("Milliliter", 1_000_000.0, "ml"))
        .with_unit(Unit::new("Fluid Ounce", 1.0 / 0.0000295735, "fl oz"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_seals() {
        for category in standard_categories() {
            let name = category.name.clone();
            assert!(category.seal().is_ok(), "{} should be valid", name);
        }
    }

    #[test]
    fn test_table_order() {
        let names: Vec<String> = standard_categories().into_iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec!["Length", "Weight", "Time", "Temperature", "Speed", "Energy", "Volume"]
        );
    }

    #[test]
    fn test_unit_counts() {
        let counts: Vec<usize> = standard_categories().iter().map(|c| c.units.len()).collect();
        assert_eq!(counts, vec![3, 4, 4, 2, 3, 5, 5]);
    }

    #[test]
    fn test_first_unit_is_base() {
        for category in standard_categories() {
            assert_eq!(category.units[0].name, category.base_unit);
            assert_eq!(category.units[0].conversion_factor, 1.0);
        }
    }
}
