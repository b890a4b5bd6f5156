//! Text parsing - numeric input, quantities like "5 km" and conversions like "km->m"

use unitconv_core::{ConvertError, Result};

/// Separators accepted between the source and target unit
const ARROWS: [&str; 2] = ["->", "→"];
const WORD_ARROWS: [&str; 2] = [" to ", " in "];

/// Parse user-entered numeric text into a finite number
pub fn parse_value(text: &str) -> Result<f64> {
    let s = text.trim();
    if s.is_empty() {
        return Err(ConvertError::invalid_input(text, "empty value"));
    }

    let value: f64 = s.parse()
        .map_err(|_| ConvertError::invalid_input(s, "not a number"))?;

    if !value.is_finite() {
        return Err(ConvertError::invalid_input(s, "not a finite number"));
    }
    Ok(value)
}

/// Split a quantity string like "5 km" or "1e3m" into value and unit token
pub fn parse_quantity(text: &str) -> Result<(f64, String)> {
    let s = text.trim();

    // Longest numeric prefix wins, so "1e3km" reads as 1000 km
    let split = s.char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .filter(|&end| s[..end].parse::<f64>().map_or(false, f64::is_finite))
        .last();

    let end = split.ok_or_else(|| ConvertError::invalid_input(s, "missing numeric value"))?;
    let unit = s[end..].trim();
    if unit.is_empty() {
        return Err(ConvertError::invalid_input(s, "missing unit"));
    }

    let value = parse_value(&s[..end])?;
    Ok((value, unit.to_string()))
}

/// Split a conversion like "km->m", "km → m" or "km to m"
pub fn parse_conversion(text: &str) -> Result<(String, String)> {
    let s = text.trim();

    let parts = ARROWS.iter()
        .find_map(|arrow| s.split_once(arrow))
        .or_else(|| {
            let lower = s.to_ascii_lowercase();
            WORD_ARROWS.iter()
                .find_map(|word| lower.rfind(word).map(|at| (at, word.len())))
                .map(|(at, len)| (&s[..at], &s[at + len..]))
        });

    let (from, to) = parts
        .ok_or_else(|| ConvertError::invalid_input(s, "expected 'from -> to'"))?;

    let (from, to) = (from.trim(), to.trim());
    if from.is_empty() || to.is_empty() {
        return Err(ConvertError::invalid_input(s, "missing unit on one side of the conversion"));
    }
    Ok((from.to_string(), to.to_string()))
}
