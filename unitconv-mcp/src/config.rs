//! Server configuration from the environment

use std::env;
use unitconv_units::DEFAULT_PRECISION;

/// Largest number of decimals worth printing for an `f64`
pub const MAX_PRECISION: usize = 17;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Decimals used when a tool call does not ask for a precision
    pub precision: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig { precision: DEFAULT_PRECISION }
    }
}

impl ServerConfig {
    /// Read `UNITCONV_PRECISION`; unset or unparsable falls back to the default
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let precision = match lookup("UNITCONV_PRECISION") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(p) => clamp_precision(p),
                Err(_) => {
                    tracing::warn!(value = %raw, "ignoring invalid UNITCONV_PRECISION");
                    DEFAULT_PRECISION
                }
            },
            None => DEFAULT_PRECISION,
        };
        ServerConfig { precision }
    }
}

pub fn clamp_precision(precision: usize) -> usize {
    precision.min(MAX_PRECISION)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_with(value: Option<&str>) -> impl Fn(&str) -> Option<String> {
        let value = value.map(str::to_string);
        move |key: &str| if key == "UNITCONV_PRECISION" { value.clone() } else { None }
    }

    #[test]
    fn test_default() {
        let config = ServerConfig::from_lookup(lookup_with(None));
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.precision, 8);
    }

    #[test]
    fn test_precision_from_env() {
        let config = ServerConfig::from_lookup(lookup_with(Some(" 3 ")));
        assert_eq!(config.precision, 3);
    }

    #[test]
    fn test_precision_clamped() {
        let config = ServerConfig::from_lookup(lookup_with(Some("40")));
        assert_eq!(config.precision, MAX_PRECISION);
    }

    #[test]
    fn test_invalid_precision_falls_back() {
        let config = ServerConfig::from_lookup(lookup_with(Some("lots")));
        assert_eq!(config.precision, DEFAULT_PRECISION);
    }
}
