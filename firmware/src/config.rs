//! Compiled-in bounds overrides.
//!
//! Each bound may be overridden at build time through an environment variable
//! (see `build.rs`). Values are decimal or `0x`-prefixed hex, `_` separators
//! allowed. Unset variables keep the built-in default.

use alloc::string::{String, ToString};

use firmware_constraints::BoundsConfig;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{name} = `{value}` is not a 32-bit unsigned number")]
    InvalidNumber { name: &'static str, value: String },
}

/// Raw override strings, one per bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundsOverrides<'a> {
    pub clock_min_hz: Option<&'a str>,
    pub clock_max_hz: Option<&'a str>,
    pub ram_start: Option<&'a str>,
    pub ram_size: Option<&'a str>,
}

impl BoundsOverrides<'static> {
    /// Overrides baked into this build.
    pub const COMPILED: Self = Self {
        clock_min_hz: option_env!("ASICFW_CLOCK_MIN_HZ"),
        clock_max_hz: option_env!("ASICFW_CLOCK_MAX_HZ"),
        ram_start: option_env!("ASICFW_RAM_START"),
        ram_size: option_env!("ASICFW_RAM_SIZE"),
    };
}

impl BoundsOverrides<'_> {
    pub fn is_empty(&self) -> bool {
        self.clock_min_hz.is_none()
            && self.clock_max_hz.is_none()
            && self.ram_start.is_none()
            && self.ram_size.is_none()
    }

    /// `Ok(None)` when nothing is overridden.
    pub fn resolve(&self) -> Result<Option<BoundsConfig>, ConfigError> {
        if self.is_empty() {
            return Ok(None);
        }

        let mut config = BoundsConfig::default();
        apply(&mut config.clock_min_hz, "ASICFW_CLOCK_MIN_HZ", self.clock_min_hz)?;
        apply(&mut config.clock_max_hz, "ASICFW_CLOCK_MAX_HZ", self.clock_max_hz)?;
        apply(&mut config.ram_start, "ASICFW_RAM_START", self.ram_start)?;
        apply(&mut config.ram_size, "ASICFW_RAM_SIZE", self.ram_size)?;
        Ok(Some(config))
    }
}

fn apply(slot: &mut u32, name: &'static str, value: Option<&str>) -> Result<(), ConfigError> {
    if let Some(value) = value {
        *slot = parse_u32(value).ok_or_else(|| ConfigError::InvalidNumber {
            name,
            value: value.to_string(),
        })?;
    }
    Ok(())
}

/// Parses `80_000_000`, `0x2000_0000` or `0X20000000`.
pub fn parse_u32(text: &str) -> Option<u32> {
    let text = text.trim();
    let (digits, radix) = match text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
    {
        Some(hex) => (hex, 16),
        None => (text, 10),
    };

    let mut value: u32 = 0;
    let mut seen_digit = false;
    for c in digits.chars() {
        if c == '_' {
            continue;
        }
        let digit = c.to_digit(radix)?;
        value = value.checked_mul(radix)?.checked_add(digit)?;
        seen_digit = true;
    }
    seen_digit.then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_and_hex() {
        assert_eq!(parse_u32("80000000"), Some(80_000_000));
        assert_eq!(parse_u32("80_000_000"), Some(80_000_000));
        assert_eq!(parse_u32("0x2000_0000"), Some(0x2000_0000));
        assert_eq!(parse_u32("0XFFFFFFFF"), Some(u32::MAX));
        assert_eq!(parse_u32(" 42 "), Some(42));
    }

    #[test]
    fn rejects_garbage_and_overflow() {
        assert_eq!(parse_u32(""), None);
        assert_eq!(parse_u32("0x"), None);
        assert_eq!(parse_u32("_"), None);
        assert_eq!(parse_u32("12MHz"), None);
        assert_eq!(parse_u32("-1"), None);
        assert_eq!(parse_u32("4294967296"), None);
        assert_eq!(parse_u32("0x1_0000_0000"), None);
    }

    #[test]
    fn no_overrides_resolve_to_none() {
        assert_eq!(BoundsOverrides::default().resolve(), Ok(None));
    }

    #[test]
    fn partial_overrides_keep_other_defaults() {
        let overrides = BoundsOverrides {
            clock_max_hz: Some("250_000_000"),
            ..BoundsOverrides::default()
        };
        let config = overrides.resolve().unwrap().unwrap();
        assert_eq!(config.clock_max_hz, 250_000_000);
        assert_eq!(config.clock_min_hz, BoundsConfig::default().clock_min_hz);
        assert_eq!(config.ram_start, BoundsConfig::default().ram_start);
    }

    #[test]
    fn malformed_override_names_the_variable() {
        let overrides = BoundsOverrides {
            ram_size: Some("128K"),
            ..BoundsOverrides::default()
        };
        assert_eq!(
            overrides.resolve(),
            Err(ConfigError::InvalidNumber {
                name: "ASICFW_RAM_SIZE",
                value: "128K".into(),
            })
        );
    }
}
