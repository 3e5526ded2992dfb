//! Shift request parsing and clamping.
//!
//! Callers hand over the shift as whatever they received (typically a form
//! field). Requests are never rejected:
//!
//! - Integer input outside `[min, max]` is clamped to the nearest bound
//! - Empty, non-integer or otherwise unparsable input falls back to `default`
//! - Inconsistent bounds are replaced by [`ShiftBounds::default`]

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lowest accepted shift.
pub const DEFAULT_MIN_SHIFT: u32 = 1;
/// Highest accepted shift.
pub const DEFAULT_MAX_SHIFT: u32 = 1000;
/// Shift used when a request can't be parsed.
pub const DEFAULT_SHIFT: u32 = 20;

/// Errors for inconsistent [`ShiftBounds`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid shift bounds: min ({min}) must be at least 1 and not exceed max ({max})")]
    InvalidRange { min: u32, max: u32 },

    #[error("Default shift {default} lies outside [{min}, {max}]")]
    DefaultOutOfRange { default: u32, min: u32, max: u32 },
}

/// Accepted shift range and fallback value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShiftBounds {
    pub min: u32,
    pub max: u32,
    pub default: u32,
}

impl Default for ShiftBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_SHIFT,
            max: DEFAULT_MAX_SHIFT,
            default: DEFAULT_SHIFT,
        }
    }
}

impl ShiftBounds {
    /// Check that `1 <= min <= default <= max`.
    pub fn validated(self) -> Result<Self, ConfigError> {
        if self.min == 0 || self.min > self.max {
            return Err(ConfigError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        if !(self.min..=self.max).contains(&self.default) {
            return Err(ConfigError::DefaultOutOfRange {
                default: self.default,
                min: self.min,
                max: self.max,
            });
        }
        Ok(self)
    }

    /// These bounds if they validate, the defaults otherwise.
    pub fn or_default(self) -> Self {
        self.validated().unwrap_or_else(|err| {
            warn!("{}, using default shift bounds", err);
            Self::default()
        })
    }
}

/// A shift request that has been parsed and clamped.
///
/// Deserializes from any integer, clamped into the default bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64")]
pub struct ShiftAmount(u32);

impl ShiftAmount {
    /// Wrap an already-valid shift without clamping.
    pub const fn new(shift: u32) -> Self {
        Self(shift)
    }

    /// Clamp a numeric request into `bounds`.
    pub fn clamped(requested: i64, bounds: &ShiftBounds) -> Self {
        let bounds = bounds.or_default();
        let clamped = requested.clamp(bounds.min as i64, bounds.max as i64);
        if clamped != requested {
            warn!(
                "shift {} outside [{}, {}], clamped to {}",
                requested, bounds.min, bounds.max, clamped
            );
        }
        Self(clamped as u32)
    }

    /// Parse a textual request, falling back to `bounds.default`.
    pub fn parse(raw: &str, bounds: &ShiftBounds) -> Self {
        match raw.trim().parse::<i64>() {
            Ok(requested) => Self::clamped(requested, bounds),
            Err(_) => {
                let fallback = Self::fallback(bounds);
                warn!("unparsable shift {:?}, using default {}", raw, fallback.0);
                fallback
            }
        }
    }

    /// The default shift of `bounds`.
    pub fn fallback(bounds: &ShiftBounds) -> Self {
        Self(bounds.or_default().default)
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for ShiftAmount {
    fn default() -> Self {
        Self(DEFAULT_SHIFT)
    }
}

impl From<i64> for ShiftAmount {
    fn from(requested: i64) -> Self {
        Self::clamped(requested, &ShiftBounds::default())
    }
}

impl From<ShiftAmount> for u64 {
    fn from(shift: ShiftAmount) -> u64 {
        shift.0 as u64
    }
}
