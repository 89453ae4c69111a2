//! Configurable resource limits.
//!
//! The original implementation sized loops and bin arrays directly from
//! caller-supplied integers with no upper bound. Here every user-controlled
//! size is checked against a configured maximum before any allocation or
//! sampling happens, and the maxima are host-tunable via TOML.

use serde::Deserialize;
use thiserror::Error;

/// Default maximum number of samples one list-populating command may push.
pub const DEFAULT_MAX_COUNT: u64 = 1_048_576;
/// Default maximum number of histogram slots.
pub const DEFAULT_MAX_SLOTS: u64 = 4_096;
/// Default maximum bar-chart column width.
pub const DEFAULT_MAX_COLUMN_WIDTH: u64 = 1_024;

/// Upper bounds on user-controlled sizes.
///
/// # Examples
///
/// ```rust
/// use randkv_core::limits::Limits;
///
/// let limits = Limits::from_toml_str("max_count = 1000").unwrap();
/// assert_eq!(limits.max_count, 1000);
/// assert_eq!(limits.max_slots, randkv_core::limits::DEFAULT_MAX_SLOTS);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum sample count per list-populating command.
    pub max_count: u64,
    /// Maximum histogram slot count.
    pub max_slots: u64,
    /// Maximum bar-chart column width.
    pub max_column_width: u64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_count: DEFAULT_MAX_COUNT,
            max_slots: DEFAULT_MAX_SLOTS,
            max_column_width: DEFAULT_MAX_COLUMN_WIDTH,
        }
    }
}

impl Limits {
    /// Parses limits from a TOML document; absent fields keep their
    /// defaults.
    pub fn from_toml_str(input: &str) -> Result<Self, LimitsError> {
        toml::from_str(input).map_err(|e| LimitsError::Parse(e.to_string()))
    }
}

/// Error loading limits configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LimitsError {
    /// The TOML document failed to parse or contained wrong types.
    #[error("invalid limits configuration: {0}")]
    Parse(String),
}
