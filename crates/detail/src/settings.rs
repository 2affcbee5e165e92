//! Display settings for the observation detail feeds
//!
//! Settings are plain data with serde derives so a host can persist them or
//! ship them over a bridge. `from_env` lets deployments override literals
//! without code changes.

use serde::{Deserialize, Deserializer, Serialize};

/// Most decimal digits coordinate text will carry; `f64` holds no more.
pub const MAX_COORDINATE_PRECISION: usize = 17;

/// Literals and precision used when turning observation data into text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailSettings {
    /// Decimal digits for latitude/longitude text, at most
    /// [`MAX_COORDINATE_PRECISION`]
    #[serde(
        default = "default_coordinate_precision",
        deserialize_with = "deserialize_precision"
    )]
    pub coordinate_precision: usize,

    /// Shown for `true` property values
    #[serde(default = "default_true_literal")]
    pub true_literal: String,

    /// Shown for `false` property values
    #[serde(default = "default_false_literal")]
    pub false_literal: String,

    /// Shown for null/missing property values. Must not be empty, since an
    /// empty cell reads as an intentionally blank answer.
    #[serde(default = "default_missing_placeholder")]
    pub missing_placeholder: String,

    /// Joins multi-select answers
    #[serde(default = "default_list_separator")]
    pub list_separator: String,
}

fn default_coordinate_precision() -> usize { 6 }
fn default_true_literal() -> String { "Yes".to_string() }
fn default_false_literal() -> String { "No".to_string() }
fn default_missing_placeholder() -> String { "—".to_string() }
fn default_list_separator() -> String { ", ".to_string() }

fn deserialize_precision<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
    usize::deserialize(deserializer).map(|p| p.min(MAX_COORDINATE_PRECISION))
}

impl Default for DetailSettings {
    fn default() -> Self {
        Self {
            coordinate_precision: default_coordinate_precision(),
            true_literal: default_true_literal(),
            false_literal: default_false_literal(),
            missing_placeholder: default_missing_placeholder(),
            list_separator: default_list_separator(),
        }
    }
}

impl DetailSettings {
    /// Load from environment variables, using defaults for missing values
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            coordinate_precision: env_or("MAGE_DETAIL_COORDINATE_PRECISION", defaults.coordinate_precision)
                .min(MAX_COORDINATE_PRECISION),
            true_literal: env_or("MAGE_DETAIL_TRUE_LITERAL", defaults.true_literal),
            false_literal: env_or("MAGE_DETAIL_FALSE_LITERAL", defaults.false_literal),
            missing_placeholder: env_non_empty_or("MAGE_DETAIL_MISSING_PLACEHOLDER", defaults.missing_placeholder),
            list_separator: env_or("MAGE_DETAIL_LIST_SEPARATOR", defaults.list_separator),
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}

fn env_non_empty_or(key: &str, default: String) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
}
