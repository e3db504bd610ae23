//! Engine configuration.

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::types::NumberFormat;

/// Settings applied to the built-in type tags.
///
/// Deserializes from kebab-case keys, so it can be embedded in a TOML or
/// JSON configuration file:
///
/// ```toml
/// [number]
/// decimal-separator = ","
/// grouping-separator = "."
/// max-fraction-digits = 2
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct EngineConfig {
    /// Formatting used by the `number` tag.
    #[builder(default)]
    pub number: NumberFormat,
}
