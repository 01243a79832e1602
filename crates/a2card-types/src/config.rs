//! Configuration types for a2card.
//!
//! `A2CardConfig` represents the top-level `config.toml`. Every field has a
//! default, so an empty file (or no file) is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::card::DEFAULT_FALLBACK_IMAGE_URL;

/// Top-level configuration.
///
/// Loaded from `~/.a2card/config.toml` unless a path is given explicitly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct A2CardConfig {
    #[serde(default)]
    pub converter: ConverterConfig,
}

/// Knobs for the component-graph converter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// URL substituted for an `Image` component without a usable `src`.
    #[serde(default = "default_fallback_image_url")]
    pub fallback_image_url: String,

    /// Deepest nesting level rendered, counting the root as level 1.
    /// Components below it are dropped.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

fn default_fallback_image_url() -> String {
    DEFAULT_FALLBACK_IMAGE_URL.to_string()
}

fn default_max_depth() -> usize {
    64
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            fallback_image_url: default_fallback_image_url(),
            max_depth: default_max_depth(),
        }
    }
}
