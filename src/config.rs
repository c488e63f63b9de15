//! Solver configuration, loadable from TOML.
//!
//! ```
//! use crossword::{ArcOrder, FillConfig};
//!
//! let config = FillConfig::from_toml_str(r#"
//!     max_states = 50000
//!
//!     [arc_order.shuffled]
//!     seed = 7
//! "#).unwrap();
//!
//! assert_eq!(config.arc_order, ArcOrder::Shuffled { seed: 7 });
//! assert_eq!(config.max_states, Some(50000));
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// How the initial AC-3 worklist is ordered. The fixpoint is the same either way; only the amount
/// of work needed to reach it differs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArcOrder {
    /// Arcs in ascending `(x, y)` slot id order.
    #[default]
    Sequential,

    /// Arcs shuffled by a generator seeded with `seed`, so runs are reproducible.
    Shuffled { seed: u64 },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct FillConfig {
    pub arc_order: ArcOrder,

    /// Give up once the search has visited this many states. Unbounded when unset.
    pub max_states: Option<u64>,
}

impl FillConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns error if the string isn't valid TOML for this struct.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    #[must_use]
    pub fn with_arc_order(mut self, arc_order: ArcOrder) -> Self {
        self.arc_order = arc_order;
        self
    }

    #[must_use]
    pub fn with_max_states(mut self, max_states: u64) -> Self {
        self.max_states = Some(max_states);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = FillConfig::from_toml_str("").unwrap();

        assert_eq!(config, FillConfig::default());
        assert_eq!(config.arc_order, ArcOrder::Sequential);
        assert_eq!(config.max_states, None);
    }

    #[test]
    fn test_toml_parsing() {
        let config = FillConfig::from_toml_str(
            r#"
            arc_order = "sequential"
            max_states = 10
            "#,
        )
        .unwrap();

        assert_eq!(config, FillConfig::new().with_max_states(10));
    }

    #[test]
    fn test_shuffled_inline_table() {
        let config = FillConfig::from_toml_str("arc_order = { shuffled = { seed = 3 } }").unwrap();

        assert_eq!(config.arc_order, ArcOrder::Shuffled { seed: 3 });
    }

    #[test]
    fn test_rejects_unknown_order() {
        let err = FillConfig::from_toml_str(r#"arc_order = "sideways""#).unwrap_err();

        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_sample_file() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/fill.toml");
        let config = FillConfig::from_toml_file(path).unwrap();

        assert_eq!(config.arc_order, ArcOrder::Shuffled { seed: 50 });
        assert_eq!(config.max_states, Some(1_000_000));
    }

    #[test]
    fn test_missing_file() {
        let err = FillConfig::from_toml_file("/nonexistent/crossword.toml").unwrap_err();

        assert!(matches!(err, ConfigError::Io(_)));
    }
}
