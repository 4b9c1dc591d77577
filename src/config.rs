//! Configuration to acknowledge generation preferences as well as set defaults.
//!
//! Specifically, we try to find an llmd.toml, and if present we load settings
//! from there. This provides the unbounded copy count and the horizontal rule
//! width used when rendering worksheets.

use facet::Facet;
use std::fs;

#[derive(Facet, Clone)]
/// User preferences loaded from llmd.toml or falling back to defaults.
pub struct Config {
    #[facet(default = 2)]
    /// Copies materialized for `[*]` fields when no override names them.
    pub unbounded_default: usize,
    #[facet(default = 3)]
    /// Dash count of the horizontal rule under each section header.
    pub rule_width: usize,
}

impl Config {
    #[must_use]
    /// Load configuration from llmd.toml if present.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    pub fn load() -> Self {
        if let Ok(contents) = fs::read_to_string("llmd.toml") {
            if let Ok(config) = facet_toml::from_str::<Self>(&contents) {
                return config;
            }
        }
        facet_toml::from_str::<Self>("").unwrap()
    }
}
