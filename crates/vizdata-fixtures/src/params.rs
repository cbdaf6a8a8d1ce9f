//! Enumerable semantic-mapping records for parameterized tests.
//!
//! Instead of a hidden parameterization mechanism, consumers iterate an
//! explicit list of channel assignments and run the same assertions once per
//! record.

use serde::{Deserialize, Serialize};

/// Which long-table columns a consumer binds to each visual channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticMapping {
    pub x: Option<String>,
    pub y: Option<String>,
    pub hue: Option<String>,
    pub style: Option<String>,
    pub size: Option<String>,
}

impl SemanticMapping {
    /// Positional channels only.
    pub fn xy(x: &str, y: &str) -> Self {
        Self {
            x: Some(x.to_string()),
            y: Some(y.to_string()),
            ..Self::default()
        }
    }

    /// Bind the hue channel to a column.
    pub fn hue(mut self, column: &str) -> Self {
        self.hue = Some(column.to_string());
        self
    }

    /// Bind the style channel to a column.
    pub fn style(mut self, column: &str) -> Self {
        self.style = Some(column.to_string());
        self
    }

    /// Bind the size channel to a column.
    pub fn size(mut self, column: &str) -> Self {
        self.size = Some(column.to_string());
        self
    }
}

/// The canonical channel combinations long-table tests iterate over.
pub fn long_semantics() -> Vec<SemanticMapping> {
    vec![
        SemanticMapping::xy("x", "y"),
        SemanticMapping::xy("t", "y"),
        SemanticMapping::xy("x", "y").hue("a"),
        SemanticMapping::xy("x", "y").hue("a").style("a"),
        SemanticMapping::xy("x", "y").hue("a").style("b"),
        SemanticMapping::xy("x", "y").hue("a").size("b"),
    ]
}
