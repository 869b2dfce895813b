//! The core edge struct.

use serde::Serialize;

use super::Weight;

/// A connection between two vertices, stored in the order it was created.
///
/// Whether `source`/`target` order matters is a property of the owning
/// graph, not of the edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    /// First endpoint as stored.
    pub source: String,
    /// Second endpoint as stored.
    pub target: String,
    /// Weight, present exactly when the owning graph is weighted.
    pub weight: Option<Weight>,
}

impl Edge {
    /// Create an edge without a weight.
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight: None,
        }
    }

    /// Create an edge carrying a weight.
    pub fn weighted(source: impl Into<String>, target: impl Into<String>, weight: Weight) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight: Some(weight),
        }
    }

    /// Does this edge join `u` and `v`? Order only counts when `directed`.
    pub fn joins(&self, u: &str, v: &str, directed: bool) -> bool {
        if self.source == u && self.target == v {
            return true;
        }
        !directed && self.source == v && self.target == u
    }

    /// Does this edge have `vertex` as an endpoint?
    pub fn touches(&self, vertex: &str) -> bool {
        self.source == vertex || self.target == vertex
    }

    /// Identifier used for the edge in exported elements: `"source-target"`.
    pub fn element_id(&self) -> String {
        format!("{}-{}", self.source, self.target)
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.weight {
            Some(w) => write!(f, "{} -- {} ({})", self.source, self.target, w),
            None => write!(f, "{} -- {}", self.source, self.target),
        }
    }
}
