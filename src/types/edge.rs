//! Edge triples and traversal direction.

use serde::Serialize;

/// Which stored edges a traversal follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraversalDirection {
    /// Follow outgoing edges (source -> target).
    Forward,
    /// Follow incoming edges (target <- source).
    Backward,
    /// Follow edges in both directions.
    Both,
}

impl TraversalDirection {
    /// Return a human-readable name for this direction.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
            Self::Both => "both",
        }
    }

    /// Parse a direction from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "forward" | "out" => Some(Self::Forward),
            "backward" | "in" => Some(Self::Backward),
            "both" | "undirected" => Some(Self::Both),
            _ => None,
        }
    }
}

impl std::fmt::Display for TraversalDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A directed, weighted edge as stored in the source vertex's edge map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge<'g> {
    /// Source vertex id.
    pub from: &'g str,
    /// Target vertex id.
    pub to: &'g str,
    /// Edge weight.
    pub weight: f64,
}

impl<'g> Edge<'g> {
    /// Create a new edge triple.
    pub fn new(from: &'g str, to: &'g str, weight: f64) -> Self {
        Self { from, to, weight }
    }
}
