use std::fmt::{self, Display};

use rand::distributions::WeightedIndex;
use switch_core::errors::{ErrorInfo, SwitchError};

/// Out and in degree of one vertex of a directed graph.
///
/// Ordering is lexicographic on `(out_degree, in_degree)`, which is the order
/// used by the directed graphicality test and the Kleitman–Wang construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DirectedDegree {
    /// Number of edges leaving the vertex.
    pub out_degree: usize,
    /// Number of edges entering the vertex.
    pub in_degree: usize,
}

impl DirectedDegree {
    /// Creates a degree pair.
    pub const fn new(out_degree: usize, in_degree: usize) -> Self {
        Self {
            out_degree,
            in_degree,
        }
    }
}

impl Display for DirectedDegree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.out_degree, self.in_degree)
    }
}

/// Degree sequences of both sides of a bipartite graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BipartiteDegrees {
    /// Degrees of the vertices in X.
    pub x: Vec<usize>,
    /// Degrees of the vertices in Y.
    pub y: Vec<usize>,
}

/// Side of a bipartite graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The side whose adjacency lists are stored.
    X,
    /// The side whose neighbourhoods are derived by counting.
    Y,
}

/// Builds the degree-weighted anchor distribution used by every switch.
///
/// Returns `None` when no vertex has an incident edge.
pub(crate) fn anchor_weights(degrees: &[usize]) -> Option<WeightedIndex<usize>> {
    WeightedIndex::new(degrees.iter().copied()).ok()
}

/// Error returned by `switch` on a graph with nothing to switch.
pub(crate) fn no_edges(kind: &str) -> SwitchError {
    SwitchError::EmptyCollection(
        ErrorInfo::new("empty-sample-set", "graph has no edges to switch")
            .with_context("graph", kind),
    )
}

/// Renders a sequence for `Display`, eliding everything after nine entries.
pub(crate) fn render_sequence<T: Display>(items: &[T]) -> String {
    let mut parts: Vec<String> = if items.len() > 10 {
        items.iter().take(9).map(ToString::to_string).collect()
    } else {
        items.iter().map(ToString::to_string).collect()
    };
    if items.len() > 10 {
        parts.push("...".to_string());
    }
    parts.join(", ")
}

/// Sorts `(stubs, label)` pairs largest first, larger labels winning ties.
pub(crate) fn sort_descending<T: Ord>(stubs: &mut [T]) {
    stubs.sort_unstable_by(|a, b| b.cmp(a));
}
