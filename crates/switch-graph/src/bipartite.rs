use std::collections::BTreeSet;
use std::fmt::{self, Display};

use rand::distributions::{Distribution, WeightedIndex};
use switch_core::{RngHandle, SampleSet, SwitchError, SwitchGraph};

use crate::checks::{all_unique, check_bipartite_graph};
use crate::generators::gale_ryser_edges;
use crate::sequence::{anchor_weights, no_edges, render_sequence, BipartiteDegrees, Side};

/// Bipartite graph on `X ∪ Y` optimised for the switch chain.
///
/// Only the X side keeps adjacency lists; the Y degrees are counted once at
/// construction and stored alongside the X degrees.
#[derive(Debug, Clone)]
pub struct BipartiteGraph {
    nx: usize,
    ny: usize,
    adjacency: Vec<SampleSet<usize>>,
    degrees: BipartiteDegrees,
    anchors: Option<WeightedIndex<usize>>,
    edge_count: usize,
}

impl BipartiteGraph {
    /// Builds a graph from `(x, y)` edges, rejecting out-of-range endpoints and
    /// duplicates with [`SwitchError::InvalidGraph`].
    pub fn new(nx: usize, ny: usize, edges: &[(usize, usize)]) -> Result<Self, SwitchError> {
        check_bipartite_graph(nx, ny, edges)?;
        let mut adjacency = vec![SampleSet::new(); nx];
        let mut y_degrees = vec![0usize; ny];
        for &(x, y) in edges {
            adjacency[x].add(y)?;
            y_degrees[y] += 1;
        }
        let x_degrees: Vec<usize> = adjacency.iter().map(SampleSet::len).collect();
        let anchors = anchor_weights(&x_degrees);
        tracing::debug!(nx, ny, edges = edges.len(), "bipartite graph built");
        Ok(Self {
            nx,
            ny,
            adjacency,
            degrees: BipartiteDegrees {
                x: x_degrees,
                y: y_degrees,
            },
            anchors,
            edge_count: edges.len(),
        })
    }

    /// Builds the greedy deterministic realisation of `(dx, dy)`.
    pub fn from_degree_sequence(dx: &[usize], dy: &[usize]) -> Result<Self, SwitchError> {
        let edges = gale_ryser_edges(dx, dy)?;
        Self::new(dx.len(), dy.len(), &edges)
    }

    /// Number of vertices in X.
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Number of vertices in Y.
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Returns whether `(x, y)` is an edge.
    pub fn contains_edge(&self, x: usize, y: usize) -> bool {
        self.adjacency.get(x).is_some_and(|set| set.contains(&y))
    }

    /// Neighbourhood of every vertex on `side`, as sets of opposite-side labels.
    pub fn neighbourhoods(&self, side: Side) -> Vec<BTreeSet<usize>> {
        match side {
            Side::X => self
                .adjacency
                .iter()
                .map(|set| set.iter().copied().collect())
                .collect(),
            Side::Y => {
                let mut result = vec![BTreeSet::new(); self.ny];
                for (x, set) in self.adjacency.iter().enumerate() {
                    for &y in set {
                        result[y].insert(x);
                    }
                }
                result
            }
        }
    }
}

impl SwitchGraph for BipartiteGraph {
    type Edge = (usize, usize);
    type DegreeSequence = BipartiteDegrees;

    fn degree_sequence(&self) -> BipartiteDegrees {
        self.degrees.clone()
    }

    fn edges(&self) -> Vec<(usize, usize)> {
        let mut edges: Vec<(usize, usize)> = self
            .adjacency
            .iter()
            .enumerate()
            .flat_map(|(x, set)| set.iter().map(move |&y| (x, y)))
            .collect();
        edges.sort_unstable();
        edges
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// H-simple: no two Y vertices share a neighbourhood.
    fn simple(&self) -> bool {
        all_unique(self.neighbourhoods(Side::Y))
    }

    fn switch(&mut self, rng: &mut RngHandle) -> Result<bool, SwitchError> {
        let anchors = self.anchors.as_ref().ok_or_else(|| no_edges("bipartite"))?;
        let x1 = anchors.sample(rng);
        let x2 = anchors.sample(rng);
        let y1 = *self.adjacency[x1].choice(rng)?;
        let y2 = *self.adjacency[x2].choice(rng)?;

        if self.adjacency[x2].contains(&y1) || self.adjacency[x1].contains(&y2) {
            return Ok(false);
        }
        self.adjacency[x1].replace(&y1, y2, false)?;
        self.adjacency[x2].replace(&y2, y1, false)?;
        Ok(true)
    }
}

impl PartialEq for BipartiteGraph {
    fn eq(&self, other: &Self) -> bool {
        self.nx == other.nx
            && self.ny == other.ny
            && self.degrees == other.degrees
            && self.edges() == other.edges()
    }
}

impl Eq for BipartiteGraph {}

impl Display for BipartiteGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bipartite Graph with nx={}, ny={}, X degrees=({})",
            self.nx,
            self.ny,
            render_sequence(&self.degrees.x)
        )
    }
}
