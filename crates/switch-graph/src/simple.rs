use std::fmt::{self, Display};

use rand::distributions::{Distribution, WeightedIndex};
use switch_core::{RngHandle, SampleSet, SwitchError, SwitchGraph};

use crate::checks::{check_simple_graph, valid_simple_graph};
use crate::generators::havel_hakimi_edges;
use crate::sequence::{anchor_weights, no_edges, render_sequence};

/// Undirected graph without loops or parallel edges.
///
/// Every edge `{u, v}` is recorded in both `neighbours[u]` and `neighbours[v]`.
#[derive(Debug, Clone)]
pub struct SimpleGraph {
    n: usize,
    neighbours: Vec<SampleSet<usize>>,
    degrees: Vec<usize>,
    anchors: Option<WeightedIndex<usize>>,
    edge_count: usize,
}

impl SimpleGraph {
    /// Builds a graph from unordered `(u, v)` pairs.
    pub fn new(n: usize, edges: &[(usize, usize)]) -> Result<Self, SwitchError> {
        check_simple_graph(n, edges)?;
        let mut neighbours = vec![SampleSet::new(); n];
        for &(u, v) in edges {
            neighbours[u].add(v)?;
            neighbours[v].add(u)?;
        }
        let degrees: Vec<usize> = neighbours.iter().map(SampleSet::len).collect();
        tracing::debug!(n, edges = edges.len(), "simple graph built");
        Ok(Self {
            n,
            neighbours,
            anchors: anchor_weights(&degrees),
            degrees,
            edge_count: edges.len(),
        })
    }

    /// Builds the Havel–Hakimi realisation of `degrees`.
    pub fn from_degree_sequence(degrees: &[usize]) -> Result<Self, SwitchError> {
        let edges = havel_hakimi_edges(degrees)?;
        Self::new(degrees.len(), &edges)
    }

    /// Number of vertices.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns whether `{u, v}` is an edge.
    pub fn contains_edge(&self, u: usize, v: usize) -> bool {
        self.neighbours.get(u).is_some_and(|set| set.contains(&v))
    }
}

impl SwitchGraph for SimpleGraph {
    type Edge = (usize, usize);
    type DegreeSequence = Vec<usize>;

    fn degree_sequence(&self) -> Vec<usize> {
        self.degrees.clone()
    }

    /// Each edge once, as `(u, v)` with `u < v`.
    fn edges(&self) -> Vec<(usize, usize)> {
        let mut edges: Vec<(usize, usize)> = self
            .neighbours
            .iter()
            .enumerate()
            .flat_map(|(u, set)| set.iter().filter(move |&&v| u < v).map(move |&v| (u, v)))
            .collect();
        edges.sort_unstable();
        edges
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn simple(&self) -> bool {
        valid_simple_graph(self.n, &self.edges())
    }

    fn switch(&mut self, rng: &mut RngHandle) -> Result<bool, SwitchError> {
        let anchors = self.anchors.as_ref().ok_or_else(|| no_edges("simple"))?;
        let x1 = anchors.sample(rng);
        let x2 = anchors.sample(rng);
        let y1 = *self.neighbours[x1].choice(rng)?;
        let y2 = *self.neighbours[x2].choice(rng)?;

        // the two edges must be vertex disjoint
        if x1 == x2 || x1 == y2 || y1 == x2 || y1 == y2 {
            return Ok(false);
        }
        if self.neighbours[x1].contains(&y2) || self.neighbours[x2].contains(&y1) {
            return Ok(false);
        }
        self.neighbours[x1].replace(&y1, y2, false)?;
        self.neighbours[x2].replace(&y2, y1, false)?;
        self.neighbours[y1].replace(&x1, x2, false)?;
        self.neighbours[y2].replace(&x2, x1, false)?;
        Ok(true)
    }
}

impl PartialEq for SimpleGraph {
    fn eq(&self, other: &Self) -> bool {
        self.n == other.n && self.degrees == other.degrees && self.edges() == other.edges()
    }
}

impl Eq for SimpleGraph {}

impl Display for SimpleGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Switch Simple Graph with n={}, degrees=({})",
            self.n,
            render_sequence(&self.degrees)
        )
    }
}
