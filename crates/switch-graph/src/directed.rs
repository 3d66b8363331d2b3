use std::fmt::{self, Display};

use rand::distributions::{Distribution, WeightedIndex};
use switch_core::{RngHandle, SampleSet, SwitchError, SwitchGraph};

use crate::checks::{check_directed_graph, valid_directed_graph};
use crate::generators::kleitman_wang_edges;
use crate::sequence::{anchor_weights, no_edges, render_sequence, DirectedDegree};

/// Loopless directed graph without parallel arcs.
///
/// Out-neighbourhoods are stored; anchors are drawn proportionally to
/// out-degree.
#[derive(Debug, Clone)]
pub struct DirectedGraph {
    n: usize,
    successors: Vec<SampleSet<usize>>,
    degrees: Vec<DirectedDegree>,
    anchors: Option<WeightedIndex<usize>>,
    edge_count: usize,
}

impl DirectedGraph {
    /// Builds a graph from `(from, to)` arcs.
    pub fn new(n: usize, edges: &[(usize, usize)]) -> Result<Self, SwitchError> {
        check_directed_graph(n, edges)?;
        let mut successors = vec![SampleSet::new(); n];
        let mut degrees = vec![DirectedDegree::default(); n];
        for &(from, to) in edges {
            successors[from].add(to)?;
            degrees[from].out_degree += 1;
            degrees[to].in_degree += 1;
        }
        let out_degrees: Vec<usize> = degrees.iter().map(|d| d.out_degree).collect();
        tracing::debug!(n, edges = edges.len(), "directed graph built");
        Ok(Self {
            n,
            successors,
            degrees,
            anchors: anchor_weights(&out_degrees),
            edge_count: edges.len(),
        })
    }

    /// Builds the Kleitman–Wang realisation of the `(out, in)` sequence.
    pub fn from_degree_sequence(degrees: &[DirectedDegree]) -> Result<Self, SwitchError> {
        let edges = kleitman_wang_edges(degrees)?;
        Self::new(degrees.len(), &edges)
    }

    /// Number of vertices.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns whether the arc `from -> to` is present.
    pub fn contains_edge(&self, from: usize, to: usize) -> bool {
        self.successors.get(from).is_some_and(|set| set.contains(&to))
    }
}

impl SwitchGraph for DirectedGraph {
    type Edge = (usize, usize);
    type DegreeSequence = Vec<DirectedDegree>;

    fn degree_sequence(&self) -> Vec<DirectedDegree> {
        self.degrees.clone()
    }

    fn edges(&self) -> Vec<(usize, usize)> {
        let mut edges: Vec<(usize, usize)> = self
            .successors
            .iter()
            .enumerate()
            .flat_map(|(from, set)| set.iter().map(move |&to| (from, to)))
            .collect();
        edges.sort_unstable();
        edges
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn simple(&self) -> bool {
        valid_directed_graph(self.n, &self.edges())
    }

    fn switch(&mut self, rng: &mut RngHandle) -> Result<bool, SwitchError> {
        let anchors = self.anchors.as_ref().ok_or_else(|| no_edges("directed"))?;
        let x1 = anchors.sample(rng);
        let x2 = anchors.sample(rng);
        let y1 = *self.successors[x1].choice(rng)?;
        let y2 = *self.successors[x2].choice(rng)?;

        // x1 -> y2 or x2 -> y1 would be a loop
        if x1 == y2 || x2 == y1 {
            return Ok(false);
        }
        if self.successors[x2].contains(&y1) || self.successors[x1].contains(&y2) {
            return Ok(false);
        }
        self.successors[x1].replace(&y1, y2, false)?;
        self.successors[x2].replace(&y2, y1, false)?;
        Ok(true)
    }
}

impl PartialEq for DirectedGraph {
    fn eq(&self, other: &Self) -> bool {
        self.n == other.n && self.degrees == other.degrees && self.edges() == other.edges()
    }
}

impl Eq for DirectedGraph {}

impl Display for DirectedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Switch Directed Graph with n={}, directed degrees=({})",
            self.n,
            render_sequence(&self.degrees)
        )
    }
}
