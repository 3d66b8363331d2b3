use std::fmt::{self, Display};

use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use switch_core::{ErrorInfo, RngHandle, SampleSet, SwitchError, SwitchGraph};

use crate::bipartite::BipartiteGraph;
use crate::checks::{all_unique, check_multi_hypergraph};
use crate::sequence::{anchor_weights, no_edges, render_sequence, Side};

/// Labelling applied to hyperedges when converting to a bipartite graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeOrder {
    /// Hyperedges sorted by their member lists; reproducible without an RNG.
    Sorted,
    /// Hyperedges in a uniformly random order drawn from the supplied RNG.
    Shuffled,
}

/// Hypergraph whose hyperedges may repeat.
///
/// Stored as its incidence structure from both sides: `memberships[v]` holds
/// the hyperedge ids containing vertex `v` and `members[e]` holds the vertices
/// of hyperedge `e`. A switch swaps one vertex between two hyperedges and
/// updates both sides.
#[derive(Debug, Clone)]
pub struct MultiHypergraph {
    n: usize,
    memberships: Vec<SampleSet<usize>>,
    members: Vec<SampleSet<usize>>,
    degrees: Vec<usize>,
    edge_sizes: Vec<usize>,
    anchors: Option<WeightedIndex<usize>>,
}

impl MultiHypergraph {
    /// Builds a hypergraph on `n` vertices from non-empty member lists.
    pub fn new(n: usize, edges: &[Vec<usize>]) -> Result<Self, SwitchError> {
        check_multi_hypergraph(n, edges)?;
        let mut memberships = vec![SampleSet::new(); n];
        let mut members = Vec::with_capacity(edges.len());
        for (edge, vertices) in edges.iter().enumerate() {
            for &vertex in vertices {
                memberships[vertex].add(edge)?;
            }
            members.push(SampleSet::from_items(vertices.iter().copied())?);
        }
        let degrees: Vec<usize> = memberships.iter().map(SampleSet::len).collect();
        let edge_sizes: Vec<usize> = members.iter().map(SampleSet::len).collect();
        tracing::debug!(n, m = edges.len(), "multi-hypergraph built");
        Ok(Self {
            n,
            memberships,
            members,
            anchors: anchor_weights(&degrees),
            degrees,
            edge_sizes,
        })
    }

    /// Builds a deterministic realisation from vertex degrees and hyperedge
    /// sizes via the bipartite construction.
    pub fn from_degree_sequence(
        degrees: &[usize],
        edge_sizes: &[usize],
    ) -> Result<Self, SwitchError> {
        if let Some(index) = edge_sizes.iter().position(|&size| size == 0) {
            return Err(SwitchError::InvalidDegreeSequence(
                ErrorInfo::new("empty-hyperedge", "hyperedge sizes must be positive")
                    .with_context("edge", index.to_string()),
            ));
        }
        let incidence = BipartiteGraph::from_degree_sequence(degrees, edge_sizes)?;
        let edges: Vec<Vec<usize>> = incidence
            .neighbourhoods(Side::Y)
            .into_iter()
            .map(|members| members.into_iter().collect())
            .collect();
        Self::new(degrees.len(), &edges)
    }

    /// Number of vertices.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of hyperedges.
    pub fn m(&self) -> usize {
        self.members.len()
    }

    /// Labels of the hyperedges containing `vertex`, sorted.
    pub fn incident_edges(&self, vertex: usize) -> Vec<usize> {
        let mut labels: Vec<usize> = self
            .memberships
            .get(vertex)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default();
        labels.sort_unstable();
        labels
    }

    /// Size of each hyperedge, fixed at construction.
    pub fn edge_sizes(&self) -> Vec<usize> {
        self.edge_sizes.clone()
    }

    /// Canonical bipartite realisation: X are the vertices, Y the hyperedges.
    ///
    /// Hyperedges are unlabelled, so the Y labels follow `order`. The RNG is
    /// only consumed for [`EdgeOrder::Shuffled`].
    pub fn to_bipartite_graph(
        &self,
        order: EdgeOrder,
        rng: &mut RngHandle,
    ) -> Result<BipartiteGraph, SwitchError> {
        let mut hyperedges = self.edges();
        match order {
            EdgeOrder::Sorted => hyperedges.sort(),
            EdgeOrder::Shuffled => hyperedges.shuffle(rng),
        }
        let incidence: Vec<(usize, usize)> = hyperedges
            .iter()
            .enumerate()
            .flat_map(|(y, members)| members.iter().map(move |&x| (x, y)))
            .collect();
        BipartiteGraph::new(self.n, hyperedges.len(), &incidence)
    }
}

impl SwitchGraph for MultiHypergraph {
    type Edge = Vec<usize>;
    type DegreeSequence = Vec<usize>;

    fn degree_sequence(&self) -> Vec<usize> {
        self.degrees.clone()
    }

    /// Hyperedges in label order, each with its members sorted.
    fn edges(&self) -> Vec<Vec<usize>> {
        self.members
            .iter()
            .map(|set| {
                let mut members: Vec<usize> = set.iter().copied().collect();
                members.sort_unstable();
                members
            })
            .collect()
    }

    fn edge_count(&self) -> usize {
        self.members.len()
    }

    /// No two hyperedges have the same members.
    fn simple(&self) -> bool {
        all_unique(self.edges())
    }

    fn switch(&mut self, rng: &mut RngHandle) -> Result<bool, SwitchError> {
        let anchors = self.anchors.as_ref().ok_or_else(|| no_edges("multi-hypergraph"))?;
        let x1 = anchors.sample(rng);
        let x2 = anchors.sample(rng);
        let e1 = *self.memberships[x1].choice(rng)?;
        let e2 = *self.memberships[x2].choice(rng)?;

        if self.memberships[x2].contains(&e1) || self.memberships[x1].contains(&e2) {
            return Ok(false);
        }
        self.memberships[x1].replace(&e1, e2, false)?;
        self.memberships[x2].replace(&e2, e1, false)?;
        self.members[e1].replace(&x1, x2, false)?;
        self.members[e2].replace(&x2, x1, false)?;
        Ok(true)
    }
}

impl PartialEq for MultiHypergraph {
    fn eq(&self, other: &Self) -> bool {
        self.n == other.n
            && self.degrees == other.degrees
            && self.edge_sizes == other.edge_sizes
            && self.edges() == other.edges()
    }
}

impl Eq for MultiHypergraph {}

impl Display for MultiHypergraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Switch Multi-Hypergraph with n={}, degrees=({}), edge sizes=({})",
            self.n,
            render_sequence(&self.degrees),
            render_sequence(&self.edge_sizes)
        )
    }
}
