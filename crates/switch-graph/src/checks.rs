//! Structural validity checks and degree-sequence graphicality tests.
//!
//! The `valid_*` predicates are pure and never fail; the `check_*` twins carry
//! the same logic but describe the first offending edge, which is what the
//! graph constructors report back as [`SwitchError::InvalidGraph`].

use std::collections::BTreeSet;

use switch_core::errors::{ErrorInfo, SwitchError};

use crate::sequence::DirectedDegree;

/// Returns whether every element of the iterator is distinct.
///
/// Stops at the first repeated element.
pub fn all_unique<T: Ord, I: IntoIterator<Item = T>>(items: I) -> bool {
    let mut seen = BTreeSet::new();
    items.into_iter().all(|item| seen.insert(item))
}

/// Returns whether the edges describe a bipartite graph on `nx + ny` vertices.
pub fn valid_bipartite_graph(nx: usize, ny: usize, edges: &[(usize, usize)]) -> bool {
    check_bipartite_graph(nx, ny, edges).is_ok()
}

/// Returns whether the edges describe a loopless directed graph on `n` vertices.
pub fn valid_directed_graph(n: usize, edges: &[(usize, usize)]) -> bool {
    check_directed_graph(n, edges).is_ok()
}

/// Returns whether the edges describe a simple undirected graph on `n` vertices.
pub fn valid_simple_graph(n: usize, edges: &[(usize, usize)]) -> bool {
    check_simple_graph(n, edges).is_ok()
}

/// Returns whether the hyperedges describe a multi-hypergraph on `n` vertices.
pub fn valid_multi_hypergraph(n: usize, edges: &[Vec<usize>]) -> bool {
    check_multi_hypergraph(n, edges).is_ok()
}

/// Describes the first edge that breaks the bipartite contract.
pub fn check_bipartite_graph(
    nx: usize,
    ny: usize,
    edges: &[(usize, usize)],
) -> Result<(), SwitchError> {
    let mut seen = BTreeSet::new();
    for &(x, y) in edges {
        if x >= nx || y >= ny {
            return Err(invalid_edge("out-of-bounds", "edge endpoint is not a vertex", (x, y))
                .with_context("nx", nx.to_string())
                .with_context("ny", ny.to_string())
                .into_graph_error());
        }
        if !seen.insert((x, y)) {
            return Err(invalid_edge("duplicate-edge", "edge appears more than once", (x, y))
                .into_graph_error());
        }
    }
    Ok(())
}

/// Describes the first edge that breaks the directed graph contract.
pub fn check_directed_graph(n: usize, edges: &[(usize, usize)]) -> Result<(), SwitchError> {
    let mut seen = BTreeSet::new();
    for &(u, v) in edges {
        check_pair(n, u, v)?;
        if !seen.insert((u, v)) {
            return Err(invalid_edge("duplicate-edge", "edge appears more than once", (u, v))
                .into_graph_error());
        }
    }
    Ok(())
}

/// Describes the first edge that breaks the simple graph contract.
///
/// Edges are unordered, so `(u, v)` and `(v, u)` count as duplicates.
pub fn check_simple_graph(n: usize, edges: &[(usize, usize)]) -> Result<(), SwitchError> {
    let mut seen = BTreeSet::new();
    for &(u, v) in edges {
        check_pair(n, u, v)?;
        if !seen.insert((u.min(v), u.max(v))) {
            return Err(invalid_edge("duplicate-edge", "edge appears more than once", (u, v))
                .into_graph_error());
        }
    }
    Ok(())
}

/// Describes the first hyperedge that breaks the multi-hypergraph contract.
///
/// Repeated hyperedges are allowed; repeated members inside one are not.
pub fn check_multi_hypergraph(n: usize, edges: &[Vec<usize>]) -> Result<(), SwitchError> {
    for (index, members) in edges.iter().enumerate() {
        let context = || format!("{index}: {members:?}");
        if members.is_empty() {
            return Err(SwitchError::InvalidGraph(
                ErrorInfo::new("empty-hyperedge", "hyperedge has no members")
                    .with_context("hyperedge", context()),
            ));
        }
        if let Some(vertex) = members.iter().find(|&&vertex| vertex >= n) {
            return Err(SwitchError::InvalidGraph(
                ErrorInfo::new("out-of-bounds", "hyperedge member is not a vertex")
                    .with_context("hyperedge", context())
                    .with_context("vertex", vertex.to_string())
                    .with_context("n", n.to_string()),
            ));
        }
        if !all_unique(members.iter()) {
            return Err(SwitchError::InvalidGraph(
                ErrorInfo::new("duplicate-member", "hyperedge repeats a vertex")
                    .with_context("hyperedge", context()),
            ));
        }
    }
    Ok(())
}

/// Gale–Ryser test for a bipartite degree sequence.
///
/// Totals must agree and, with `dx` sorted descending, every prefix of
/// length `k` must satisfy `sum(dx[..k]) <= sum(min(d, k) for d in dy)`.
pub fn degree_sequence_graphical(dx: &[usize], dy: &[usize]) -> bool {
    if dx.iter().sum::<usize>() != dy.iter().sum::<usize>() {
        return false;
    }
    let mut sorted = dx.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    let mut prefix = 0usize;
    for (index, degree) in sorted.iter().enumerate() {
        let k = index + 1;
        prefix += degree;
        let capacity: usize = dy.iter().map(|&d| d.min(k)).sum();
        if prefix > capacity {
            return false;
        }
    }
    true
}

/// Erdős–Gallai test for a simple graph degree sequence.
///
/// The degree sum must be even and, over the sequence sorted descending, for
/// every `k` in `1..=n`: `sum(d[..k]) <= k(k-1) + sum(min(d_i, k) for d_i in d[k..])`.
pub fn simple_degree_sequence_graphical(degrees: &[usize]) -> bool {
    if degrees.iter().sum::<usize>() % 2 != 0 {
        return false;
    }
    let mut sorted = degrees.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    let mut prefix = 0usize;
    for k in 1..=sorted.len() {
        prefix += sorted[k - 1];
        let tail: usize = sorted[k..].iter().map(|&d| d.min(k)).sum();
        if prefix > k * (k - 1) + tail {
            return false;
        }
    }
    true
}

/// Fulkerson–Chen test for a directed degree sequence.
///
/// Out and in totals must agree and, over the pairs sorted by
/// `(out, in)` descending, every `k` in `1..=n` must satisfy
/// `sum(out[..k]) <= sum(min(in_i, k - 1) for i < k) + sum(min(in_i, k) for i >= k)`.
pub fn directed_degree_sequence_graphical(degrees: &[DirectedDegree]) -> bool {
    let out_total: usize = degrees.iter().map(|d| d.out_degree).sum();
    let in_total: usize = degrees.iter().map(|d| d.in_degree).sum();
    if out_total != in_total {
        return false;
    }
    let mut sorted = degrees.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    let mut prefix = 0usize;
    for k in 1..=sorted.len() {
        prefix += sorted[k - 1].out_degree;
        let head: usize = sorted[..k].iter().map(|d| d.in_degree.min(k - 1)).sum();
        let tail: usize = sorted[k..].iter().map(|d| d.in_degree.min(k)).sum();
        if prefix > head + tail {
            return false;
        }
    }
    true
}

fn check_pair(n: usize, u: usize, v: usize) -> Result<(), SwitchError> {
    if u >= n || v >= n {
        return Err(invalid_edge("out-of-bounds", "edge endpoint is not a vertex", (u, v))
            .with_context("n", n.to_string())
            .into_graph_error());
    }
    if u == v {
        return Err(invalid_edge("self-loop", "edge joins a vertex to itself", (u, v))
            .into_graph_error());
    }
    Ok(())
}

fn invalid_edge(code: &str, message: &str, edge: (usize, usize)) -> ErrorInfo {
    ErrorInfo::new(code, message).with_context("edge", format!("{edge:?}"))
}

trait IntoGraphError {
    fn into_graph_error(self) -> SwitchError;
}

impl IntoGraphError for ErrorInfo {
    fn into_graph_error(self) -> SwitchError {
        SwitchError::InvalidGraph(self)
    }
}
