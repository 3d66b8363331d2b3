//! Greedy deterministic realisations of graphical degree sequences.
//!
//! Each builder is fail-fast: the sequence is tested for graphicality first and
//! rejected with [`SwitchError::InvalidDegreeSequence`]. The stub bookkeeping
//! still refuses to hand out a stub that does not exist, so a sequence slipping
//! past the test cannot produce a malformed edge list.

use switch_core::errors::SwitchError;

use crate::checks::{
    degree_sequence_graphical, directed_degree_sequence_graphical,
    simple_degree_sequence_graphical,
};
use crate::sequence::{sort_descending, DirectedDegree};

/// Builds a bipartite realisation of `(dx, dy)`.
///
/// X vertices are visited by decreasing degree; each one takes one stub from
/// every Y vertex among the `d` with the most remaining stubs.
pub fn gale_ryser_edges(dx: &[usize], dy: &[usize]) -> Result<Vec<(usize, usize)>, SwitchError> {
    if !degree_sequence_graphical(dx, dy) {
        return Err(SwitchError::not_graphical("bipartite"));
    }
    let mut sx: Vec<(usize, usize)> = dx.iter().enumerate().map(|(x, &d)| (d, x)).collect();
    sort_descending(&mut sx);
    let mut sy: Vec<(usize, usize)> = dy.iter().enumerate().map(|(y, &d)| (d, y)).collect();
    sort_descending(&mut sy);

    let mut edges = Vec::with_capacity(dx.iter().sum());
    for &(degree, x) in &sx {
        if degree > sy.len() {
            return Err(SwitchError::not_graphical("bipartite"));
        }
        for stub in sy.iter_mut().take(degree) {
            if stub.0 == 0 {
                return Err(SwitchError::not_graphical("bipartite"));
            }
            stub.0 -= 1;
            edges.push((x, stub.1));
        }
        sort_descending(&mut sy);
    }
    tracing::debug!(
        nx = dx.len(),
        ny = dy.len(),
        edges = edges.len(),
        "greedy bipartite realisation"
    );
    Ok(edges)
}

/// Builds a simple graph realisation of `degrees` (Havel–Hakimi).
///
/// The vertex with the most remaining stubs is joined to the next `d`
/// vertices in stub order until every stub is spent.
pub fn havel_hakimi_edges(degrees: &[usize]) -> Result<Vec<(usize, usize)>, SwitchError> {
    if !simple_degree_sequence_graphical(degrees) {
        return Err(SwitchError::not_graphical("simple"));
    }
    let mut stubs: Vec<(usize, usize)> = degrees.iter().enumerate().map(|(v, &d)| (d, v)).collect();
    sort_descending(&mut stubs);

    let total = degrees.iter().sum::<usize>() / 2;
    let mut edges = Vec::with_capacity(total);
    while let Some(&(degree, u)) = stubs.first() {
        if degree == 0 {
            break;
        }
        if degree >= stubs.len() {
            return Err(SwitchError::not_graphical("simple"));
        }
        stubs[0].0 = 0;
        for stub in stubs[1..=degree].iter_mut() {
            if stub.0 == 0 {
                return Err(SwitchError::not_graphical("simple"));
            }
            stub.0 -= 1;
            edges.push((u.min(stub.1), u.max(stub.1)));
        }
        sort_descending(&mut stubs);
    }
    tracing::debug!(
        n = degrees.len(),
        edges = edges.len(),
        "havel-hakimi realisation"
    );
    Ok(edges)
}

/// Builds a loopless directed realisation of `degrees` (Kleitman–Wang).
///
/// Repeatedly picks the vertex with the most remaining in-stubs (ties by
/// out-stubs, then by label) and feeds it from the other vertices with the
/// largest remaining `(out, in)` stubs.
pub fn kleitman_wang_edges(degrees: &[DirectedDegree]) -> Result<Vec<(usize, usize)>, SwitchError> {
    if !directed_degree_sequence_graphical(degrees) {
        return Err(SwitchError::not_graphical("directed"));
    }
    let mut remaining: Vec<DirectedDegree> = degrees.to_vec();
    let mut edges = Vec::with_capacity(degrees.iter().map(|d| d.out_degree).sum());

    loop {
        let target = remaining
            .iter()
            .enumerate()
            .filter(|(_, stubs)| stubs.in_degree > 0)
            .max_by_key(|&(v, stubs)| (stubs.in_degree, stubs.out_degree, v))
            .map(|(v, _)| v);
        let Some(target) = target else { break };
        let wanted = remaining[target].in_degree;
        remaining[target].in_degree = 0;

        let mut sources: Vec<(DirectedDegree, usize)> = remaining
            .iter()
            .enumerate()
            .filter(|&(v, _)| v != target)
            .map(|(v, &stubs)| (stubs, v))
            .collect();
        sort_descending(&mut sources);
        if sources.len() < wanted {
            return Err(SwitchError::not_graphical("directed"));
        }
        for &(stubs, source) in sources.iter().take(wanted) {
            if stubs.out_degree == 0 {
                return Err(SwitchError::not_graphical("directed"));
            }
            remaining[source].out_degree -= 1;
            edges.push((source, target));
        }
    }
    if remaining.iter().any(|stubs| stubs.out_degree > 0) {
        return Err(SwitchError::not_graphical("directed"));
    }
    tracing::debug!(
        n = degrees.len(),
        edges = edges.len(),
        "kleitman-wang realisation"
    );
    Ok(edges)
}
