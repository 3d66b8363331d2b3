#![deny(missing_docs)]
#![doc = "Bipartite, directed, simple and multi-hypergraph representations tuned for the switch chain, with validity checks and greedy constructors."]

mod bipartite;
pub mod checks;
mod directed;
pub mod generators;
mod hypergraph;
mod sequence;
mod simple;

pub use bipartite::BipartiteGraph;
pub use checks::{
    all_unique, check_bipartite_graph, check_directed_graph, check_multi_hypergraph,
    check_simple_graph, degree_sequence_graphical, directed_degree_sequence_graphical,
    simple_degree_sequence_graphical, valid_bipartite_graph, valid_directed_graph,
    valid_multi_hypergraph, valid_simple_graph,
};
pub use directed::DirectedGraph;
pub use generators::{gale_ryser_edges, havel_hakimi_edges, kleitman_wang_edges};
pub use hypergraph::{EdgeOrder, MultiHypergraph};
pub use sequence::{BipartiteDegrees, DirectedDegree, Side};
pub use simple::SimpleGraph;
pub use switch_core::SwitchGraph;
