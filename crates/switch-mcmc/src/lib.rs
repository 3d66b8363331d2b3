#![deny(missing_docs)]
#![doc = "Switch-chain driver, run configuration and one-call samplers for graphs with a prescribed degree sequence."]

/// Chain driver and acceptance counters.
pub mod chain;
/// YAML configuration schema and defaults.
pub mod config;
/// Placeholder mixing-time estimate.
pub mod convergence;
/// Deterministic seed derivation helpers.
pub mod determinism;
/// Greedy construction followed by switching, in one call.
pub mod sample;

pub use chain::{Chain, ChainStats};
pub use config::{ChainConfig, SeedPolicy};
pub use convergence::estimate_iterations;
pub use determinism::{job_rng, job_seed};
pub use sample::{
    resample, sample_bipartite_graph, sample_directed_graph, sample_multi_hypergraph,
    sample_simple_graph,
};
