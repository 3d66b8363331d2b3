#![deny(missing_docs)]
#![doc = "Core traits and data types shared by the switch-chain graph samplers."]

use std::fmt::Debug;

pub mod errors;
pub mod rng;
pub mod sample_set;

pub use errors::{ErrorInfo, SwitchError};
pub use rng::{derive_substream_seed, RngHandle};
pub use sample_set::SampleSet;

/// Capability shared by every graph family driven by the switch chain.
///
/// Implementations keep a fixed vertex set and a degree sequence that is
/// computed once at construction; `switch` either leaves the graph untouched
/// or removes exactly two edges and adds exactly two, never altering any
/// degree.
pub trait SwitchGraph: Debug {
    /// Edge representation returned by [`SwitchGraph::edges`].
    type Edge: Clone + Ord + Debug;
    /// Degree information returned by [`SwitchGraph::degree_sequence`].
    type DegreeSequence: Clone + PartialEq + Debug;

    /// Returns the degree sequence fixed at construction.
    fn degree_sequence(&self) -> Self::DegreeSequence;

    /// Returns every edge of the current state.
    fn edges(&self) -> Vec<Self::Edge>;

    /// Returns the number of edges.
    fn edge_count(&self) -> usize;

    /// Returns whether the current state is simple for this family.
    fn simple(&self) -> bool;

    /// Attempts one degree-preserving switch.
    ///
    /// Returns `Ok(true)` when the move was applied and `Ok(false)` when it was
    /// rejected without mutation. Fails with
    /// [`SwitchError::EmptyCollection`] when the graph has no edges.
    fn switch(&mut self, rng: &mut RngHandle) -> Result<bool, SwitchError>;
}
