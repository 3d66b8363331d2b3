/// Fixed switch count returned until a mixing-time bound is wired in.
pub const DEFAULT_ITERATIONS: u64 = 1_000_000;

/// Suggests how many switches bring the chain within total variation
/// distance `epsilon` of uniform for the given degree sequence.
///
/// No bound is implemented yet; the answer is always [`DEFAULT_ITERATIONS`]
/// and a warning says so.
pub fn estimate_iterations(degree_sequence: &[usize], epsilon: f64) -> u64 {
    tracing::warn!(
        vertices = degree_sequence.len(),
        epsilon,
        iterations = DEFAULT_ITERATIONS,
        "iteration estimate is a fixed constant"
    );
    DEFAULT_ITERATIONS
}
