use switch_core::{derive_substream_seed, RngHandle};

/// Derives the deterministic seed used for one job of a sweep.
pub fn job_seed(master_seed: u64, job_index: usize) -> u64 {
    derive_substream_seed(master_seed, job_index as u64)
}

/// Returns a fresh handle seeded for one job of a sweep.
pub fn job_rng(master_seed: u64, job_index: usize) -> RngHandle {
    RngHandle::from_seed(job_seed(master_seed, job_index))
}
