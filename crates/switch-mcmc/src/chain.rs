use serde::{Deserialize, Serialize};
use switch_core::{RngHandle, SwitchError, SwitchGraph};

use crate::config::{check_call_every, total_steps, ChainConfig};

/// Counters accumulated over every switch a chain has proposed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainStats {
    /// Switches attempted.
    pub proposed: u64,
    /// Switches applied.
    pub accepted: u64,
}

impl ChainStats {
    /// Fraction of proposed switches that were applied; zero before any proposal.
    pub fn acceptance_rate(&self) -> f64 {
        if self.proposed == 0 {
            0.0
        } else {
            self.accepted as f64 / self.proposed as f64
        }
    }
}

/// Switch-chain driver over a borrowed graph.
///
/// The chain owns its RNG and mutates the graph in place; dropping the chain
/// releases the graph in whatever state the last switch left it.
#[derive(Debug)]
pub struct Chain<'g, G: SwitchGraph> {
    graph: &'g mut G,
    rng: RngHandle,
    stats: ChainStats,
}

impl<'g, G: SwitchGraph> Chain<'g, G> {
    /// Wraps a graph and the RNG driving its switches.
    pub fn new(graph: &'g mut G, rng: RngHandle) -> Self {
        Self {
            graph,
            rng,
            stats: ChainStats::default(),
        }
    }

    /// Validates `config` and seeds the chain from its master seed.
    pub fn from_config(graph: &'g mut G, config: &ChainConfig) -> Result<Self, SwitchError> {
        config.validate()?;
        Ok(Self::new(
            graph,
            RngHandle::from_seed(config.seed_policy.master_seed),
        ))
    }

    /// Runs `iterations + burn_in` switches.
    ///
    /// Step `i` (zero based) invokes the callback when `i >= burn_in` and
    /// `(i + 1) % call_every == 0`; the returned vector holds the callback
    /// results in order. Without a callback the vector is empty and
    /// `call_every` is ignored.
    pub fn mcmc<T, F>(
        &mut self,
        iterations: usize,
        mut callback: Option<F>,
        call_every: usize,
        burn_in: usize,
    ) -> Result<Vec<T>, SwitchError>
    where
        F: FnMut(&G) -> T,
    {
        if callback.is_some() {
            check_call_every(call_every)?;
        }
        let steps = total_steps(iterations, burn_in)?;
        let mut history = Vec::new();
        let before = self.stats;
        for step in 0..steps {
            let accepted = self.graph.switch(&mut self.rng)?;
            self.stats.proposed += 1;
            if accepted {
                self.stats.accepted += 1;
            }
            if let Some(callback) = callback.as_mut() {
                if step >= burn_in && (step + 1) % call_every == 0 {
                    history.push(callback(&*self.graph));
                }
            }
        }
        let run = ChainStats {
            proposed: self.stats.proposed - before.proposed,
            accepted: self.stats.accepted - before.accepted,
        };
        tracing::debug!(
            steps,
            accepted = run.accepted,
            acceptance_rate = run.acceptance_rate(),
            samples = history.len(),
            "chain run finished"
        );
        Ok(history)
    }

    /// Runs with the step counts taken from `config`.
    pub fn run<T, F>(
        &mut self,
        config: &ChainConfig,
        callback: Option<F>,
    ) -> Result<Vec<T>, SwitchError>
    where
        F: FnMut(&G) -> T,
    {
        self.mcmc(config.iterations, callback, config.call_every, config.burn_in)
    }

    /// Counters accumulated since construction.
    pub fn stats(&self) -> ChainStats {
        self.stats
    }

    /// Read access to the current state.
    pub fn graph(&self) -> &G {
        &*self.graph
    }

    /// Releases the RNG so a follow-up run can continue the same stream.
    pub fn into_rng(self) -> RngHandle {
        self.rng
    }
}
