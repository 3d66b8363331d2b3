use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use switch_core::{ErrorInfo, SwitchError};

/// YAML-configurable parameters governing a single chain run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainConfig {
    /// Number of switches executed after burn-in.
    #[serde(default = "default_iterations")]
    pub iterations: usize,
    /// Number of initial switches during which the callback is never invoked.
    #[serde(default = "default_burn_in")]
    pub burn_in: usize,
    /// Interval, in switches, between callback invocations.
    #[serde(default = "default_call_every")]
    pub call_every: usize,
    /// Master seed and substream policy.
    #[serde(default)]
    pub seed_policy: SeedPolicy,
}

fn default_iterations() -> usize {
    10_000
}

fn default_burn_in() -> usize {
    500
}

fn default_call_every() -> usize {
    100
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            iterations: default_iterations(),
            burn_in: default_burn_in(),
            call_every: default_call_every(),
            seed_policy: SeedPolicy::default(),
        }
    }
}

impl ChainConfig {
    /// Parses a configuration from YAML; missing fields take their defaults.
    pub fn from_yaml_str(contents: &str) -> Result<Self, SwitchError> {
        serde_yaml::from_str(contents).map_err(|err| {
            SwitchError::Config(
                ErrorInfo::new("yaml-deserialize", err.to_string())
                    .with_hint("expected keys: iterations, burn_in, call_every, seed_policy"),
            )
        })
    }

    /// Reads and parses a YAML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SwitchError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|err| {
            SwitchError::Io(
                ErrorInfo::new("config-read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        let config = Self::from_yaml_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialises the configuration back to YAML.
    pub fn to_yaml_string(&self) -> Result<String, SwitchError> {
        serde_yaml::to_string(self)
            .map_err(|err| SwitchError::Config(ErrorInfo::new("yaml-serialize", err.to_string())))
    }

    /// Rejects parameter combinations the chain cannot run.
    pub fn validate(&self) -> Result<(), SwitchError> {
        check_call_every(self.call_every)?;
        total_steps(self.iterations, self.burn_in)?;
        Ok(())
    }
}

/// Deterministic seeding configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedPolicy {
    /// Master seed used for the run.
    #[serde(default = "default_master_seed")]
    pub master_seed: u64,
    /// Optional label recorded alongside results; it does not alter the seed.
    #[serde(default)]
    pub label: Option<String>,
}

fn default_master_seed() -> u64 {
    0x05EE_D5EE_DD15_5EED_u64
}

impl Default for SeedPolicy {
    fn default() -> Self {
        Self {
            master_seed: default_master_seed(),
            label: None,
        }
    }
}

pub(crate) fn check_call_every(call_every: usize) -> Result<(), SwitchError> {
    if call_every == 0 {
        return Err(SwitchError::Config(
            ErrorInfo::new("invalid-call-every", "call_every must be positive")
                .with_hint("use 1 to invoke the callback after every switch"),
        ));
    }
    Ok(())
}

pub(crate) fn total_steps(iterations: usize, burn_in: usize) -> Result<usize, SwitchError> {
    iterations.checked_add(burn_in).ok_or_else(|| {
        SwitchError::Config(
            ErrorInfo::new("step-overflow", "iterations plus burn-in overflow")
                .with_context("iterations", iterations.to_string())
                .with_context("burn_in", burn_in.to_string()),
        )
    })
}
