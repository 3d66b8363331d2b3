//! Structured error types shared across the switch-chain crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`SwitchError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (offending edge, vertex counts, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for graph construction, sampling sets and chains.
///
/// Construction errors (`InvalidGraph`, `InvalidDegreeSequence`) are raised
/// eagerly at the boundary; once a graph exists, `switch` only fails with
/// `EmptyCollection` when there is nothing to switch. `NotFound` and
/// `DuplicateItem` surface from [`SampleSet`](crate::SampleSet) misuse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum SwitchError {
    /// Edges out of bounds, duplicated, self-looping or malformed.
    #[error("invalid graph: {0}")]
    InvalidGraph(ErrorInfo),
    /// Degree sequence is not realisable by any graph of the family.
    #[error("invalid degree sequence: {0}")]
    InvalidDegreeSequence(ErrorInfo),
    /// Sampling from a collection with no elements.
    #[error("empty collection: {0}")]
    EmptyCollection(ErrorInfo),
    /// Item expected in a sample set is absent.
    #[error("item not found: {0}")]
    NotFound(ErrorInfo),
    /// Item inserted into a sample set is already present.
    #[error("duplicate item: {0}")]
    DuplicateItem(ErrorInfo),
    /// Chain or sweep configuration errors.
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// File system failures raised by front-ends.
    #[error("io error: {0}")]
    Io(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl SwitchError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            SwitchError::InvalidGraph(info)
            | SwitchError::InvalidDegreeSequence(info)
            | SwitchError::EmptyCollection(info)
            | SwitchError::NotFound(info)
            | SwitchError::DuplicateItem(info)
            | SwitchError::Config(info)
            | SwitchError::Io(info) => info,
        }
    }

    /// Shorthand for a non-graphical degree sequence error.
    pub fn not_graphical(family: &str) -> Self {
        SwitchError::InvalidDegreeSequence(
            ErrorInfo::new("not-graphical", "degree sequence is not graphical")
                .with_context("family", family),
        )
    }
}
