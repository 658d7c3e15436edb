// File: crates/pulseline-core/src/error.rs
// Summary: Engine error type. Only malformed input is a structured failure;
// every other edge condition degrades to a documented no-op.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ChartError {
    /// The caller handed the engine data it cannot plot at all.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
}
