//! Error types for dotprops
//!
//! Provides a unified error type for all operations.
//!
//! Most of the model is deliberately lenient: absent keys are `None`,
//! unresolvable `${name}` references stay verbatim and odd lines still
//! classify as one of the three entry kinds. Errors only come from the
//! file boundary, JSON rendering and reference cycles during expansion.

use thiserror::Error;

/// Result type alias using PropsError
pub type Result<T> = std::result::Result<T, PropsError>;

/// Unified error type for dotprops operations
#[derive(Debug, Error)]
pub enum PropsError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Expansion Errors
    // -------------------------------------------------------------------------
    /// `key` was reached again while it was still being expanded.
    /// `chain` lists the keys on the expansion stack, outermost first.
    #[error("Cyclic reference while expanding '{key}': {}", .chain.join(" -> "))]
    CyclicReference { key: String, chain: Vec<String> },

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),
}
