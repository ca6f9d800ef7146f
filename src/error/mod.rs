//! Error types for stream binding and foreign object construction.
//!
//! This module provides:
//! - `DescriptorError`: Why a descriptor was rejected at construction
//! - `GatewayError`: A failed call into the foreign runtime
//! - `StreamError`: The error returned by every fallible stream operation

use thiserror::Error;

/// Reasons a descriptor cannot back a `FileOutputStream`.
///
/// Checks run in declaration order and the first failing one wins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    #[error("Descriptor is not a file")]
    NotAFile,
    #[error("Descriptor is closed")]
    Closed,
    #[error("Descriptor is opened for reading (mode '{mode}')")]
    OpenedForReading { mode: String },
    /// A file stream was configured without a path
    #[error("file stream requires a path")]
    MissingPath,
}

/// A call into the foreign runtime failed.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct GatewayError {
    /// What the runtime was asked to do
    pub message: String,
    /// The underlying error, if the runtime reported one
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl GatewayError {
    /// Create a new gateway error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Attach the underlying cause.
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl From<std::io::Error> for GatewayError {
    fn from(error: std::io::Error) -> Self {
        Self::new("foreign runtime I/O failure").with_source(error)
    }
}

#[derive(Debug, Error)]
pub enum StreamError {
    /// The constructor argument was rejected
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] DescriptorError),
    /// An attribute was read before it was assigned
    #[error("attribute '{attribute}' is not bound")]
    Unbound { attribute: &'static str },
    /// A write-once attribute was assigned twice
    #[error("attribute '{attribute}' is already bound")]
    AlreadyBound { attribute: &'static str },
    #[error("gateway call failed: {0}")]
    Gateway(#[from] GatewayError),
}

impl StreamError {
    /// Check if this error signals a misuse of the binding lifecycle.
    pub fn is_binding_error(&self) -> bool {
        matches!(
            self,
            StreamError::Unbound { .. } | StreamError::AlreadyBound { .. }
        )
    }
}

pub type Result<T, E = StreamError> = std::result::Result<T, E>;

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
