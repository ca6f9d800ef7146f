//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::StreamError;

/// A stream error rendered as a miette diagnostic, with a hint on how to fix
/// the call that raised it.
#[derive(Debug, Error, Diagnostic)]
#[error("{error}")]
pub struct StreamDiagnostic {
    #[source]
    error: StreamError,

    #[help]
    hint: &'static str,

    #[diagnostic(severity)]
    severity: Severity,
}

impl StreamDiagnostic {
    /// The wrapped stream error.
    pub fn error(&self) -> &StreamError {
        &self.error
    }

    pub fn into_inner(self) -> StreamError {
        self.error
    }
}

fn hint_for(error: &StreamError) -> &'static str {
    match error {
        StreamError::InvalidArgument(_) => "Pass an open descriptor in a writable mode",
        StreamError::Unbound { .. } => "Bind a runtime handle before resolving the foreign object",
        StreamError::AlreadyBound { .. } => "A runtime handle can be bound only once per stream",
        StreamError::Gateway(_) => "Check that the foreign runtime is reachable",
    }
}

impl From<StreamError> for StreamDiagnostic {
    fn from(error: StreamError) -> Self {
        StreamDiagnostic {
            hint: hint_for(&error),
            error,
            severity: Severity::Error,
        }
    }
}

impl From<StreamError> for miette::Report {
    fn from(error: StreamError) -> Self {
        miette::Report::new(StreamDiagnostic::from(error))
    }
}
