//! Stream configuration.

use serde::Deserialize;

use crate::error::{DescriptorError, Result};
use crate::runtime::ForeignRuntime;
use crate::stream::{
    AnyOutputStream, ByteArrayOutputStream, FileDescriptor, FileOutputStream, STDOUT_NAME,
};

/// Kind of output stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamKind {
    /// The runtime's standard output
    Stdout,
    /// A file created by the runtime
    File,
    /// An in-memory byte buffer
    Buffer,
}

impl StreamKind {
    /// Parse a kind from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "stdout" | "-" => Some(StreamKind::Stdout),
            "file" => Some(StreamKind::File),
            "buffer" | "memory" => Some(StreamKind::Buffer),
            _ => None,
        }
    }
}

/// Configuration for a single output stream.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StreamConfig {
    /// Kind of stream: "stdout", "file" or "buffer"
    pub kind: StreamKind,
    /// File path (for file streams)
    #[serde(default)]
    pub path: Option<String>,
    /// Open mode of the descriptor, "w" when absent
    #[serde(default)]
    pub mode: Option<String>,
}

impl StreamConfig {
    /// Create a configuration for the given kind.
    pub fn new(kind: StreamKind) -> Self {
        Self {
            kind,
            path: None,
            mode: None,
        }
    }

    pub fn stdout() -> Self {
        Self::new(StreamKind::Stdout)
    }

    pub fn file(path: impl Into<String>) -> Self {
        Self::new(StreamKind::File).with_path(path)
    }

    pub fn buffer() -> Self {
        Self::new(StreamKind::Buffer)
    }

    /// Set the file path.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set the open mode.
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    fn mode_or_default(&self) -> &str {
        self.mode.as_deref().unwrap_or("w")
    }

    /// Build an unbound stream from this configuration.
    pub fn build_stream<R: ForeignRuntime>(&self) -> Result<AnyOutputStream<R>> {
        let mode = self.mode_or_default();
        let stream = match self.kind {
            StreamKind::Stdout => {
                let descriptor = FileDescriptor::new(STDOUT_NAME, mode);
                AnyOutputStream::File(FileOutputStream::new(descriptor)?)
            }
            StreamKind::File => {
                let path = self.path.as_deref().ok_or(DescriptorError::MissingPath)?;
                AnyOutputStream::File(FileOutputStream::new(FileDescriptor::new(path, mode))?)
            }
            StreamKind::Buffer => AnyOutputStream::ByteArray(ByteArrayOutputStream::new()),
        };
        Ok(stream)
    }
}
