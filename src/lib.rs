//! # ddq-streams
//!
//! Output streams whose real counterpart lives in a foreign runtime, such as
//! a JVM reached through a gateway.
//!
//! ## Overview
//!
//! ddq-streams provides:
//! - **Lazy binding**: A stream is created first and bound to a runtime handle later
//! - **Write-once handles**: Binding a second runtime is an error
//! - **Memoized foreign objects**: The foreign counterpart is built on first access and cached
//! - **File and buffer streams**: `FileOutputStream` (files or stdout) and `ByteArrayOutputStream`
//! - **Pluggable runtimes**: Implement `ForeignRuntime` or use `LocalRuntime`
//! - **Configuration**: Describe streams with serde via `StreamConfig`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use ddq_streams::{ByteArrayOutputStream, LocalRuntime, OutputStream};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let stream = ByteArrayOutputStream::new();
//!     stream.bind_runtime(Arc::new(LocalRuntime::new()))?;
//!
//!     let mut buffer = stream.foreign_object()?;
//!     std::io::Write::write_all(&mut buffer, b"  checks passed \n")?;
//!     assert_eq!(stream.get_output()?, "checks passed");
//!     Ok(())
//! }
//! ```
//!
//! ## Lifecycle
//!
//! Every stream is in one of three states (`StreamState`): no handle, handle
//! bound, object resolved. Reading the foreign object without a handle fails
//! with `StreamError::Unbound`, binding twice fails with
//! `StreamError::AlreadyBound`. The first successful read builds the foreign
//! object; every later read returns that same object.
//!
//! ## Features
//!
//! - `miette` - Pretty error reporting with miette
//! - `demo` - Builds the `ddq_streams_demo` binary

pub mod config;
pub mod error;
pub mod runtime;
pub mod stream;

pub use config::{StreamConfig, StreamKind};
pub use error::{DescriptorError, GatewayError, Result, StreamError};
pub use runtime::{ConstructionCounts, ForeignObject, ForeignRuntime, LocalObject, LocalRuntime};
pub use stream::{
    AnyOutputStream, ByteArrayOutputStream, Descriptor, DescriptorInfo, DescriptorTarget,
    FileDescriptor, FileOutputStream, OutputStream, STDOUT_NAME, StreamCore, StreamState,
    WriteOnce,
};

#[cfg(feature = "miette")]
pub use error::StreamDiagnostic;
