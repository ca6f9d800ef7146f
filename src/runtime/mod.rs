//! The foreign runtime boundary.
//!
//! This module provides:
//! - `ForeignRuntime`: Trait for hosts that build output objects on request
//! - `ForeignObject`: Trait for handles to objects living in such a host
//! - `LocalRuntime`: An in-process runtime backed by real writers

mod local;

use std::fmt::Debug;

use crate::error::GatewayError;

pub use local::{ConstructionCounts, LocalObject, LocalRuntime};

/// A handle to an object living in a foreign runtime.
///
/// Cloning a handle must not copy the foreign object: two clones refer to the
/// same object on the other side.
pub trait ForeignObject: Clone + Debug + Send + Sync {
    /// Render the object as text, the way the runtime's `toString` would.
    fn to_text(&self) -> Result<String, GatewayError>;
}

/// Trait for foreign runtimes able to host output streams.
///
/// Implementors are typically a gateway into an embedded JVM, but anything
/// that can build the three kinds of output object qualifies.
pub trait ForeignRuntime: Send + Sync + Debug {
    type Object: ForeignObject;

    /// The runtime's well-known standard output object.
    ///
    /// Must return the same object on every call.
    fn standard_output(&self) -> Result<Self::Object, GatewayError>;

    /// Build a new file output stream writing to `name`.
    fn new_file_output(&self, name: &str) -> Result<Self::Object, GatewayError>;

    /// Build a new, empty in-memory byte buffer.
    fn new_byte_array_output(&self) -> Result<Self::Object, GatewayError>;
}
