//! Output streams lazily bound to foreign runtime objects.
//!
//! This module provides:
//! - `OutputStream`: Trait holding the bind-then-resolve lifecycle
//! - `StreamCore`: The write-once handle and memoized object shared by all streams
//! - `FileOutputStream`: Stream backed by a file descriptor or stdout
//! - `ByteArrayOutputStream`: Stream backed by an in-memory buffer
//! - `AnyOutputStream`: Either of the above, as produced from configuration
//!
//! A stream moves through three states: no handle, handle bound, object
//! resolved. Nothing leaves the last state.

mod any;
mod byte_array;
mod descriptor;
mod file;
mod write_once;

use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, trace};

use crate::error::Result;
use crate::runtime::ForeignRuntime;

pub use any::AnyOutputStream;
pub use byte_array::ByteArrayOutputStream;
pub use descriptor::{
    Descriptor, DescriptorInfo, DescriptorTarget, FileDescriptor, STDOUT_NAME,
    mode_permits_writing,
};
pub use file::FileOutputStream;
pub use write_once::WriteOnce;

/// Lifecycle position of a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamState {
    /// No runtime handle bound yet
    NoHandle,
    /// Handle bound, foreign object not built yet
    HandleBound,
    /// Foreign object built and cached
    ObjectResolved,
}

/// Runtime handle slot plus foreign object cache.
#[derive(Debug)]
pub struct StreamCore<R: ForeignRuntime> {
    runtime: WriteOnce<Arc<R>>,
    object: Mutex<Option<R::Object>>,
}

impl<R: ForeignRuntime> StreamCore<R> {
    pub fn new() -> Self {
        Self {
            runtime: WriteOnce::new("runtime"),
            object: Mutex::new(None),
        }
    }

    /// Bind the runtime handle. Fails if one is already bound.
    pub(crate) fn bind(&self, runtime: Arc<R>) -> Result<()> {
        self.runtime.set(runtime)?;
        debug!("bound runtime handle");
        Ok(())
    }

    /// Get the bound runtime handle.
    pub fn runtime(&self) -> Result<&Arc<R>> {
        self.runtime.get()
    }

    /// Return the cached foreign object, building it with `build` on first use.
    ///
    /// The cache lock is held while `build` runs, so concurrent first
    /// accesses still build once. A failed build leaves the cache empty.
    pub(crate) fn resolve<F>(&self, build: F) -> Result<R::Object>
    where
        F: FnOnce(&R) -> Result<R::Object>,
    {
        let runtime = self.runtime.get()?;
        let mut cached = self.object.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(object) = cached.as_ref() {
            trace!("foreign object served from cache");
            return Ok(object.clone());
        }

        let object = build(runtime)?;
        debug!(?object, "built foreign object");
        *cached = Some(object.clone());
        Ok(object)
    }

    pub fn state(&self) -> StreamState {
        let resolved = self
            .object
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some();
        if resolved {
            StreamState::ObjectResolved
        } else if self.runtime.is_set() {
            StreamState::HandleBound
        } else {
            StreamState::NoHandle
        }
    }
}

impl<R: ForeignRuntime> Default for StreamCore<R> {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) mod sealed {
    use super::StreamCore;
    use crate::error::Result;
    use crate::runtime::ForeignRuntime;

    /// Only `OutputStream::foreign_object` can mint one of these.
    pub struct BuildToken(());

    impl BuildToken {
        pub(super) fn new() -> Self {
            BuildToken(())
        }
    }

    /// Construction rule of a stream variant.
    pub trait BuildForeign<R: ForeignRuntime> {
        fn core(&self) -> &StreamCore<R>;

        /// Build the foreign object. Reached only through the core's cache.
        fn build_foreign(&self, runtime: &R, token: BuildToken) -> Result<R::Object>;
    }
}

/// Streams whose real counterpart lives in a foreign runtime.
///
/// Sealed: the stream variants of this crate are its only implementors. The
/// construction rule cannot be called from outside, so the foreign object is
/// built by `foreign_object` alone:
///
/// ```compile_fail
/// use std::sync::Arc;
/// use ddq_streams::{FileDescriptor, FileOutputStream, LocalRuntime, OutputStream};
///
/// let runtime = Arc::new(LocalRuntime::new());
/// let stream = FileOutputStream::new(FileDescriptor::new("checks.log", "w")).unwrap();
/// stream.bind_runtime(runtime.clone()).unwrap();
/// stream.build_foreign(&runtime);
/// ```
///
/// Nor can the cache be bypassed through the stream's core:
///
/// ```compile_fail
/// use std::sync::Arc;
/// use ddq_streams::{ByteArrayOutputStream, LocalRuntime, OutputStream};
///
/// let stream = ByteArrayOutputStream::new();
/// stream.core().bind(Arc::new(LocalRuntime::new()));
/// ```
pub trait OutputStream<R: ForeignRuntime>: sealed::BuildForeign<R> {
    /// Attach the runtime handle. A stream accepts exactly one.
    fn bind_runtime(&self, runtime: Arc<R>) -> Result<()> {
        self.core().bind(runtime)
    }

    fn runtime(&self) -> Result<&Arc<R>> {
        self.core().runtime()
    }

    /// Get the foreign object, building it on first access.
    fn foreign_object(&self) -> Result<R::Object> {
        self.core()
            .resolve(|runtime| self.build_foreign(runtime, sealed::BuildToken::new()))
    }

    fn state(&self) -> StreamState {
        self.core().state()
    }
}

impl<R: ForeignRuntime, T: sealed::BuildForeign<R>> OutputStream<R> for T {}
