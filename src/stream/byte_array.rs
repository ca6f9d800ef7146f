//! In-memory byte buffer stream.

use tracing::debug;

use super::sealed::{BuildForeign, BuildToken};
use super::{OutputStream, StreamCore};
use crate::error::Result;
use crate::runtime::{ForeignObject, ForeignRuntime};

/// Stream collecting its output in a foreign byte buffer.
#[derive(Debug)]
pub struct ByteArrayOutputStream<R: ForeignRuntime> {
    core: StreamCore<R>,
}

impl<R: ForeignRuntime> ByteArrayOutputStream<R> {
    pub fn new() -> Self {
        Self {
            core: StreamCore::new(),
        }
    }

    /// Text written to the buffer so far, without surrounding whitespace.
    ///
    /// Resolves the foreign object first, so it fails with
    /// `StreamError::Unbound` before a runtime is bound. The buffer itself is
    /// left untouched.
    pub fn get_output(&self) -> Result<String> {
        let text = self.foreign_object()?.to_text()?;
        Ok(text.trim().to_owned())
    }
}

impl<R: ForeignRuntime> Default for ByteArrayOutputStream<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ForeignRuntime> BuildForeign<R> for ByteArrayOutputStream<R> {
    fn core(&self) -> &StreamCore<R> {
        &self.core
    }

    fn build_foreign(&self, runtime: &R, _token: BuildToken) -> Result<R::Object> {
        debug!("creating foreign byte array output");
        Ok(runtime.new_byte_array_output()?)
    }
}
