//! Stream variants unified behind one type.

use super::sealed::{BuildForeign, BuildToken};
use super::{ByteArrayOutputStream, FileOutputStream, StreamCore};
use crate::error::Result;
use crate::runtime::ForeignRuntime;

/// Either kind of output stream.
#[derive(Debug)]
pub enum AnyOutputStream<R: ForeignRuntime> {
    File(FileOutputStream<R>),
    ByteArray(ByteArrayOutputStream<R>),
}

impl<R: ForeignRuntime> AnyOutputStream<R> {
    /// Get the byte buffer stream, if this is one.
    pub fn as_byte_array(&self) -> Option<&ByteArrayOutputStream<R>> {
        match self {
            AnyOutputStream::ByteArray(stream) => Some(stream),
            AnyOutputStream::File(_) => None,
        }
    }

    /// Get the file stream, if this is one.
    pub fn as_file(&self) -> Option<&FileOutputStream<R>> {
        match self {
            AnyOutputStream::File(stream) => Some(stream),
            AnyOutputStream::ByteArray(_) => None,
        }
    }
}

impl<R: ForeignRuntime> BuildForeign<R> for AnyOutputStream<R> {
    fn core(&self) -> &StreamCore<R> {
        match self {
            AnyOutputStream::File(stream) => stream.core(),
            AnyOutputStream::ByteArray(stream) => stream.core(),
        }
    }

    fn build_foreign(&self, runtime: &R, token: BuildToken) -> Result<R::Object> {
        match self {
            AnyOutputStream::File(stream) => stream.build_foreign(runtime, token),
            AnyOutputStream::ByteArray(stream) => stream.build_foreign(runtime, token),
        }
    }
}

impl<R: ForeignRuntime> From<FileOutputStream<R>> for AnyOutputStream<R> {
    fn from(stream: FileOutputStream<R>) -> Self {
        AnyOutputStream::File(stream)
    }
}

impl<R: ForeignRuntime> From<ByteArrayOutputStream<R>> for AnyOutputStream<R> {
    fn from(stream: ByteArrayOutputStream<R>) -> Self {
        AnyOutputStream::ByteArray(stream)
    }
}
