//! File output stream.

use tracing::debug;

use super::{
    Descriptor, DescriptorInfo, DescriptorTarget, FileDescriptor, StreamCore,
    mode_permits_writing,
};
use super::sealed::{BuildForeign, BuildToken};
use crate::error::{DescriptorError, Result};
use crate::runtime::ForeignRuntime;

/// Stream writing to a file, or to the runtime's standard output.
///
/// The descriptor is validated once, in `new`, and never changes afterwards.
#[derive(Debug)]
pub struct FileOutputStream<R: ForeignRuntime, D = FileDescriptor> {
    core: StreamCore<R>,
    descriptor: D,
    info: DescriptorInfo,
}

impl<R: ForeignRuntime, D: Descriptor> FileOutputStream<R, D> {
    /// Create a stream over `descriptor`.
    ///
    /// Fails with `StreamError::InvalidArgument` when the descriptor is not
    /// file-like, is closed, or was opened read-only, checked in that order.
    pub fn new(descriptor: D) -> Result<Self> {
        let info = validate(&descriptor)?;
        Ok(Self {
            core: StreamCore::new(),
            descriptor,
            info,
        })
    }

    /// The descriptor this stream was built from.
    pub fn descriptor(&self) -> &D {
        &self.descriptor
    }

    pub fn target(&self) -> DescriptorTarget {
        self.info.target
    }

    /// Name of the file, or `STDOUT_NAME` for stdout.
    pub fn name(&self) -> &str {
        &self.info.name
    }
}

fn validate<D: Descriptor>(descriptor: &D) -> Result<DescriptorInfo, DescriptorError> {
    let info = descriptor.file_info().ok_or(DescriptorError::NotAFile)?;
    if info.closed {
        return Err(DescriptorError::Closed);
    }
    if !mode_permits_writing(&info.mode) {
        return Err(DescriptorError::OpenedForReading { mode: info.mode });
    }
    Ok(info)
}

impl<R: ForeignRuntime, D> BuildForeign<R> for FileOutputStream<R, D> {
    fn core(&self) -> &StreamCore<R> {
        &self.core
    }

    fn build_foreign(&self, runtime: &R, _token: BuildToken) -> Result<R::Object> {
        match self.info.target {
            DescriptorTarget::Stdout => {
                debug!("mapping descriptor to runtime standard output");
                Ok(runtime.standard_output()?)
            }
            DescriptorTarget::Named => {
                debug!(name = %self.info.name, "creating foreign file output");
                Ok(runtime.new_file_output(&self.info.name)?)
            }
        }
    }
}
