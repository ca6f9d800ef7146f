//! Descriptors accepted by `FileOutputStream`.

use std::io;

/// Name carried by descriptors of the process standard output.
pub const STDOUT_NAME: &str = "<stdout>";

/// Where a descriptor writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorTarget {
    /// The process standard output
    Stdout,
    /// A file identified by the descriptor's name
    Named,
}

/// File-like view of a descriptor, taken when a stream is constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorInfo {
    pub name: String,
    pub closed: bool,
    /// Open mode, in `fopen` notation ("w", "a", "r+", "wb", ...)
    pub mode: String,
    pub target: DescriptorTarget,
}

/// Trait for values that may be handed to `FileOutputStream::new`.
///
/// Returning `None` from `file_info` means the value is not file-like.
pub trait Descriptor {
    fn file_info(&self) -> Option<DescriptorInfo>;
}

impl<T: Descriptor + ?Sized> Descriptor for &T {
    fn file_info(&self) -> Option<DescriptorInfo> {
        (**self).file_info()
    }
}

impl Descriptor for str {
    fn file_info(&self) -> Option<DescriptorInfo> {
        None
    }
}

impl Descriptor for String {
    fn file_info(&self) -> Option<DescriptorInfo> {
        None
    }
}

impl Descriptor for io::Stdout {
    fn file_info(&self) -> Option<DescriptorInfo> {
        FileDescriptor::stdout().file_info()
    }
}

/// Check if an open mode allows writing.
pub fn mode_permits_writing(mode: &str) -> bool {
    mode.contains(['w', 'a', 'x', '+'])
}

/// A plain descriptor value: a name, an open mode and a closed flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    name: String,
    mode: String,
    closed: bool,
    target: DescriptorTarget,
}

impl FileDescriptor {
    /// Create an open descriptor. A name equal to `STDOUT_NAME` targets stdout.
    pub fn new(name: impl Into<String>, mode: impl Into<String>) -> Self {
        let name = name.into();
        let target = if name == STDOUT_NAME {
            DescriptorTarget::Stdout
        } else {
            DescriptorTarget::Named
        };
        Self {
            name,
            mode: mode.into(),
            closed: false,
            target,
        }
    }

    /// Descriptor of the process standard output, opened for writing.
    pub fn stdout() -> Self {
        Self::new(STDOUT_NAME, "w")
    }

    /// Set the closed flag.
    pub fn with_closed(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mode(&self) -> &str {
        &self.mode
    }

    pub fn target(&self) -> DescriptorTarget {
        self.target
    }
}

impl Descriptor for FileDescriptor {
    fn file_info(&self) -> Option<DescriptorInfo> {
        Some(DescriptorInfo {
            name: self.name.clone(),
            closed: self.closed,
            mode: self.mode.clone(),
            target: self.target,
        })
    }
}
