//! In-process foreign runtime.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use tracing::debug;

use super::{ForeignObject, ForeignRuntime};
use crate::error::GatewayError;
use crate::stream::STDOUT_NAME;

/// Number of constructor calls a `LocalRuntime` has served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConstructionCounts {
    pub file_outputs: usize,
    pub byte_array_outputs: usize,
    pub standard_output_lookups: usize,
}

#[derive(Debug, Default)]
struct Counters {
    file_outputs: AtomicUsize,
    byte_array_outputs: AtomicUsize,
    standard_output_lookups: AtomicUsize,
}

/// A runtime hosting its objects inside the current process.
///
/// Standard output is the process stdout, file outputs are real files and
/// byte buffers are shared in-memory vectors.
#[derive(Debug)]
pub struct LocalRuntime {
    stdout: LocalObject,
    counters: Counters,
}

impl LocalRuntime {
    /// Create a new local runtime.
    pub fn new() -> Self {
        Self {
            stdout: LocalObject::new(LocalTarget::Stdout),
            counters: Counters::default(),
        }
    }

    /// Snapshot of how many objects this runtime has been asked for.
    pub fn constructions(&self) -> ConstructionCounts {
        ConstructionCounts {
            file_outputs: self.counters.file_outputs.load(Ordering::SeqCst),
            byte_array_outputs: self.counters.byte_array_outputs.load(Ordering::SeqCst),
            standard_output_lookups: self.counters.standard_output_lookups.load(Ordering::SeqCst),
        }
    }
}

impl Default for LocalRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl ForeignRuntime for LocalRuntime {
    type Object = LocalObject;

    fn standard_output(&self) -> Result<LocalObject, GatewayError> {
        self.counters
            .standard_output_lookups
            .fetch_add(1, Ordering::SeqCst);
        Ok(self.stdout.clone())
    }

    fn new_file_output(&self, name: &str) -> Result<LocalObject, GatewayError> {
        let file = OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(name)
            .map_err(|e| {
                GatewayError::new(format!("cannot open '{name}' for writing")).with_source(e)
            })?;
        self.counters.file_outputs.fetch_add(1, Ordering::SeqCst);
        debug!(name, "created local file output");
        Ok(LocalObject::new(LocalTarget::File {
            name: name.to_owned(),
            file: Mutex::new(file),
        }))
    }

    fn new_byte_array_output(&self) -> Result<LocalObject, GatewayError> {
        self.counters
            .byte_array_outputs
            .fetch_add(1, Ordering::SeqCst);
        Ok(LocalObject::new(LocalTarget::Buffer(Mutex::new(Vec::new()))))
    }
}

#[derive(Debug)]
enum LocalTarget {
    Stdout,
    File { name: String, file: Mutex<File> },
    Buffer(Mutex<Vec<u8>>),
}

/// Handle to an object hosted by a `LocalRuntime`.
///
/// Equality is identity: two handles are equal only when they refer to the
/// same object.
#[derive(Clone)]
pub struct LocalObject {
    target: Arc<LocalTarget>,
}

impl LocalObject {
    fn new(target: LocalTarget) -> Self {
        Self {
            target: Arc::new(target),
        }
    }

    /// Check if this handle refers to the runtime's standard output.
    pub fn is_stdout(&self) -> bool {
        matches!(*self.target, LocalTarget::Stdout)
    }

    /// Get a copy of a byte buffer's contents, or `None` for other objects.
    pub fn bytes(&self) -> Option<Vec<u8>> {
        match &*self.target {
            LocalTarget::Buffer(buf) => {
                Some(buf.lock().unwrap_or_else(PoisonError::into_inner).clone())
            }
            _ => None,
        }
    }
}

impl PartialEq for LocalObject {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.target, &other.target)
    }
}

impl Eq for LocalObject {}

impl fmt::Debug for LocalObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match &*self.target {
            LocalTarget::Stdout => "stdout",
            LocalTarget::File { .. } => "file",
            LocalTarget::Buffer(_) => "buffer",
        };
        f.debug_struct("LocalObject")
            .field("kind", &kind)
            .field("addr", &Arc::as_ptr(&self.target))
            .finish()
    }
}

impl ForeignObject for LocalObject {
    fn to_text(&self) -> Result<String, GatewayError> {
        match &*self.target {
            LocalTarget::Stdout => Ok(STDOUT_NAME.to_owned()),
            LocalTarget::File { name, .. } => Ok(name.clone()),
            LocalTarget::Buffer(buf) => {
                let guard = buf.lock().unwrap_or_else(PoisonError::into_inner);
                Ok(String::from_utf8_lossy(&guard).into_owned())
            }
        }
    }
}

impl Write for LocalObject {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        match &*self.target {
            LocalTarget::Stdout => io::stdout().write(data),
            LocalTarget::File { file, .. } => file
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .write(data),
            LocalTarget::Buffer(buf) => {
                buf.lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .extend_from_slice(data);
                Ok(data.len())
            }
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &*self.target {
            LocalTarget::Stdout => io::stdout().flush(),
            LocalTarget::File { file, .. } => file
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .flush(),
            LocalTarget::Buffer(_) => Ok(()),
        }
    }
}
