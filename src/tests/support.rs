//! Counting fake runtime shared by the unit tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::GatewayError;
use crate::runtime::{ForeignObject, ForeignRuntime};

#[derive(Debug)]
struct FakeInner {
    label: String,
    text: String,
    renders: AtomicUsize,
}

/// Foreign object handle; equality is identity.
#[derive(Debug, Clone)]
pub struct FakeObject {
    inner: Arc<FakeInner>,
}

impl FakeObject {
    fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(FakeInner {
                label: label.into(),
                text: text.into(),
                renders: AtomicUsize::new(0),
            }),
        }
    }

    pub fn label(&self) -> &str {
        &self.inner.label
    }

    pub fn renders(&self) -> usize {
        self.inner.renders.load(Ordering::SeqCst)
    }
}

impl PartialEq for FakeObject {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl ForeignObject for FakeObject {
    fn to_text(&self) -> Result<String, GatewayError> {
        self.inner.renders.fetch_add(1, Ordering::SeqCst);
        Ok(self.inner.text.clone())
    }
}

#[derive(Debug)]
pub struct CountingRuntime {
    stdout: FakeObject,
    buffer_text: String,
    failing: bool,
    file_calls: AtomicUsize,
    buffer_calls: AtomicUsize,
    stdout_calls: AtomicUsize,
}

impl CountingRuntime {
    pub fn new() -> Self {
        Self {
            stdout: FakeObject::new("System.out", ""),
            buffer_text: String::new(),
            failing: false,
            file_calls: AtomicUsize::new(0),
            buffer_calls: AtomicUsize::new(0),
            stdout_calls: AtomicUsize::new(0),
        }
    }

    /// Runtime whose byte buffers render as `text`.
    pub fn with_buffer_text(text: impl Into<String>) -> Self {
        Self {
            buffer_text: text.into(),
            ..Self::new()
        }
    }

    /// Runtime whose constructors always fail.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::new()
        }
    }

    pub fn stdout_object(&self) -> &FakeObject {
        &self.stdout
    }

    pub fn file_calls(&self) -> usize {
        self.file_calls.load(Ordering::SeqCst)
    }

    pub fn buffer_calls(&self) -> usize {
        self.buffer_calls.load(Ordering::SeqCst)
    }

    pub fn stdout_calls(&self) -> usize {
        self.stdout_calls.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), GatewayError> {
        if self.failing {
            Err(GatewayError::new("gateway down"))
        } else {
            Ok(())
        }
    }
}

impl ForeignRuntime for CountingRuntime {
    type Object = FakeObject;

    fn standard_output(&self) -> Result<FakeObject, GatewayError> {
        self.stdout_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.stdout.clone())
    }

    fn new_file_output(&self, name: &str) -> Result<FakeObject, GatewayError> {
        self.file_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(FakeObject::new(format!("FileOutputStream({name})"), name))
    }

    fn new_byte_array_output(&self) -> Result<FakeObject, GatewayError> {
        self.buffer_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(FakeObject::new("ByteArrayOutputStream", self.buffer_text.clone()))
    }
}
