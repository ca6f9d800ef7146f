//! Write-once attribute slot.

use std::fmt;
use std::sync::OnceLock;

use crate::error::{Result, StreamError};

/// A slot that accepts exactly one assignment for its whole lifetime.
///
/// Reading before the assignment fails with `StreamError::Unbound`, assigning
/// a second time fails with `StreamError::AlreadyBound` even when the new
/// value equals the stored one. Assignment is atomic, so of two racing
/// writers exactly one wins.
pub struct WriteOnce<T> {
    attribute: &'static str,
    slot: OnceLock<T>,
}

impl<T> WriteOnce<T> {
    /// Create an empty slot. `attribute` names it in error messages.
    pub const fn new(attribute: &'static str) -> Self {
        Self {
            attribute,
            slot: OnceLock::new(),
        }
    }

    /// Get the stored value.
    pub fn get(&self) -> Result<&T> {
        self.slot.get().ok_or(StreamError::Unbound {
            attribute: self.attribute,
        })
    }

    /// Store `value`, failing if the slot was assigned before.
    pub fn set(&self, value: T) -> Result<()> {
        self.slot.set(value).map_err(|_| StreamError::AlreadyBound {
            attribute: self.attribute,
        })
    }

    pub fn is_set(&self) -> bool {
        self.slot.get().is_some()
    }
}

impl<T: fmt::Debug> fmt::Debug for WriteOnce<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriteOnce")
            .field("attribute", &self.attribute)
            .field("value", &self.slot.get())
            .finish()
    }
}
