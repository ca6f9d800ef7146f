//! Configuration types for output streams.
//!
//! This module provides:
//! - `StreamKind`: Which stream variant to build
//! - `StreamConfig`: Deserializable description of a single stream

mod stream;

pub use stream::{StreamConfig, StreamKind};
