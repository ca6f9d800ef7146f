//! Tests for ByteArrayOutputStream.

use std::sync::Arc;

use crate::error::StreamError;
use crate::stream::{ByteArrayOutputStream, OutputStream, StreamState};
use crate::tests::support::CountingRuntime;

#[test]
fn foreign_object_before_bind_is_unbound() {
    let stream: ByteArrayOutputStream<CountingRuntime> = ByteArrayOutputStream::new();
    assert!(matches!(
        stream.foreign_object(),
        Err(StreamError::Unbound { .. })
    ));
}

#[test]
fn foreign_object_is_built_once() {
    let runtime = Arc::new(CountingRuntime::new());
    let stream = ByteArrayOutputStream::new();
    stream.bind_runtime(runtime.clone()).unwrap();

    let first = stream.foreign_object().unwrap();
    let second = stream.foreign_object().unwrap();

    assert_eq!(first, second);
    assert_eq!(runtime.buffer_calls(), 1);
    assert_eq!(runtime.file_calls(), 0);
    assert_eq!(stream.state(), StreamState::ObjectResolved);
}

#[test]
fn get_output_renders_and_trims() {
    let runtime = Arc::new(CountingRuntime::with_buffer_text("\n  Check passed: 3/3 \t\n"));
    let stream = ByteArrayOutputStream::new();
    stream.bind_runtime(runtime.clone()).unwrap();

    assert_eq!(stream.get_output().unwrap(), "Check passed: 3/3");
    assert_eq!(stream.foreign_object().unwrap().renders(), 1);
    assert_eq!(runtime.buffer_calls(), 1);
}

#[test]
fn get_output_keeps_inner_whitespace() {
    let runtime = Arc::new(CountingRuntime::with_buffer_text(" a\n\nb "));
    let stream = ByteArrayOutputStream::new();
    stream.bind_runtime(runtime).unwrap();

    assert_eq!(stream.get_output().unwrap(), "a\n\nb");
}

#[test]
fn get_output_before_bind_is_unbound() {
    let stream: ByteArrayOutputStream<CountingRuntime> = ByteArrayOutputStream::default();
    assert!(matches!(
        stream.get_output(),
        Err(StreamError::Unbound { .. })
    ));
}

#[test]
fn get_output_surfaces_gateway_failure() {
    let stream = ByteArrayOutputStream::new();
    stream.bind_runtime(Arc::new(CountingRuntime::failing())).unwrap();

    let err = stream.get_output().unwrap_err();
    assert!(matches!(err, StreamError::Gateway(_)));
    assert!(!err.is_binding_error());
}
