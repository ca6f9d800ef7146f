//! Tests for the in-process runtime.

use std::fs;
use std::io::Write;
use std::sync::Arc;

use crate::error::StreamError;
use crate::runtime::{ConstructionCounts, ForeignObject, ForeignRuntime, LocalRuntime};
use crate::stream::{ByteArrayOutputStream, FileDescriptor, FileOutputStream, OutputStream};

#[test]
fn standard_output_is_a_singleton() {
    let runtime = LocalRuntime::new();
    let a = runtime.standard_output().unwrap();
    let b = runtime.standard_output().unwrap();

    assert_eq!(a, b);
    assert!(a.is_stdout());
    assert_eq!(a.to_text().unwrap(), "<stdout>");
}

#[test]
fn byte_buffers_are_distinct_and_collect_writes() {
    let runtime = LocalRuntime::new();
    let mut a = runtime.new_byte_array_output().unwrap();
    let b = runtime.new_byte_array_output().unwrap();
    assert_ne!(a, b);

    a.write_all(b"hello ").unwrap();
    a.write_all(b"world").unwrap();

    assert_eq!(a.bytes().unwrap(), b"hello world".to_vec());
    assert_eq!(a.to_text().unwrap(), "hello world");
    assert_eq!(b.to_text().unwrap(), "");
}

#[test]
fn file_output_writes_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    let name = path.to_string_lossy().into_owned();

    let runtime = LocalRuntime::new();
    let mut file = runtime.new_file_output(&name).unwrap();
    file.write_all(b"abc").unwrap();
    file.flush().unwrap();

    assert_eq!(fs::read(&path).unwrap(), b"abc".to_vec());
    assert_eq!(file.to_text().unwrap(), name);
    assert!(file.bytes().is_none());
}

#[test]
fn file_output_truncates_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    fs::write(&path, b"stale content").unwrap();

    let runtime = LocalRuntime::new();
    let mut file = runtime.new_file_output(&path.to_string_lossy()).unwrap();
    file.write_all(b"new").unwrap();

    assert_eq!(fs::read(&path).unwrap(), b"new".to_vec());
}

#[test]
fn file_output_in_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.txt");

    let stream = FileOutputStream::new(FileDescriptor::new(path.to_string_lossy(), "w")).unwrap();
    stream.bind_runtime(Arc::new(LocalRuntime::new())).unwrap();

    let err = stream.foreign_object().unwrap_err();
    assert!(matches!(err, StreamError::Gateway(_)));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn construction_counts_track_stream_resolution() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("checks.log");
    let runtime = Arc::new(LocalRuntime::new());

    let file = FileOutputStream::new(FileDescriptor::new(path.to_string_lossy(), "w")).unwrap();
    let stdout = FileOutputStream::new(FileDescriptor::stdout()).unwrap();
    let buffer = ByteArrayOutputStream::new();
    file.bind_runtime(runtime.clone()).unwrap();
    stdout.bind_runtime(runtime.clone()).unwrap();
    buffer.bind_runtime(runtime.clone()).unwrap();

    for _ in 0..3 {
        file.foreign_object().unwrap();
        stdout.foreign_object().unwrap();
        buffer.foreign_object().unwrap();
    }

    assert_eq!(
        runtime.constructions(),
        ConstructionCounts {
            file_outputs: 1,
            byte_array_outputs: 1,
            standard_output_lookups: 1,
        }
    );
}

#[test]
fn buffer_stream_output_round_trips_through_local_runtime() {
    let stream = ByteArrayOutputStream::new();
    stream.bind_runtime(Arc::new(LocalRuntime::new())).unwrap();

    let mut buffer = stream.foreign_object().unwrap();
    writeln!(buffer, "  Constraint check: Success  ").unwrap();

    assert_eq!(stream.get_output().unwrap(), "Constraint check: Success");
    assert!(buffer.bytes().unwrap().ends_with(b"  \n"));
}
