//! Buffered file helpers.
//!
//! Grounded in prisirv's `buffered_io.rs`, which wraps `BufReader`/
//! `BufWriter` with byte-at-a-time helpers so the coder never pays a
//! syscall per bit. prisirv's helpers print and panic on I/O failure,
//! matching its single-pass archiver-with-fatal-errors design; here they
//! return `Result` instead, since spec.md's error taxonomy requires
//! `CannotOpenInput`/`CannotCreateOutput` to be handled inline by the
//! caller (skip this file, keep going) rather than aborting the process.
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Open `path` for buffered reading, or `None` if it doesn't exist or
/// can't be opened.
pub fn open_input(path: &Path) -> Option<BufReader<File>> {
    File::open(path).ok().map(BufReader::new)
}

/// Create `path` for buffered writing, or `None` if it can't be created.
pub fn create_output(path: &Path) -> Option<BufWriter<File>> {
    File::create(path).ok().map(BufWriter::new)
}
