//! Error taxonomy.
//!
//! Mirrors prisirv's `error.rs` in spirit (plain, dependency-free error
//! reporting — no `thiserror`) but not in shape: prisirv's errors are all
//! immediately fatal (`-> !`, `process::exit`), whereas spec.md's taxonomy
//! requires some kinds to propagate as recoverable results (`BadHeader`,
//! `UnexpectedEndOfArchive`, `Io`) and others to be handled inline without
//! ever becoming an `Err` at all (`CannotOpenInput`, `CannotCreateOutput`).
//! `main.rs` is the only place an `Error` becomes a printed message and a
//! process exit code.
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum Error {
    /// Header didn't start with "PAQ1", a size field didn't parse, or the
    /// `\f\0` end-of-header marker was missing.
    BadHeader(String),
    /// More than five EOFs were read while decompressing the payload.
    UnexpectedEndOfArchive,
    /// An existing file to extract-and-compare, or a file to compress,
    /// could not be opened. Not fatal: the caller skips this file and
    /// continues with the rest of the archive.
    CannotOpenInput(String),
    /// A file being extracted could not be created. Not fatal: the
    /// caller keeps decoding (to stay in sync with the payload) but
    /// discards the bytes instead of writing them.
    CannotCreateOutput(String),
    /// All input files were missing when creating an archive.
    NoInputs,
    /// Reserved for a fallible-allocation path; safe Rust has no way to
    /// raise this today (the allocator aborts the process instead), so
    /// nothing in this crate constructs it.
    OutOfMemory,
    /// An I/O failure propagated from the underlying stream.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BadHeader(msg) => write!(f, "Bad PAQ1 header format: {}", msg),
            Error::UnexpectedEndOfArchive => write!(f, "Premature end of archive"),
            Error::CannotOpenInput(name) => write!(f, "cannot open {}", name),
            Error::CannotCreateOutput(name) => write!(f, "cannot create {}, skipping...", name),
            Error::NoInputs => write!(f, "No files to compress, no archive created."),
            Error::OutOfMemory => write!(f, "Out of memory"),
            Error::Io(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Error {
        Error::Io(e)
    }
}
