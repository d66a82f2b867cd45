//! The `PAQ1` archive header: a plain-text file list bracketing the
//! coder's binary payload.
//!
//! Grounded directly in `examples/original_source/proj/coding.cpp`'s
//! `main()`, which writes `"PAQ1\r\n"`, one `"%10ld %s\r\n"` line per
//! file, then the three bytes `0x1A 0x0C 0x00` before the arithmetic
//! payload begins. Reading it back mirrors `coding.cpp`'s `getline()`:
//! accumulate bytes until one below 32 is seen (consumed but not kept),
//! and if that byte was `\r`, also consume the following `\n`. The
//! file-record loop ends when a `getline()` call returns an empty line,
//! which happens when it immediately hits the leading `0x1A` of the end
//! marker and consumes it as the terminator — by the time the loop
//! breaks, the `0x1A` is already behind the cursor, so only the trailing
//! `\f\0` remains to be checked.
use std::io::{Read, Write};

use crate::error::Error;

pub struct FileEntry {
    pub size: i64,
    pub name: String,
}

const HEADER_MAGIC: &str = "PAQ1";
/// Terminates the last (empty) file-record line read by `read_line`.
const END_OF_RECORDS: u8 = 0x1A;
/// The `\f\0` that closes the header, checked *after* `END_OF_RECORDS` —
/// `read_line` already consumes that byte as the terminator of the empty
/// line ending the file-record loop (see below), so only these two bytes
/// remain on the stream by the time the loop breaks.
const END_MARKER: [u8; 2] = [0x0C, 0x00];

pub fn write_header(output: &mut dyn Write, entries: &[FileEntry]) -> Result<(), Error> {
    output.write_all(b"PAQ1\r\n")?;
    for e in entries {
        output.write_all(format!("{:10} {}\r\n", e.size, e.name).as_bytes())?;
    }
    output.write_all(&[END_OF_RECORDS])?;
    output.write_all(&END_MARKER)?;
    Ok(())
}

/// Read one byte; `None` on EOF.
fn read_byte(input: &mut dyn Read) -> std::io::Result<Option<u8>> {
    let mut buf = [0u8; 1];
    match input.read(&mut buf)? {
        1 => Ok(Some(buf[0])),
        _ => Ok(None),
    }
}

/// Accumulate bytes until one below 32 is seen, mirroring `coding.cpp`'s
/// `getline()`. Returns `None` at EOF with nothing read.
fn read_line(input: &mut dyn Read) -> std::io::Result<Option<String>> {
    let mut bytes = Vec::new();
    loop {
        match read_byte(input)? {
            None => {
                if bytes.is_empty() {
                    return Ok(None);
                }
                return Ok(Some(String::from_utf8_lossy(&bytes).into_owned()));
            }
            Some(c) if c >= 32 => bytes.push(c),
            Some(c) => {
                if c == b'\r' {
                    read_byte(input)?;
                }
                return Ok(Some(String::from_utf8_lossy(&bytes).into_owned()));
            }
        }
    }
}

pub fn read_header(input: &mut dyn Read) -> Result<Vec<FileEntry>, Error> {
    let magic = read_line(input)?.unwrap_or_default();
    if magic != HEADER_MAGIC {
        return Err(Error::BadHeader(format!(
            "expected {:?} at start of archive, found {:?}",
            HEADER_MAGIC, magic
        )));
    }

    let mut entries = Vec::new();
    loop {
        let line = read_line(input)?.unwrap_or_default();
        if line.len() <= 10 {
            break;
        }
        let (size_field, name_field) = line.split_at(10);
        let size: i64 = size_field
            .trim()
            .parse()
            .map_err(|_| Error::BadHeader(format!("unparseable size field {:?}", size_field)))?;
        entries.push(FileEntry {
            size,
            name: name_field.get(1..).unwrap_or("").to_string(),
        });
    }

    let mut marker = [0u8; 2];
    input.read_exact(&mut marker).map_err(|_| {
        Error::BadHeader("archive ended before the end-of-header marker".to_string())
    })?;
    if marker != END_MARKER {
        return Err(Error::BadHeader(format!(
            "expected end-of-header marker {:?}, found {:?}",
            END_MARKER, marker
        )));
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn header_round_trips_through_write_and_read() {
        let entries = vec![
            FileEntry { size: 0, name: "empty.txt".to_string() },
            FileEntry { size: 12345, name: "notes.md".to_string() },
        ];
        let mut buf = Vec::new();
        write_header(&mut buf, &entries).unwrap();
        let mut cursor = Cursor::new(buf);
        let back = read_header(&mut cursor).unwrap();
        assert_eq!(back.len(), 2);
        assert_eq!(back[0].size, 0);
        assert_eq!(back[0].name, "empty.txt");
        assert_eq!(back[1].size, 12345);
        assert_eq!(back[1].name, "notes.md");
    }

    #[test]
    fn header_with_no_files_still_has_a_valid_marker() {
        let mut buf = Vec::new();
        write_header(&mut buf, &[]).unwrap();
        let mut cursor = Cursor::new(buf);
        assert_eq!(read_header(&mut cursor).unwrap().len(), 0);
    }

    #[test]
    fn wrong_magic_is_rejected() {
        let mut cursor = Cursor::new(b"NOPE\r\n\x1a\x0c\x00".to_vec());
        assert!(matches!(read_header(&mut cursor), Err(Error::BadHeader(_))));
    }

    #[test]
    fn missing_end_marker_is_rejected() {
        let mut cursor = Cursor::new(b"PAQ1\r\n".to_vec());
        assert!(matches!(read_header(&mut cursor), Err(Error::BadHeader(_))));
    }
}
