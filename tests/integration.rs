#[cfg(test)]
mod tests {
    use paq1rs::{read_header, write_header, Coder, Error, FileEntry};
    use std::io::Cursor;

    /// Build a full `PAQ1` archive in memory: header, then every file's
    /// bytes through one `Coder` spanning the whole payload.
    fn build_archive(files: &[(&str, &[u8])]) -> Vec<u8> {
        let entries: Vec<FileEntry> = files
            .iter()
            .map(|(name, data)| FileEntry { size: data.len() as i64, name: name.to_string() })
            .collect();
        let mut archive = Vec::new();
        write_header(&mut archive, &entries).unwrap();
        let mut coder = Coder::new_compress();
        for (_, data) in files {
            for &byte in *data {
                coder.compress_byte(byte, &mut archive).unwrap();
            }
        }
        coder.finish(&mut archive).unwrap();
        archive
    }

    #[test]
    fn archive_with_no_files_still_parses() {
        let archive = build_archive(&[]);
        let mut cursor = Cursor::new(archive);
        let entries = read_header(&mut cursor).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn single_zero_length_file_round_trips() {
        let archive = build_archive(&[("empty.bin", &[])]);
        let mut cursor = Cursor::new(archive);
        let entries = read_header(&mut cursor).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].size, 0);
        assert_eq!(entries[0].name, "empty.bin");
    }

    #[test]
    fn one_kib_of_zeros_round_trips_under_a_uniform_predictor() {
        let data = vec![0u8; 1024];
        let archive = build_archive(&[("zeros.bin", &data)]);
        let mut cursor = Cursor::new(archive);
        let entries = read_header(&mut cursor).unwrap();
        let mut coder = Coder::new_decompress(&mut cursor).unwrap();
        let mut out = Vec::with_capacity(1024);
        for _ in 0..entries[0].size {
            out.push(coder.decompress_byte(&mut cursor).unwrap());
        }
        assert_eq!(out, data);
    }

    #[test]
    fn two_file_archive_preserves_header_and_payload_order() {
        let a = b"hello, archive".to_vec();
        let b = b"a second, differently sized file".to_vec();
        let archive = build_archive(&[("a.txt", &a), ("b.txt", &b)]);

        let header_text = String::from_utf8_lossy(&archive[..64.min(archive.len())]);
        assert!(header_text.starts_with("PAQ1\r\n"));
        assert!(header_text.contains("a.txt"));

        let mut cursor = Cursor::new(archive);
        let entries = read_header(&mut cursor).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "a.txt");
        assert_eq!(entries[1].name, "b.txt");

        let mut coder = Coder::new_decompress(&mut cursor).unwrap();
        let mut out_a = Vec::new();
        for _ in 0..entries[0].size {
            out_a.push(coder.decompress_byte(&mut cursor).unwrap());
        }
        let mut out_b = Vec::new();
        for _ in 0..entries[1].size {
            out_b.push(coder.decompress_byte(&mut cursor).unwrap());
        }
        assert_eq!(out_a, a);
        assert_eq!(out_b, b);
    }

    #[test]
    fn truncated_payload_reports_premature_end_of_archive() {
        let data = b"some data that should compress to more than a few bytes of payload".to_vec();
        let archive = build_archive(&[("f.bin", &data)]);
        let truncated = &archive[..archive.len().saturating_sub(8)];

        let mut cursor = Cursor::new(truncated.to_vec());
        let entries = read_header(&mut cursor).unwrap();
        let mut coder = Coder::new_decompress(&mut cursor).unwrap();
        let mut saw_eof_error = false;
        for _ in 0..entries[0].size {
            if coder.decompress_byte(&mut cursor).is_err() {
                saw_eof_error = true;
                break;
            }
        }
        assert!(saw_eof_error);
    }

    #[test]
    fn bad_magic_is_reported_as_a_header_error() {
        let mut cursor = Cursor::new(b"not a paq1 archive".to_vec());
        match read_header(&mut cursor) {
            Err(Error::BadHeader(_)) => {}
            other => panic!("expected BadHeader, got {:?}", other),
        }
    }
}
