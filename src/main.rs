//! Command-line driver.
//!
//! A line-for-line translation of
//! `examples/original_source/proj/coding.cpp`'s `main()`: if `argv[1]`
//! names an existing file, treat it as an archive and extract/compare; if
//! not, treat the remaining arguments (or, absent any, a blank-line- or
//! EOF-terminated list read from stdin) as files to compress into it.
//! prisirv's own `main.rs` only ever builds a `Prisirv` and calls one of
//! its methods based on `parse_args`; there's no equivalent branching to
//! copy from there, so this driver follows the original program's control
//! flow directly, recast into `Result`-returning helpers instead of
//! `printf`-and-`exit`.
use std::env;
use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::Path;
use std::process::ExitCode;

use paq1rs::buffered_io::{create_output, open_input};
use paq1rs::{read_header, write_header, Coder, Error, FileEntry};

const USAGE: &str = "\
PAQ1 file compressor/archiver
This program is free software distributed without warranty under the terms
of the GNU General Public License, see http://www.gnu.org/licenses/gpl.txt

To compress:         paq1rs archive filenames...  (archive will be created)
  or:                ls | paq1rs archive  (reads file names from input)
To extract/compare:  paq1rs archive  (does not clobber existing files)
";

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print!("{}", USAGE);
        return ExitCode::FAILURE;
    }
    let archive_path = Path::new(&args[1]);
    let result = if archive_path.exists() {
        extract(archive_path, &args[2..])
    } else {
        compress(archive_path, &args[2..])
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn extract(archive_path: &Path, extra_args: &[String]) -> Result<(), Error> {
    if !extra_args.is_empty() {
        println!("File {} already exists", archive_path.display());
        return Ok(());
    }
    println!("Extracting archive {} ...", archive_path.display());

    let mut archive = match open_input(archive_path) {
        Some(f) => f,
        None => {
            println!("Cannot open archive: {}", archive_path.display());
            return Ok(());
        }
    };
    let entries = match read_header(&mut archive) {
        Ok(entries) => entries,
        Err(Error::BadHeader(msg)) => {
            println!("{}: Bad PAQ1 header format: {}", archive_path.display(), msg);
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let mut coder = Coder::new_decompress(&mut archive)?;
    for entry in &entries {
        print!("{:10} {}: ", entry.size, entry.name);
        let path = Path::new(&entry.name);
        if let Some(mut existing) = open_input(path) {
            let mut different = false;
            let mut existing_byte = [0u8; 1];
            for j in 0..entry.size {
                let decoded = coder.decompress_byte(&mut archive)?;
                let has_existing_byte = existing.read(&mut existing_byte)? == 1;
                let existing_value = if has_existing_byte { existing_byte[0] as i32 } else { -1 };
                if !different && decoded as i32 != existing_value {
                    println!("differ at offset {}, archive={} file={}", j, decoded, existing_value);
                    different = true;
                }
            }
            if !different {
                println!("identical");
            }
        } else {
            match create_output(path) {
                Some(mut out) => {
                    for _ in 0..entry.size {
                        let decoded = coder.decompress_byte(&mut archive)?;
                        out.write_all(&[decoded])?;
                    }
                    out.flush()?;
                    println!("extracted");
                }
                None => {
                    println!("cannot create, skipping...");
                    for _ in 0..entry.size {
                        coder.decompress_byte(&mut archive)?;
                    }
                }
            }
        }
    }
    Ok(())
}

fn compress(archive_path: &Path, extra_args: &[String]) -> Result<(), Error> {
    let names: Vec<String> = if !extra_args.is_empty() {
        extra_args.to_vec()
    } else {
        println!("Enter names of files to compress, followed by blank line or EOF.");
        let stdin = io::stdin();
        let mut names = Vec::new();
        for line in stdin.lock().lines() {
            let line = line?;
            if line.is_empty() {
                break;
            }
            names.push(line);
        }
        names
    };

    let mut entries = Vec::new();
    for name in &names {
        match fs::metadata(name) {
            Ok(meta) => entries.push(FileEntry { size: meta.len() as i64, name: name.clone() }),
            Err(_) => {
                println!("File not found, skipping: {}", name);
            }
        }
    }
    if entries.is_empty() {
        println!("No files to compress, no archive created.");
        return Err(Error::NoInputs);
    }

    let mut archive = match create_output(archive_path) {
        Some(f) => f,
        None => {
            println!("Cannot create archive: {}", archive_path.display());
            return Ok(());
        }
    };
    write_header(&mut archive, &entries)?;

    let mut coder = Coder::new_compress();
    for entry in &entries {
        print!("{}: ", entry.name);
        let mut input = open_input(Path::new(&entry.name));
        for _ in 0..entry.size {
            let byte = match &mut input {
                Some(f) => {
                    let mut b = [0u8; 1];
                    if f.read(&mut b)? == 1 { b[0] } else { 0 }
                }
                None => 0,
            };
            coder.compress_byte(byte, &mut archive)?;
        }
        println!("done");
    }
    coder.finish(&mut archive)?;
    archive.flush()?;
    Ok(())
}
