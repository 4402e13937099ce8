//! Header input: files or stdin.

use std::{
    fmt,
    io::{
        self, Read
    },
    fs::File,
    path::PathBuf
};
use log::{debug, info, warn};

use crate::error::{Error, Result};
use crate::header::{RomHeader, HEADER_SIZE};
use crate::layout;
use crate::report::Field;

/// What to do when a source ends before a full header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadMode {
    /// Zero-fill the remainder and decode anyway.
    Lenient,
    /// Fail with `Error::TruncatedInput`.
    Strict,
}

impl Default for ReadMode {
    fn default() -> Self {
        ReadMode::Lenient
    }
}

/// The first 0x200 bytes of a ROM, plus how many of them were actually read.
pub struct HeaderBlock {
    data:   [u8; HEADER_SIZE],
    len:    usize,
}

impl HeaderBlock {
    pub fn data(&self) -> &[u8; HEADER_SIZE] {
        &self.data
    }

    /// Bytes obtained from the source.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_complete(&self) -> bool {
        self.len == HEADER_SIZE
    }
}

/// Read up to one header's worth of bytes, stopping early at EOF.
pub fn read_header<R: Read>(reader: R, mode: ReadMode) -> Result<HeaderBlock> {
    let mut buffer = Vec::with_capacity(HEADER_SIZE);
    reader.take(HEADER_SIZE as u64).read_to_end(&mut buffer)?;

    let len = buffer.len();
    if len < HEADER_SIZE && mode == ReadMode::Strict {
        return Err(Error::TruncatedInput { got: len });
    }

    let mut data = [0; HEADER_SIZE];
    data[..len].copy_from_slice(&buffer);
    Ok(HeaderBlock { data, len })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    pub fn read(&self, mode: ReadMode) -> Result<HeaderBlock> {
        match self {
            Source::Stdin => read_header(io::stdin().lock(), mode),
            Source::File(path) => {
                let file = File::open(path).map_err(|source| Error::SourceUnavailable {
                    path: path.clone(),
                    source,
                })?;
                read_header(file, mode)
            },
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Source::Stdin => write!(f, "<stdin>"),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Outcome of inspecting one source.
/// The caller decides what to print and how to exit.
pub struct SourceReport {
    pub source:  Source,
    pub outcome: Result<Vec<Field>>,
}

/// Read and decode a single source.
pub fn inspect(source: Source, mode: ReadMode) -> SourceReport {
    debug!("reading header from {}", source);
    let outcome = source.read(mode).map(|block| {
        if !block.is_complete() {
            warn!("{}: only {} of {} header bytes available, zero-filling", source, block.len(), HEADER_SIZE);
        }
        let header = RomHeader::new(block.data());
        info!("{}: {:?} \"{}\" checksum {:#06x}",
            source,
            header.product_type(),
            String::from_utf8_lossy(header.overseas_name()).trim_end(),
            header.checksum()
        );
        layout::decode(block.data())
    });
    SourceReport { source, outcome }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_read() {
        let rom = vec![0xAB; 0x1000];
        let block = read_header(rom.as_slice(), ReadMode::Strict).unwrap();
        assert!(block.is_complete());
        assert!(block.data().iter().all(|b| *b == 0xAB));
    }

    #[test]
    fn lenient_short_read_zero_fills() {
        let rom = vec![0xAB; 0x150];
        let block = read_header(rom.as_slice(), ReadMode::Lenient).unwrap();
        assert_eq!(block.len(), 0x150);
        assert!(!block.is_complete());
        assert_eq!(block.data()[0x14F], 0xAB);
        assert!(block.data()[0x150..].iter().all(|b| *b == 0));
    }

    #[test]
    fn strict_short_read_fails() {
        let rom = vec![0xAB; 0x1FF];
        match read_header(rom.as_slice(), ReadMode::Strict) {
            Err(Error::TruncatedInput { got }) => assert_eq!(got, 0x1FF),
            _ => panic!("expected truncated input"),
        }
    }

    #[test]
    fn missing_file() {
        let source = Source::File(PathBuf::from("/nonexistent/rom.bin"));
        let report = inspect(source.clone(), ReadMode::default());
        assert_eq!(report.source, source);
        match report.outcome {
            Err(err @ Error::SourceUnavailable { .. }) => {
                assert!(err.to_string().starts_with("couldn't open /nonexistent/rom.bin for reading: "));
            },
            _ => panic!("expected source unavailable"),
        }
    }
}
