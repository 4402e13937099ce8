use std::{io, path::PathBuf};

use thiserror::Error;

use crate::header::HEADER_SIZE;

/// Failures when fetching a header. Decoding itself never fails.
#[derive(Error, Debug)]
pub enum Error {
    /// The input path could not be opened.
    #[error("couldn't open {} for reading: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        source: io::Error,
    },
    #[error("couldn't read header: {0}")]
    Read(#[from] io::Error),
    /// Only raised in strict mode.
    #[error("header truncated: got {got} of {} bytes", HEADER_SIZE)]
    TruncatedInput {
        got: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
