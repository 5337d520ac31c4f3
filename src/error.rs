//! Error types for the line filters.

use std::num::ParseIntError;

use thiserror::Error;

/// A fault in a single alignment record. Faults are fatal to the whole run.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("record has {found} fields, at least {required} are required")]
    TooFewFields { required: usize, found: usize },

    #[error("invalid flag '{value}'")]
    InvalidFlag {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Error type for a filtering run.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("unable to open input")]
    Decompression(#[from] niffler::Error),

    #[error("malformed record at line {line_number}")]
    Record {
        /// 1-based line number in the input stream
        line_number: usize,
        #[source]
        source: RecordError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
