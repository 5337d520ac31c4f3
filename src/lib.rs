//! Line-oriented filters over SAM text, meant to run as stages of an alignment
//! pipeline: read records from one stream, write the surviving (and possibly
//! rewritten) records to another, one line at a time.

pub mod cigar;
pub mod cli;
pub mod error;
pub mod impute;
pub mod intron;
pub(crate) mod parser;
pub mod pipeline;
pub mod reader;
pub mod record;
pub mod types;

pub use error::{Error, RecordError};
pub use impute::{Imputation, MateImputer};
pub use intron::IntronIndelFilter;
pub use pipeline::{run, Stats, Transducer, Verdict};
pub use reader::SamLines;
pub use record::{SamLine, SamRecord};
pub use types::{CigarOp, ImputeMode, MateState};
