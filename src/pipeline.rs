//! The line loop shared by all filters.

use std::io::{BufRead, Write};

use getset::CopyGetters;

use crate::error::{Error, RecordError, Result};
use crate::reader::SamLines;
use crate::record::{SamLine, SamRecord};

/// What to do with a record after processing.
#[derive(Debug)]
pub enum Verdict<'a> {
    Keep(SamRecord<'a>),
    Drop,
}

/// A per-record transformation or filter. Header lines never reach it.
pub trait Transducer {
    fn name(&self) -> &'static str;

    fn process<'a>(&self, record: SamRecord<'a>) -> std::result::Result<Verdict<'a>, RecordError>;
}

/// Counters for a finished run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct Stats {
    headers: u64,
    records: u64,
    modified: u64,
    dropped: u64,
    written: u64,
}

/// Pull lines from `lines`, run each record through `transducer`, and push the
/// survivors to `sink` in input order, one `\n`-terminated line each.
///
/// Stops at the first faulty record. Lines emitted for earlier records are
/// flushed to `sink` before the error is returned.
pub fn run<R, W, T>(lines: &mut SamLines<R>, sink: &mut W, transducer: &T) -> Result<Stats>
where
    R: BufRead,
    W: Write,
    T: Transducer + ?Sized,
{
    let mut stats = Stats::default();
    while let Some((line_number, line)) = lines.next_line()? {
        match SamLine::parse(line) {
            SamLine::Header(header) => {
                stats.headers += 1;
                sink.write_all(header.as_bytes())?;
            }
            SamLine::Record(record) => {
                stats.records += 1;
                match transducer.process(record) {
                    Ok(Verdict::Keep(record)) => {
                        if record.is_modified() {
                            stats.modified += 1;
                        }
                        record.write_to(sink)?;
                    }
                    Ok(Verdict::Drop) => {
                        stats.dropped += 1;
                        continue;
                    }
                    Err(source) => {
                        sink.flush()?;
                        return Err(Error::Record {
                            line_number,
                            source,
                        });
                    }
                }
            }
        }
        sink.write_all(b"\n")?;
        stats.written += 1;
    }
    sink.flush()?;
    Ok(stats)
}
