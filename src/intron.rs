//! Dropping spliced alignments with an insertion or deletion next to an intron.
//!
//! A record is dropped when its own CIGAR, or the text of its first `MC:Z` tag,
//! has an `N` operation directly touching an `I` or `D` operation.

use log::debug;

use crate::cigar::{find_intron_adjacent_indel, Junction};
use crate::error::RecordError;
use crate::pipeline::{Transducer, Verdict};
use crate::record::SamRecord;
use crate::types::CIGAR;

/// Fields up to and including CIGAR are read by the filter.
pub const MIN_FIELDS: usize = CIGAR + 1;

/// Where the offending junction was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection<'a> {
    Cigar(Junction<'a>),
    MateCigar(Junction<'a>),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IntronIndelFilter;

impl IntronIndelFilter {
    pub fn new() -> Self {
        Self
    }

    /// Returns why `record` should be dropped, or `None` to keep it.
    ///
    /// The mate tag is matched over its full text, `MC:Z:` prefix included.
    pub fn check<'a>(&self, record: &SamRecord<'a>) -> Result<Option<Rejection<'a>>, RecordError> {
        let cigar = record.cigar()?;
        if let Some(junction) = find_intron_adjacent_indel(cigar) {
            return Ok(Some(Rejection::Cigar(junction)));
        }
        Ok(record
            .mate_cigar_tag()
            .and_then(find_intron_adjacent_indel)
            .map(Rejection::MateCigar))
    }
}

impl Transducer for IntronIndelFilter {
    fn name(&self) -> &'static str {
        "filter-intron-adjacent-indels"
    }

    fn process<'a>(&self, record: SamRecord<'a>) -> Result<Verdict<'a>, RecordError> {
        match self.check(&record)? {
            Some(Rejection::Cigar(junction)) => {
                debug!("{}: dropped, CIGAR has {}", record.name(), junction);
                Ok(Verdict::Drop)
            }
            Some(Rejection::MateCigar(junction)) => {
                debug!("{}: dropped, mate CIGAR has {}", record.name(), junction);
                Ok(Verdict::Drop)
            }
            None => Ok(Verdict::Keep(record)),
        }
    }
}
