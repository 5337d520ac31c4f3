use std::borrow::Cow;
use std::io::{self, Write};

use itertools::Itertools;

use crate::error::RecordError;
use crate::types::{
    MateState, CIGAR, FIRST_OPTIONAL, FLAG, HEADER_PREFIX, MATE_CIGAR_PREFIX, PNEXT, POS, RNAME,
    RNEXT,
};

/// One line of SAM text, either a header line or an alignment record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SamLine<'a> {
    Header(&'a str),
    Record(SamRecord<'a>),
}

impl<'a> SamLine<'a> {
    /// Classify a line (without its terminator). Header lines are not split.
    pub fn parse(line: &'a str) -> Self {
        if line.starts_with(HEADER_PREFIX) {
            SamLine::Header(line)
        } else {
            SamLine::Record(SamRecord::new(line))
        }
    }
}

/// A whitespace-split view of a single alignment line.
///
/// Fields borrow from the line. Rewriting a field only swaps which slice it
/// points at, so an untouched record is written back exactly as it was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamRecord<'a> {
    line: &'a str,
    fields: Vec<&'a str>,
    modified: bool,
}

impl<'a> SamRecord<'a> {
    pub fn new(line: &'a str) -> Self {
        Self {
            line,
            fields: line.split_whitespace().collect(),
            modified: false,
        }
    }

    /// The line this record was split from.
    pub fn line(&self) -> &'a str {
        self.line
    }

    pub fn fields(&self) -> &[&'a str] {
        &self.fields
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Fails unless the record has at least `required` fields.
    pub fn require(&self, required: usize) -> Result<(), RecordError> {
        if self.fields.len() < required {
            Err(RecordError::TooFewFields {
                required,
                found: self.fields.len(),
            })
        } else {
            Ok(())
        }
    }

    pub fn get(&self, idx: usize) -> Result<&'a str, RecordError> {
        self.require(idx + 1)?;
        Ok(self.fields[idx])
    }

    /// QNAME, or an empty string for an empty line.
    pub fn name(&self) -> &'a str {
        self.fields.first().copied().unwrap_or("")
    }

    pub fn flag(&self) -> Result<i64, RecordError> {
        let value = self.get(FLAG)?;
        value.parse().map_err(|source| RecordError::InvalidFlag {
            value: value.to_owned(),
            source,
        })
    }

    pub fn mate_state(&self) -> Result<MateState, RecordError> {
        self.flag().map(MateState::from)
    }

    pub fn reference_name(&self) -> Result<&'a str, RecordError> {
        self.get(RNAME)
    }

    pub fn position(&self) -> Result<&'a str, RecordError> {
        self.get(POS)
    }

    pub fn cigar(&self) -> Result<&'a str, RecordError> {
        self.get(CIGAR)
    }

    pub fn mate_reference_name(&self) -> Result<&'a str, RecordError> {
        self.get(RNEXT)
    }

    pub fn mate_position(&self) -> Result<&'a str, RecordError> {
        self.get(PNEXT)
    }

    /// Set RNAME and POS.
    pub fn set_reference(&mut self, name: &'a str, position: &'a str) -> Result<(), RecordError> {
        self.require(POS + 1)?;
        self.fields[RNAME] = name;
        self.fields[POS] = position;
        self.modified = true;
        Ok(())
    }

    /// Set RNEXT and PNEXT.
    pub fn set_mate_reference(
        &mut self,
        name: &'a str,
        position: &'a str,
    ) -> Result<(), RecordError> {
        self.require(PNEXT + 1)?;
        self.fields[RNEXT] = name;
        self.fields[PNEXT] = position;
        self.modified = true;
        Ok(())
    }

    /// Optional `TAG:TYPE:VALUE` fields, possibly empty.
    pub fn optional_fields(&self) -> &[&'a str] {
        self.fields.get(FIRST_OPTIONAL..).unwrap_or(&[])
    }

    /// The first optional field starting with `MC:Z`, including that prefix.
    pub fn mate_cigar_tag(&self) -> Option<&'a str> {
        self.optional_fields()
            .iter()
            .copied()
            .find(|field| field.starts_with(MATE_CIGAR_PREFIX))
    }

    /// The line to emit: the original text if untouched, tab-joined fields otherwise.
    pub fn to_line(&self) -> Cow<'a, str> {
        if self.modified {
            Cow::Owned(self.fields.iter().join("\t"))
        } else {
            Cow::Borrowed(self.line)
        }
    }

    /// Write the line to emit, without a terminator.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        if !self.modified {
            return writer.write_all(self.line.as_bytes());
        }
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                writer.write_all(b"\t")?;
            }
            writer.write_all(field.as_bytes())?;
        }
        Ok(())
    }
}
