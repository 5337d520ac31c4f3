//! Placing unmapped reads next to their mapped mates.
//!
//! An unmapped read whose mate is mapped takes over the mate's RNAME and POS so that
//! coordinate-based tools bucket it with its mate. In [`ImputeMode::Both`] a mapped
//! read whose mate is unmapped also points RNEXT and PNEXT at its own coordinates.

use log::debug;
use strum::Display;

use crate::error::RecordError;
use crate::pipeline::{Transducer, Verdict};
use crate::record::SamRecord;
use crate::types::{ImputeMode, MateState, PNEXT, UNSET};

/// Fields up to and including PNEXT are read by the imputer.
pub const MIN_FIELDS: usize = PNEXT + 1;

/// The direction in which coordinates were copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Imputation {
    /// RNAME/POS were copied from RNEXT/PNEXT.
    ReadFromMate,
    /// RNEXT/PNEXT were copied from RNAME/POS.
    MateFromRead,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MateImputer {
    mode: ImputeMode,
}

impl MateImputer {
    pub fn new(mode: ImputeMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ImputeMode {
        self.mode
    }

    /// Rewrite `record` in place if one of the imputation cases applies.
    ///
    /// Records whose own and mate reference names are both set are never touched,
    /// and neither are records where both reads are unmapped.
    pub fn impute<'a>(
        &self,
        record: &mut SamRecord<'a>,
    ) -> Result<Option<Imputation>, RecordError> {
        record.require(MIN_FIELDS)?;
        match record.mate_state()? {
            MateState::ReadUnmapped if record.reference_name()? == UNSET => {
                let name = record.mate_reference_name()?;
                let position = record.mate_position()?;
                record.set_reference(name, position)?;
                Ok(Some(Imputation::ReadFromMate))
            }
            MateState::MateUnmapped
                if self.mode.handles_both_directions()
                    && record.mate_reference_name()? == UNSET =>
            {
                let name = record.reference_name()?;
                let position = record.position()?;
                record.set_mate_reference(name, position)?;
                Ok(Some(Imputation::MateFromRead))
            }
            MateState::BothUnmapped => {
                debug!("{}: read and mate both unmapped, left unchanged", record.name());
                Ok(None)
            }
            _ => Ok(None),
        }
    }
}

impl Transducer for MateImputer {
    fn name(&self) -> &'static str {
        match self.mode {
            ImputeMode::Both => "assign-unmapped-pos",
            ImputeMode::UnmappedReadOnly => "assign-unmapped-pos-one-way",
        }
    }

    fn process<'a>(&self, mut record: SamRecord<'a>) -> Result<Verdict<'a>, RecordError> {
        if let Some(imputation) = self.impute(&mut record)? {
            debug!("{}: imputed {}", record.name(), imputation);
        }
        Ok(Verdict::Keep(record))
    }
}
