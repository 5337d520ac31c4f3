use std::convert::TryFrom;

use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum::{Display, EnumString};

/// Lines starting with this character are header lines and are never parsed.
pub const HEADER_PREFIX: char = '@';
/// Sentinel for an unknown or unset field value.
pub const UNSET: &str = "*";
/// Prefix of the optional field carrying the mate's CIGAR string.
pub const MATE_CIGAR_PREFIX: &str = "MC:Z";

pub(crate) const FLAG: usize = 1;
pub(crate) const RNAME: usize = 2;
pub(crate) const POS: usize = 3;
pub(crate) const CIGAR: usize = 5;
pub(crate) const RNEXT: usize = 6;
pub(crate) const PNEXT: usize = 7;
/// Index of the first optional `TAG:TYPE:VALUE` field.
pub(crate) const FIRST_OPTIONAL: usize = 11;

pub(crate) const READ_UNMAPPED: i64 = 0x4;
pub(crate) const MATE_UNMAPPED: i64 = 0x8;

/// Mapping status of a read and its mate, i.e. the value of `flag & 0xC`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MateState {
    BothMapped,
    ReadUnmapped,
    MateUnmapped,
    BothUnmapped,
}

impl From<i64> for MateState {
    fn from(flag: i64) -> Self {
        match (flag & READ_UNMAPPED != 0, flag & MATE_UNMAPPED != 0) {
            (false, false) => MateState::BothMapped,
            (true, false) => MateState::ReadUnmapped,
            (false, true) => MateState::MateUnmapped,
            (true, true) => MateState::BothUnmapped,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum CigarOp {
    Match = b'M',
    Ins = b'I',
    Del = b'D',
    RefSkip = b'N',
    SoftClip = b'S',
    HardClip = b'H',
    Pad = b'P',
    SeqMatch = b'=',
    SeqMismatch = b'X',
}

impl CigarOp {
    /// Decode an operation character; anything outside the CIGAR alphabet is `None`.
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii() {
            CigarOp::try_from(c as u8).ok()
        } else {
            None
        }
    }

    pub fn is_indel(self) -> bool {
        matches!(self, CigarOp::Ins | CigarOp::Del)
    }
}

/// Which imputation directions the unmapped-mate imputer applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ImputeMode {
    /// Unmapped reads adopt their mate's position, and mapped reads with an
    /// unmapped mate point their mate fields at themselves.
    Both,
    /// Only unmapped reads adopt their mate's position.
    UnmappedReadOnly,
}

impl ImputeMode {
    pub fn handles_both_directions(self) -> bool {
        self == ImputeMode::Both
    }
}

impl Default for ImputeMode {
    fn default() -> Self {
        ImputeMode::Both
    }
}
