//! Run-length scanning of CIGAR strings.
//!
//! The scan works on raw text rather than a validated CIGAR so that the same
//! check can run over a whole optional field such as `MC:Z:10M30N2I8M`.

use std::fmt;

use crate::parser::cigar_token;
use crate::types::CigarOp;

/// A `(length, operation)` pair as it appears in the text. `len` may be empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CigarToken<'a> {
    pub len: &'a str,
    pub op: char,
}

impl<'a> CigarToken<'a> {
    /// The run length, if present and representable.
    pub fn length(&self) -> Option<u32> {
        self.len.parse().ok()
    }

    /// The operation, if `op` is part of the CIGAR alphabet.
    pub fn operation(&self) -> Option<CigarOp> {
        CigarOp::from_char(self.op)
    }
}

impl<'a> fmt::Display for CigarToken<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.len, self.op)
    }
}

/// Iterator over the tokens of a CIGAR-like string.
pub struct CigarTokens<'a> {
    input: &'a str,
}

impl<'a> CigarTokens<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input }
    }
}

impl<'a> Iterator for CigarTokens<'a> {
    type Item = CigarToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (rest, token) = cigar_token(self.input).ok()?;
        self.input = rest;
        Some(token)
    }
}

/// Two consecutive tokens where a reference skip touches an insertion or deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Junction<'a> {
    pub first: CigarToken<'a>,
    pub second: CigarToken<'a>,
}

impl<'a> fmt::Display for Junction<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.first, self.second)
    }
}

fn touches_intron(prev: CigarOp, op: CigarOp) -> bool {
    (prev == CigarOp::RefSkip && op.is_indel()) || (prev.is_indel() && op == CigarOp::RefSkip)
}

/// Find the first place where an `N` operation is directly followed or preceded by
/// an `I` or `D` operation, with only length digits in between.
///
/// Accepts exactly the strings matched anywhere by `N[0-9]*[ID]|[ID][0-9]*N`.
pub fn find_intron_adjacent_indel(text: &str) -> Option<Junction> {
    let mut prev: Option<(CigarToken, CigarOp)> = None;
    for token in CigarTokens::new(text) {
        let op = token.operation();
        if let (Some((first, prev_op)), Some(op)) = (prev, op) {
            if touches_intron(prev_op, op) {
                return Some(Junction { first, second: token });
            }
        }
        prev = op.map(|op| (token, op));
    }
    None
}

pub fn has_intron_adjacent_indel(text: &str) -> bool {
    find_intron_adjacent_indel(text).is_some()
}
