use nom::character::complete::{anychar, digit0};
use nom::combinator::map;
use nom::sequence::pair;
use nom::IResult;

use crate::cigar::CigarToken;

/// One run-length token: optional ASCII length digits, then a single operation character.
///
/// Any non-digit character counts as an operation, so tag text such as `MC:Z:10M`
/// tokenizes as `M`, `C`, `:`, `Z`, `:`, `10M`. Trailing digits without an
/// operation do not form a token.
pub(crate) fn cigar_token(input: &str) -> IResult<&str, CigarToken> {
    map(pair(digit0, anychar), |(len, op)| CigarToken { len, op })(input)
}
