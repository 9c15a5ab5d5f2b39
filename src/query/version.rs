//! Version-constraint parsing and digit-based comparison
//!
//! Versions are compared by magnitude: every decimal digit of the string is
//! concatenated in order and parsed as one integer, so "v1.2.3" compares as
//! 123. A constraint string may carry an operator prefix (`>=1.0`, `!=2`,
//! `=>1.2.3`, ...); without a prefix the version is matched exactly.

use crate::query::error::VersionError;

/// Comparison operator parsed from a version-constraint prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Ne,
    Ge,
    Gt,
    Le,
    Lt,
}

impl CompareOp {
    /// Canonical spelling of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            CompareOp::Eq => "==",
            CompareOp::Ne => "!=",
            CompareOp::Ge => ">=",
            CompareOp::Gt => ">",
            CompareOp::Le => "<=",
            CompareOp::Lt => "<",
        }
    }

    /// Apply the operator to two magnitudes. Fixed dispatch; operators are
    /// never evaluated as expression text.
    pub fn eval(&self, a: u128, b: u128) -> bool {
        match self {
            CompareOp::Eq => a == b,
            CompareOp::Ne => a != b,
            CompareOp::Ge => a >= b,
            CompareOp::Gt => a > b,
            CompareOp::Le => a <= b,
            CompareOp::Lt => a < b,
        }
    }
}

/// Split a constraint string into its operator prefix and version remainder.
///
/// The prefix table is order-sensitive and mirrors the legacy report tool
/// exactly: `==` and `!=` are tested unconditionally, then a single `else if`
/// chain tries `=>`/`>=` (both ≥), `>`, `<=`/`=<` (both ≤), `<`. An input
/// starting with `==` therefore never reaches the `>=`/`<=` branches. The
/// remainder has the matched operator's characters trimmed from BOTH ends.
///
/// `None` input yields `(None, None)`; an unprefixed input is returned
/// untrimmed.
pub fn parse_constraint(raw: Option<&str>) -> (Option<CompareOp>, Option<String>) {
    let Some(raw) = raw else {
        return (None, None);
    };

    let mut op = None;
    if raw.starts_with("==") {
        op = Some(CompareOp::Eq);
    }
    if raw.starts_with("!=") {
        op = Some(CompareOp::Ne);
    } else if raw.starts_with("=>") || raw.starts_with(">=") {
        op = Some(CompareOp::Ge);
    } else if raw.starts_with('>') {
        op = Some(CompareOp::Gt);
    } else if raw.starts_with("<=") || raw.starts_with("=<") {
        op = Some(CompareOp::Le);
    } else if raw.starts_with('<') {
        op = Some(CompareOp::Lt);
    }

    let remainder = match op {
        Some(op) => raw
            .trim_matches(|c| op.as_str().contains(c))
            .to_string(),
        None => raw.to_string(),
    };
    (op, Some(remainder))
}

/// Extract the magnitude of a version string: its decimal digits concatenated
/// in order and parsed base-10.
///
/// Examples:
/// - "v1.2.3" -> 123
/// - "2024.01" -> 202401
pub fn digits_of(s: &str) -> Result<u128, VersionError> {
    let digits: String = s.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Err(VersionError::NoDigits(s.to_string()));
    }
    digits
        .parse()
        .map_err(|_| VersionError::Overflow(s.to_string()))
}

/// Compare two version strings by magnitude under the given operator
pub fn compare(v1: &str, v2: &str, op: CompareOp) -> Result<bool, VersionError> {
    Ok(op.eval(digits_of(v1)?, digits_of(v2)?))
}
