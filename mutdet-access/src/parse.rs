//! Textual flag expressions.
//!
//! An expression is a list of terms separated by `|`, `,` or whitespace. A
//! term is either an integer literal (decimal, `0x` hex, `0o` octal or `0b`
//! binary, `_` allowed between digits) or a modifier name of the given
//! [`ElementKind`]. The result is the union of all terms.

use log::{debug, trace};

use crate::element::ElementKind;
use crate::error::{Error, Result};

/// Parse a flag expression such as `"private | static"` or `"0x0018"`.
pub fn parse_flags(kind: ElementKind, text: &str) -> Result<u32> {
    let mut flags = 0u32;
    let mut terms = 0usize;

    for term in text
        .split(|c: char| c == '|' || c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
    {
        let bits = parse_term(kind, term)?;
        trace!("term {term:?} -> {bits:#x}");
        flags |= bits;
        terms += 1;
    }

    if terms == 0 {
        return Err(Error::Empty);
    }
    debug!("parsed {kind} flags {text:?} -> {flags:#06x}");
    Ok(flags)
}

fn parse_term(kind: ElementKind, term: &str) -> Result<u32> {
    if term.starts_with(|c: char| c.is_ascii_digit()) {
        return parse_literal(term);
    }
    kind.modifier_bit(term).ok_or_else(|| Error::UnknownModifier {
        name: term.to_string(),
        kind,
    })
}

/// Parse an unsigned integer literal with an optional radix prefix.
pub fn parse_literal(term: &str) -> Result<u32> {
    let invalid = || Error::InvalidLiteral(term.to_string());

    let (radix, digits) = match term.get(..2) {
        Some("0x" | "0X") => (16, &term[2..]),
        Some("0o" | "0O") => (8, &term[2..]),
        Some("0b" | "0B") => (2, &term[2..]),
        _ => (10, term),
    };
    // from_str_radix would accept a leading '+'
    if digits.starts_with('_')
        || digits.ends_with('_')
        || !digits.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(invalid());
    }
    let digits: String = digits.chars().filter(|&c| c != '_').collect();
    if digits.is_empty() {
        return Err(invalid());
    }
    u32::from_str_radix(&digits, radix).map_err(|_| invalid())
}
