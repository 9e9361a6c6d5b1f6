//! Filter & transliteration: which symbols are significant and what they are worth.

use crate::error::{CheckError, CheckResult};
use crate::symbol::{Glyph, Symbol};

/// Separators skipped by every identifier standard in this crate
pub const SPACE_AND_HYPHEN: &[char] = &[' ', '-'];

/// Symbols that carry a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alphabet {
    /// ASCII digits, worth 0-9
    Decimal,
    /// ASCII digits plus a letter worth ten (matched in either case)
    DecimalOrTen(char),
}

/// What happens to symbols outside the alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separators {
    /// Anything outside the alphabet is an error
    Strict,
    /// Only the listed characters are skipped
    Listed(&'static [char]),
    /// Any character outside the alphabet is skipped
    Lenient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Translation {
    Value(u32),
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Filter {
    pub alphabet: Alphabet,
    pub separators: Separators,
}

impl Filter {
    pub const fn new(alphabet: Alphabet, separators: Separators) -> Self {
        Self {
            alphabet,
            separators,
        }
    }

    /// The letter worth ten, if the alphabet has one
    pub fn ten(&self) -> Option<char> {
        match self.alphabet {
            Alphabet::Decimal => None,
            Alphabet::DecimalOrTen(letter) => Some(letter),
        }
    }

    /// Translate one symbol. `index` is its physical position, used for error reporting.
    ///
    /// Integer symbols are never separators: out of range means a translation error.
    pub fn translate<S: Symbol>(&self, index: usize, symbol: S) -> CheckResult<Translation> {
        match symbol.glyph() {
            Glyph::Text(c) => {
                if let Some(d) = c.to_digit(10) {
                    return Ok(Translation::Value(d));
                }
                if self.ten().is_some_and(|t| c.eq_ignore_ascii_case(&t)) {
                    return Ok(Translation::Value(10));
                }
                match self.separators {
                    Separators::Lenient => Ok(Translation::Skip),
                    Separators::Listed(list) if list.contains(&c) => Ok(Translation::Skip),
                    _ => Err(CheckError::translation(index, symbol.glyph())),
                }
            }
            Glyph::Number(n) => match (n, self.alphabet) {
                (0..=9, _) => Ok(Translation::Value(n as u32)),
                (10, Alphabet::DecimalOrTen(_)) => Ok(Translation::Value(10)),
                _ => Err(CheckError::translation(index, symbol.glyph())),
            },
        }
    }
}
