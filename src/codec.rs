//! Validators and check-digit encoders, one per modulus family.

use std::fmt;

use crate::error::{CheckError, CheckResult};
use crate::processor::VERHOEFF_INV;

/// Computed check symbol(s)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckDigit {
    Single(char),
    /// Tens digit, then units digit (ISO 7064 mod 97-10)
    Pair(char, char),
}

impl CheckDigit {
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Pair(..) => 2,
        }
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Append the symbol(s) to a caller-owned buffer
    pub fn push_to(&self, out: &mut String) {
        match *self {
            Self::Single(c) => out.push(c),
            Self::Pair(tens, units) => {
                out.push(tens);
                out.push(units);
            }
        }
    }

    /// Write the symbol(s) to the front of `out` and return how many were
    /// written. `out` shorter than `len()` is a size error and is left untouched.
    pub fn write_into(&self, out: &mut [char]) -> CheckResult<usize> {
        if out.len() < self.len() {
            return Err(CheckError::Size {
                contract: format!("at least {}", self.len()),
                found: out.len(),
            });
        }
        match *self {
            Self::Single(c) => out[0] = c,
            Self::Pair(tens, units) => {
                out[0] = tens;
                out[1] = units;
            }
        }
        Ok(self.len())
    }

    /// The single symbol, if this is not a pair
    pub fn single(&self) -> Option<char> {
        match *self {
            Self::Single(c) => Some(c),
            Self::Pair(..) => None,
        }
    }
}

impl fmt::Display for CheckDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(c) => write!(f, "{}", c),
            Self::Pair(a, b) => write!(f, "{}{}", a, b),
        }
    }
}

fn digit(d: u32) -> char {
    (b'0' + (d % 10) as u8) as char
}

pub trait Codec {
    /// Number of trailing positions the check symbol occupies
    fn check_slots(&self) -> usize {
        1
    }

    fn is_valid(&self, checksum: u32) -> bool;

    /// Check symbol for a checksum folded with the check slots left virtual
    fn encode(&self, checksum: u32) -> CheckDigit;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mod10;

impl Codec for Mod10 {
    fn is_valid(&self, checksum: u32) -> bool {
        checksum % 10 == 0
    }

    fn encode(&self, checksum: u32) -> CheckDigit {
        CheckDigit::Single(digit((10 - checksum % 10) % 10))
    }
}

/// Modulus 11; a residue of ten is written as `ten`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mod11 {
    pub ten: char,
}

impl Default for Mod11 {
    fn default() -> Self {
        Self { ten: 'X' }
    }
}

impl Codec for Mod11 {
    fn is_valid(&self, checksum: u32) -> bool {
        checksum % 11 == 0
    }

    fn encode(&self, checksum: u32) -> CheckDigit {
        match (11 - checksum % 11) % 11 {
            10 => CheckDigit::Single(self.ten),
            r => CheckDigit::Single(digit(r)),
        }
    }
}

/// ISO 7064 mod 97-10: two trailing check digits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mod97_10;

impl Codec for Mod97_10 {
    fn check_slots(&self) -> usize {
        2
    }

    fn is_valid(&self, checksum: u32) -> bool {
        checksum % 97 == 1
    }

    fn encode(&self, checksum: u32) -> CheckDigit {
        // 98 - r lies in 2..=98
        let r = 98 - checksum % 97;
        CheckDigit::Pair(digit(r / 10), digit(r % 10))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerhoeffCodec;

impl Codec for VerhoeffCodec {
    fn is_valid(&self, checksum: u32) -> bool {
        checksum == 0
    }

    fn encode(&self, checksum: u32) -> CheckDigit {
        CheckDigit::Single(digit(VERHOEFF_INV[(checksum % 10) as usize] as u32))
    }
}
