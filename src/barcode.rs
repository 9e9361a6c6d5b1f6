//! EAN/UPC normalisation and bar-module encoding.
//!
//! Normalisation accepts a number with or without its check digit: the
//! missing digit is computed, a present one is validated.

use crate::algorithm::Scheme;
use crate::codec::Mod10;
use crate::consts::{EAN13_MODULES, EAN8_MODULES};
use crate::error::{CheckError, CheckResult};
use crate::filter::SPACE_AND_HYPHEN;
use crate::processor::WeightedSum;
use crate::standards::{EAN13, EAN8, UPCA};

/// Left-hand odd parity ("L") patterns, 7 modules each, MSB first
const L_CODES: [u8; 10] = [
    0b0001101, 0b0011001, 0b0010011, 0b0111101, 0b0100011,
    0b0110001, 0b0101111, 0b0111011, 0b0110111, 0b0001011,
];

/// L/G choice for the six left digits of an EAN-13, keyed by the first digit (1 = G)
const PARITY: [u8; 10] = [
    0b000000, 0b001011, 0b001101, 0b001110, 0b010011,
    0b011001, 0b011100, 0b010101, 0b010110, 0b011010,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Set {
    L,
    G,
    R,
}

/// Digits-only form of the number with its check digit, validated.
fn normalize_with(scheme: &Scheme<WeightedSum, Mod10>, len: usize, code: &str) -> CheckResult<String> {
    let mut digits: String = code.chars().filter(|c| !SPACE_AND_HYPHEN.contains(c)).collect();
    let found = digits.chars().count();
    if found == len - 1 {
        let check = scheme.compute_str(&digits)?;
        check.push_to(&mut digits);
        Ok(digits)
    } else if found == len {
        if scheme.check_str(&digits)? {
            Ok(digits)
        } else {
            Err(CheckError::format(format!("invalid {} check digit", scheme.name)))
        }
    } else {
        Err(scheme.size.violation(found))
    }
}

pub fn normalize_ean13(code: &str) -> CheckResult<String> {
    normalize_with(&EAN13, 13, code)
}

pub fn normalize_ean8(code: &str) -> CheckResult<String> {
    normalize_with(&EAN8, 8, code)
}

pub fn normalize_upca(code: &str) -> CheckResult<String> {
    normalize_with(&UPCA, 12, code)
}

fn push_pattern(out: &mut Vec<bool>, bits: u8, width: u32) {
    for i in (0..width).rev() {
        out.push(bits >> i & 1 == 1);
    }
}

fn push_digit(out: &mut Vec<bool>, digit: u8, set: Set) {
    let l = L_CODES[digit as usize];
    let bits = match set {
        Set::L => l,
        Set::R => !l & 0x7f,
        // G is R read backwards
        Set::G => (!l & 0x7f).reverse_bits() >> 1,
    };
    push_pattern(out, bits, 7);
}

fn digit_values(normalized: &str) -> Vec<u8> {
    normalized.bytes().map(|b| b - b'0').collect()
}

fn guarded(left: &[(u8, Set)], right: &[u8], capacity: u32) -> Vec<bool> {
    let mut out = Vec::with_capacity(capacity as usize);
    push_pattern(&mut out, 0b101, 3);
    for &(d, set) in left {
        push_digit(&mut out, d, set);
    }
    push_pattern(&mut out, 0b01010, 5);
    for &d in right {
        push_digit(&mut out, d, Set::R);
    }
    push_pattern(&mut out, 0b101, 3);
    out
}

/// 95 modules (true = bar) for an EAN-13, with or without its check digit.
pub fn ean13_modules(code: &str) -> CheckResult<Vec<bool>> {
    let d = digit_values(&normalize_ean13(code)?);
    Ok(ean13_from_digits(&d))
}

fn ean13_from_digits(d: &[u8]) -> Vec<bool> {
    let parity = PARITY[d[0] as usize];
    let left: Vec<(u8, Set)> = d[1..7]
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let g = parity >> (5 - i) & 1 == 1;
            (v, if g { Set::G } else { Set::L })
        })
        .collect();
    guarded(&left, &d[7..13], EAN13_MODULES)
}

/// 67 modules for an EAN-8
pub fn ean8_modules(code: &str) -> CheckResult<Vec<bool>> {
    let d = digit_values(&normalize_ean8(code)?);
    let left: Vec<(u8, Set)> = d[..4].iter().map(|&v| (v, Set::L)).collect();
    Ok(guarded(&left, &d[4..], EAN8_MODULES))
}

/// 95 modules for a UPC-A, which is an EAN-13 with a leading zero
pub fn upca_modules(code: &str) -> CheckResult<Vec<bool>> {
    let mut d = vec![0];
    d.extend(digit_values(&normalize_upca(code)?));
    Ok(ean13_from_digits(&d))
}
