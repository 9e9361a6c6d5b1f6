//! Checksum accumulators.
//!
//! A processor folds one significant value into the running checksum. It is
//! told the value's position (counted over significant values, virtual check
//! slots included) and nothing else, so every implementation is stateless.

use crate::weight::Weights;

pub trait Processor {
    fn process(&self, checksum: u32, value: u32, position: usize) -> u32;
}

/// `checksum + value * weight`, reduced modulo `modulus` after every step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedSum {
    pub weights: Weights,
    pub modulus: u32,
}

impl WeightedSum {
    pub const fn new(weights: Weights, modulus: u32) -> Self {
        assert!(modulus > 0, "modulus must be positive");
        Self { weights, modulus }
    }
}

impl Processor for WeightedSum {
    fn process(&self, checksum: u32, value: u32, position: usize) -> u32 {
        let term = value * self.weights.weight_at(position) % self.modulus;
        (checksum + term) % self.modulus
    }
}

/// Luhn: values at odd positions (counting the check digit as 0) are doubled,
/// casting out nines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Luhn;

impl Processor for Luhn {
    fn process(&self, checksum: u32, value: u32, position: usize) -> u32 {
        let mut v = value;
        if position % 2 == 1 {
            v *= 2;
            if v > 9 {
                v -= 9;
            }
        }
        (checksum + v) % 10
    }
}

/// Cayley table of the dihedral group D5
pub(crate) const VERHOEFF_D: [[u8; 10]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 2, 3, 4, 0, 6, 7, 8, 9, 5],
    [2, 3, 4, 0, 1, 7, 8, 9, 5, 6],
    [3, 4, 0, 1, 2, 8, 9, 5, 6, 7],
    [4, 0, 1, 2, 3, 9, 5, 6, 7, 8],
    [5, 9, 8, 7, 6, 0, 4, 3, 2, 1],
    [6, 5, 9, 8, 7, 1, 0, 4, 3, 2],
    [7, 6, 5, 9, 8, 2, 1, 0, 4, 3],
    [8, 7, 6, 5, 9, 3, 2, 1, 0, 4],
    [9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
];

/// Position-dependent permutations, cycled by `position % 8`
pub(crate) const VERHOEFF_P: [[u8; 10]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 5, 7, 6, 2, 8, 3, 0, 9, 4],
    [5, 8, 0, 3, 7, 9, 6, 1, 4, 2],
    [8, 9, 1, 6, 0, 4, 3, 5, 2, 7],
    [9, 4, 5, 3, 1, 2, 6, 8, 7, 0],
    [4, 2, 8, 6, 5, 7, 3, 9, 0, 1],
    [2, 7, 9, 3, 8, 0, 6, 4, 1, 5],
    [7, 0, 4, 6, 9, 1, 3, 2, 5, 8],
];

/// Inverses in D5, used to encode the check digit
pub(crate) const VERHOEFF_INV: [u8; 10] = [0, 4, 3, 2, 1, 5, 6, 7, 8, 9];

/// Verhoeff: the checksum is itself a group element in 0-9.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Verhoeff;

impl Processor for Verhoeff {
    fn process(&self, checksum: u32, value: u32, position: usize) -> u32 {
        // filters only hand out 0..=10; ten has no Verhoeff meaning and
        // is kept out by the decimal alphabet
        let permuted = VERHOEFF_P[position % 8][(value % 10) as usize];
        VERHOEFF_D[(checksum % 10) as usize][permuted as usize] as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weight::{EAN, MOD97};

    fn fold<P: Processor>(p: &P, rtl_digits: &[u32], offset: usize) -> u32 {
        rtl_digits
            .iter()
            .enumerate()
            .fold(0, |c, (i, &v)| p.process(c, v, i + offset))
    }

    #[test]
    fn weighted_sum_reduces() {
        let p = WeightedSum::new(EAN, 10);
        assert_eq!(p.process(0, 7, 0), 7);
        assert_eq!(p.process(7, 7, 1), 8);
    }

    #[test]
    fn weighted_sum_matches_number_mod_97() {
        let p = WeightedSum::new(MOD97, 97);
        // 123456 read right to left
        let digits = [6, 5, 4, 3, 2, 1];
        assert_eq!(fold(&p, &digits, 0), 123456 % 97);
    }

    #[test]
    fn luhn_casts_out_nines() {
        assert_eq!(Luhn.process(0, 9, 1), 9);
        assert_eq!(Luhn.process(0, 6, 1), 3);
        assert_eq!(Luhn.process(0, 6, 0), 6);
    }

    #[test]
    fn verhoeff_known_value() {
        // "2363" is the textbook example
        assert_eq!(fold(&Verhoeff, &[3, 6, 3, 2], 0), 0);
        let c = fold(&Verhoeff, &[6, 3, 2], 1);
        assert_eq!(VERHOEFF_INV[c as usize], 3);
    }
}
