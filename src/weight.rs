//! Cyclic weight tables.
//!
//! Tables are indexed by position modulo their length. Right-to-left tables
//! start at the check digit (position 0); left-to-right tables start at the
//! leftmost significant value.

/// Immutable, never-empty weight table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weights(&'static [u32]);

impl Weights {
    pub const fn new(table: &'static [u32]) -> Self {
        assert!(!table.is_empty(), "weight table must not be empty");
        Self(table)
    }

    pub fn weight_at(&self, position: usize) -> u32 {
        self.0[position % self.0.len()]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Multiplicative order of 10 modulo 97
const MOD97_CYCLE: usize = 96;

/// Powers of the generator 10 modulo 97, starting at 10^0
const fn mod97_powers() -> [u32; MOD97_CYCLE] {
    let mut table = [0u32; MOD97_CYCLE];
    let mut w = 1;
    let mut i = 0;
    while i < MOD97_CYCLE {
        table[i] = w;
        w = w * 10 % 97;
        i += 1;
    }
    table
}

const MOD97_TABLE: [u32; MOD97_CYCLE] = mod97_powers();

pub const UNIT: Weights = Weights::new(&[1]);
pub const EAN: Weights = Weights::new(&[1, 3]);
pub const ABA: Weights = Weights::new(&[1, 7, 3]);
pub const MOD11: Weights = Weights::new(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
pub const ISBN10: Weights = Weights::new(&[10, 9, 8, 7, 6, 5, 4, 3, 2, 1]);
pub const ISSN: Weights = Weights::new(&[8, 7, 6, 5, 4, 3, 2, 1]);
pub const MOD97: Weights = Weights::new(&MOD97_TABLE);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cyclic_indexing() {
        assert_eq!(EAN.weight_at(0), 1);
        assert_eq!(EAN.weight_at(1), 3);
        assert_eq!(EAN.weight_at(12), 1);
        assert_eq!(UNIT.weight_at(1000), 1);
    }

    #[test]
    fn mod97_is_powers_of_ten() {
        assert_eq!(MOD97.len(), 96);
        assert_eq!(MOD97.weight_at(0), 1);
        assert_eq!(MOD97.weight_at(1), 10);
        assert_eq!(MOD97.weight_at(2), 3);
        assert_eq!(MOD97.weight_at(48), 96);
        // full cycle wraps back to 10^0
        assert_eq!(MOD97.weight_at(96), 1);
    }
}
