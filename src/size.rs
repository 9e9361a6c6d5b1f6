use std::fmt;

use crate::error::{CheckError, CheckResult};

/// Required number of significant values, check digit(s) included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeContract {
    Exactly(usize),
    NonEmpty,
}

impl SizeContract {
    /// `count` satisfies the contract
    pub fn accepts(&self, count: usize) -> bool {
        match *self {
            Self::Exactly(n) => count == n,
            Self::NonEmpty => count > 0,
        }
    }

    /// `count` can never satisfy the contract, whatever follows
    pub fn overflowed(&self, count: usize) -> bool {
        match *self {
            Self::Exactly(n) => count > n,
            Self::NonEmpty => false,
        }
    }

    pub fn verify(&self, count: usize) -> CheckResult<()> {
        if self.accepts(count) {
            Ok(())
        } else {
            Err(self.violation(count))
        }
    }

    /// The contract on the values a caller supplies when `slots` of them
    /// are left virtual
    pub fn supplied(&self, slots: usize) -> Self {
        match *self {
            Self::Exactly(n) => Self::Exactly(n.saturating_sub(slots)),
            Self::NonEmpty => Self::NonEmpty,
        }
    }

    pub(crate) fn violation(&self, found: usize) -> CheckError {
        CheckError::Size {
            contract: self.to_string(),
            found,
        }
    }
}

impl fmt::Display for SizeContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exactly(n) => write!(f, "exactly {}", n),
            Self::NonEmpty => f.write_str("at least 1"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly() {
        let c = SizeContract::Exactly(13);
        assert!(c.accepts(13));
        assert!(!c.accepts(12));
        assert!(!c.overflowed(13));
        assert!(c.overflowed(14));
    }

    #[test]
    fn non_empty() {
        let c = SizeContract::NonEmpty;
        assert!(!c.accepts(0));
        assert!(c.accepts(1));
        assert!(!c.overflowed(usize::MAX));
    }

    #[test]
    fn supplied_drops_virtual_slots() {
        assert_eq!(SizeContract::Exactly(13).supplied(1), SizeContract::Exactly(12));
        assert_eq!(SizeContract::Exactly(13).supplied(0), SizeContract::Exactly(13));
        assert_eq!(SizeContract::NonEmpty.supplied(2), SizeContract::NonEmpty);
    }

    #[test]
    fn verify_reports_contract() {
        let err = SizeContract::Exactly(10).verify(9).unwrap_err();
        assert_eq!(err.to_string(), "expected exactly 10 significant values, found 9");
        assert!(SizeContract::NonEmpty.verify(0).unwrap_err().is_size());
    }
}
