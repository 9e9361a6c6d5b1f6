//! Prefix rules: the leading significant values must spell one of a set of
//! ranges (ISBN-13 "Bookland" 978/979, card brand identifiers).

use crate::error::{CheckError, CheckResult};

const MAX_WIDTH: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixRule {
    /// Used in the format error message
    pub name: &'static str,
    /// Number of leading values inspected
    pub width: usize,
    /// Inclusive ranges the leading values, read as a decimal number, must fall in
    pub ranges: &'static [(u32, u32)],
}

impl PrefixRule {
    pub const fn new(name: &'static str, width: usize, ranges: &'static [(u32, u32)]) -> Self {
        assert!(width > 0 && width <= MAX_WIDTH, "prefix width out of range");
        Self { name, width, ranges }
    }

    pub(crate) fn probe(&self) -> PrefixProbe<'_> {
        PrefixProbe {
            rule: self,
            digits: [0; MAX_WIDTH],
            seen: 0,
        }
    }

    /// Check an already assembled prefix
    pub fn matches(&self, prefix: u32) -> bool {
        self.ranges
            .iter()
            .any(|&(lo, hi)| (lo..=hi).contains(&prefix))
    }
}

/// Collects the leading values while traversal runs, in either direction.
#[derive(Debug)]
pub(crate) struct PrefixProbe<'r> {
    rule: &'r PrefixRule,
    digits: [u32; MAX_WIDTH],
    seen: usize,
}

impl PrefixProbe<'_> {
    pub(crate) fn observe(&mut self, left_distance: usize, value: u32) {
        if left_distance < self.rule.width {
            self.digits[left_distance] = value;
            self.seen += 1;
        }
    }

    pub(crate) fn finish(&self) -> CheckResult<()> {
        if self.seen < self.rule.width {
            return Err(CheckError::format(format!(
                "{} requires a {}-digit prefix",
                self.rule.name, self.rule.width
            )));
        }
        let prefix = self.digits[..self.rule.width]
            .iter()
            .fold(0u32, |acc, &d| acc * 10 + d);
        if self.rule.matches(prefix) {
            Ok(())
        } else {
            Err(CheckError::format(format!(
                "prefix {:0width$} is not valid for {}",
                prefix,
                self.rule.name,
                width = self.rule.width
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOOKLAND: PrefixRule = PrefixRule::new("ISBN-13", 3, &[(978, 979)]);

    #[test]
    fn out_of_order_observation() {
        let mut p = BOOKLAND.probe();
        p.observe(5, 1);
        p.observe(2, 8);
        p.observe(1, 7);
        p.observe(0, 9);
        assert!(p.finish().is_ok());
    }

    #[test]
    fn wrong_prefix() {
        let mut p = BOOKLAND.probe();
        for (i, d) in [9, 7, 7].into_iter().enumerate() {
            p.observe(i, d);
        }
        let err = p.finish().unwrap_err();
        assert!(err.is_format());
        assert_eq!(err.to_string(), "format error: prefix 977 is not valid for ISBN-13");
    }

    #[test]
    fn leading_zero_is_kept_in_message() {
        let rule = PrefixRule::new("test", 2, &[(34, 34)]);
        let mut p = rule.probe();
        p.observe(0, 0);
        p.observe(1, 4);
        assert_eq!(
            p.finish().unwrap_err().to_string(),
            "format error: prefix 04 is not valid for test"
        );
    }
}
