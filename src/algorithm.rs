//! Orchestration: a `Scheme` wires traversal, filter, processor, size
//! contract, codec and optional prefix rule into `check` and `compute`.
//!
//! Both operations share one fold. They differ only in how many virtual
//! positions precede the first significant value: `compute` receives the
//! sequence without its check symbol, so under right-to-left traversal every
//! position is shifted by the codec's check slots. The offset is applied once
//! per call, as `position = significant_index + offset`. The size contract
//! always counts the absent slots, whichever the direction.

use tracing::{debug, trace};

use crate::codec::{CheckDigit, Codec};
use crate::error::{CheckError, CheckResult};
use crate::filter::{Filter, Translation};
use crate::prefix::PrefixRule;
use crate::processor::Processor;
use crate::size::SizeContract;
use crate::symbol::Symbol;
use crate::traversal::Traversal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Check,
    Compute,
}

/// A complete check-digit standard, declared as a set of policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheme<P, C> {
    pub name: &'static str,
    pub traversal: Traversal,
    pub filter: Filter,
    pub processor: P,
    pub size: SizeContract,
    pub codec: C,
    pub prefix: Option<PrefixRule>,
}

impl<P: Processor, C: Codec> Scheme<P, C> {
    pub const fn new(
        name: &'static str,
        traversal: Traversal,
        filter: Filter,
        processor: P,
        size: SizeContract,
        codec: C,
    ) -> Self {
        Self {
            name,
            traversal,
            filter,
            processor,
            size,
            codec,
            prefix: None,
        }
    }

    /// Attach a prefix rule. Leading values can only be located when reading
    /// left to right or when the length is fixed.
    pub const fn with_prefix(mut self, rule: PrefixRule) -> Self {
        assert!(
            matches!(self.traversal, Traversal::LeftToRight)
                || matches!(self.size, SizeContract::Exactly(_)),
            "prefix rules need left-to-right traversal or a fixed size"
        );
        self.prefix = Some(rule);
        self
    }

    /// Validate a sequence that includes its check symbol(s).
    pub fn check<S: Symbol>(&self, seq: &[S]) -> CheckResult<bool> {
        let checksum = self.fold(seq, Mode::Check)?;
        let valid = self.codec.is_valid(checksum);
        trace!(scheme = self.name, checksum, valid, "check");
        Ok(valid)
    }

    /// Compute the check symbol(s) for a sequence given without them.
    pub fn compute<S: Symbol>(&self, seq: &[S]) -> CheckResult<CheckDigit> {
        let checksum = self.fold(seq, Mode::Compute)?;
        let digit = self.codec.encode(checksum);
        trace!(scheme = self.name, checksum, %digit, "compute");
        Ok(digit)
    }

    pub fn check_str(&self, s: &str) -> CheckResult<bool> {
        self.check(&s.chars().collect::<Vec<_>>())
    }

    pub fn compute_str(&self, s: &str) -> CheckResult<CheckDigit> {
        self.compute(&s.chars().collect::<Vec<_>>())
    }

    /// Check slots absent from the input
    fn virtual_slots(&self, mode: Mode) -> usize {
        match mode {
            Mode::Check => 0,
            Mode::Compute => self.codec.check_slots(),
        }
    }

    /// Virtual slots come first only when reading from the right
    fn offset(&self, mode: Mode) -> usize {
        match self.traversal {
            Traversal::RightToLeft => self.virtual_slots(mode),
            Traversal::LeftToRight => 0,
        }
    }

    fn left_distance(&self, position: usize) -> Option<usize> {
        match (self.traversal, self.size) {
            (Traversal::LeftToRight, _) => Some(position),
            (Traversal::RightToLeft, SizeContract::Exactly(n)) => n.checked_sub(position + 1),
            (Traversal::RightToLeft, SizeContract::NonEmpty) => None,
        }
    }

    fn fold<S: Symbol>(&self, seq: &[S], mode: Mode) -> CheckResult<u32> {
        self.fold_inner(seq, mode).inspect_err(|e| {
            debug!(scheme = self.name, ?mode, error = %e, "rejected sequence");
        })
    }

    fn fold_inner<S: Symbol>(&self, seq: &[S], mode: Mode) -> CheckResult<u32> {
        let offset = self.offset(mode);
        let slots = self.virtual_slots(mode);
        // errors report what the caller supplied, not the virtual slots
        let supplied = self.size.supplied(slots);
        let mut probe = self.prefix.as_ref().map(PrefixRule::probe);
        let mut checksum = 0;
        let mut count = 0;
        // left to right, a ten is only legal as the last significant value
        let mut pending_ten: Option<(usize, S)> = None;

        for (index, symbol) in self.traversal.walk(seq) {
            let value = match self.filter.translate(index, symbol)? {
                Translation::Value(v) => v,
                Translation::Skip => continue,
            };
            let position = count + offset;
            count += 1;
            if self.size.overflowed(count + slots) {
                return Err(supplied.violation(count));
            }
            if let Some((i, s)) = pending_ten {
                return Err(CheckError::translation(i, s.glyph()));
            }
            if value == 10 {
                let in_check_slot = match (mode, self.traversal) {
                    (Mode::Compute, _) => false,
                    (Mode::Check, Traversal::RightToLeft) => count == 1,
                    (Mode::Check, Traversal::LeftToRight) => true,
                };
                if !in_check_slot {
                    return Err(CheckError::translation(index, symbol.glyph()));
                }
                if self.traversal == Traversal::LeftToRight {
                    pending_ten = Some((index, symbol));
                }
            }

            if let (Some(p), Some(d)) = (probe.as_mut(), self.left_distance(position)) {
                p.observe(d, value);
            }
            checksum = self.processor.process(checksum, value, position);
        }

        if count == 0 {
            return Err(supplied.violation(0));
        }
        self.size
            .verify(count + slots)
            .map_err(|_| supplied.violation(count))?;
        if let Some(p) = &probe {
            p.finish()?;
        }
        Ok(checksum)
    }
}
