//! Concrete standards, each one a declaration over the generic pipeline.
//!
//! | Standard   | Length | Processor          | Check    |
//! |------------|--------|--------------------|----------|
//! | Luhn       | any    | double odd, cast 9 | mod 10   |
//! | mod 11     | any    | weights 1..10      | mod 11   |
//! | mod 97-10  | any    | powers of 10       | 2 digits |
//! | Verhoeff   | any    | D5 tables          | D5 inv   |
//! | EAN-13     | 13     | 1,3                | mod 10   |
//! | EAN-8      | 8      | 1,3                | mod 10   |
//! | UPC-A      | 12     | 1,3                | mod 10   |
//! | ISBN-13    | 13     | 1,3, prefix 978/9  | mod 10   |
//! | ISBN-10    | 10     | 10..1              | mod 11   |
//! | ISSN       | 8      | 8..1               | mod 11   |
//! | ABA RTN    | 9      | 3,7,1              | mod 10   |
//! | card brand | 15/16  | Luhn + brand IIN   | mod 10   |

use crate::algorithm::Scheme;
use crate::codec::{CheckDigit, Mod10, Mod11, Mod97_10, VerhoeffCodec};
use crate::error::CheckResult;
use crate::filter::{Alphabet, Filter, Separators, SPACE_AND_HYPHEN};
use crate::prefix::PrefixRule;
use crate::processor::{Luhn, Verhoeff, WeightedSum};
use crate::size::SizeContract;
use crate::symbol::Symbol;
use crate::traversal::Traversal::{LeftToRight, RightToLeft};
use crate::weight::{self, Weights};

/// Card numbers and free-form numbers: anything but digits is punctuation
const LENIENT_DIGITS: Filter = Filter::new(Alphabet::Decimal, Separators::Lenient);
const DIGITS: Filter = Filter::new(Alphabet::Decimal, Separators::Listed(SPACE_AND_HYPHEN));
const DIGITS_OR_X: Filter = Filter::new(Alphabet::DecimalOrTen('X'), Separators::Listed(SPACE_AND_HYPHEN));

pub type Mod10Scheme = Scheme<WeightedSum, Mod10>;
pub type Mod11Scheme = Scheme<WeightedSum, Mod11>;
pub type LuhnScheme = Scheme<Luhn, Mod10>;

// ======== Generic algorithms ========

pub const LUHN: LuhnScheme = Scheme::new("Luhn", RightToLeft, LENIENT_DIGITS, Luhn, SizeContract::NonEmpty, Mod10);

pub const MOD11: Mod11Scheme = Scheme::new(
    "mod 11",
    RightToLeft,
    DIGITS_OR_X,
    WeightedSum::new(weight::MOD11, 11),
    SizeContract::NonEmpty,
    Mod11 { ten: 'X' },
);

pub const MOD97_10: Scheme<WeightedSum, Mod97_10> = Scheme::new(
    "mod 97-10",
    RightToLeft,
    DIGITS,
    WeightedSum::new(weight::MOD97, 97),
    SizeContract::NonEmpty,
    Mod97_10,
);

pub const VERHOEFF: Scheme<Verhoeff, VerhoeffCodec> = Scheme::new(
    "Verhoeff",
    RightToLeft,
    DIGITS,
    Verhoeff,
    SizeContract::NonEmpty,
    VerhoeffCodec,
);

/// Plain modulus 10 over a caller-chosen weight table, read from the check digit leftwards.
pub const fn mod10(weights: Weights) -> Mod10Scheme {
    Scheme::new(
        "mod 10",
        RightToLeft,
        DIGITS,
        WeightedSum::new(weights, 10),
        SizeContract::NonEmpty,
        Mod10,
    )
}

// ======== Article numbers ========

const fn ean(name: &'static str, len: usize) -> Mod10Scheme {
    Scheme::new(
        name,
        RightToLeft,
        DIGITS,
        WeightedSum::new(weight::EAN, 10),
        SizeContract::Exactly(len),
        Mod10,
    )
}

pub const EAN13: Mod10Scheme = ean("EAN-13", 13);
pub const EAN8: Mod10Scheme = ean("EAN-8", 8);
pub const UPCA: Mod10Scheme = ean("UPC-A", 12);
pub const ISBN13: Mod10Scheme = ean("ISBN-13", 13).with_prefix(PrefixRule::new("ISBN-13", 3, &[(978, 979)]));

// ======== Serial publications ========

pub const ISBN10: Mod11Scheme = Scheme::new(
    "ISBN-10",
    LeftToRight,
    DIGITS_OR_X,
    WeightedSum::new(weight::ISBN10, 11),
    SizeContract::Exactly(10),
    Mod11 { ten: 'X' },
);

pub const ISSN: Mod11Scheme = Scheme::new(
    "ISSN",
    LeftToRight,
    DIGITS_OR_X,
    WeightedSum::new(weight::ISSN, 11),
    SizeContract::Exactly(8),
    Mod11 { ten: 'X' },
);

// ======== Banking ========

/// ABA routing transit number
pub const ABA_RTN: Mod10Scheme = Scheme::new(
    "ABA routing number",
    RightToLeft,
    DIGITS,
    WeightedSum::new(weight::ABA, 10),
    SizeContract::Exactly(9),
    Mod10,
);

const fn card(name: &'static str, len: usize, width: usize, iin: &'static [(u32, u32)]) -> LuhnScheme {
    Scheme::new(name, RightToLeft, LENIENT_DIGITS, Luhn, SizeContract::Exactly(len), Mod10)
        .with_prefix(PrefixRule::new(name, width, iin))
}

pub const VISA: LuhnScheme = card("Visa", 16, 1, &[(4, 4)]);
pub const AMEX: LuhnScheme = card("American Express", 15, 2, &[(34, 34), (37, 37)]);
pub const MASTERCARD: LuhnScheme = card("Mastercard", 16, 4, &[(2221, 2720), (5100, 5599)]);

// ======== Entry points ========

macro_rules! entry_points {
    ($($scheme:ident => $check:ident, $compute:ident;)*) => {
        $(
            #[doc = concat!("Validate a sequence against `", stringify!($scheme), "`, check symbol included.")]
            pub fn $check<S: Symbol>(seq: &[S]) -> CheckResult<bool> {
                $scheme.check(seq)
            }

            #[doc = concat!("Compute the `", stringify!($scheme), "` check symbol for a sequence given without it.")]
            pub fn $compute<S: Symbol>(seq: &[S]) -> CheckResult<CheckDigit> {
                $scheme.compute(seq)
            }
        )*
    };
}

entry_points! {
    LUHN => check_luhn, compute_luhn;
    MOD11 => check_mod11, compute_mod11;
    MOD97_10 => check_mod97_10, compute_mod97_10;
    VERHOEFF => check_verhoeff, compute_verhoeff;
    EAN13 => check_ean13, compute_ean13;
    EAN8 => check_ean8, compute_ean8;
    UPCA => check_upca, compute_upca;
    ISBN13 => check_isbn13, compute_isbn13;
    ISBN10 => check_isbn10, compute_isbn10;
    ISSN => check_issn, compute_issn;
    ABA_RTN => check_aba_rtn, compute_aba_rtn;
    VISA => check_visa, compute_visa;
    AMEX => check_amex, compute_amex;
    MASTERCARD => check_mastercard, compute_mastercard;
}

/// Mod 97-10 writing the two check digits into a caller-provided pair.
pub fn compute_mod97_10_into<S: Symbol>(seq: &[S], out: &mut [char; 2]) -> CheckResult<()> {
    MOD97_10.compute(seq)?.write_into(out)?;
    Ok(())
}
