//! Check-digit engine for short identifiers, plus EPL2 barcode labels.
//! - One generic pipeline: traversal → filter → size → processor → validator/encoder
//! - Standards (Luhn, mod 11, mod 97-10, Verhoeff, EAN/UPC, ISBN, ISSN, ABA, card brands)
//!   are `const` declarations over that pipeline
//! - `check` and `compute` share one fold; `compute` shifts positions by the
//!   virtual check slots so weights line up either way
//! - Validated EAN/UPC numbers render to EPL2 jobs for Zebra LP-2824 (203 dpi)
//!
//! ```
//! use zebra_checkdigit::{check_isbn10, compute_isbn10, CheckDigit};
//!
//! assert_eq!(compute_isbn10(b"020170073").unwrap(), CheckDigit::Single('5'));
//! assert!(check_isbn10(b"0-201-70073-5").unwrap());
//! ```

pub mod algorithm;
pub mod codec;
pub mod error;
pub mod filter;
pub mod prefix;
pub mod processor;
pub mod size;
pub mod standards;
pub mod symbol;
pub mod traversal;
pub mod weight;

pub mod barcode;
pub mod builder;
pub mod config;
pub mod consts;
pub mod epl;
pub mod graphics;

pub use algorithm::Scheme;
pub use codec::{CheckDigit, Codec, Mod10, Mod11, Mod97_10, VerhoeffCodec};
pub use error::{CheckError, CheckResult};
pub use filter::{Alphabet, Filter, Separators, Translation};
pub use prefix::PrefixRule;
pub use processor::{Luhn, Processor, Verhoeff, WeightedSum};
pub use size::SizeContract;
pub use standards::*;
pub use symbol::{Glyph, Symbol};
pub use traversal::Traversal;
pub use weight::Weights;

pub use barcode::{ean13_modules, ean8_modules, normalize_ean13, normalize_ean8, normalize_upca, upca_modules};
pub use builder::{build_barcode_label, build_ean13_label, Barcode, LabelError, LabelResult, Symbology};
pub use config::{BarcodeMode, LabelConfig};
