//! EPL2 job assembly for barcode labels.
//!
//! Barcodes are stacked top to bottom, each centred in an equal share of the
//! label. Numbers go through the check-digit engine first, so a label is
//! never printed with a bad check digit.

use thiserror::Error;
use tracing::debug;

use crate::barcode::{ean13_modules, ean8_modules, normalize_ean13, normalize_ean8, normalize_upca, upca_modules};
use crate::config::{BarcodeMode, LabelConfig};
use crate::consts::{EAN13_MODULES, EAN8_MODULES};
use crate::epl::{epl_line, gw_bytes, image_to_row_bytes};
use crate::error::{CheckError, CheckResult};
use crate::graphics::{render_modules, rotate90};

/// Result type for label operations
pub type LabelResult<T> = std::result::Result<T, LabelError>;

#[derive(Error, Debug)]
pub enum LabelError {
    /// The barcode number failed validation
    #[error("barcode rejected: {0}")]
    Check(#[from] CheckError),

    /// TOML could not be parsed into a config
    #[error("invalid label config: {0}")]
    Config(#[from] toml::de::Error),

    /// A config value is out of range
    #[error("invalid {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },

    /// The barcodes do not fit on the label
    #[error("{what} needs {needed} dots, label has {available}")]
    Layout {
        what: &'static str,
        needed: u32,
        available: u32,
    },

    #[error("no barcodes to print")]
    Empty,
}

impl LabelError {
    pub(crate) fn invalid(field: &'static str, reason: &'static str) -> Self {
        Self::Invalid { field, reason }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbology {
    Ean13,
    Ean8,
    UpcA,
}

impl Symbology {
    fn epl_type(self) -> &'static str {
        match self {
            Self::Ean13 => "E30",
            Self::Ean8 => "E80",
            Self::UpcA => "UA0",
        }
    }

    pub fn modules(self) -> u32 {
        match self {
            Self::Ean13 | Self::UpcA => EAN13_MODULES,
            Self::Ean8 => EAN8_MODULES,
        }
    }
}

/// A validated article number, check digit included
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Barcode {
    symbology: Symbology,
    digits: String,
}

impl Barcode {
    pub fn new(symbology: Symbology, code: &str) -> CheckResult<Self> {
        let digits = match symbology {
            Symbology::Ean13 => normalize_ean13(code)?,
            Symbology::Ean8 => normalize_ean8(code)?,
            Symbology::UpcA => normalize_upca(code)?,
        };
        Ok(Self { symbology, digits })
    }

    pub fn ean13(code: &str) -> CheckResult<Self> {
        Self::new(Symbology::Ean13, code)
    }

    pub fn ean8(code: &str) -> CheckResult<Self> {
        Self::new(Symbology::Ean8, code)
    }

    pub fn upca(code: &str) -> CheckResult<Self> {
        Self::new(Symbology::UpcA, code)
    }

    pub fn symbology(&self) -> Symbology {
        self.symbology
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Data for the EPL2 `B` command: the printer appends the check digit itself
    fn payload(&self) -> &str {
        &self.digits[..self.digits.len() - 1]
    }

    fn pattern(&self) -> CheckResult<Vec<bool>> {
        match self.symbology {
            Symbology::Ean13 => ean13_modules(&self.digits),
            Symbology::Ean8 => ean8_modules(&self.digits),
            Symbology::UpcA => upca_modules(&self.digits),
        }
    }
}

/// Build a single EPL2 print job with the given barcodes stacked vertically.
/// Returns raw bytes ready to send to the printer (USB raw write).
pub fn build_barcode_label(config: &LabelConfig, barcodes: &[Barcode]) -> LabelResult<Vec<u8>> {
    config.validate()?;
    if barcodes.is_empty() {
        return Err(LabelError::Empty);
    }

    // layout happens in the reading frame; landscape swaps it on output
    let (frame_w, frame_h) = if config.landscape {
        (config.height, config.width)
    } else {
        (config.width, config.height)
    };
    let slot_h = frame_h / barcodes.len() as u32;
    let footprint = config.barcode_footprint();
    if footprint > slot_h {
        return Err(LabelError::Layout {
            what: "barcode row",
            needed: footprint,
            available: slot_h,
        });
    }

    let mut buf = Vec::new();
    epl_line(&mut buf, "N");
    epl_line(&mut buf, &format!("q{}", config.width));
    epl_line(&mut buf, &format!("Q{},{}", config.height, config.gap));
    epl_line(&mut buf, &format!("D{}", config.darkness));
    epl_line(&mut buf, &format!("S{}", config.speed));

    for (i, bc) in barcodes.iter().enumerate() {
        let quiet = match config.mode {
            BarcodeMode::Native => 0,
            BarcodeMode::Bitmap => config.quiet_zone,
        };
        let bar_w = bc
            .symbology
            .modules()
            .saturating_add(quiet.saturating_mul(2))
            .saturating_mul(config.narrow);
        if bar_w > frame_w {
            return Err(LabelError::Layout {
                what: "barcode width",
                needed: bar_w,
                available: frame_w,
            });
        }
        let x = (frame_w - bar_w) / 2;
        // i < len, so this stays within frame_h
        let y = slot_h * i as u32 + (slot_h - footprint) / 2;
        let (px, py) = if config.landscape { (y, x) } else { (x, y) };

        match config.mode {
            BarcodeMode::Native => {
                epl_line(
                    &mut buf,
                    &format!(
                        "B{},{},{},{},{},{},{},{},\"{}\"",
                        px,
                        py,
                        if config.landscape { 1 } else { 0 },
                        bc.symbology.epl_type(),
                        config.narrow,
                        config.wide,
                        config.bar_height,
                        if config.human_readable { "B" } else { "N" },
                        bc.payload()
                    ),
                );
            }
            BarcodeMode::Bitmap => {
                let mut img = render_modules(&bc.pattern()?, config.narrow, config.bar_height, quiet);
                if config.landscape {
                    img = rotate90(&img);
                }
                let (w, h, rows) = image_to_row_bytes(&img, config.invert_bits);
                gw_bytes(&mut buf, px, py, w, h, &rows);
            }
        }
    }

    epl_line(&mut buf, "P1");
    debug!(barcodes = barcodes.len(), bytes = buf.len(), mode = ?config.mode, "built EPL2 label");
    Ok(buf)
}

/// Validate and print EAN-13 numbers given with or without their check digit.
pub fn build_ean13_label(config: &LabelConfig, codes: &[&str]) -> LabelResult<Vec<u8>> {
    let barcodes = codes
        .iter()
        .map(|c| Barcode::ean13(c))
        .collect::<CheckResult<Vec<_>>>()?;
    build_barcode_label(config, &barcodes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(job: &[u8]) -> Vec<String> {
        String::from_utf8_lossy(job).split("\r\n").map(str::to_owned).collect()
    }

    #[test]
    fn barcode_payload_drops_check_digit() {
        let bc = Barcode::ean13("540011301174").unwrap();
        assert_eq!(bc.digits(), "5400113011743");
        assert_eq!(bc.payload(), "540011301174");
        assert_eq!(Barcode::upca("036000291452").unwrap().payload(), "03600029145");
    }

    #[test]
    fn native_job() {
        let job = build_ean13_label(&LabelConfig::default(), &["5400113011743", "4006381333931"]).unwrap();
        let l = lines(&job);
        assert_eq!(l[0], "N");
        assert_eq!(l[1], "q440");
        assert_eq!(l[2], "Q320,24");
        assert_eq!(l[3], "D8");
        assert_eq!(l[4], "S2");
        // (440 - 95*2) / 2 = 125; slot 160, footprint 72 → y = 44
        assert_eq!(l[5], "B125,44,0,E30,2,3,50,B,\"540011301174\"");
        assert_eq!(l[6], "B125,204,0,E30,2,3,50,B,\"400638133393\"");
        assert_eq!(l[7], "P1");
    }

    #[test]
    fn rejects_bad_check_digit() {
        let err = build_ean13_label(&LabelConfig::default(), &["5400113011744"]).unwrap_err();
        assert!(matches!(err, LabelError::Check(ref e) if e.is_format()));
    }

    #[test]
    fn layout_overflow() {
        let config = LabelConfig {
            narrow: 5,
            ..LabelConfig::default()
        };
        let err = build_ean13_label(&config, &["540011301174"]).unwrap_err();
        assert!(matches!(err, LabelError::Layout { needed: 475, available: 440, .. }));
        assert!(matches!(
            build_barcode_label(&LabelConfig::default(), &[]).unwrap_err(),
            LabelError::Empty
        ));
    }

    #[test]
    fn huge_modules_are_a_layout_error() {
        let config = LabelConfig::from_toml_str(
            "mode = \"bitmap\"\nwidth = 65535\nnarrow = 65535\nquiet_zone = 65535\n",
        )
        .unwrap();
        let err = build_ean13_label(&config, &["540011301174"]).unwrap_err();
        assert!(matches!(
            err,
            LabelError::Layout { what: "barcode width", needed: u32::MAX, available: 65535 }
        ));

        let config = LabelConfig::from_toml_str("narrow = 65535").unwrap();
        let err = build_ean13_label(&config, &["540011301174"]).unwrap_err();
        assert!(matches!(err, LabelError::Layout { needed: 6_225_825, .. }));
    }

    #[test]
    fn unvalidated_config_is_rejected() {
        let config = LabelConfig {
            bar_height: u32::MAX,
            ..LabelConfig::default()
        };
        let err = build_ean13_label(&config, &["540011301174"]).unwrap_err();
        assert!(matches!(err, LabelError::Invalid { field: "bar_height", .. }));
    }
}
