//! Label configuration.
//!
//! Every field defaults to the tuning constants in [`crate::consts`], so a
//! TOML file only needs to name what it changes:
//!
//! ```toml
//! darkness = 12
//! mode = "bitmap"
//! ```

use serde::Deserialize;

use crate::builder::{LabelError, LabelResult};
use crate::consts::{
    DARKNESS, FORCE_LANDSCAPE, HEIGHT, HRI_H, INVERT_BITS, LABEL_GAP, LABEL_H, LABEL_W, MAX_DOTS,
    NARROW, QUIET_ZONE, SPEED, WIDE,
};

/// How bars reach the printer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarcodeMode {
    /// EPL2 `B` command; the printer draws bars and human readable text
    #[default]
    Native,
    /// Bars rendered here and sent as a `GW` bitmap
    Bitmap,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabelConfig {
    pub width: u32,
    pub height: u32,
    pub gap: u32,
    pub darkness: u8,
    pub speed: u8,
    pub narrow: u32,
    pub wide: u32,
    pub bar_height: u32,
    pub human_readable: bool,
    pub quiet_zone: u32,
    pub invert_bits: bool,
    pub landscape: bool,
    pub mode: BarcodeMode,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            width: LABEL_W,
            height: LABEL_H,
            gap: LABEL_GAP,
            darkness: DARKNESS,
            speed: SPEED,
            narrow: NARROW,
            wide: WIDE,
            bar_height: HEIGHT,
            human_readable: true,
            quiet_zone: QUIET_ZONE,
            invert_bits: INVERT_BITS,
            landscape: FORCE_LANDSCAPE,
            mode: BarcodeMode::Native,
        }
    }
}

impl LabelConfig {
    pub fn from_toml_str(s: &str) -> LabelResult<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> LabelResult<()> {
        if self.darkness > 15 {
            return Err(LabelError::invalid("darkness", "must be 0..=15"));
        }
        if !(1..=6).contains(&self.speed) {
            return Err(LabelError::invalid("speed", "must be 1..=6"));
        }
        if self.narrow == 0 {
            return Err(LabelError::invalid("narrow", "must be at least 1 dot"));
        }
        if self.bar_height == 0 {
            return Err(LabelError::invalid("bar_height", "must be at least 1 dot"));
        }
        let dots = [
            ("width", self.width),
            ("height", self.height),
            ("gap", self.gap),
            ("narrow", self.narrow),
            ("wide", self.wide),
            ("bar_height", self.bar_height),
            ("quiet_zone", self.quiet_zone),
        ];
        if let Some((field, _)) = dots.into_iter().find(|&(_, v)| v > MAX_DOTS) {
            return Err(LabelError::invalid(field, "must not exceed 65535 dots"));
        }
        Ok(())
    }

    /// Vertical space one barcode needs. Only the printer draws the human
    /// readable line, so bitmap barcodes take their bar height alone.
    pub fn barcode_footprint(&self) -> u32 {
        match self.mode {
            BarcodeMode::Native if self.human_readable => self.bar_height.saturating_add(HRI_H),
            _ => self.bar_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_consts() {
        let c = LabelConfig::default();
        assert_eq!(c.width, LABEL_W);
        assert_eq!(c.narrow, NARROW);
        assert_eq!(c.mode, BarcodeMode::Native);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_toml() {
        let c = LabelConfig::from_toml_str("darkness = 12\nmode = \"bitmap\"\n").unwrap();
        assert_eq!(c.darkness, 12);
        assert_eq!(c.mode, BarcodeMode::Bitmap);
        assert_eq!(c.height, LABEL_H);
    }

    #[test]
    fn rejects_oversized_dimensions() {
        let err = LabelConfig::from_toml_str("narrow = 50000000").unwrap_err();
        assert!(matches!(err, LabelError::Invalid { field: "narrow", .. }));
        let err = LabelConfig::from_toml_str("bar_height = 4294967295").unwrap_err();
        assert!(matches!(err, LabelError::Invalid { field: "bar_height", .. }));
        let err = LabelConfig::from_toml_str("quiet_zone = 70000").unwrap_err();
        assert!(matches!(err, LabelError::Invalid { field: "quiet_zone", .. }));
        assert!(LabelConfig::from_toml_str("width = 65535").is_ok());
    }

    #[test]
    fn footprint_counts_text_only_when_printed() {
        let native = LabelConfig::default();
        assert_eq!(native.barcode_footprint(), HEIGHT + HRI_H);
        let bitmap = LabelConfig {
            mode: BarcodeMode::Bitmap,
            ..LabelConfig::default()
        };
        assert_eq!(bitmap.barcode_footprint(), HEIGHT);
        let unchecked = LabelConfig {
            bar_height: u32::MAX,
            ..LabelConfig::default()
        };
        assert_eq!(unchecked.barcode_footprint(), u32::MAX);
    }

    #[test]
    fn rejects_bad_values() {
        let err = LabelConfig::from_toml_str("speed = 9").unwrap_err();
        assert!(matches!(err, LabelError::Invalid { field: "speed", .. }));
        assert!(matches!(
            LabelConfig::from_toml_str("colour = 1").unwrap_err(),
            LabelError::Config(_)
        ));
    }
}
