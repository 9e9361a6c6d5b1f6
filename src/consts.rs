// Label and printer tuning constants (LP-2824, 203 dpi)
pub const LABEL_W: u32 = 440;    // dots (≈55 mm)
pub const LABEL_H: u32 = 320;    // dots (≈40 mm)
pub const LABEL_GAP: u32 = 24;
pub const MAX_DOTS: u32 = 65_535; // largest dimension EPL2 accepts in q/Q

pub const DARKNESS: u8 = 8;      // D0..D15
pub const SPEED: u8 = 2;         // S1..S6

pub const NARROW: u32 = 2;       // module width (2–3)
pub const WIDE: u32 = 3;         // ignored by EAN/UPC, but EPL2 wants it
pub const HEIGHT: u32 = 50;      // bar height
pub const HRI_H: u32 = 22;       // human readable line under the bars
pub const QUIET_ZONE: u32 = 9;   // modules of white on each side of a bitmap barcode

pub const FORCE_LANDSCAPE: bool = false; // rotate content in code if driver prints landscape
pub const INVERT_BITS: bool = true;      // flip GW bits → black bars on white

pub const EAN13_MODULES: u32 = 95;
pub const EAN8_MODULES: u32 = 67;
