//! Element types accepted as sequence symbols.
//!
//! Characters and ASCII bytes are read as text (`'7'`, `b'X'`, `'-'`).
//! Wider integer types are read as values (`7u32` is the digit seven).

use std::fmt::Debug;

/// What a symbol looks like to the filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Text(char),
    Number(i64),
}

pub trait Symbol: Copy + Debug {
    fn glyph(self) -> Glyph;
}

impl Symbol for char {
    fn glyph(self) -> Glyph {
        Glyph::Text(self)
    }
}

impl Symbol for u8 {
    fn glyph(self) -> Glyph {
        Glyph::Text(self as char)
    }
}

macro_rules! numeric_symbol {
    ($($t:ty),*) => {
        $(
            impl Symbol for $t {
                fn glyph(self) -> Glyph {
                    Glyph::Number(i64::try_from(self).unwrap_or(i64::MAX))
                }
            }
        )*
    };
}

numeric_symbol!(u16, u32, u64, usize, i32, i64);

impl<T: Symbol> Symbol for &T {
    fn glyph(self) -> Glyph {
        (*self).glyph()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_are_text() {
        assert_eq!(b'7'.glyph(), Glyph::Text('7'));
        assert_eq!('x'.glyph(), Glyph::Text('x'));
    }

    #[test]
    fn integers_are_values() {
        assert_eq!(7u32.glyph(), Glyph::Number(7));
        assert_eq!((-1i32).glyph(), Glyph::Number(-1));
        assert_eq!(u64::MAX.glyph(), Glyph::Number(i64::MAX));
    }
}
