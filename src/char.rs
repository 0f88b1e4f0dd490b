//! Narrow and wide character units.

use core::fmt::Debug;

/// Storage width of a character unit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CharWidth {
    /// Single-byte units.
    Narrow,
    /// UTF-16 or UTF-32 units.
    Wide,
}

/// A character unit the scanners can consume.
///
/// This trait is sealed and cannot be implemented for types outside of
/// `scanfloat`. It is implemented for `u8` (narrow), and for `u16`, `u32` and
/// `char` (wide). Literals only ever contain ASCII, so every scanning
/// operation behaves the same whatever the width of its input.
pub trait Char: private::Sealed + Copy + Eq + Debug {
    /// Width class of this unit.
    const WIDTH: CharWidth;

    /// The unit as an ASCII byte, or `None` for anything outside ASCII.
    fn to_ascii(self) -> Option<u8>;

    /// The unit as a Unicode scalar value, if it is one on its own.
    fn to_char(self) -> Option<char>;

    /// Widen an ASCII byte to this unit.
    fn from_ascii(byte: u8) -> Self;
}

mod private {
    pub trait Sealed {}
}

impl private::Sealed for u8 {}

impl Char for u8 {
    const WIDTH: CharWidth = CharWidth::Narrow;

    #[inline]
    fn to_ascii(self) -> Option<u8> {
        if self.is_ascii() {
            Some(self)
        } else {
            None
        }
    }

    // A lone byte above 0x7F is only part of a UTF-8 sequence.
    #[inline]
    fn to_char(self) -> Option<char> {
        self.to_ascii().map(char::from)
    }

    #[inline]
    fn from_ascii(byte: u8) -> Self {
        byte
    }
}

impl private::Sealed for u16 {}

impl Char for u16 {
    const WIDTH: CharWidth = CharWidth::Wide;

    #[inline]
    fn to_ascii(self) -> Option<u8> {
        if self < 0x80 {
            Some(self as u8)
        } else {
            None
        }
    }

    #[inline]
    fn to_char(self) -> Option<char> {
        char::from_u32(u32::from(self))
    }

    #[inline]
    fn from_ascii(byte: u8) -> Self {
        u16::from(byte)
    }
}

impl private::Sealed for u32 {}

impl Char for u32 {
    const WIDTH: CharWidth = CharWidth::Wide;

    #[inline]
    fn to_ascii(self) -> Option<u8> {
        if self < 0x80 {
            Some(self as u8)
        } else {
            None
        }
    }

    #[inline]
    fn to_char(self) -> Option<char> {
        char::from_u32(self)
    }

    #[inline]
    fn from_ascii(byte: u8) -> Self {
        u32::from(byte)
    }
}

impl private::Sealed for char {}

impl Char for char {
    const WIDTH: CharWidth = CharWidth::Wide;

    #[inline]
    fn to_ascii(self) -> Option<u8> {
        if self.is_ascii() {
            Some(self as u8)
        } else {
            None
        }
    }

    #[inline]
    fn to_char(self) -> Option<char> {
        Some(self)
    }

    #[inline]
    fn from_ascii(byte: u8) -> Self {
        char::from(byte)
    }
}
