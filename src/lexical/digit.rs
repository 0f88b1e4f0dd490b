//! Helpers to convert and add digits from characters.

// Convert an ASCII decimal digit to its value.
//
// Callers only pass bytes the scanner already accepted as digits.
#[inline]
pub(crate) fn to_digit(c: u8) -> u32 {
    debug_assert!(c.is_ascii_digit(), "non-digit {:?} in significand", c as char);
    c.wrapping_sub(b'0') as u32
}

// Add digit to mantissa.
#[inline]
pub(crate) fn add_digit(value: u64, digit: u32) -> Option<u64> {
    value.checked_mul(10)?.checked_add(digit as u64)
}
