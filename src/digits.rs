//! Fixed-capacity storage for the significant digits of a literal.

use arrayvec::ArrayVec;

/// Number of significant decimal digits kept from a literal.
///
/// The longest decimal expansion that can decide the rounding of an
/// IEEE-754 binary64 value is that of a halfway point between two
/// subnormals, 767 significant digits. Anything past this bound can only
/// tell whether the tail is zero.
pub const MAX_SIGNIFICANT_DIGITS: usize = 772;

/// Room kept past [`MAX_SIGNIFICANT_DIGITS`] for the sticky digit.
pub const STICKY_SLACK: usize = 10;

/// Total capacity of a [`DigitBuffer`].
pub const DIGIT_BUFFER_CAPACITY: usize = MAX_SIGNIFICANT_DIGITS + STICKY_SLACK;

/// Significant digits of a decimal literal and the power of ten of the last
/// one, so the literal's value is `digits × 10^exponent`.
///
/// Digits beyond [`MAX_SIGNIFICANT_DIGITS`] are not stored. If any of them
/// was nonzero, [`finish`](DigitBuffer::finish) appends a single `'1'` one
/// place below the last stored digit, which keeps the value strictly above
/// the truncated one without moving it across a rounding boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DigitBuffer {
    digits: ArrayVec<u8, DIGIT_BUFFER_CAPACITY>,
    exponent: i32,
    insignificant: usize,
    lost_precision: bool,
    finished: bool,
}

impl DigitBuffer {
    pub fn new() -> Self {
        DigitBuffer {
            digits: ArrayVec::new(),
            exponent: 0,
            insignificant: 0,
            lost_precision: false,
            finished: false,
        }
    }

    /// Store an ASCII digit.
    ///
    /// Returns `false` if the buffer is full, in which case the digit only
    /// counts towards [`lost_precision`](DigitBuffer::lost_precision).
    pub fn push_digit(&mut self, digit: u8) -> bool {
        debug_assert!(digit.is_ascii_digit());
        if self.digits.len() < MAX_SIGNIFICANT_DIGITS {
            self.digits.push(digit);
            true
        } else {
            self.record_dropped(digit);
            false
        }
    }

    /// Account for a significant digit that was not stored.
    pub fn record_dropped(&mut self, digit: u8) {
        self.insignificant += 1;
        if digit != b'0' {
            self.lost_precision = true;
        }
    }

    /// Scale the value by `10^by`, saturating at the bounds of `i32`.
    pub fn shift_exponent(&mut self, by: i32) {
        self.exponent = self.exponent.saturating_add(by);
    }

    /// Append the sticky digit if nonzero digits were dropped.
    ///
    /// Calling this more than once has no further effect.
    pub fn finish(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;
        if self.lost_precision {
            tracing::debug!(
                dropped = self.insignificant,
                "significant digits exceed the buffer, appending a sticky digit"
            );
            // Capacity is MAX_SIGNIFICANT_DIGITS + STICKY_SLACK.
            self.digits.push(b'1');
            self.shift_exponent(-1);
        }
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Power of ten of the last stored digit.
    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    /// Number of digits that did not fit.
    pub fn insignificant_digits(&self) -> usize {
        self.insignificant
    }

    /// Whether a nonzero digit was dropped.
    pub fn lost_precision(&self) -> bool {
        self.lost_precision
    }
}

impl Default for DigitBuffer {
    fn default() -> Self {
        DigitBuffer::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(buffer: &mut DigitBuffer, digit: u8, count: usize) {
        for _ in 0..count {
            buffer.push_digit(digit);
        }
    }

    #[test]
    fn stores_up_to_the_cap() {
        let mut buffer = DigitBuffer::new();
        fill(&mut buffer, b'3', MAX_SIGNIFICANT_DIGITS);
        assert_eq!(buffer.len(), MAX_SIGNIFICANT_DIGITS);
        assert!(!buffer.push_digit(b'0'));
        assert!(!buffer.lost_precision());
        assert!(!buffer.push_digit(b'4'));
        assert!(buffer.lost_precision());
        assert_eq!(buffer.insignificant_digits(), 2);
        assert_eq!(buffer.len(), MAX_SIGNIFICANT_DIGITS);
    }

    #[test]
    fn sticky_digit() {
        let mut buffer = DigitBuffer::new();
        fill(&mut buffer, b'9', MAX_SIGNIFICANT_DIGITS);
        buffer.record_dropped(b'5');
        buffer.shift_exponent(-800);
        buffer.finish();
        buffer.finish();
        assert_eq!(buffer.len(), MAX_SIGNIFICANT_DIGITS + 1);
        assert_eq!(buffer.digits().last(), Some(&b'1'));
        assert_eq!(buffer.exponent(), -801);
    }

    #[test]
    fn zero_tail_is_not_sticky() {
        let mut buffer = DigitBuffer::new();
        fill(&mut buffer, b'1', MAX_SIGNIFICANT_DIGITS);
        fill(&mut buffer, b'0', 100);
        buffer.finish();
        assert_eq!(buffer.len(), MAX_SIGNIFICANT_DIGITS);
        assert_eq!(buffer.exponent(), 0);
    }

    #[test]
    fn exponent_saturates() {
        let mut buffer = DigitBuffer::new();
        buffer.shift_exponent(i32::MAX);
        buffer.shift_exponent(1);
        assert_eq!(buffer.exponent(), i32::MAX);
        buffer.shift_exponent(i32::MIN);
        buffer.shift_exponent(i32::MIN);
        assert_eq!(buffer.exponent(), i32::MIN);
    }
}
