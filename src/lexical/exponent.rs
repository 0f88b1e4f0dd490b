//! Utilities to calculate exponents.

/// Convert usize into i32 without overflow.
///
/// This is needed to ensure when adjusting the exponent relative to
/// the mantissa we do not overflow for comically-long exponents.
#[inline]
pub(crate) fn into_i32(value: usize) -> i32 {
    if value > i32::MAX as usize {
        i32::MAX
    } else {
        value as i32
    }
}

// EXPONENT CALCULATION

// Calculate the exponent of the mantissa once `truncated` trailing digits
// have been dropped from it, without overflow.
//
// The digit exponent is the weight of the last digit, so every dropped
// digit moves the weight of the mantissa's last digit up by one.
#[inline]
pub(crate) fn mantissa_exponent(exponent: i32, truncated: usize) -> i32 {
    exponent.saturating_add(into_i32(truncated))
}

// Calculate the exponent of the last digit kept when only the first `count`
// of `digits` digits are used, without overflow.
//
// For example, `12345e-2` truncated to 3 digits is `123e0`.
#[inline]
pub(crate) fn scaled_exponent(exponent: i32, digits: usize, count: usize) -> i32 {
    debug_assert!(count <= digits);
    exponent.saturating_add(into_i32(digits - count))
}

// TESTS
// -----

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_i32_test() {
        assert_eq!(into_i32(0), 0);
        assert_eq!(into_i32(772), 772);
        assert_eq!(into_i32(usize::MAX), i32::MAX);
    }

    #[test]
    fn mantissa_exponent_test() {
        assert_eq!(mantissa_exponent(10, 5), 15);
        assert_eq!(mantissa_exponent(-5, 0), -5);
        assert_eq!(mantissa_exponent(-20, 3), -17);
        assert_eq!(mantissa_exponent(i32::MAX - 5, 10), i32::MAX);
        assert_eq!(mantissa_exponent(i32::MIN, 5), i32::MIN + 5);
    }

    #[test]
    fn scaled_exponent_test() {
        assert_eq!(scaled_exponent(-2, 5, 3), 0);
        assert_eq!(scaled_exponent(-2, 5, 5), -2);
        assert_eq!(scaled_exponent(-800, 773, 769), -796);
        assert_eq!(scaled_exponent(i32::MAX, 10, 1), i32::MAX);
    }
}
