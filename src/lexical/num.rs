//! Binary layout of the IEEE-754 formats the converter can produce.

use core::{fmt, ops};

/// Precalculated values of 10**i for i in range [0, arr.len()-1].
/// Each value can be **exactly** represented as that type.
const F32_POW10: [f32; 11] = [
    1.0,
    10.0,
    100.0,
    1000.0,
    10000.0,
    100000.0,
    1000000.0,
    10000000.0,
    100000000.0,
    1000000000.0,
    10000000000.0,
];

/// Precalculated values of 10**i for i in range [0, arr.len()-1].
/// Each value can be **exactly** represented as that type.
const F64_POW10: [f64; 23] = [
    1.0,
    10.0,
    100.0,
    1000.0,
    10000.0,
    100000.0,
    1000000.0,
    10000000.0,
    100000000.0,
    1000000000.0,
    10000000000.0,
    100000000000.0,
    1000000000000.0,
    10000000000000.0,
    100000000000000.0,
    1000000000000000.0,
    10000000000000000.0,
    100000000000000000.0,
    1000000000000000000.0,
    10000000000000000000.0,
    100000000000000000000.0,
    1000000000000000000000.0,
    10000000000000000000000.0,
];

/// Width of the extended-precision mantissa, in bits.
pub(crate) const MANTISSA_BITS: i32 = 64;

/// Half the width of the extended-precision mantissa, in bits.
pub(crate) const HALF_MANTISSA_BITS: i32 = MANTISSA_BITS / 2;

/// Mask to extract the high half of an extended-precision mantissa.
pub(crate) const HIMASK: u64 = 0xFFFF_FFFF_0000_0000;

/// Mask to extract the low half of an extended-precision mantissa.
pub(crate) const LOMASK: u64 = 0x0000_0000_FFFF_FFFF;

/// A binary floating-point format the converter rounds into.
///
/// Bit patterns travel as `u64` regardless of the storage width, so the
/// rounding code never has to be generic over the unsigned type.
pub(crate) trait Float:
    Copy
    + PartialEq
    + PartialOrd
    + fmt::Debug
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + ops::Neg<Output = Self>
{
    /// Literal zero.
    const ZERO: Self;

    /// Maximum number of significant digits that can contribute to the
    /// correctly rounded value.
    ///
    /// According to the "Handbook of Floating Point Arithmetic", for
    /// IEEE754, with emin being the min exponent and p2 the precision:
    ///
    /// `−emin + p2 + ⌊(emin + 1) log(2, 10) − log(1 − 2^(−p2), 10)⌋`
    const MAX_DIGITS: usize;

    // MASKS

    /// Bitmask for the sign bit.
    const SIGN_MASK: u64;
    /// Bitmask for the exponent, including the hidden bit.
    const EXPONENT_MASK: u64;
    /// Bitmask for the hidden bit in exponent, which is an implicit 1 in the fraction.
    const HIDDEN_BIT_MASK: u64;
    /// Bitmask for the mantissa (fraction), excluding the hidden bit.
    const MANTISSA_MASK: u64;
    /// Positive infinity as bits.
    const INFINITY_BITS: u64;

    // PROPERTIES

    /// Size of the significand (mantissa) without hidden bit.
    const MANTISSA_SIZE: i32;
    /// Bias of the exponent, relative to an integral mantissa.
    const EXPONENT_BIAS: i32;
    /// Exponent portion of a denormal float.
    const DENORMAL_EXPONENT: i32;
    /// Maximum exponent value in float.
    const MAX_EXPONENT: i32;

    // ROUNDING

    /// Default number of bits to shift (or 64 - mantissa size - 1).
    const DEFAULT_SHIFT: i32;
    /// Mask to determine if a full-carry occurred (1 in bit above hidden bit).
    const CARRY_MASK: u64;

    // FAST PATH

    /// Min and max powers of ten that are exactly representable.
    const EXPONENT_LIMIT: (i32, i32);
    /// Number of digits that can be shifted from exponent to mantissa.
    const MANTISSA_LIMIT: i32;

    /// Exact conversion of an integer that fits in the significand.
    fn from_mantissa(mant: u64) -> Self;

    /// Scale by an exactly representable power of ten.
    fn pow10(self, n: i32) -> Self;

    fn from_bits(bits: u64) -> Self;
    fn to_bits(self) -> u64;

    /// Returns true if the float is a denormal.
    #[inline]
    fn is_denormal(self) -> bool {
        self.to_bits() & Self::EXPONENT_MASK == 0
    }

    /// Returns true if the float is a NaN or Infinite.
    #[inline]
    fn is_special(self) -> bool {
        self.to_bits() & Self::EXPONENT_MASK == Self::EXPONENT_MASK
    }

    #[inline]
    fn is_inf(self) -> bool {
        self.is_special() && (self.to_bits() & Self::MANTISSA_MASK) == 0
    }

    #[inline]
    fn is_sign_positive(self) -> bool {
        self.to_bits() & Self::SIGN_MASK == 0
    }

    /// Get exponent component from the float.
    #[inline]
    fn exponent(self) -> i32 {
        if self.is_denormal() {
            return Self::DENORMAL_EXPONENT;
        }

        let biased_e = ((self.to_bits() & Self::EXPONENT_MASK) >> Self::MANTISSA_SIZE) as i32;
        biased_e - Self::EXPONENT_BIAS
    }

    /// Get mantissa (significand) component from float.
    #[inline]
    fn mantissa(self) -> u64 {
        let s = self.to_bits() & Self::MANTISSA_MASK;
        if self.is_denormal() {
            s
        } else {
            s + Self::HIDDEN_BIT_MASK
        }
    }

    /// Get next greater float for a positive float.
    /// Value must be >= 0.0 and < INFINITY.
    #[inline]
    fn next_positive(self) -> Self {
        debug_assert!(self.is_sign_positive() && !self.is_inf());
        Self::from_bits(self.to_bits() + 1)
    }

    /// Round a positive number to even.
    #[inline]
    fn round_positive_even(self) -> Self {
        if self.mantissa() & 1 == 1 {
            self.next_positive()
        } else {
            self
        }
    }
}

impl Float for f32 {
    const ZERO: f32 = 0.0;
    const MAX_DIGITS: usize = 114;
    const SIGN_MASK: u64 = 0x8000_0000;
    const EXPONENT_MASK: u64 = 0x7F80_0000;
    const HIDDEN_BIT_MASK: u64 = 0x0080_0000;
    const MANTISSA_MASK: u64 = 0x007F_FFFF;
    const INFINITY_BITS: u64 = 0x7F80_0000;
    const MANTISSA_SIZE: i32 = 23;
    const EXPONENT_BIAS: i32 = 127 + Self::MANTISSA_SIZE;
    const DENORMAL_EXPONENT: i32 = 1 - Self::EXPONENT_BIAS;
    const MAX_EXPONENT: i32 = 0xFF - Self::EXPONENT_BIAS;
    const DEFAULT_SHIFT: i32 = MANTISSA_BITS - Self::MANTISSA_SIZE - 1;
    const CARRY_MASK: u64 = 0x100_0000;
    const EXPONENT_LIMIT: (i32, i32) = (-10, 10);
    const MANTISSA_LIMIT: i32 = 7;

    #[inline]
    fn from_mantissa(mant: u64) -> f32 {
        mant as f32
    }

    #[inline]
    fn pow10(self, n: i32) -> f32 {
        debug_assert!(n >= Self::EXPONENT_LIMIT.0 && n <= Self::EXPONENT_LIMIT.1);

        if n > 0 {
            self * F32_POW10[n as usize]
        } else {
            self / F32_POW10[n.unsigned_abs() as usize]
        }
    }

    #[inline]
    fn from_bits(bits: u64) -> f32 {
        f32::from_bits(bits as u32)
    }

    #[inline]
    fn to_bits(self) -> u64 {
        f32::to_bits(self) as u64
    }
}

impl Float for f64 {
    const ZERO: f64 = 0.0;
    const MAX_DIGITS: usize = 769;
    const SIGN_MASK: u64 = 0x8000_0000_0000_0000;
    const EXPONENT_MASK: u64 = 0x7FF0_0000_0000_0000;
    const HIDDEN_BIT_MASK: u64 = 0x0010_0000_0000_0000;
    const MANTISSA_MASK: u64 = 0x000F_FFFF_FFFF_FFFF;
    const INFINITY_BITS: u64 = 0x7FF0_0000_0000_0000;
    const MANTISSA_SIZE: i32 = 52;
    const EXPONENT_BIAS: i32 = 1023 + Self::MANTISSA_SIZE;
    const DENORMAL_EXPONENT: i32 = 1 - Self::EXPONENT_BIAS;
    const MAX_EXPONENT: i32 = 0x7FF - Self::EXPONENT_BIAS;
    const DEFAULT_SHIFT: i32 = MANTISSA_BITS - Self::MANTISSA_SIZE - 1;
    const CARRY_MASK: u64 = 0x20_0000_0000_0000;
    const EXPONENT_LIMIT: (i32, i32) = (-22, 22);
    const MANTISSA_LIMIT: i32 = 15;

    #[inline]
    fn from_mantissa(mant: u64) -> f64 {
        mant as f64
    }

    #[inline]
    fn pow10(self, n: i32) -> f64 {
        debug_assert!(n >= Self::EXPONENT_LIMIT.0 && n <= Self::EXPONENT_LIMIT.1);

        if n > 0 {
            self * F64_POW10[n as usize]
        } else {
            self / F64_POW10[n.unsigned_abs() as usize]
        }
    }

    #[inline]
    fn from_bits(bits: u64) -> f64 {
        f64::from_bits(bits)
    }

    #[inline]
    fn to_bits(self) -> u64 {
        f64::to_bits(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_layout<F: Float>(one: F, min_positive: F) {
        assert_eq!(F::from_bits(one.to_bits()), one);
        assert_eq!(one.mantissa(), F::HIDDEN_BIT_MASK);
        assert_eq!(one.exponent(), -F::MANTISSA_SIZE);
        assert!(min_positive.is_denormal());
        assert_eq!(min_positive.mantissa(), 1);
        assert_eq!(min_positive.exponent(), F::DENORMAL_EXPONENT);
        assert!(F::from_bits(F::INFINITY_BITS).is_inf());
        assert!(!one.is_special());
    }

    #[test]
    fn layout_test() {
        check_layout(1f32, f32::from_bits(1));
        check_layout(1f64, f64::from_bits(1));
    }

    #[test]
    fn pow10_test() {
        assert_eq!(3f32.pow10(10), 3e10);
        assert_eq!(3f32.pow10(-10), 3e-10);
        assert_eq!(123f64.pow10(22), 123e22);
        assert_eq!(123f64.pow10(-22), 123e-22);
    }

    #[test]
    fn round_positive_even_test() {
        let odd = f64::from_bits(0x3FF0_0000_0000_0001);
        assert_eq!(odd.round_positive_even().to_bits(), 0x3FF0_0000_0000_0002);
        assert_eq!(1f64.round_positive_even(), 1.0);
        assert_eq!(f32::from_bits(1).round_positive_even(), f32::from_bits(2));
    }
}
