// FLOAT TYPE

use super::num::*;
use super::rounding::*;
use super::shift::*;

/// Extended precision floating-point type: `mant * 2^exp`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ExtendedFloat {
    /// Mantissa for the extended-precision float.
    pub mant: u64,
    /// Binary exponent for the extended-precision float.
    pub exp: i32,
}

impl ExtendedFloat {
    // OPERATIONS

    /// Multiply two normalized extended-precision floats, as if by `a*b`.
    ///
    /// The precision is maximal when the numbers are normalized, however,
    /// decent precision will occur as long as both values have high bits
    /// set. The result is not normalized.
    ///
    /// Algorithm:
    ///     1. Non-signed multiplication of mantissas (requires 2x as many bits as input).
    ///     2. Normalization of the result (not done here).
    ///     3. Addition of exponents.
    pub(crate) fn mul(&self, b: &ExtendedFloat) -> ExtendedFloat {
        debug_assert!((self.mant & HIMASK != 0) && (b.mant & HIMASK != 0));

        let ah = self.mant >> HALF_MANTISSA_BITS;
        let al = self.mant & LOMASK;
        let bh = b.mant >> HALF_MANTISSA_BITS;
        let bl = b.mant & LOMASK;

        let ah_bl = ah * bl;
        let al_bh = al * bh;
        let al_bl = al * bl;
        let ah_bh = ah * bh;

        let mut tmp = (ah_bl & LOMASK) + (al_bh & LOMASK) + (al_bl >> HALF_MANTISSA_BITS);
        // round up
        tmp += 1 << (HALF_MANTISSA_BITS - 1);

        ExtendedFloat {
            mant: ah_bh
                + (ah_bl >> HALF_MANTISSA_BITS)
                + (al_bh >> HALF_MANTISSA_BITS)
                + (tmp >> HALF_MANTISSA_BITS),
            exp: self.exp + b.exp + MANTISSA_BITS,
        }
    }

    /// Multiply in-place, as if by `a*b`.
    ///
    /// The result is not normalized.
    #[inline]
    pub(crate) fn imul(&mut self, b: &ExtendedFloat) {
        *self = self.mul(b);
    }

    // NORMALIZE

    /// Shift the mantissa so the number of leading zeros is 0, or the value
    /// itself is 0. Returns the number of bits shifted.
    #[inline]
    pub(crate) fn normalize(&mut self) -> u32 {
        // Zero has no set bit to move, and would overflow the shift.
        let shift = if self.mant == 0 {
            0
        } else {
            self.mant.leading_zeros()
        };
        shl(self, shift as i32);
        shift
    }

    // ROUND

    /// Lossy round float-point number to native mantissa boundaries.
    #[inline]
    pub(crate) fn round_to_native<F, Algorithm>(&mut self, algorithm: Algorithm)
    where
        F: Float,
        Algorithm: FnOnce(&mut ExtendedFloat, i32),
    {
        round_to_native::<F, _>(self, algorithm);
    }

    // FROM

    /// Create extended float from native float.
    #[inline]
    pub(crate) fn from_float<F: Float>(f: F) -> ExtendedFloat {
        ExtendedFloat {
            mant: f.mantissa(),
            exp: f.exponent(),
        }
    }

    // INTO

    /// Convert into default-rounded, lower-precision native float.
    #[inline]
    pub(crate) fn into_float<F: Float>(mut self) -> F {
        self.round_to_native::<F, _>(round_nearest_tie_even);
        into_float(self)
    }

    /// Convert into downward-rounded, lower-precision native float.
    #[inline]
    pub(crate) fn into_downward_float<F: Float>(mut self) -> F {
        self.round_to_native::<F, _>(round_downward);
        into_float(self)
    }
}

// INTO FLOAT

// Export extended-precision float to native float.
//
// The extended-precision float must be in native float representation,
// with overflow/underflow appropriately handled.
#[inline]
pub(super) fn into_float<F: Float>(fp: ExtendedFloat) -> F {
    if fp.mant == 0 || fp.exp < F::DENORMAL_EXPONENT {
        // sub-denormal, underflow
        F::ZERO
    } else if fp.exp >= F::MAX_EXPONENT {
        F::from_bits(F::INFINITY_BITS)
    } else {
        let exp = if fp.exp == F::DENORMAL_EXPONENT && fp.mant & F::HIDDEN_BIT_MASK == 0 {
            0
        } else {
            (fp.exp + F::EXPONENT_BIAS) as u64
        };
        let exp = exp << F::MANTISSA_SIZE;
        let mant = fp.mant & F::MANTISSA_MASK;
        F::from_bits(mant | exp)
    }
}

// TESTS
// -----
