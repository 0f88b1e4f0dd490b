//! Rounding an extended-precision float to the mantissa of `f32` or `f64`.

use super::float::ExtendedFloat;
use super::num::*;
use super::shift::*;
use core::cmp::Ordering;

/// Where the bits shifted out of a mantissa fall relative to half an ulp of
/// the bits that are kept.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Remainder {
    Below,
    Halfway,
    Above,
}

impl Remainder {
    /// A halfway remainder with nonzero bits truncated below it is above
    /// halfway.
    #[inline]
    pub(crate) fn with_sticky(self, sticky: bool) -> Self {
        match self {
            Remainder::Halfway if sticky => Remainder::Above,
            other => other,
        }
    }
}

/// Mask of the lower `n` bits.
#[inline]
pub(crate) fn lower_n_mask(n: u64) -> u64 {
    debug_assert!(n <= MANTISSA_BITS as u64, "lower_n_mask() overflow in shl.");

    if n == MANTISSA_BITS as u64 {
        u64::MAX
    } else {
        (1 << n) - 1
    }
}

/// Value of the lower `n` bits that is exactly half of `1 << n`.
#[inline]
pub(crate) fn lower_n_halfway(n: u64) -> u64 {
    debug_assert!(n <= MANTISSA_BITS as u64, "lower_n_halfway() overflow in shl.");

    if n == 0 {
        0
    } else {
        1 << (n - 1)
    }
}

/// Shift `fp` right by `shift` bits and classify the bits that were dropped.
#[inline]
pub(crate) fn shift_out(fp: &mut ExtendedFloat, shift: i32) -> Remainder {
    if shift == 0 {
        return Remainder::Below;
    }
    let dropped = fp.mant & lower_n_mask(shift as u64);
    let halfway = lower_n_halfway(shift as u64);
    overflowing_shr(fp, shift);

    match dropped.cmp(&halfway) {
        Ordering::Less => Remainder::Below,
        Ordering::Equal => Remainder::Halfway,
        Ordering::Greater => Remainder::Above,
    }
}

/// Round the already shifted `fp` to nearest, ties to even.
#[inline]
pub(crate) fn round_half_even(fp: &mut ExtendedFloat, remainder: Remainder) {
    let round_up = match remainder {
        Remainder::Below => false,
        Remainder::Halfway => fp.mant & 1 == 1,
        Remainder::Above => true,
    };
    if round_up {
        fp.mant += 1;
    }
}

// Shift right `shift` bits, rounding to nearest with ties to even.
#[inline]
pub(crate) fn round_nearest_tie_even(fp: &mut ExtendedFloat, shift: i32) {
    let remainder = shift_out(fp, shift);
    round_half_even(fp, remainder);
}

// Shift right `shift` bits, rounding toward zero.
//
// Only positive values reach the converter, so truncating the shifted-out
// bits rounds downward.
#[inline]
pub(crate) fn round_downward(fp: &mut ExtendedFloat, shift: i32) {
    overflowing_shr(fp, shift);
}

// Shift the 64-bit mantissa of a normalized `fp` down to the width of `F`,
// or further for values in the subnormal range.
#[inline]
fn shift_to_mantissa<F, Algorithm>(fp: &mut ExtendedFloat, algorithm: Algorithm)
where
    F: Float,
    Algorithm: FnOnce(&mut ExtendedFloat, i32),
{
    let shift = if fp.exp + F::DEFAULT_SHIFT < F::DENORMAL_EXPONENT {
        F::DENORMAL_EXPONENT - fp.exp
    } else {
        F::DEFAULT_SHIFT
    };

    if shift > MANTISSA_BITS {
        // Every bit would be shifted out.
        fp.mant = 0;
        fp.exp = 0;
    } else {
        algorithm(fp, shift);
    }

    // Rounding up carried into the bit above the hidden bit.
    if fp.mant & F::CARRY_MASK == F::CARRY_MASK {
        shr(fp, 1);
    }
}

// A value at or above the maximum exponent of `F` is still finite if the
// bits from the hidden bit down are clear far enough to shift it back.
#[inline]
fn shift_below_max<F: Float>(fp: &mut ExtendedFloat) {
    if fp.exp < F::MAX_EXPONENT {
        return;
    }
    let diff = fp.exp - F::MAX_EXPONENT;
    if diff > F::MANTISSA_SIZE {
        return;
    }

    // The `diff + 1` bits ending at the hidden bit.
    let hidden = (F::MANTISSA_SIZE + 1) as u64;
    let window = lower_n_mask(hidden) ^ lower_n_mask(hidden - (diff + 1) as u64);
    if fp.mant & window == 0 {
        shl(fp, diff + 1);
    }
}

// Round an extended-precision float to the mantissa and exponent of `F`.
#[inline]
pub(crate) fn round_to_native<F, Algorithm>(fp: &mut ExtendedFloat, algorithm: Algorithm)
where
    F: Float,
    Algorithm: FnOnce(&mut ExtendedFloat, i32),
{
    // The shifts below assume the leading bit is set.
    fp.normalize();
    shift_to_mantissa::<F, _>(fp, algorithm);
    shift_below_max::<F>(fp);
}
