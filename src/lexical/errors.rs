//! Error bounds for the extended-precision moderate path.
//!
//! Errors are counted in units of `1 / ERROR_SCALE` ulp of the 64-bit
//! mantissa. The value can be trusted when the interval spanned by the
//! accumulated error cannot straddle a rounding boundary of the target
//! format.

use super::float::ExtendedFloat;
use super::num::*;
use super::rounding::*;

/// Scale of one ulp of error.
pub(crate) const ERROR_SCALE: u32 = 8;

/// Error introduced by a single truncation or rounding step.
pub(crate) const ERROR_HALFSCALE: u32 = ERROR_SCALE / 2;

// Check whether `errors` ulps around the truncated bits can change the
// round-nearest result.
#[inline]
fn nearest_error_is_accurate(errors: u64, fp: &ExtendedFloat, extrabits: u64) -> bool {
    // All the mantissa bits are extra, so the only way to be wrong is to
    // carry out of the mantissa.
    if extrabits == 65 {
        !fp.mant.overflowing_add(errors).1
    } else {
        let mask = lower_n_mask(extrabits);
        let extra = fp.mant & mask;

        // Round-to-nearest is only ambiguous if the extra bits are within
        // `errors` of the halfway point.
        let halfway = lower_n_halfway(extrabits);
        let cmp1 = halfway.wrapping_sub(errors) < extra;
        let cmp2 = extra < halfway.wrapping_add(errors);

        !(cmp1 && cmp2)
    }
}

/// Determine if the normalized `fp`, carrying `count` scaled errors, rounds
/// to the same value in `F` as the exact result would.
#[inline]
pub(crate) fn error_is_accurate<F: Float>(count: u32, fp: &ExtendedFloat) -> bool {
    // Exponent of the smallest denormal once shifted into a 64-bit mantissa.
    let bias = -(F::EXPONENT_BIAS - F::MANTISSA_SIZE);
    let denormal_exp = bias - 63;
    let extrabits = if fp.exp <= denormal_exp {
        MANTISSA_BITS - F::MANTISSA_SIZE + denormal_exp - fp.exp
    } else {
        MANTISSA_BITS - 1 - F::MANTISSA_SIZE
    };

    // The value underflows to zero whatever the error.
    if extrabits > 65 {
        return true;
    }

    nearest_error_is_accurate(count as u64, fp, extrabits as u64)
}
