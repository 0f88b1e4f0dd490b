//! Algorithms to efficiently convert strings to floats.

use super::bhcomp::*;
use super::cached::*;
use super::errors::*;
use super::float::ExtendedFloat;
use super::num::*;
use super::small_powers::*;

// FAST
// ----

/// Convert mantissa to exact value for a non-base2 power.
///
/// Returns the resulting float if the value can be represented exactly.
pub(crate) fn fast_path<F: Float>(mantissa: u64, exponent: i32) -> Option<F> {
    // `mantissa >> (F::MANTISSA_SIZE+1) != 0` effectively checks if the
    // value has a no bits above the hidden bit, which is what we want.
    let (min_exp, max_exp) = F::EXPONENT_LIMIT;
    let shift_exp = F::MANTISSA_LIMIT;
    let mantissa_size = F::MANTISSA_SIZE + 1;
    if mantissa >> mantissa_size != 0 {
        // Would require truncation of the mantissa.
        None
    } else if exponent == 0 {
        Some(F::from_mantissa(mantissa))
    } else if exponent >= min_exp && exponent <= max_exp {
        // Do not use powi, since powi can incrementally introduce error.
        Some(F::from_mantissa(mantissa).pow10(exponent))
    } else if exponent >= 0 && exponent <= max_exp + shift_exp {
        // Disguised fast path: the mantissa has few enough digits that part
        // of the exponent can move into it without losing exactness.
        // https://www.exploringbinary.com/fast-path-decimal-to-floating-point-conversion/
        let shift = exponent - max_exp;
        let power = POW10_64[shift as usize];

        let value = mantissa.checked_mul(power)?;
        if value >> mantissa_size != 0 {
            None
        } else {
            Some(F::from_mantissa(value).pow10(max_exp))
        }
    } else {
        // Cannot be exactly represented, exponent too small or too big,
        // would require truncation.
        None
    }
}

// MODERATE
// --------

/// Multiply the floating-point by the exponent.
///
/// Multiply by pre-calculated powers of the base, modify the extended-
/// float, and return if the value can be represented accurately.
fn multiply_exponent_extended<F: Float>(
    fp: &mut ExtendedFloat,
    exponent: i32,
    truncated: bool,
) -> bool {
    let powers = ExtendedFloat::get_powers();
    let exponent = exponent.saturating_add(powers.bias);
    let small_index = exponent % powers.step;
    let large_index = exponent / powers.step;
    if exponent < 0 {
        // Guaranteed underflow (assign 0).
        fp.mant = 0;
        true
    } else if large_index as usize >= powers.large.len() {
        // Overflow (assign infinity)
        fp.mant = 1 << 63;
        fp.exp = 0x7FF;
        true
    } else {
        // Track errors to as a factor of unit in last-precision.
        let mut errors: u32 = 0;
        if truncated {
            errors += ERROR_HALFSCALE;
        }

        // Multiply by the small power, directly as an integer when the
        // product still fits.
        match fp
            .mant
            .overflowing_mul(powers.get_small_int(small_index as usize))
        {
            (_, true) => {
                fp.normalize();
                fp.imul(&powers.get_small(small_index as usize));
                errors += ERROR_HALFSCALE;
            }
            (mant, false) => {
                fp.mant = mant;
                fp.normalize();
            }
        }

        fp.imul(&powers.get_large(large_index as usize));
        if errors > 0 {
            errors += 1;
        }
        errors += ERROR_HALFSCALE;

        // Normalize the floating point (and the errors).
        let shift = fp.normalize();
        errors <<= shift;

        error_is_accurate::<F>(errors, fp)
    }
}

/// Create a precise native float using an intermediate extended-precision float.
///
/// Return the float approximation and if the value can be accurately
/// represented with mantissa bits of precision.
#[inline]
fn moderate_path<F: Float>(mantissa: u64, exponent: i32, truncated: bool) -> (ExtendedFloat, bool) {
    let mut fp = ExtendedFloat {
        mant: mantissa,
        exp: 0,
    };
    let valid = multiply_exponent_extended::<F>(&mut fp, exponent, truncated);
    (fp, valid)
}

// FALLBACK
// --------

/// Fallback path when the fast path does not work.
///
/// Uses the moderate path, if applicable, otherwise, uses the slow path
/// as required.
pub(crate) fn fallback_path<F: Float>(
    digits: &[u8],
    mantissa: u64,
    exponent: i32,
    mantissa_exponent: i32,
    truncated: bool,
) -> F {
    // Moderate path (use an extended 80-bit representation).
    let (fp, valid) = moderate_path::<F>(mantissa, mantissa_exponent, truncated);
    if valid {
        return fp.into_float::<F>();
    }

    // Slow path, fast path didn't work.
    let b = fp.into_downward_float::<F>();
    if b.is_special() {
        // We have a non-finite number, we get to leave early.
        b
    } else {
        tracing::trace!(
            digits = digits.len(),
            exponent,
            "moderate path ambiguous, comparing against the halfway point"
        );
        bhcomp(b, digits, exponent)
    }
}

// TESTS
// -----
