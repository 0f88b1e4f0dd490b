//! Compare the mantissa to the halfway representation of the float.
//!
//! Compares the actual significant digits of the mantissa to the
//! theoretical digits from `b+h`, scaled into the proper range.

use super::bignum::*;
use super::exponent::*;
use super::float::*;
use super::math::*;
use super::num::*;
use super::rounding::*;
use core::cmp;

// MANTISSA

/// Parse the full mantissa into a big integer.
///
/// At most `F::MAX_DIGITS - 1` digits are taken verbatim. Any digits past
/// that are represented by a single sticky `1`, since only their being
/// non-zero can affect the comparison against `b+h`.
fn parse_mantissa<F: Float>(digits: &[u8]) -> Bigint {
    let small_powers = POW10_LIMB;
    let step = small_powers.len() - 2;
    let max_digits = F::MAX_DIGITS - 1;
    let (head, tail) = digits.split_at(digits.len().min(max_digits));
    let mut counter = 0;
    let mut value: Limb = 0;
    let mut result = Bigint::default();

    for &digit in head {
        // We've parsed the max digits using small values, add to bignum
        if counter == step {
            result.imul_small(small_powers[counter]);
            result.iadd_small(value);
            counter = 0;
            value = 0;
        }

        debug_assert!(digit.is_ascii_digit());
        value *= 10;
        value += (digit - b'0') as Limb;
        counter += 1;
    }

    if counter != 0 {
        result.imul_small(small_powers[counter]);
        result.iadd_small(value);
    }

    // Trailing zeros were trimmed, so any digit left over is non-zero.
    if !tail.is_empty() {
        result.imul_small(10);
        result.iadd_small(1);
    }

    result
}

// FLOAT OPS

/// Calculate `b+h` from a a representation of `b` as a float.
#[inline]
fn bh_extended<F: Float>(f: F) -> ExtendedFloat {
    // None of these can overflow.
    let b = ExtendedFloat::from_float(f);
    ExtendedFloat {
        mant: (b.mant << 1) + 1,
        exp: b.exp - 1,
    }
}

// ROUNDING

/// Round-nearest, tie-even, treating an exact halfway with truncated bits
/// below it as above halfway.
#[inline]
fn round_nearest_tie_even_truncated(fp: &mut ExtendedFloat, shift: i32, is_truncated: bool) {
    let remainder = shift_out(fp, shift).with_sticky(is_truncated);
    round_half_even(fp, remainder);
}

// BHCOMP

/// Calculate the mantissa for a big integer with a positive exponent.
fn large_atof<F: Float>(digits: &[u8], exponent: i32) -> F {
    // The binary exponent is the binary exponent for the mantissa
    // shifted to the hidden bit.
    let mut bigmant = parse_mantissa::<F>(digits);
    bigmant.imul_pow10(exponent as u32);

    // Get the exact representation of the float from the big integer.
    let (mant, is_truncated) = bigmant.hi64();
    let exp = bigmant.bit_length() as i32 - MANTISSA_BITS;
    let mut fp = ExtendedFloat { mant, exp };
    fp.round_to_native::<F, _>(|fp, shift| {
        round_nearest_tie_even_truncated(fp, shift, is_truncated)
    });
    into_float(fp)
}

/// Calculate the mantissa for a big integer with a negative exponent.
///
/// This invokes the comparison with `b+h`.
fn small_atof<F: Float>(digits: &[u8], exponent: i32, f: F) -> F {
    let mut real_digits = parse_mantissa::<F>(digits);
    let real_exp = exponent;
    debug_assert!(real_exp < 0);

    // Get the significant digits and the binary exponent for `b+h`.
    let theor = bh_extended(f);
    let mut theor_digits = Bigint::from_u64(theor.mant);
    let theor_exp = theor.exp;

    // Scale both sides to integers relative to `theor_digits`. The decimal
    // exponent is negative, so 10^-e moves to the theoretical side as
    // 5^-e * 2^-e, and the powers of two are then balanced against the
    // binary exponent of `b+h`.
    //
    // Example: 10^-10, 2^-10   -> ( 0, 10)
    // Example: 10^-10, 2^-15   -> (-5, 10)
    // Example: 10^-10, 2^-5    -> ( 5, 10)
    // Example: 10^-10, 2^5     -> (15, 10)
    let binary_exp = theor_exp - real_exp;
    let halfradix_exp = -real_exp;

    if halfradix_exp != 0 {
        theor_digits.imul_pow5(halfradix_exp as u32);
    }
    if binary_exp > 0 {
        theor_digits.imul_pow2(binary_exp as u32);
    } else if binary_exp < 0 {
        real_digits.imul_pow2((-binary_exp) as u32);
    }

    // Compare real digits to theoretical digits and round the float.
    match real_digits.compare(&theor_digits) {
        cmp::Ordering::Greater => f.next_positive(),
        cmp::Ordering::Less => f,
        cmp::Ordering::Equal => f.round_positive_even(),
    }
}

/// Calculate the exact value of the float.
///
/// `b` is the value rounded downward by the moderate path, `digits` the
/// significant digits without leading or trailing zeros, and `exponent`
/// the power of ten of the last digit.
pub(crate) fn bhcomp<F: Float>(b: F, digits: &[u8], exponent: i32) -> F {
    let count = F::MAX_DIGITS.min(digits.len());
    let scaled_exponent = scaled_exponent(exponent, digits.len(), count);

    if scaled_exponent >= 0 {
        large_atof(digits, scaled_exponent)
    } else {
        small_atof(digits, scaled_exponent, b)
    }
}
