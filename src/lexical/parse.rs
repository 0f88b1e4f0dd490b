use super::algorithm::*;
use super::digit::*;
use super::exponent::*;
use super::num::*;

// PARSERS
// -------

/// Parse the significant digits of the float.
///
/// Returns the mantissa and the number of trailing digits that did not
/// fit into it.
fn parse_mantissa(digits: &[u8]) -> (u64, usize) {
    let mut value: u64 = 0;
    for (i, &c) in digits.iter().enumerate() {
        value = match add_digit(value, to_digit(c)) {
            Some(v) => v,
            None => return (value, digits.len() - i),
        };
    }
    (value, 0)
}

/// Convert significant decimal digits to the nearest float.
///
/// * `digits`   - ASCII decimal digits, most significant first.
/// * `exponent` - Power of ten of the last digit.
///
/// The result is rounded to nearest, ties to even. Values too large for
/// `F` become infinity and values too small become zero.
pub(crate) fn parse_float<F: Float>(digits: &[u8], exponent: i32) -> F {
    let leading = digits.iter().take_while(|&&c| c == b'0').count();
    let mut digits = &digits[leading..];

    // Trailing zeroes only scale the value.
    let trailing = digits.iter().rev().take_while(|&&c| c == b'0').count();
    digits = &digits[..digits.len() - trailing];
    let exponent = mantissa_exponent(exponent, trailing);

    // Parse the mantissa and attempt the fast and moderate-path algorithms.
    let (mantissa, truncated) = parse_mantissa(digits);

    if mantissa == 0 {
        // Literal 0, return early. Value cannot be truncated since truncation
        // only occurs on overflow.
        return F::ZERO;
    }

    let mant_exp = mantissa_exponent(exponent, truncated);

    // Try the fast path if no mantissa truncation.
    let is_truncated = truncated != 0;
    if !is_truncated {
        if let Some(float) = fast_path(mantissa, mant_exp) {
            return float;
        }
    }

    fallback_path(digits, mantissa, exponent, mant_exp, is_truncated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn parse_mantissa_test() {
        assert_eq!(parse_mantissa(b"12345"), (12345, 0));
        assert_eq!(parse_mantissa(b"18446744073709551615"), (u64::MAX, 0));
        assert_eq!(
            parse_mantissa(b"184467440737095516151"),
            (u64::MAX, 1)
        );
        assert_eq!(
            parse_mantissa(b"1844674407370955161600"),
            (1844674407370955161, 3)
        );
    }

    #[test]
    fn parse_float_simple() {
        assert_eq!(parse_float::<f64>(b"15", -1), 1.5);
        assert_eq!(parse_float::<f64>(b"000123", 0), 123.0);
        assert_eq!(parse_float::<f64>(b"1200", -2), 12.0);
        assert_eq!(parse_float::<f32>(b"1", 0), 1.0);
        assert_eq!(parse_float::<f64>(b"", 0), 0.0);
        assert_eq!(parse_float::<f64>(b"0000", 12), 0.0);
    }

    #[test]
    fn parse_float_extremes() {
        assert_eq!(parse_float::<f64>(b"17976931348623157", 292), f64::MAX);
        assert_eq!(parse_float::<f64>(b"5", -324), 5e-324);
        assert_eq!(parse_float::<f64>(b"2", -324), 0.0);
        assert_eq!(parse_float::<f64>(b"1", 309), f64::INFINITY);
        assert_eq!(parse_float::<f64>(b"1", i32::MAX), f64::INFINITY);
        assert_eq!(parse_float::<f64>(b"1", i32::MIN), 0.0);
        assert_eq!(parse_float::<f32>(b"340282346638528859811704183484516925440", 0), f32::MAX);
        assert_eq!(parse_float::<f32>(b"1", -46), 0.0);
        assert_eq!(parse_float::<f32>(b"1", 39), f32::INFINITY);
    }

    #[test]
    fn parse_float_halfway() {
        // 2^53 + 1 ties to even, anything past it rounds up.
        assert_eq!(parse_float::<f64>(b"9007199254740993", 0), 9007199254740992.0);
        let mut digits = b"9007199254740993".to_vec();
        digits.extend(core::iter::repeat(b'0').take(700));
        digits.push(b'1');
        assert_eq!(parse_float::<f64>(&digits, -701), 9007199254740994.0);
    }

    #[test]
    fn parse_float_long_input() {
        // 0.1 written with far more digits than f64 can use.
        let mut digits: Vec<u8> = b"01".to_vec();
        digits.extend(core::iter::repeat(b'0').take(800));
        assert_eq!(parse_float::<f64>(&digits, -801), 0.1);
    }
}
