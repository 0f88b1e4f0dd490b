//! Recognizes the longest floating-point literal at the start of the input.
//!
//! The accepted grammar is
//!
//! ```text
//! literal  = [sign] (special | decimal)
//! special  = "nan" | "inf" | "infinity"            (any case)
//! decimal  = (digits ["." [digits]] | "." digits) [exponent]
//! exponent = ("e" | "E") [sign] digits
//! ```
//!
//! An exponent marker that is not followed by digits is left unconsumed, and
//! so is the `x` of a `0x` prefix.

use crate::char::Char;
use crate::digits::DigitBuffer;
use crate::error::{Error, ErrorCode, Result};

/// Exponent digits stop accumulating at this magnitude.
const EXPONENT_LIMIT: i32 = i32::MAX / 2;

/// Non-finite values a literal can spell out.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Special {
    Nan,
    Infinity,
}

/// A recognized literal, ready for conversion to a binary float.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParsedLiteral {
    /// All digits were zero.
    Zero { negative: bool },
    /// `nan`, `inf` or `infinity`.
    Special { kind: Special, negative: bool },
    /// A nonzero decimal value, `digits × 10^exponent`.
    Decimal { digits: DigitBuffer, negative: bool },
}

impl ParsedLiteral {
    pub fn is_negative(&self) -> bool {
        match *self {
            ParsedLiteral::Zero { negative }
            | ParsedLiteral::Special { negative, .. }
            | ParsedLiteral::Decimal { negative, .. } => negative,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum State {
    Integer,
    Fraction,
    Exponent,
    Done,
}

struct Cursor<'a, C> {
    input: &'a [C],
    index: usize,
}

impl<'a, C: Char> Cursor<'a, C> {
    #[inline]
    fn peek(&self) -> Option<u8> {
        self.peek_at(self.index)
    }

    #[inline]
    fn peek_at(&self, index: usize) -> Option<u8> {
        self.input.get(index).and_then(|c| c.to_ascii())
    }

    #[inline]
    fn at_end(&self) -> bool {
        self.index >= self.input.len()
    }

    fn starts_with_ignore_case(&self, token: &[u8]) -> bool {
        token.iter().enumerate().all(|(i, t)| match self.peek_at(self.index + i) {
            Some(c) => c.eq_ignore_ascii_case(t),
            None => false,
        })
    }
}

/// Scan a literal from the start of `input`.
///
/// Returns the literal and the number of characters it spans. Nothing is
/// skipped before the literal, not even whitespace.
///
/// `nan`, `inf` and `infinity` must not run into a following ASCII letter or
/// digit: `nanx` and `inf5` are errors. Any other character ends them the
/// way it ends a decimal literal, so `nan(1)` and `inf-` span three
/// characters.
pub fn scan_literal<C: Char>(input: &[C]) -> Result<(ParsedLiteral, usize)> {
    let mut cursor = Cursor { input, index: 0 };

    let negative = match cursor.peek() {
        Some(b'-') => {
            cursor.index += 1;
            true
        }
        Some(b'+') => {
            cursor.index += 1;
            false
        }
        _ => false,
    };
    let sign_len = cursor.index;

    if cursor.at_end() {
        return Err(empty_literal(sign_len, cursor.index));
    }

    if let Some(b'n' | b'N' | b'i' | b'I') = cursor.peek() {
        return scan_special(&mut cursor, negative);
    }

    let mut saw_digits = false;
    if cursor.peek() == Some(b'0') {
        saw_digits = true;
        cursor.index += 1;
        if let Some(b'x' | b'X') = cursor.peek() {
            if cursor.index + 1 == input.len() {
                return Err(Error::new(
                    ErrorCode::UnexpectedEndOfHexPrefix,
                    input.len(),
                ));
            }
            // Hexadecimal floats are not converted, the literal is the zero.
            return Ok((ParsedLiteral::Zero { negative }, cursor.index));
        }
    }

    let mut buffer = DigitBuffer::new();
    let mut state = State::Integer;
    loop {
        state = match state {
            State::Integer => match cursor.peek() {
                Some(digit @ b'0'..=b'9') => {
                    cursor.index += 1;
                    saw_digits = true;
                    if buffer.is_empty() && digit == b'0' {
                        // leading zero
                    } else if !buffer.push_digit(digit) {
                        buffer.shift_exponent(1);
                    }
                    State::Integer
                }
                Some(b'.') => {
                    cursor.index += 1;
                    State::Fraction
                }
                Some(b'e' | b'E') => State::Exponent,
                _ => State::Done,
            },
            State::Fraction => match cursor.peek() {
                Some(digit @ b'0'..=b'9') => {
                    cursor.index += 1;
                    saw_digits = true;
                    if buffer.is_empty() && digit == b'0' {
                        buffer.shift_exponent(-1);
                    } else if buffer.push_digit(digit) {
                        buffer.shift_exponent(-1);
                    }
                    State::Fraction
                }
                Some(b'e' | b'E') => State::Exponent,
                _ => State::Done,
            },
            State::Exponent => {
                if saw_digits {
                    if let Some((exponent, len)) = scan_exponent(&cursor) {
                        buffer.shift_exponent(exponent);
                        cursor.index += len;
                    }
                }
                State::Done
            }
            State::Done => break,
        };
    }

    if !saw_digits {
        return Err(empty_literal(sign_len, cursor.index));
    }

    let literal = if buffer.is_empty() {
        ParsedLiteral::Zero { negative }
    } else {
        buffer.finish();
        ParsedLiteral::Decimal {
            digits: buffer,
            negative,
        }
    };
    Ok((literal, cursor.index))
}

// A sign that nothing else was consumed after is reported on its own.
#[cold]
fn empty_literal(sign_len: usize, index: usize) -> Error {
    let code = if sign_len > 0 && index == sign_len {
        ErrorCode::LoneSign
    } else {
        ErrorCode::EmptyLiteral
    };
    Error::new(code, index)
}

// The cursor is on the exponent marker. Returns the signed exponent and the
// number of characters it spans including the marker, or `None` if no digit
// follows.
fn scan_exponent<C: Char>(cursor: &Cursor<C>) -> Option<(i32, usize)> {
    let mut index = cursor.index + 1;
    let negative = match cursor.peek_at(index) {
        Some(b'-') => {
            index += 1;
            true
        }
        Some(b'+') => {
            index += 1;
            false
        }
        _ => false,
    };

    let first = index;
    let mut value: i32 = 0;
    while let Some(digit @ b'0'..=b'9') = cursor.peek_at(index) {
        value = value
            .saturating_mul(10)
            .saturating_add(i32::from(digit - b'0'))
            .min(EXPONENT_LIMIT);
        index += 1;
    }

    if index == first {
        return None;
    }
    let value = if negative { -value } else { value };
    Some((value, index - cursor.index))
}

fn scan_special<C: Char>(cursor: &mut Cursor<C>, negative: bool) -> Result<(ParsedLiteral, usize)> {
    let (kind, len) = if cursor.starts_with_ignore_case(b"nan") {
        (Special::Nan, 3)
    } else if cursor.starts_with_ignore_case(b"infinity") {
        (Special::Infinity, 8)
    } else if cursor.starts_with_ignore_case(b"inf") {
        (Special::Infinity, 3)
    } else {
        return Err(Error::new(ErrorCode::InvalidSpecialValue, cursor.index));
    };

    cursor.index += len;
    if let Some(c) = cursor.peek() {
        if c.is_ascii_alphanumeric() {
            return Err(Error::new(ErrorCode::InvalidSpecialValue, cursor.index));
        }
    }
    Ok((ParsedLiteral::Special { kind, negative }, cursor.index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digits::MAX_SIGNIFICANT_DIGITS;
    use alloc::string::String;
    use alloc::vec::Vec;

    fn decimal(input: &str) -> (Vec<u8>, i32, bool, usize) {
        match scan_literal(input.as_bytes()) {
            Ok((ParsedLiteral::Decimal { digits, negative }, consumed)) => {
                (digits.digits().to_vec(), digits.exponent(), negative, consumed)
            }
            other => panic!("{:?} scanned as {:?}", input, other),
        }
    }

    fn error(input: &str) -> (ErrorCode, usize) {
        match scan_literal(input.as_bytes()) {
            Ok(literal) => panic!("{:?} scanned as {:?}", input, literal),
            Err(err) => (err.code(), err.offset()),
        }
    }

    #[test]
    fn integers_and_fractions() {
        assert_eq!(decimal("123"), (b"123".to_vec(), 0, false, 3));
        assert_eq!(decimal("-1.50"), (b"150".to_vec(), -2, true, 5));
        assert_eq!(decimal("+.25"), (b"25".to_vec(), -2, false, 4));
        assert_eq!(decimal("7."), (b"7".to_vec(), 0, false, 2));
        assert_eq!(decimal("0.001"), (b"1".to_vec(), -3, false, 5));
        assert_eq!(decimal("000120"), (b"120".to_vec(), 0, false, 6));
        assert_eq!(decimal("123abc"), (b"123".to_vec(), 0, false, 3));
    }

    #[test]
    fn exponents() {
        assert_eq!(decimal("1.5e10"), (b"15".to_vec(), 9, false, 6));
        assert_eq!(decimal("2E-3"), (b"2".to_vec(), -3, false, 4));
        assert_eq!(decimal("2e+3x"), (b"2".to_vec(), 3, false, 4));
        assert_eq!(decimal("1e"), (b"1".to_vec(), 0, false, 1));
        assert_eq!(decimal("1e+"), (b"1".to_vec(), 0, false, 1));
        assert_eq!(decimal("1.e-"), (b"1".to_vec(), 0, false, 2));
        assert_eq!(
            decimal("1e99999999999999999999"),
            (b"1".to_vec(), i32::MAX / 2, false, 22)
        );
        assert_eq!(
            decimal("1e-99999999999999999999"),
            (b"1".to_vec(), -(i32::MAX / 2), false, 23)
        );
    }

    #[test]
    fn zeros() {
        for (input, negative, consumed) in [
            ("0", false, 1),
            ("-0", true, 2),
            ("0.000", false, 5),
            ("-.0e5", true, 5),
            ("00", false, 2),
        ] {
            assert_eq!(
                scan_literal(input.as_bytes()).map_err(|err| err.code()),
                Ok((ParsedLiteral::Zero { negative }, consumed)),
                "{:?}",
                input
            );
        }
    }

    #[test]
    fn hex_prefix() {
        assert_eq!(
            scan_literal(b"0x1p3").map_err(|err| err.code()),
            Ok((ParsedLiteral::Zero { negative: false }, 1))
        );
        assert_eq!(
            scan_literal(b"-0X").map_err(|err| err.code()),
            Err(ErrorCode::UnexpectedEndOfHexPrefix)
        );
    }

    #[test]
    fn specials() {
        for (input, kind, negative, consumed) in [
            ("nan", Special::Nan, false, 3),
            ("-NaN", Special::Nan, true, 4),
            ("inf", Special::Infinity, false, 3),
            ("+Infinity", Special::Infinity, false, 9),
            ("-INF", Special::Infinity, true, 4),
            ("nan(1)", Special::Nan, false, 3),
            ("inf.5", Special::Infinity, false, 3),
        ] {
            assert_eq!(
                scan_literal(input.as_bytes()).map_err(|err| err.code()),
                Ok((ParsedLiteral::Special { kind, negative }, consumed)),
                "{:?}",
                input
            );
        }
    }

    #[test]
    fn invalid() {
        assert_eq!(error(""), (ErrorCode::EmptyLiteral, 0));
        assert_eq!(error("+"), (ErrorCode::LoneSign, 1));
        assert_eq!(error("-"), (ErrorCode::LoneSign, 1));
        assert_eq!(error("+ 1"), (ErrorCode::LoneSign, 1));
        assert_eq!(error("-e5"), (ErrorCode::LoneSign, 1));
        assert_eq!(error("."), (ErrorCode::EmptyLiteral, 1));
        assert_eq!(error("-.e5"), (ErrorCode::EmptyLiteral, 2));
        assert_eq!(error("e5"), (ErrorCode::EmptyLiteral, 0));
        assert_eq!(error("nax"), (ErrorCode::InvalidSpecialValue, 0));
        assert_eq!(error("infx"), (ErrorCode::InvalidSpecialValue, 3));
        assert_eq!(error("nan1"), (ErrorCode::InvalidSpecialValue, 3));
        assert_eq!(error("infinit"), (ErrorCode::InvalidSpecialValue, 3));
        assert_eq!(error(" 1"), (ErrorCode::EmptyLiteral, 0));
    }

    #[test]
    fn long_integer_part() {
        let mut input = "1".repeat(MAX_SIGNIFICANT_DIGITS);
        input.push_str(&"0".repeat(28));
        let (digits, exponent, _, consumed) = decimal(&input);
        assert_eq!(digits.len(), MAX_SIGNIFICANT_DIGITS);
        assert_eq!(exponent, 28);
        assert_eq!(consumed, MAX_SIGNIFICANT_DIGITS + 28);

        input.push('7');
        let (digits, exponent, _, _) = decimal(&input);
        assert_eq!(digits.len(), MAX_SIGNIFICANT_DIGITS + 1);
        assert_eq!(digits.last(), Some(&b'1'));
        assert_eq!(exponent, 28);
    }

    #[test]
    fn long_fraction() {
        let mut input = String::from("0.");
        input.push_str(&"0".repeat(5));
        input.push_str(&"2".repeat(MAX_SIGNIFICANT_DIGITS + 50));
        let (digits, exponent, _, consumed) = decimal(&input);
        assert_eq!(consumed, input.len());
        assert_eq!(digits.len(), MAX_SIGNIFICANT_DIGITS + 1);
        assert_eq!(exponent, -(5 + MAX_SIGNIFICANT_DIGITS as i32) - 1);
    }

    #[test]
    fn wide_input() {
        let wide: Vec<char> = "-12.5e1z".chars().collect();
        let (literal, consumed) = scan_literal(&wide).unwrap();
        assert_eq!(consumed, 7);
        assert_eq!(literal, scan_literal(b"-12.5e1z").unwrap().0);

        let utf16: Vec<u16> = "3\u{0661}".encode_utf16().collect();
        assert_eq!(scan_literal(&utf16).unwrap().1, 1);
    }
}
