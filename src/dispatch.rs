//! Routes a scan to the conversion pipeline suited to the requested type.

use crate::char::{Char, CharWidth};
use crate::error::{Error, ErrorCode, Result};
use crate::lexical;
use crate::literal::{self, ParsedLiteral, Special};
use core::ffi::c_double;
use core::fmt::{self, Display};

/// Binary width a literal is converted to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TargetWidth {
    /// IEEE-754 binary32.
    Bits32,
    /// IEEE-754 binary64.
    Bits64,
    /// Whatever the platform C library converts to with `strtod`.
    Native,
}

/// Conversion pipeline chosen for a scan.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// The crate's own literal scanner and correctly rounded converter.
    Internal,
    /// The platform's C library routine.
    Native,
}

const NATIVE_AVAILABLE: bool = cfg!(native_strtod);

/// Choose the pipeline for a character width and target type.
///
/// Binary32 and binary64 targets always use the internal pipeline. Native
/// targets use the C library where the crate knows how to call it, and the
/// internal binary64 pipeline elsewhere. Wide input is narrowed before it
/// reaches the C library, so both widths route the same way.
pub fn select_strategy(width: CharWidth, target: TargetWidth) -> Strategy {
    match (width, target) {
        (_, TargetWidth::Bits32 | TargetWidth::Bits64) => Strategy::Internal,
        (CharWidth::Narrow | CharWidth::Wide, TargetWidth::Native) if NATIVE_AVAILABLE => {
            Strategy::Native
        }
        (_, TargetWidth::Native) => Strategy::Internal,
    }
}

/// The C library's `double`.
///
/// Values of this type come from `strtod` when the platform supports it, so
/// their rounding follows the C library rather than this crate. This is not
/// an extended format: Rust has no `long double`, and `c_double` is IEEE-754
/// binary64 on every platform the C library path is enabled for. Elsewhere
/// the value comes from the crate's own binary64 conversion.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct NativeFloat(c_double);

impl NativeFloat {
    #[inline]
    pub fn new(value: c_double) -> Self {
        NativeFloat(value)
    }

    #[inline]
    pub fn get(self) -> c_double {
        self.0
    }
}

impl From<NativeFloat> for f64 {
    #[inline]
    fn from(value: NativeFloat) -> f64 {
        value.0
    }
}

impl Display for NativeFloat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// A floating-point type that literals can be scanned into.
///
/// This trait is sealed and cannot be implemented for types outside of
/// `scanfloat`.
pub trait FromLiteral: private::Sealed + Copy {
    /// Width this type is converted at.
    const TARGET: TargetWidth;

    #[doc(hidden)]
    fn from_internal(literal: &ParsedLiteral) -> core::result::Result<Self, ErrorCode>;

    #[doc(hidden)]
    fn from_native(value: c_double) -> Self;
}

mod private {
    pub trait Sealed {}
}

// Finite literals that round to infinity are errors. Literals that round to
// zero keep their sign.
macro_rules! impl_from_literal {
    ($ty:ty, $target:expr) => {
        impl private::Sealed for $ty {}

        impl FromLiteral for $ty {
            const TARGET: TargetWidth = $target;

            fn from_internal(literal: &ParsedLiteral) -> core::result::Result<Self, ErrorCode> {
                let magnitude = match literal {
                    ParsedLiteral::Zero { .. } => 0.0,
                    ParsedLiteral::Special {
                        kind: Special::Nan, ..
                    } => <$ty>::NAN,
                    ParsedLiteral::Special {
                        kind: Special::Infinity,
                        ..
                    } => <$ty>::INFINITY,
                    ParsedLiteral::Decimal { digits, .. } => {
                        let value =
                            lexical::parse_float::<$ty>(digits.digits(), digits.exponent());
                        if value.is_infinite() {
                            return Err(ErrorCode::NumberOutOfRange);
                        }
                        value
                    }
                };
                Ok(if literal.is_negative() {
                    -magnitude
                } else {
                    magnitude
                })
            }

            #[inline]
            fn from_native(value: c_double) -> Self {
                value as $ty
            }
        }
    };
}

impl_from_literal!(f32, TargetWidth::Bits32);
impl_from_literal!(f64, TargetWidth::Bits64);

impl private::Sealed for NativeFloat {}

impl FromLiteral for NativeFloat {
    const TARGET: TargetWidth = TargetWidth::Native;

    fn from_internal(literal: &ParsedLiteral) -> core::result::Result<Self, ErrorCode> {
        f64::from_internal(literal).map(NativeFloat)
    }

    #[inline]
    fn from_native(value: c_double) -> Self {
        NativeFloat(value)
    }
}

/// A value scanned at a width chosen at runtime.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Value {
    F32(f32),
    F64(f64),
    Native(NativeFloat),
}

impl Value {
    /// The value widened to `f64`.
    pub fn as_f64(self) -> f64 {
        match self {
            Value::F32(value) => f64::from(value),
            Value::F64(value) => value,
            Value::Native(value) => value.get(),
        }
    }
}

/// A scanned value and the number of characters its literal spans.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Scanned<T> {
    pub value: T,
    pub consumed: usize,
}

impl<T> Scanned<T> {
    pub fn map<U, F>(self, f: F) -> Scanned<U>
    where
        F: FnOnce(T) -> U,
    {
        Scanned {
            value: f(self.value),
            consumed: self.consumed,
        }
    }
}

/// Scan a `T` from the start of `input`.
///
/// Leading whitespace is not skipped. On success the literal spans
/// `consumed` characters of `input`. Characters after the literal are left
/// alone, so `"123abc"` scans as `123` with 3 characters consumed.
///
/// ```
/// use scanfloat::scan;
///
/// let scanned = scan::<f64, u8>(b"1.5e10 rest").unwrap();
/// assert_eq!(scanned.value, 1.5e10);
/// assert_eq!(scanned.consumed, 6);
/// ```
pub fn scan<T, C>(input: &[C]) -> Result<Scanned<T>>
where
    T: FromLiteral,
    C: Char,
{
    match select_strategy(C::WIDTH, T::TARGET) {
        Strategy::Internal => scan_internal(input),
        Strategy::Native => scan_native(input),
    }
}

/// Scan a literal at a width chosen at runtime.
pub fn scan_float<C: Char>(input: &[C], target: TargetWidth) -> Result<Scanned<Value>> {
    match target {
        TargetWidth::Bits32 => scan::<f32, C>(input).map(|s| s.map(Value::F32)),
        TargetWidth::Bits64 => scan::<f64, C>(input).map(|s| s.map(Value::F64)),
        TargetWidth::Native => scan::<NativeFloat, C>(input).map(|s| s.map(Value::Native)),
    }
}

fn scan_internal<T, C>(input: &[C]) -> Result<Scanned<T>>
where
    T: FromLiteral,
    C: Char,
{
    let (literal, consumed) = literal::scan_literal(input)?;
    match T::from_internal(&literal) {
        Ok(value) => Ok(Scanned { value, consumed }),
        Err(code) => Err(Error::new(code, consumed)),
    }
}

#[cfg(native_strtod)]
fn scan_native<T, C>(input: &[C]) -> Result<Scanned<T>>
where
    T: FromLiteral,
    C: Char,
{
    let (value, consumed) = crate::native::strtod(input)?;
    Ok(Scanned {
        value: T::from_native(value),
        consumed,
    })
}

#[cfg(not(native_strtod))]
fn scan_native<T, C>(input: &[C]) -> Result<Scanned<T>>
where
    T: FromLiteral,
    C: Char,
{
    scan_internal(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategies() {
        for width in [CharWidth::Narrow, CharWidth::Wide] {
            assert_eq!(select_strategy(width, TargetWidth::Bits32), Strategy::Internal);
            assert_eq!(select_strategy(width, TargetWidth::Bits64), Strategy::Internal);
            let native = select_strategy(width, TargetWidth::Native);
            if cfg!(native_strtod) {
                assert_eq!(native, Strategy::Native);
            } else {
                assert_eq!(native, Strategy::Internal);
            }
        }
    }

    #[test]
    fn signed_values() {
        assert_eq!(scan::<f64, u8>(b"-2.5").unwrap().value, -2.5);
        assert_eq!(scan::<f32, u8>(b"+2.5").unwrap().value, 2.5);
        let zero = scan::<f64, u8>(b"-0.0").unwrap().value;
        assert_eq!(zero, 0.0);
        assert!(zero.is_sign_negative());
        let nan = scan::<f32, u8>(b"-nan").unwrap().value;
        assert!(nan.is_nan() && nan.is_sign_negative());
        assert_eq!(scan::<f64, u8>(b"-inf").unwrap().value, f64::NEG_INFINITY);
    }

    #[test]
    fn out_of_range() {
        let err = scan::<f64, u8>(b"1e99999 ").unwrap_err();
        assert_eq!(err.code(), ErrorCode::NumberOutOfRange);
        assert_eq!(err.offset(), 7);

        let err = scan::<f32, u8>(b"-1e39").unwrap_err();
        assert!(err.is_out_of_range());
        assert_eq!(scan::<f64, u8>(b"1e39").unwrap().value, 1e39);
    }

    #[test]
    fn underflow_is_signed_zero() {
        let value = scan::<f64, u8>(b"-1e-400").unwrap().value;
        assert_eq!(value, 0.0);
        assert!(value.is_sign_negative());
        assert_eq!(scan::<f32, u8>(b"1e-50").unwrap().value, 0.0);
    }

    #[test]
    fn runtime_width() {
        let scanned = scan_float(b"0.1", TargetWidth::Bits32).unwrap();
        assert_eq!(scanned.value, Value::F32(0.1));
        assert_eq!(scanned.consumed, 3);
        let scanned = scan_float(b"0.1", TargetWidth::Bits64).unwrap();
        assert_eq!(scanned.value, Value::F64(0.1));
        assert_eq!(scan_float(b"0.5", TargetWidth::Native).unwrap().value.as_f64(), 0.5);
    }
}
