//! # scanfloat
//!
//! Type-directed scanning of floating-point literals.
//!
//! The scanners in this crate read the longest floating-point literal at the
//! start of their input and report how many characters it spans, in the way
//! `strtod` does, but without touching global state and with the result
//! correctly rounded for the requested type.
//!
//! ```
//! let scanned = scanfloat::scan::<f32, u8>(b"3.1415926535 is pi").unwrap();
//! assert_eq!(scanned.value, 3.1415927);
//! assert_eq!(scanned.consumed, 12);
//!
//! let value: f64 = scanfloat::from_str(" -1e-3 ").unwrap();
//! assert_eq!(value, -0.001);
//! ```
//!
//! # Literals
//!
//! A literal is an optional sign followed either by a decimal number with an
//! optional exponent or by one of `nan`, `inf` and `infinity` in any case.
//! Scanning never skips leading whitespace by itself; [`Scanner`] does that
//! between values.
//!
//! Narrow (`u8`) and wide (`u16`, `u32`, `char`) input behave identically.
//!
//! # Conversion
//!
//! `f32` and `f64` values are converted by the crate itself, rounding to
//! nearest with ties to even. A finite literal that is too large for the
//! type is an error, one too small becomes a zero of the same sign.
//! [`NativeFloat`] values are converted by the C library's `strtod` on
//! platforms where the crate can call it safely, and by the `f64` converter
//! elsewhere.
//!
//! # Features
//!
//! The `std` feature is enabled by default. Without it the crate is
//! `no_std` and only needs `alloc`.

#![doc(html_root_url = "https://docs.rs/scanfloat/0.1.0")]
// Ignored clippy lints
#![allow(
    clippy::comparison_chain,
    clippy::excessive_precision,
    clippy::float_cmp,
    clippy::match_like_matches_macro,
    clippy::module_name_repetitions,
    clippy::needless_doctest_main,
    clippy::new_without_default,
    clippy::unreadable_literal,
)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[doc(inline)]
pub use crate::char::{Char, CharWidth};
#[doc(inline)]
pub use crate::dispatch::{
    scan, scan_float, select_strategy, FromLiteral, NativeFloat, Scanned, Strategy, TargetWidth,
    Value,
};
#[doc(inline)]
pub use crate::error::{Error, Result};
#[doc(inline)]
pub use crate::locale::{ClassicLocale, CustomLocale, CustomLocaleBuilder, Locale};
#[doc(inline)]
pub use crate::read::Scanner;

pub mod char;
pub mod digits;
pub mod error;
pub mod literal;

mod dispatch;
mod lexical;
mod locale;
#[cfg(native_strtod)]
mod native;
mod read;

/// Scan a `T` from a string that holds nothing else but whitespace.
///
/// ```
/// assert_eq!(scanfloat::from_str::<f64>("\t2.5\n").unwrap(), 2.5);
/// assert!(scanfloat::from_str::<f64>("2.5 apples").is_err());
/// ```
pub fn from_str<T: FromLiteral>(s: &str) -> Result<T> {
    let mut scanner = Scanner::new(s.as_bytes());
    let value = scanner.scan()?;
    scanner.end()?;
    Ok(value)
}
