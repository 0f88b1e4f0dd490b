// The code in this module is derived from the `lexical` crate by @Alexhuszagh,
// condensed to the subset needed to convert an already-scanned digit buffer.
// The scanner hands over at most a few hundred significant digits plus a
// sticky digit, so the big-integer slow path only ever multiplies by small
// powers and never needs the precomputed large-power tables.
//
// Dual licensed as MIT and Apache 2.0, copyright Alexander Huszagh.

//! Fast, minimal decimal-to-binary float conversion.

mod algorithm;
mod bhcomp;
mod bignum;
mod cached;
mod cached_float80;
mod digit;
mod errors;
mod exponent;
mod float;
mod math;
mod num;
mod parse;
mod rounding;
mod shift;
mod slice;
mod small_powers;

pub(crate) use self::parse::parse_float;
