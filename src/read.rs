//! A cursor that scans successive values out of a character slice.

use crate::char::Char;
use crate::dispatch::{self, FromLiteral};
use crate::error::{Error, ErrorCode, Result};
use crate::locale::{ClassicLocale, Locale};
use alloc::vec::Vec;

/// Scans values one after another from a slice of characters.
///
/// Every scan first skips whitespace as classified by the locale. A scan
/// that fails leaves the cursor where it was, and the error's offset is
/// counted from the start of the whole input.
///
/// ```
/// use scanfloat::Scanner;
///
/// let mut scanner = Scanner::new(b"  1.5 -2e3 true".as_slice());
/// assert_eq!(scanner.scan::<f64>().unwrap(), 1.5);
/// assert_eq!(scanner.scan::<f32>().unwrap(), -2000.0);
/// assert!(scanner.scan_bool().unwrap());
/// assert!(scanner.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct Scanner<'a, C, L = ClassicLocale> {
    input: &'a [C],
    /// Index of the next character that has not been scanned.
    index: usize,
    locale: L,
}

impl<'a, C: Char> Scanner<'a, C> {
    /// Create a scanner using the C locale.
    pub fn new(input: &'a [C]) -> Self {
        Scanner::with_locale(input, ClassicLocale)
    }
}

impl<'a, C, L> Scanner<'a, C, L>
where
    C: Char,
    L: Locale,
{
    pub fn with_locale(input: &'a [C], locale: L) -> Self {
        Scanner {
            input,
            index: 0,
            locale,
        }
    }

    /// Number of characters scanned or skipped so far.
    pub fn offset(&self) -> usize {
        self.index
    }

    /// The input that has not been scanned yet.
    pub fn remaining(&self) -> &'a [C] {
        &self.input[self.index..]
    }

    pub fn is_empty(&self) -> bool {
        self.index >= self.input.len()
    }

    pub fn locale(&self) -> &L {
        &self.locale
    }

    fn is_space(&self, c: C) -> bool {
        c.to_char().map_or(false, |c| self.locale.is_space(c))
    }

    /// Advance past whitespace. Returns the number of characters skipped.
    pub fn skip_whitespace(&mut self) -> usize {
        let skipped = self
            .remaining()
            .iter()
            .take_while(|&&c| self.is_space(c))
            .count();
        self.index += skipped;
        skipped
    }

    /// Expect nothing but whitespace after the values scanned so far.
    pub fn end(&mut self) -> Result<()> {
        self.skip_whitespace();
        if self.is_empty() {
            Ok(())
        } else {
            Err(Error::new(ErrorCode::TrailingCharacters, self.index))
        }
    }

    /// Skip whitespace, then scan a `T`.
    pub fn scan<T: FromLiteral>(&mut self) -> Result<T> {
        let start = self.index;
        self.skip_whitespace();
        let base = self.index;
        match dispatch::scan::<T, C>(self.remaining()) {
            Ok(scanned) => {
                self.index += scanned.consumed;
                Ok(scanned.value)
            }
            Err(err) => {
                self.index = start;
                Err(err.shift_offset(base))
            }
        }
    }

    /// Skip whitespace, then scan a `T` written with the locale's decimal
    /// point and thousands separators.
    ///
    /// Separators are only recognized between two digits of the integer
    /// part.
    ///
    /// ```
    /// use scanfloat::{CustomLocale, Scanner};
    ///
    /// let locale = CustomLocale::builder()
    ///     .decimal_point(',')
    ///     .thousands_separator('.')
    ///     .build();
    /// let mut scanner = Scanner::with_locale(b"1.234,5".as_slice(), locale);
    /// assert_eq!(scanner.scan_localized::<f64>().unwrap(), 1234.5);
    /// ```
    pub fn scan_localized<T: FromLiteral>(&mut self) -> Result<T> {
        let start = self.index;
        self.skip_whitespace();
        let base = self.index;
        let token = self.delocalize();
        let original = |translated: usize| match token.origin.get(translated) {
            Some(&index) => base + index,
            None => base + token.end,
        };

        match dispatch::scan::<T, C>(&token.units) {
            Ok(scanned) => {
                self.index = original(scanned.consumed);
                Ok(scanned.value)
            }
            Err(err) => {
                self.index = start;
                let offset = original(err.offset());
                Err(err.with_offset(offset))
            }
        }
    }

    // Rewrite the token at the cursor in the C locale's punctuation,
    // recording where each unit came from. Stops at the first space.
    fn delocalize(&self) -> Delocalized<C> {
        let input = self.remaining();
        let decimal_point = self.locale.decimal_point();
        let separator = self.locale.thousands_separator();
        let is_digit = |c: Option<&C>| {
            c.and_then(|c| c.to_char())
                .map_or(false, |c| self.locale.is_digit(c))
        };

        let mut token = Delocalized {
            units: Vec::new(),
            origin: Vec::new(),
            end: input.len(),
        };
        let mut in_integer = true;
        for (i, &c) in input.iter().enumerate() {
            let ch = c.to_char();
            if ch.map_or(false, |ch| self.locale.is_space(ch)) {
                token.end = i;
                break;
            }
            if in_integer && ch == Some(decimal_point) {
                in_integer = false;
                token.push(C::from_ascii(b'.'), i);
            } else if in_integer
                && ch == Some(separator)
                && is_digit(token.units.last())
                && is_digit(input.get(i + 1))
            {
                // grouping
            } else if c.to_ascii() == Some(b'.') || ch == Some(separator) {
                token.end = i;
                break;
            } else {
                if let Some(b'e' | b'E') = c.to_ascii() {
                    in_integer = false;
                }
                token.push(c, i);
            }
        }
        token
    }

    /// Skip whitespace, then match the locale's name for `true` or `false`.
    ///
    /// A name followed directly by a letter or digit does not match.
    pub fn scan_bool(&mut self) -> Result<bool> {
        let start = self.index;
        self.skip_whitespace();

        let truename = self.locale.truename();
        let falsename = self.locale.falsename();
        let mut candidates = [(truename, true), (falsename, false)];
        // The longer name wins when one is a prefix of the other.
        candidates.sort_by_key(|&(name, _)| core::cmp::Reverse(name.chars().count()));

        let mut matched = None;
        for &(name, value) in &candidates {
            if let Some(len) = self.match_name(name) {
                matched = Some((len, value));
                break;
            }
        }

        match matched {
            Some((len, value)) => {
                self.index += len;
                Ok(value)
            }
            None => {
                let offset = self.index;
                self.index = start;
                Err(Error::new(ErrorCode::InvalidBool, offset))
            }
        }
    }

    // Length of `name` if the remaining input starts with it as a whole word.
    fn match_name(&self, name: &str) -> Option<usize> {
        let input = self.remaining();
        let len = name.chars().count();
        if len == 0 || input.len() < len {
            return None;
        }
        let matches = name
            .chars()
            .zip(input)
            .all(|(expected, c)| c.to_char() == Some(expected));
        if !matches {
            return None;
        }
        match input.get(len).and_then(|c| c.to_char()) {
            Some(next) if next.is_alphanumeric() => None,
            _ => Some(len),
        }
    }
}

struct Delocalized<C> {
    units: Vec<C>,
    /// Offset in the original token of each unit.
    origin: Vec<usize>,
    /// Offset in the original token where rewriting stopped.
    end: usize,
}

impl<C> Delocalized<C> {
    fn push(&mut self, unit: C, origin: usize) {
        self.units.push(unit);
        self.origin.push(origin);
    }
}
