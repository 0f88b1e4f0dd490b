//! Character classification and spellings used by localized scanning.

use alloc::string::String;

/// Trait that abstracts over [`ClassicLocale`] and [`CustomLocale`].
pub trait Locale {
    /// Returns true if `c` separates values.
    fn is_space(&self, c: char) -> bool;
    /// Returns true if `c` is a decimal digit.
    fn is_digit(&self, c: char) -> bool;
    /// Returns the character between the integer and fractional parts.
    fn decimal_point(&self) -> char;
    /// Returns the character grouping integer digits.
    fn thousands_separator(&self) -> char;
    /// Returns the spelling of `true`.
    fn truename(&self) -> &str;
    /// Returns the spelling of `false`.
    fn falsename(&self) -> &str;
}

impl<'a, L> Locale for &'a L
where
    L: ?Sized + Locale,
{
    fn is_space(&self, c: char) -> bool {
        (**self).is_space(c)
    }

    fn is_digit(&self, c: char) -> bool {
        (**self).is_digit(c)
    }

    fn decimal_point(&self) -> char {
        (**self).decimal_point()
    }

    fn thousands_separator(&self) -> char {
        (**self).thousands_separator()
    }

    fn truename(&self) -> &str {
        (**self).truename()
    }

    fn falsename(&self) -> &str {
        (**self).falsename()
    }
}

/// The C locale.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ClassicLocale;

// space, \t, \n, \v, \f, \r
fn is_classic_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

impl Locale for ClassicLocale {
    fn is_space(&self, c: char) -> bool {
        is_classic_space(c)
    }

    fn is_digit(&self, c: char) -> bool {
        c.is_ascii_digit()
    }

    fn decimal_point(&self) -> char {
        '.'
    }

    fn thousands_separator(&self) -> char {
        ','
    }

    fn truename(&self) -> &str {
        "true"
    }

    fn falsename(&self) -> &str {
        "false"
    }
}

/// A locale with its own punctuation and boolean names.
///
/// Classification of spaces and digits is the same as [`ClassicLocale`].
///
/// ```
/// use scanfloat::{CustomLocale, Locale};
///
/// let locale = CustomLocale::builder()
///     .decimal_point(',')
///     .thousands_separator('.')
///     .truename("wahr")
///     .falsename("falsch")
///     .build();
/// assert_eq!(locale.decimal_point(), ',');
/// assert_eq!(locale.truename(), "wahr");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CustomLocale {
    decimal_point: char,
    thousands_separator: char,
    truename: String,
    falsename: String,
}

impl CustomLocale {
    /// Start from the spellings of [`ClassicLocale`].
    pub fn builder() -> CustomLocaleBuilder {
        CustomLocaleBuilder {
            inner: CustomLocale::default(),
        }
    }
}

impl Default for CustomLocale {
    fn default() -> Self {
        CustomLocale {
            decimal_point: '.',
            thousands_separator: ',',
            truename: String::from("true"),
            falsename: String::from("false"),
        }
    }
}

impl Locale for CustomLocale {
    fn is_space(&self, c: char) -> bool {
        is_classic_space(c)
    }

    fn is_digit(&self, c: char) -> bool {
        c.is_ascii_digit()
    }

    fn decimal_point(&self) -> char {
        self.decimal_point
    }

    fn thousands_separator(&self) -> char {
        self.thousands_separator
    }

    fn truename(&self) -> &str {
        &self.truename
    }

    fn falsename(&self) -> &str {
        &self.falsename
    }
}

/// Builder for [`CustomLocale`].
#[derive(Clone, Debug)]
pub struct CustomLocaleBuilder {
    inner: CustomLocale,
}

impl CustomLocaleBuilder {
    pub fn decimal_point(mut self, c: char) -> Self {
        self.inner.decimal_point = c;
        self
    }

    pub fn thousands_separator(mut self, c: char) -> Self {
        self.inner.thousands_separator = c;
        self
    }

    pub fn truename<S: Into<String>>(mut self, name: S) -> Self {
        self.inner.truename = name.into();
        self
    }

    pub fn falsename<S: Into<String>>(mut self, name: S) -> Self {
        self.inner.falsename = name.into();
        self
    }

    pub fn build(self) -> CustomLocale {
        self.inner
    }
}
