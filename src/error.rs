//! When scanning a floating-point literal goes wrong.

use alloc::boxed::Box;
use core::fmt::{self, Debug, Display};
use core::result;
#[cfg(feature = "std")]
use std::{error, io};

/// This type represents all possible errors that can occur when scanning a
/// floating-point literal.
pub struct Error {
    /// This `Box` allows us to keep the size of `Error` as small as possible. A
    /// larger `Error` type was substantially slower due to all the functions
    /// that pass around `Result<T, Error>`.
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `scanfloat::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// Zero-based offset, in characters, at which the error was detected.
    ///
    /// For [`ErrorCode::NumberOutOfRange`] this is the length of the literal
    /// that was recognized, so callers can still skip past it.
    pub fn offset(&self) -> usize {
        self.err.offset
    }

    /// Specifies the cause of this error.
    pub fn code(&self) -> ErrorCode {
        self.err.code
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::InvalidLiteral` - input that does not start with a
    ///   floating-point literal
    /// - `Category::Eof` - the input ended in the middle of a literal
    /// - `Category::OutOfRange` - a well-formed literal whose value does not
    ///   fit the requested type
    pub fn classify(&self) -> Category {
        match self.err.code {
            ErrorCode::LoneSign
            | ErrorCode::EmptyLiteral
            | ErrorCode::InvalidSpecialValue
            | ErrorCode::InvalidBool
            | ErrorCode::TrailingCharacters => Category::InvalidLiteral,
            ErrorCode::UnexpectedEndOfHexPrefix => Category::Eof,
            ErrorCode::NumberOutOfRange => Category::OutOfRange,
        }
    }

    /// Returns true if this error was caused by input that is not a
    /// floating-point literal.
    pub fn is_invalid_literal(&self) -> bool {
        self.classify() == Category::InvalidLiteral
    }

    /// Returns true if this error was caused by input that ended before the
    /// literal was complete.
    ///
    /// More input may turn this into a valid literal, which matters to callers
    /// scanning from a stream.
    pub fn is_eof(&self) -> bool {
        self.classify() == Category::Eof
    }

    /// Returns true if this error was caused by a literal whose value cannot
    /// be represented by the requested type.
    pub fn is_out_of_range(&self) -> bool {
        self.classify() == Category::OutOfRange
    }

    #[cold]
    pub(crate) fn new(code: ErrorCode, offset: usize) -> Self {
        Error {
            err: Box::new(ErrorImpl { code, offset }),
        }
    }

    // Errors from the core scanner are relative to the start of the literal.
    // Cursor types move them to the position in their whole input.
    #[cold]
    pub(crate) fn shift_offset(mut self, base: usize) -> Self {
        self.err.offset = self.err.offset.saturating_add(base);
        self
    }

    #[cold]
    pub(crate) fn with_offset(mut self, offset: usize) -> Self {
        self.err.offset = offset;
        self
    }
}

/// Categorizes the cause of a `scanfloat::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The input does not start with a literal of the expected kind.
    InvalidLiteral,

    /// The input ended partway through a literal.
    Eof,

    /// The literal is well formed but its value overflows the target type.
    OutOfRange,
}

#[cfg(feature = "std")]
#[allow(clippy::fallible_impl_from)]
impl From<Error> for io::Error {
    /// Convert a `scanfloat::Error` into an `io::Error`.
    ///
    /// Malformed and out-of-range literals are turned into `InvalidData` IO
    /// errors. EOF errors are turned into `UnexpectedEof` IO errors.
    ///
    /// ```
    /// use std::io;
    ///
    /// enum MyError {
    ///     Io(io::Error),
    ///     Scan(scanfloat::Error),
    /// }
    ///
    /// impl From<scanfloat::Error> for MyError {
    ///     fn from(err: scanfloat::Error) -> MyError {
    ///         use scanfloat::error::Category;
    ///         match err.classify() {
    ///             Category::Eof => MyError::Io(err.into()),
    ///             Category::InvalidLiteral | Category::OutOfRange => MyError::Scan(err),
    ///         }
    ///     }
    /// }
    /// ```
    fn from(j: Error) -> Self {
        match j.classify() {
            Category::InvalidLiteral | Category::OutOfRange => {
                io::Error::new(io::ErrorKind::InvalidData, j)
            }
            Category::Eof => io::Error::new(io::ErrorKind::UnexpectedEof, j),
        }
    }
}

struct ErrorImpl {
    code: ErrorCode,
    offset: usize,
}

/// The specific cause of a `scanfloat::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[non_exhaustive]
pub enum ErrorCode {
    /// A sign character with nothing after it.
    LoneSign,

    /// No digits where a literal was expected.
    EmptyLiteral,

    /// Input starting like `nan` or `inf` that is not one of the recognized
    /// spellings.
    InvalidSpecialValue,

    /// `0x` at the very end of the input.
    UnexpectedEndOfHexPrefix,

    /// Literal is too large for the target type.
    NumberOutOfRange,

    /// Neither the true nor the false name of the locale.
    InvalidBool,

    /// Input left over after a complete value.
    TrailingCharacters,
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::LoneSign => f.write_str("lone sign"),
            ErrorCode::EmptyLiteral => f.write_str("expected a floating-point literal"),
            ErrorCode::InvalidSpecialValue => f.write_str("invalid special value"),
            ErrorCode::UnexpectedEndOfHexPrefix => {
                f.write_str("unexpected end of input after hex prefix")
            }
            ErrorCode::NumberOutOfRange => f.write_str("number out of range"),
            ErrorCode::InvalidBool => f.write_str("expected a boolean"),
            ErrorCode::TrailingCharacters => f.write_str("trailing characters"),
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&*self.err, f)
    }
}

impl Display for ErrorImpl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} at offset {}", self.code, self.offset)
    }
}

// Remove two layers of verbosity from the debug representation. Humans often
// end up seeing this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error({:?}, offset: {})", self.err.code, self.err.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn display_includes_offset() {
        let err = Error::new(ErrorCode::LoneSign, 1);
        assert_eq!(format!("{}", err), "lone sign at offset 1");
        assert_eq!(format!("{:?}", err), "Error(LoneSign, offset: 1)");
    }

    #[test]
    fn classify() {
        let err = Error::new(ErrorCode::NumberOutOfRange, 7);
        assert!(err.is_out_of_range());
        assert!(!err.is_invalid_literal());
        assert_eq!(err.classify(), Category::OutOfRange);

        let err = Error::new(ErrorCode::UnexpectedEndOfHexPrefix, 2);
        assert!(err.is_eof());

        for code in [
            ErrorCode::LoneSign,
            ErrorCode::EmptyLiteral,
            ErrorCode::InvalidSpecialValue,
            ErrorCode::InvalidBool,
            ErrorCode::TrailingCharacters,
        ] {
            assert!(Error::new(code, 0).is_invalid_literal(), "{:?}", code);
        }
    }

    #[test]
    fn shift_offset() {
        let err = Error::new(ErrorCode::EmptyLiteral, 3).shift_offset(10);
        assert_eq!(err.offset(), 13);
        assert_eq!(err.code(), ErrorCode::EmptyLiteral);

        let err = Error::new(ErrorCode::EmptyLiteral, 1).shift_offset(usize::MAX);
        assert_eq!(err.offset(), usize::MAX);
    }

    #[cfg(feature = "std")]
    #[test]
    fn into_io_error() {
        let err: io::Error = Error::new(ErrorCode::UnexpectedEndOfHexPrefix, 2).into();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);

        let err: io::Error = Error::new(ErrorCode::NumberOutOfRange, 7).into();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
