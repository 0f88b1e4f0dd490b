//! Delegation of native-width conversions to the C library.
//!
//! `strtod` reports range errors through `errno`, a slot shared with every
//! other C library call the thread makes. Each call is bracketed by an
//! [`ErrnoGuard`] that clears the slot before the call and takes the value
//! back out after it.

use crate::char::Char;
use crate::error::{Error, ErrorCode, Result};
use crate::literal;
use alloc::ffi::CString;
use alloc::vec::Vec;
use core::ffi::{c_char, c_double, c_int};
use core::ptr;
use std::sync::{Mutex, MutexGuard, PoisonError};

static ERRNO_LOCK: Mutex<()> = Mutex::new(());

#[cfg(any(target_os = "linux", target_os = "emscripten"))]
unsafe fn errno_location() -> *mut c_int {
    libc::__errno_location()
}

#[cfg(any(target_os = "macos", target_os = "ios", target_os = "freebsd"))]
unsafe fn errno_location() -> *mut c_int {
    libc::__error()
}

#[cfg(any(target_os = "android", target_os = "netbsd", target_os = "openbsd"))]
unsafe fn errno_location() -> *mut c_int {
    libc::__errno()
}

/// Exclusive use of `errno` for the duration of one C library call.
struct ErrnoGuard {
    _lock: MutexGuard<'static, ()>,
}

impl ErrnoGuard {
    fn acquire() -> Self {
        // Nothing the lock protects can be left half-updated by a panic.
        let lock = ERRNO_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        unsafe { *errno_location() = 0 };
        ErrnoGuard { _lock: lock }
    }

    /// Read `errno` and reset it to zero.
    fn take(&self) -> c_int {
        unsafe {
            let location = errno_location();
            let errno = *location;
            *location = 0;
            errno
        }
    }
}

impl Drop for ErrnoGuard {
    fn drop(&mut self) {
        unsafe { *errno_location() = 0 };
    }
}

/// Run `f` with `errno` cleared, returning its result and the `errno` it
/// left behind.
fn with_errno<R, F>(f: F) -> (R, c_int)
where
    F: FnOnce() -> R,
{
    let guard = ErrnoGuard::acquire();
    let result = f();
    let errno = guard.take();
    (result, errno)
}

// ASCII prefix of `input`, stopping at the first non-ASCII unit or NUL.
fn narrow<C: Char>(input: &[C]) -> Vec<u8> {
    let mut bytes: Vec<u8> = input.iter().map_while(|c| c.to_ascii()).collect();
    if let Some(nul) = memchr::memchr(0, &bytes) {
        bytes.truncate(nul);
    }
    bytes
}

// Input the C library converts nothing from is reported the way the
// crate's own scanner reports it.
#[cold]
fn rejected<C: Char>(input: &[C]) -> Error {
    match literal::scan_literal(input) {
        Err(err) => err,
        Ok(_) => Error::new(ErrorCode::EmptyLiteral, 0),
    }
}

/// Convert the literal at the start of `input` with the C library's
/// `strtod`.
///
/// Returns the value and the number of characters consumed. Unlike a bare
/// `strtod`, leading whitespace is not skipped.
pub(crate) fn strtod<C: Char>(input: &[C]) -> Result<(c_double, usize)> {
    let bytes = narrow(input);
    if bytes.first().map_or(true, u8::is_ascii_whitespace) {
        return Err(rejected(input));
    }
    let string = CString::new(bytes).map_err(|_| rejected(input))?;

    let start = string.as_ptr();
    let mut end: *mut c_char = ptr::null_mut();
    let (value, errno) = with_errno(|| unsafe { libc::strtod(start, &mut end) });

    let consumed = if end.is_null() {
        0
    } else {
        // strtod leaves `end` inside the string it was given.
        unsafe { (end as *const c_char).offset_from(start) as usize }
    };
    if consumed == 0 {
        return Err(rejected(input));
    }
    if errno == libc::ERANGE {
        tracing::debug!(consumed, value, "strtod reported a range error");
        return Err(Error::new(ErrorCode::NumberOutOfRange, consumed));
    }
    Ok((value, consumed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_prefix() {
        assert_eq!(strtod(b"2.5xyz").unwrap(), (2.5, 3));
        assert_eq!(strtod(b"-1e3").unwrap(), (-1000.0, 4));
        let wide: Vec<u16> = "0.25\u{661}".encode_utf16().collect();
        assert_eq!(strtod(&wide).unwrap(), (0.25, 4));
    }

    #[test]
    fn stops_at_nul() {
        assert_eq!(strtod(b"12\x0034").unwrap(), (12.0, 2));
        assert_eq!(narrow(b"1\x002"), b"1");
    }

    #[test]
    fn rejects() {
        for input in [&b""[..], b"abc", b" 1", b"\x001"] {
            let err = strtod(input).unwrap_err();
            assert_eq!(err.code(), ErrorCode::EmptyLiteral, "{:?}", input);
            assert_eq!(err.offset(), 0, "{:?}", input);
        }

        let err = strtod(b"+ 1").unwrap_err();
        assert_eq!(err.code(), ErrorCode::LoneSign);
        assert_eq!(err.offset(), 1);
    }

    #[test]
    fn range_error() {
        let err = strtod(b"1e99999").unwrap_err();
        assert_eq!(err.code(), ErrorCode::NumberOutOfRange);
        assert_eq!(err.offset(), 7);
    }

    #[test]
    fn errno_is_cleared() {
        let _ = strtod(b"1e99999");
        let (_, errno) = with_errno(|| ());
        assert_eq!(errno, 0);
    }
}
