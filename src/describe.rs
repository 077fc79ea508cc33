use std::borrow::Cow;
use std::fmt::{self, Write};

use crate::codes::LibrtasError;

/// Message prefix for codes outside the librtas set.
pub const UNKNOWN_PREFIX: &str = "Unknown librtas error";

/// True iff `code` is one of the librtas-specific return codes.
pub fn is_librtas_error(code: i32) -> bool {
    LibrtasError::from_code(code).is_some()
}

/// Message for `code`: the fixed text for known codes, otherwise
/// `"Unknown librtas error <code>"`.
pub fn describe(code: i32) -> Cow<'static, str> {
    match LibrtasError::from_code(code) {
        Some(err) => Cow::Borrowed(err.message()),
        None => {
            tracing::debug!(code, "unrecognised librtas status code");
            Cow::Owned(format!("{UNKNOWN_PREFIX} {code}"))
        }
    }
}

/// Writes the message for `code` into `buf` the way `snprintf` would.
///
/// At most `buf.len() - 1` bytes of the message are copied, followed by a NUL.
/// An empty `buf` is left untouched. The return value is the length of the
/// whole message, so `n >= buf.len()` means the output was truncated.
///
/// Never allocates.
pub fn describe_into(code: i32, buf: &mut [u8]) -> usize {
    let mut out = BoundedWriter::new(buf);
    match LibrtasError::from_code(code) {
        Some(err) => out.push(err.message()),
        None => {
            tracing::debug!(code, "unrecognised librtas status code");
            out.push(UNKNOWN_PREFIX);
            out.push(" ");
            // BoundedWriter::write_str is infallible.
            let _ = write!(out, "{code}");
        }
    }
    out.finish()
}

/// `fmt::Write` sink over a fixed byte slice that keeps one byte for the
/// terminator and silently drops whatever does not fit.
struct BoundedWriter<'a> {
    buf: &'a mut [u8],
    written: usize,
    total: usize,
}

impl<'a> BoundedWriter<'a> {
    fn new(buf: &'a mut [u8]) -> Self {
        Self {
            buf,
            written: 0,
            total: 0,
        }
    }

    fn push(&mut self, s: &str) {
        let limit = self.buf.len().saturating_sub(1);
        let room = limit.saturating_sub(self.written);
        let take = room.min(s.len());
        if let Some(dst) = self.buf.get_mut(self.written..self.written + take)
            && let Some(src) = s.as_bytes().get(..take)
        {
            dst.copy_from_slice(src);
            self.written += take;
        }
        self.total += s.len();
    }

    fn finish(self) -> usize {
        if let Some(nul) = self.buf.get_mut(self.written) {
            *nul = 0;
        }
        self.total
    }
}

impl Write for BoundedWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push(s);
        Ok(())
    }
}
