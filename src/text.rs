//! Helpers shared by the fixed-width text parsers.

use crate::Error;

/// Parses a non-empty run of ASCII digits.
pub(crate) fn digits(bytes: &[u8]) -> Option<u32> {
    if bytes.is_empty() {
        return None;
    }
    bytes.iter().try_fold(0_u32, |acc, &b| {
        b.is_ascii_digit()
            .then(|| acc.checked_mul(10)?.checked_add(u32::from(b - b'0')))
            .flatten()
    })
}

/// Parses exactly two ASCII digits.
pub(crate) fn two_digits(bytes: &[u8]) -> Option<i8> {
    if bytes.len() != 2 {
        return None;
    }
    i8::try_from(digits(bytes)?).ok()
}

/// Interprets raw driver bytes as text for the parser of `kind`.
pub(crate) fn utf8<'a>(kind: &'static str, bytes: &'a [u8]) -> Result<&'a str, Error> {
    std::str::from_utf8(bytes).map_err(|_| Error::format(kind, String::from_utf8_lossy(bytes)))
}
