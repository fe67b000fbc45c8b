//! Fuzzing entry points for packfault-core wrapping and cause extraction
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_wrap

use packfault_core::{cause, wrap_error, ArrayLenMismatch, DecodeError, TypeMismatch};

/// Interpret the input as a wrap program: first byte picks the root error,
/// the rest becomes chunks of path labels applied one wrap call at a time.
/// Wrapping and rendering must never panic, whatever the input.
pub fn fuzz_wrap(data: &[u8]) {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };

    let mut err = match selector % 4 {
        0 => DecodeError::ShortBytes,
        1 => DecodeError::from(TypeMismatch::default()),
        2 => DecodeError::from(ArrayLenMismatch::new(selector as u32, 0)),
        _ => DecodeError::external(std::io::Error::other("fuzz")),
    };

    let expected_resumable = err.resumable();
    let was_short = err.is_short_bytes();

    for chunk in rest.chunks(3) {
        let label = String::from_utf8_lossy(chunk).into_owned();
        err = wrap_error(err, [label]);
    }

    // Classification is stable under arbitrary wrap chains.
    assert_eq!(err.resumable(), expected_resumable);
    assert_eq!(err.is_short_bytes(), was_short);
    let _ = err.to_string();
}

/// Cause extraction is total and idempotent on anything wrapping produces.
pub fn fuzz_cause(data: &[u8]) {
    let mut err = DecodeError::external(std::io::Error::other("fuzz"));
    for chunk in data.chunks(2) {
        err = wrap_error(err, [String::from_utf8_lossy(chunk).into_owned()]);
    }

    let root = cause(&err).clone();
    assert_eq!(cause(&root), &root);
    let _ = root.to_string();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzz_wrap_empty() {
        fuzz_wrap(&[]);
    }

    #[test]
    fn test_fuzz_wrap_each_root() {
        for selector in 0u8..4 {
            fuzz_wrap(&[selector, 0x12, 0x34, 0x56, 0x78]);
        }
    }

    #[test]
    fn test_fuzz_wrap_invalid_utf8_labels() {
        fuzz_wrap(&[1, 0xFF, 0xFE, 0xFD, 0xFC]);
    }

    #[test]
    fn test_fuzz_cause_random() {
        fuzz_cause(&[0xAB; 64]);
    }
}
