//! Decode-path context accumulation and root-cause extraction
//!
//! As a failed decode unwinds, every frame that knows where it was (a field
//! name, a map key, an array index) calls [`wrap_error`] to attach that label.
//! Wrapping is immutable accumulation: each call consumes the error and
//! produces a new value, prepending the frame's labels so the outermost frame
//! reads first in the rendered path. The original failure stays recoverable
//! through [`cause`] no matter how many labels were layered on.

use std::error::Error as StdError;
use std::fmt;

use crate::error::DecodeError;

/// A decode failure with accumulated path context.
///
/// Holds exactly one inner cause and an ordered list of path segments,
/// most-recently-added first. Constructed only by [`wrap_error`], which
/// guarantees the inner cause is never itself a wrapper or the short-buffer
/// sentinel; extracting the root is therefore always a single step.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextError {
    cause: Box<DecodeError>,
    resumable: bool,
    path: Vec<String>,
}

impl ContextError {
    /// The inner cause this wrapper was built around.
    pub fn cause(&self) -> &DecodeError {
        &self.cause
    }

    /// Resumability captured when the first wrapping layer was created.
    pub fn resumable(&self) -> bool {
        self.resumable
    }

    /// Accumulated path segments, outermost label first.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Inner cause for generic chain traversal, exposed only when it is a
    /// plain external error. Semantic kinds are fully described by the
    /// wrapper's own message and stay opaque to unwrap walks.
    pub(crate) fn external_cause(&self) -> Option<&(dyn StdError + 'static)> {
        match self.cause.as_ref() {
            DecodeError::External(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl fmt::Display for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.cause.fmt(f)?;
        if !self.path.is_empty() {
            write!(f, " at {}", self.path.join("/"))?;
        }
        Ok(())
    }
}

impl StdError for ContextError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.external_cause()
    }
}

/// Attach decode-path context to an error.
///
/// Called by every unwinding frame that has positional information; a frame
/// with none passes the error through (equivalently, calls this with no
/// labels). Behavior, in priority order:
///
/// 1. The [`DecodeError::ShortBytes`] sentinel is returned unchanged,
///    whatever the labels. Callers compare it by identity, and context would
///    break that contract.
/// 2. An existing wrapper is extended: same cause, same resumability, the new
///    labels placed in front of the existing segments. Wrapping first with
///    `"b"` and then with `"a"` renders `.. at a/b`.
/// 3. Anything else gets a fresh wrapper around it, carrying the error's own
///    resumability classification and exactly the given labels.
///
/// The input is consumed; the result is a new value in every case but rule 1.
///
/// ```
/// use packfault_core::{wrap_error, ArrayLenMismatch, DecodeError};
///
/// let err = DecodeError::from(ArrayLenMismatch::new(4, 2));
/// let err = wrap_error(err, ["coords"]);
/// let err = wrap_error(err, ["position", "entity[3]"]);
/// assert_eq!(
///     err.to_string(),
///     "wanted array of size 4; got 2 at position/entity[3]/coords"
/// );
/// assert!(err.resumable());
/// ```
pub fn wrap_error<I>(err: DecodeError, context: I) -> DecodeError
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    match err {
        DecodeError::ShortBytes => DecodeError::ShortBytes,
        DecodeError::Context(prev) => {
            let mut path: Vec<String> = context.into_iter().map(Into::into).collect();
            path.extend(prev.path);
            DecodeError::Context(ContextError {
                cause: prev.cause,
                resumable: prev.resumable,
                path,
            })
        }
        other => {
            let resumable = other.resumable();
            DecodeError::Context(ContextError {
                cause: Box::new(other),
                resumable,
                path: context.into_iter().map(Into::into).collect(),
            })
        }
    }
}

/// Extract the root failure beneath any accumulated context.
///
/// Total over all error values: a wrapper yields its inner cause, everything
/// else (the sentinel, semantic kinds, plain external errors) yields itself.
/// Wrappers never nest, so this is always a single step.
pub fn cause(err: &DecodeError) -> &DecodeError {
    match err {
        DecodeError::Context(ctx) => ctx.cause(),
        other => other,
    }
}

/// Per-frame propagation helper for `Result` chains.
///
/// Lets a decode frame attach its label on the way out with `?`:
///
/// ```
/// use packfault_core::{DecodeError, TypeMismatch, WrapErrorExt};
///
/// fn read_name() -> packfault_core::Result<String> {
///     Err(TypeMismatch::new("Str", "Int").into())
/// }
///
/// fn read_header() -> packfault_core::Result<String> {
///     read_name().wrap_err("name")
/// }
///
/// let err = read_header().unwrap_err();
/// assert!(err.to_string().ends_with(" at name"));
/// ```
pub trait WrapErrorExt<T> {
    /// Wrap the error side with a single path label.
    fn wrap_err(self, label: impl Into<String>) -> crate::Result<T>;
}

impl<T, E> WrapErrorExt<T> for Result<T, E>
where
    E: Into<DecodeError>,
{
    fn wrap_err(self, label: impl Into<String>) -> crate::Result<T> {
        self.map_err(|err| wrap_error(err.into(), [label.into()]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::{ArrayLenMismatch, TypeMismatch};

    #[test]
    fn test_labels_prepend() {
        let err = wrap_error(DecodeError::from(TypeMismatch::default()), ["b"]);
        let err = wrap_error(err, ["a"]);
        match err {
            DecodeError::Context(ctx) => {
                assert_eq!(ctx.path(), ["a", "b"]);
                assert_eq!(*ctx.cause(), DecodeError::from(TypeMismatch::default()));
            }
            other => panic!("expected a context wrapper, got {other:?}"),
        }
    }

    #[test]
    fn test_multi_label_call_keeps_order() {
        let err = wrap_error(DecodeError::from(TypeMismatch::default()), ["foo", "bar"]);
        assert!(err.to_string().ends_with(" at foo/bar"));
    }

    #[test]
    fn test_empty_labels_on_wrapper_keep_path() {
        let err = wrap_error(DecodeError::from(ArrayLenMismatch::new(1, 0)), ["k"]);
        let rewrapped = wrap_error(err.clone(), std::iter::empty::<&str>());
        assert_eq!(rewrapped, err);
    }

    #[test]
    fn test_no_path_no_suffix() {
        let err = wrap_error(
            DecodeError::from(ArrayLenMismatch::new(1, 0)),
            std::iter::empty::<&str>(),
        );
        assert_eq!(err.to_string(), "wanted array of size 1; got 0");
    }

    #[test]
    fn test_resumability_carried_through_rewrap() {
        let err = wrap_error(DecodeError::from(ArrayLenMismatch::new(2, 1)), ["inner"]);
        let err = wrap_error(err, ["outer"]);
        assert!(err.resumable());
    }

    #[test]
    fn test_wrap_err_ext_attaches_label() {
        let res: Result<(), TypeMismatch> = Err(TypeMismatch::default());
        let err = res.wrap_err("field").unwrap_err();
        assert!(err.to_string().ends_with(" at field"));
        assert!(!err.resumable());
    }
}
