//! Decode error set, resumability classification, and error-chain compatibility
//!
//! Every failure a decoder surfaces is a [`DecodeError`]. The set is closed:
//! semantic kinds from [`crate::kinds`], the short-buffer sentinel, externally
//! supplied plain errors, and the path-context wrapper from [`crate::context`].
//! Resumability is an always-present field of the classification, never a
//! runtime downcast.

use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::sync::Arc;

use crate::context::ContextError;
use crate::kinds::{ArrayLenMismatch, TypeMismatch, UnsupportedType};

/// A decode failure.
///
/// Values are immutable once constructed and cheap to clone; they may be read
/// from any number of threads without synchronization.
#[derive(Debug, Clone)]
pub enum DecodeError {
    /// Too few bytes remain to read the next object.
    ///
    /// Identity-significant sentinel: callers detect it by discriminant
    /// ([`DecodeError::is_short_bytes`] or pattern matching), never by message,
    /// and [`crate::wrap_error`] passes it through without attaching context.
    ShortBytes,

    /// A value was decoded with a method for a different encoded type.
    Type(TypeMismatch),

    /// An encoded array did not have the expected number of elements.
    Array(ArrayLenMismatch),

    /// The requested type has no encoding in the wire format.
    Unsupported(UnsupportedType),

    /// A plain error surfaced from an underlying byte source or unrelated
    /// subsystem. Shared by reference so the original value stays reachable
    /// through the chain (see [`StdError::source`]).
    External(Arc<dyn StdError + Send + Sync>),

    /// A failure with accumulated decode-path context.
    Context(ContextError),
}

impl DecodeError {
    /// Wrap a plain error produced outside this crate.
    pub fn external<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        DecodeError::External(Arc::new(err))
    }

    /// Whether the decoder may skip the offending value and continue with
    /// sibling data.
    ///
    /// Fixed per kind: array-length mismatches are resumable, type mismatches
    /// and unsupported types are not, plain external errors default to not
    /// resumable, and a context wrapper reports the classification captured
    /// when it was created.
    pub fn resumable(&self) -> bool {
        match self {
            DecodeError::Array(_) => true,
            DecodeError::Context(ctx) => ctx.resumable(),
            DecodeError::ShortBytes
            | DecodeError::Type(_)
            | DecodeError::Unsupported(_)
            | DecodeError::External(_) => false,
        }
    }

    /// Whether this is the short-buffer sentinel.
    pub fn is_short_bytes(&self) -> bool {
        matches!(self, DecodeError::ShortBytes)
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::ShortBytes => f.write_str("too few bytes left to read object"),
            DecodeError::Type(err) => err.fmt(f),
            DecodeError::Array(err) => err.fmt(f),
            DecodeError::Unsupported(err) => err.fmt(f),
            DecodeError::External(err) => err.fmt(f),
            DecodeError::Context(ctx) => ctx.fmt(f),
        }
    }
}

impl StdError for DecodeError {
    /// Chain compatibility rule: a plain external cause stays reachable through
    /// generic one-level unwrap traversal; semantic kinds are fully described
    /// by the value itself and expose nothing underneath.
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            DecodeError::External(err) => Some(err.as_ref()),
            DecodeError::Context(ctx) => ctx.external_cause(),
            _ => None,
        }
    }
}

/// Equality follows identity for external causes (pointer equality on the
/// shared value, never message comparison) and structure for everything else.
impl PartialEq for DecodeError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (DecodeError::ShortBytes, DecodeError::ShortBytes) => true,
            (DecodeError::Type(a), DecodeError::Type(b)) => a == b,
            (DecodeError::Array(a), DecodeError::Array(b)) => a == b,
            (DecodeError::Unsupported(a), DecodeError::Unsupported(b)) => a == b,
            (DecodeError::External(a), DecodeError::External(b)) => Arc::ptr_eq(a, b),
            (DecodeError::Context(a), DecodeError::Context(b)) => a == b,
            _ => false,
        }
    }
}

impl From<TypeMismatch> for DecodeError {
    fn from(err: TypeMismatch) -> Self {
        DecodeError::Type(err)
    }
}

impl From<ArrayLenMismatch> for DecodeError {
    fn from(err: ArrayLenMismatch) -> Self {
        DecodeError::Array(err)
    }
}

impl From<UnsupportedType> for DecodeError {
    fn from(err: UnsupportedType) -> Self {
        DecodeError::Unsupported(err)
    }
}

impl From<ContextError> for DecodeError {
    fn from(ctx: ContextError) -> Self {
        DecodeError::Context(ctx)
    }
}

impl From<io::Error> for DecodeError {
    fn from(err: io::Error) -> Self {
        DecodeError::external(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_message_and_identity() {
        let err = DecodeError::ShortBytes;
        assert!(err.is_short_bytes());
        assert_eq!(err.to_string(), "too few bytes left to read object");
        assert_eq!(err, DecodeError::ShortBytes);
    }

    #[test]
    fn test_resumability_classification() {
        assert!(DecodeError::from(ArrayLenMismatch::default()).resumable());
        assert!(!DecodeError::from(TypeMismatch::default()).resumable());
        assert!(!DecodeError::from(UnsupportedType::default()).resumable());
        assert!(!DecodeError::ShortBytes.resumable());
        assert!(!DecodeError::external(io::Error::other("disk gone")).resumable());
    }

    #[test]
    fn test_external_equality_is_by_identity() {
        let a = DecodeError::external(io::Error::other("same text"));
        let b = DecodeError::external(io::Error::other("same text"));
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_external_source_is_original_error() {
        let err = DecodeError::external(io::Error::from(io::ErrorKind::UnexpectedEof));
        let source = err.source().expect("external error exposes a source");
        let io_err = source
            .downcast_ref::<io::Error>()
            .expect("source downcasts to io::Error");
        assert_eq!(io_err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_semantic_kinds_have_no_source() {
        assert!(DecodeError::from(TypeMismatch::default()).source().is_none());
        assert!(DecodeError::ShortBytes.source().is_none());
    }
}
