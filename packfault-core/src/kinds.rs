//! Semantic decode-failure kinds
//!
//! Each kind is a terminal cause: it never wraps another error, its message comes
//! from a fixed template over its own fields, and its resumability classification
//! is baked into the kind itself (see [`crate::DecodeError::resumable`]).

use thiserror::Error;

/// Placeholder rendered for type names that were never filled in.
pub const TYPE_PLACEHOLDER: &str = "<invalid>";

/// A value was decoded with a method for a different encoded type.
///
/// Not resumable: the enclosing decode of this value cannot be trusted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Error)]
#[error(
    "attempted to decode type \"{}\" with method for \"{}\"",
    .decoded.unwrap_or(TYPE_PLACEHOLDER),
    .encoded.unwrap_or(TYPE_PLACEHOLDER)
)]
pub struct TypeMismatch {
    /// Name of the type the caller attempted to decode into.
    pub decoded: Option<&'static str>,
    /// Name of the type actually found in the encoded data.
    pub encoded: Option<&'static str>,
}

impl TypeMismatch {
    /// Create a mismatch between an attempted decode target and the encoded type.
    pub fn new(decoded: &'static str, encoded: &'static str) -> Self {
        Self {
            decoded: Some(decoded),
            encoded: Some(encoded),
        }
    }
}

/// An encoded array did not have the expected number of elements.
///
/// Resumable: the decoder may skip the offending value and continue with
/// sibling elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Error)]
#[error("wanted array of size {wanted}; got {got}")]
pub struct ArrayLenMismatch {
    /// Number of elements the decoder expected.
    pub wanted: u32,
    /// Number of elements found in the encoded data.
    pub got: u32,
}

impl ArrayLenMismatch {
    /// Create a mismatch between the expected and encoded array lengths.
    pub fn new(wanted: u32, got: u32) -> Self {
        Self { wanted, got }
    }
}

/// The requested type has no encoding in the wire format.
///
/// Not resumable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Error)]
#[error("type \"{}\" not supported", .ty.unwrap_or(TYPE_PLACEHOLDER))]
pub struct UnsupportedType {
    /// Name of the unsupported type.
    pub ty: Option<&'static str>,
}

impl UnsupportedType {
    /// Create an unsupported-type failure for `T`.
    pub fn of<T: ?Sized>() -> Self {
        Self {
            ty: Some(core::any::type_name::<T>()),
        }
    }
}
