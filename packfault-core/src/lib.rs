//! # Packfault Core
//!
//! Error classification and decode-path context accumulation for binary-format
//! decoders. When decoding fails inside a nested structure, each enclosing frame
//! attaches a path label on the way out; the top-level caller can read the full
//! path, check whether decoding of sibling data may resume, and recover the root
//! cause regardless of how much context was layered on top.
//!
//! ## Modules
//!
//! - `error`: The [`DecodeError`] set, resumability classification, and
//!   `std::error::Error` chain compatibility
//! - `kinds`: Semantic failure kinds (type mismatch, array length, unsupported type)
//! - `context`: Path-context wrapping ([`wrap_error`]) and root-cause extraction
//!   ([`cause`])
//!
//! This crate never performs I/O, never logs, and never mutates an error after
//! construction; all operations are pure computations over immutable values.

#![warn(missing_docs)]

pub mod context;
pub mod error;
pub mod kinds;

// Re-export commonly used items
pub use context::{cause, wrap_error, ContextError, WrapErrorExt};
pub use error::DecodeError;
pub use kinds::{ArrayLenMismatch, TypeMismatch, UnsupportedType};

/// Result type alias for decode operations
pub type Result<T> = core::result::Result<T, DecodeError>;
