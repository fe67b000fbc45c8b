//! Walks a simulated nested decode failure through context wrapping and shows
//! what the top-level caller sees.
//!
//! Run with: cargo run --example wrap_context

use packfault_core::{cause, wrap_error, ArrayLenMismatch, DecodeError, Result, WrapErrorExt};

// Innermost frame: the element decoder hits an array of the wrong length.
fn decode_coords() -> Result<()> {
    Err(ArrayLenMismatch::new(3, 2).into())
}

// Each enclosing frame attaches its own label on the way out.
fn decode_position(index: usize) -> Result<()> {
    decode_coords().wrap_err(format!("entity[{index}]"))
}

fn decode_scene() -> Result<()> {
    decode_position(7).wrap_err("scene")
}

fn main() {
    let err = decode_scene().unwrap_err();

    println!("message:   {err}");
    println!("resumable: {}", err.resumable());
    println!("root:      {}", cause(&err));

    // A resumable failure means the decoder may skip this value and keep
    // going with sibling data; the sentinel never carries context at all.
    let short = wrap_error(DecodeError::ShortBytes, ["anywhere"]);
    assert!(short.is_short_bytes());
    println!("sentinel:  {short}");
}
