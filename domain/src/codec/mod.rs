//! Codecs between arbitrary-precision integers and their textual encodings.
//!
//! | Module | Formats | Direction |
//! |--------|---------|-----------|
//! | [`radix`] | binary, octal, decimal, hexadecimal | signed, both ways |
//! | [`base64`] | base64 (little-endian bytes) | non-negative only |
//! | [`text`] | English words | parse non-negative, render signed |
//!
//! All functions are pure; the only shared state is the read-only word table.

pub mod base64;
pub mod radix;
pub mod text;
