//! Format tags shared by the request boundary and the codecs.

mod tag;

pub use tag::{CodecKind, FormatTag};
