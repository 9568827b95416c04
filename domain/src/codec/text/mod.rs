//! English number words.
//!
//! [`parse`] reads a restricted phrase grammar; [`render`] always writes the
//! full form ("one hundred and twenty-three"), which [`parse`] accepts back.

mod parse;
mod render;
pub mod words;

pub use parse::parse;
pub use render::render;
