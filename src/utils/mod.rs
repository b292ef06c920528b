//! Text and buffer helpers shared by the ciphers.

pub mod grid;
pub mod normalize;
