//! A collection of modules that implement Lempel–Ziv dictionary coding.

pub mod dictionary;
mod lz78;
pub use dictionary::{Code, DICTIONARY_CAPACITY};
pub use lz78::{decode_codes, encode_codes, LZ78Decoder, LZ78Encoder};
