//! Shared helpers: path normalization and content decoding.

pub mod encoding;
pub mod paths;

pub use encoding::{decode_strict, load_content};
pub use paths::{absolutize, normalize_path, to_slash};
