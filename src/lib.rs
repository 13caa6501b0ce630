//! Library side of `repo-prompt`.
//!
//! The pipeline is: [`scan::resolver`] → [`scan::ancestor`] → [`scan::tree`]
//! plus [`utils::encoding`] → [`render::document`] → [`render::sink`].
//! [`pack::build_pack`] runs everything except the sink.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod pack;
pub mod render;
pub mod scan;
pub mod utils;

pub use error::PackError;
pub use pack::build_pack;
