//! Output rendering (document assembly and sinks)

pub mod document;
pub mod sink;

pub use document::{assemble_document, render_block};
pub use sink::OutputSink;
