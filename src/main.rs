//! repo-prompt: Concatenate files into a single prompt-ready document
//!
//! Resolves paths and glob patterns, renders a tree of the selected files
//! relative to their common ancestor, and wraps each file in a fenced block.

use anyhow::Result;

fn main() -> Result<()> {
    repo_prompt::cli::run()
}
