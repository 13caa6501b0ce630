//! Markdown document assembly.

use crate::domain::FileContent;

const MIN_FENCE_LEN: usize = 3;

/// Assemble the final document: tree, a blank line, then one fenced block
/// per file in the given order, blocks separated by a blank line.
pub fn assemble_document(tree: &str, blocks: &[(String, FileContent)]) -> String {
    let rendered: Vec<String> =
        blocks.iter().map(|(rel_path, content)| render_block(rel_path, content.as_str())).collect();

    let body_len: usize = rendered.iter().map(String::len).sum();
    let mut document = String::with_capacity(tree.len() + body_len + 2);
    document.push_str(tree);
    document.push_str("\n\n");
    document.push_str(&rendered.join("\n"));
    document
}

/// A single fenced block labeled with `rel_path`.
///
/// Content goes in verbatim; a newline is added only when the content is
/// non-empty and lacks one, so the closing fence sits on its own line.
pub fn render_block(rel_path: &str, content: &str) -> String {
    let fence = fence_for(content);
    let mut block = String::with_capacity(content.len() + rel_path.len() + 2 * fence.len() + 3);
    block.push_str(&fence);
    block.push_str(rel_path);
    block.push('\n');
    block.push_str(content);
    if !content.is_empty() && !content.ends_with('\n') {
        block.push('\n');
    }
    block.push_str(&fence);
    block.push('\n');
    block
}

/// Backtick fence one longer than the longest backtick run in `content`,
/// and never shorter than three.
pub fn fence_for(content: &str) -> String {
    "`".repeat(MIN_FENCE_LEN.max(longest_backtick_run(content) + 1))
}

fn longest_backtick_run(content: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for ch in content.chars() {
        if ch == '`' {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}
