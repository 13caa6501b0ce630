//! Directory tree generation from a flat list of relative paths.

use crate::domain::TreeOrder;
use std::cmp::Ordering;
use std::path::Path;

/// One node of the rendered tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    Dir { name: String, children: Vec<TreeNode> },
    File { name: String },
}

impl TreeNode {
    pub fn name(&self) -> &str {
        match self {
            TreeNode::Dir { name, .. } | TreeNode::File { name } => name,
        }
    }

    fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Dir { .. })
    }
}

/// Build the child list of the root from `/`-separated relative paths.
///
/// Children keep insertion order here; ordering is applied at render time.
pub fn build_tree<'a, I>(relative_paths: I) -> Vec<TreeNode>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut root: Vec<TreeNode> = Vec::new();
    for rel_path in relative_paths {
        let segments: Vec<&str> = rel_path.split('/').filter(|s| !s.is_empty()).collect();
        let Some((file_name, dirs)) = segments.split_last() else {
            continue;
        };

        let mut level = &mut root;
        for dir in dirs {
            let idx = match level.iter().position(|node| node.is_dir() && node.name() == *dir) {
                Some(idx) => idx,
                None => {
                    level.push(TreeNode::Dir { name: dir.to_string(), children: Vec::new() });
                    level.len() - 1
                }
            };
            level = match &mut level[idx] {
                TreeNode::Dir { children, .. } => children,
                TreeNode::File { .. } => unreachable!("position() only selects directories"),
            };
        }

        if !level.iter().any(|node| !node.is_dir() && node.name() == *file_name) {
            level.push(TreeNode::File { name: file_name.to_string() });
        }
    }
    root
}

/// Label for the root line: `.` for the working directory, otherwise the
/// ancestor's own name (or the whole path for a filesystem root).
pub fn root_label(ancestor: &Path, cwd: &Path) -> String {
    if ancestor == cwd {
        return ".".to_string();
    }
    ancestor
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| ancestor.display().to_string())
}

/// Render the tree with box-drawing connectors. Directories get a trailing `/`.
pub fn render_tree(root_label: &str, nodes: &[TreeNode], order: TreeOrder) -> String {
    let mut lines = vec![root_label.to_string()];
    walk_tree(nodes, "", order, &mut lines);
    lines.join("\n")
}

/// Build and render in one step.
pub fn generate_tree<'a, I>(root_label: &str, relative_paths: I, order: TreeOrder) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    render_tree(root_label, &build_tree(relative_paths), order)
}

fn walk_tree(nodes: &[TreeNode], prefix: &str, order: TreeOrder, lines: &mut Vec<String>) {
    let mut entries: Vec<&TreeNode> = nodes.iter().collect();
    match order {
        TreeOrder::Alphabetical => entries.sort_by(|a, b| a.name().cmp(b.name())),
        TreeOrder::DirsFirst => entries.sort_by(|a, b| {
            let dir_cmp = b.is_dir().cmp(&a.is_dir());
            if dir_cmp == Ordering::Equal {
                a.name().cmp(b.name())
            } else {
                dir_cmp
            }
        }),
        TreeOrder::Insertion => {}
    }

    let total_entries = entries.len();
    for (idx, node) in entries.into_iter().enumerate() {
        let is_last = idx == total_entries - 1;
        let connector = if is_last { "└── " } else { "├── " };

        match node {
            TreeNode::Dir { name, children } => {
                lines.push(format!("{}{}{}/", prefix, connector, name));
                let extension = if is_last { "    " } else { "│   " };
                walk_tree(children, &format!("{}{}", prefix, extension), order, lines);
            }
            TreeNode::File { name } => {
                lines.push(format!("{}{}{}", prefix, connector, name));
            }
        }
    }
}
