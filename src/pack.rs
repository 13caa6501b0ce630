//! One run of the pipeline, from patterns to the finished document.

use crate::domain::{Config, FileEntry};
use crate::error::{PackError, PackResult};
use crate::render::assemble_document;
use crate::scan::{common_ancestor, generate_tree, root_label, PathResolver};
use crate::utils::{load_content, to_slash};
use std::path::{Path, PathBuf};

/// Resolve `patterns` against `cwd` and build the document in memory.
///
/// Nothing is written anywhere; on error no partial output exists.
pub fn build_pack(patterns: &[String], config: &Config, cwd: &Path) -> PackResult<String> {
    let resolver = PathResolver::new(cwd.to_path_buf())
        .exclude_globs(config.exclude_globs.clone())
        .include_hidden(config.include_hidden);

    let files = resolver.resolve(patterns)?;
    if files.is_empty() {
        return Err(PackError::NoFilesResolved);
    }
    tracing::debug!("Resolved {} files from {} patterns", files.len(), patterns.len());

    let ancestor = common_ancestor(&files)?;
    let entries = to_entries(files, &ancestor)?;
    tracing::debug!("Common ancestor: {}", ancestor.display());

    let tree = generate_tree(
        &root_label(&ancestor, cwd),
        entries.iter().map(|e| e.relative_path.as_str()),
        config.tree_order,
    );

    let mut blocks = Vec::with_capacity(entries.len());
    for entry in entries {
        let content = load_content(&entry.path)?;
        blocks.push((entry.relative_path, content));
    }

    Ok(assemble_document(&tree, &blocks))
}

fn to_entries(files: Vec<PathBuf>, ancestor: &Path) -> PackResult<Vec<FileEntry>> {
    files
        .into_iter()
        .map(|path| {
            let relative_path = match path.strip_prefix(ancestor) {
                Ok(rel) => to_slash(rel),
                Err(_) => return Err(PackError::NoCommonAncestor),
            };
            if relative_path.is_empty() {
                return Err(PackError::NoCommonAncestor);
            }
            Ok(FileEntry { path, relative_path })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TreeOrder;
    use std::fs;
    use tempfile::TempDir;

    fn patterns(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn sample_project() -> TempDir {
        let tmp = TempDir::new().expect("tmp dir");
        fs::create_dir(tmp.path().join("src")).expect("mkdir src");
        fs::write(tmp.path().join("notes.txt"), "This is a note.\n").expect("write notes");
        fs::write(
            tmp.path().join("src/main.py"),
            "def greet():\n    print(\"Hello, world!\")\n\ngreet()\n",
        )
        .expect("write main");
        tmp
    }

    #[test]
    fn builds_tree_and_blocks_in_resolution_order() {
        let tmp = sample_project();
        let inputs = patterns(&["notes.txt", "src/main.py"]);
        let doc = build_pack(&inputs, &Config::default(), tmp.path()).expect("pack");

        let expected = "\
.
├── notes.txt
└── src/
    └── main.py

```notes.txt
This is a note.
```

```src/main.py
def greet():
    print(\"Hello, world!\")

greet()
```
";
        assert_eq!(doc, expected);
    }

    #[test]
    fn root_label_is_ancestor_name_outside_cwd() {
        let tmp = sample_project();
        let doc = build_pack(&patterns(&["src/main.py"]), &Config::default(), tmp.path())
            .expect("pack");
        assert!(doc.starts_with("src\n└── main.py\n\n```main.py\n"));
    }

    #[test]
    fn block_order_follows_patterns_not_tree_order() {
        let tmp = sample_project();
        let config = Config { tree_order: TreeOrder::DirsFirst, ..Config::default() };
        let inputs = patterns(&["src/main.py", "notes.txt"]);
        let doc = build_pack(&inputs, &config, tmp.path()).expect("pack");

        let main_pos = doc.find("```src/main.py").expect("main block");
        let notes_pos = doc.find("```notes.txt").expect("notes block");
        assert!(main_pos < notes_pos);
        let tree = ".\n├── src/\n│   └── main.py\n└── notes.txt\n\n";
        assert!(doc.starts_with(tree));
    }

    #[test]
    fn zero_matches_is_no_files_error() {
        let tmp = sample_project();
        let err =
            build_pack(&patterns(&["*.nothing"]), &Config::default(), tmp.path()).unwrap_err();
        assert!(matches!(err, PackError::NoFilesResolved));

        let err = build_pack(&[], &Config::default(), tmp.path()).unwrap_err();
        assert!(matches!(err, PackError::NoFilesResolved));
    }

    #[test]
    fn invalid_utf8_renders_sentinel() {
        let tmp = sample_project();
        fs::write(tmp.path().join("logo.png"), [0x89, b'P', b'N', b'G', 0xff, 0x00])
            .expect("write png");

        let doc =
            build_pack(&patterns(&["logo.png"]), &Config::default(), tmp.path()).expect("pack");
        assert!(doc.ends_with("```logo.png\n[non-text content]\n```\n"));
    }

    #[test]
    fn entries_outside_the_ancestor_are_rejected() {
        let ancestor = PathBuf::from("/work/project");
        let inside = vec![PathBuf::from("/work/project/src/a.rs")];
        let entries = to_entries(inside, &ancestor).expect("entries");
        assert_eq!(entries[0].relative_path, "src/a.rs");

        let outside = vec![PathBuf::from("/elsewhere/b.rs")];
        assert!(matches!(to_entries(outside, &ancestor), Err(PackError::NoCommonAncestor)));

        let the_ancestor_itself = vec![ancestor.clone()];
        assert!(matches!(
            to_entries(the_ancestor_itself, &ancestor),
            Err(PackError::NoCommonAncestor)
        ));
    }

    #[test]
    fn repeated_runs_are_identical() {
        let tmp = sample_project();
        let inputs = patterns(&["**/*", "notes.txt"]);
        let first = build_pack(&inputs, &Config::default(), tmp.path()).expect("first");
        let second = build_pack(&inputs, &Config::default(), tmp.path()).expect("second");
        assert_eq!(first, second);
        assert_eq!(first.matches("```notes.txt").count(), 1);
    }
}
