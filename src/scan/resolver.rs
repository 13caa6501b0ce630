//! Pattern resolution: literal paths and glob expansion.
//!
//! Literal paths must exist. Glob patterns that match nothing are ignored.
//! The combined result is deduplicated in first-seen order.

use crate::error::{PackError, PackResult};
use crate::utils::{absolutize, normalize_path, to_slash};
use globset::{Glob, GlobBuilder, GlobSet, GlobSetBuilder};
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

const GLOB_META: &[char] = &['*', '?', '[', '{'];

/// True when `pattern` contains wildcard syntax.
pub fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains(GLOB_META)
}

/// Expands input patterns into existing regular files.
pub struct PathResolver {
    cwd: PathBuf,
    exclude_globs: Vec<String>,
    include_hidden: bool,
}

impl PathResolver {
    /// Create a resolver that interprets relative patterns against `cwd`.
    pub fn new(cwd: PathBuf) -> Self {
        Self { cwd, exclude_globs: Vec::new(), include_hidden: false }
    }

    /// Globs (relative to `cwd`) removed from glob expansions.
    pub fn exclude_globs(mut self, globs: Vec<String>) -> Self {
        self.exclude_globs = globs;
        self
    }

    /// Let wildcards match names starting with `.`
    pub fn include_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }

    /// Resolve every pattern, in order, into a deduplicated file list.
    ///
    /// An existing file is always taken literally, even when its name
    /// contains wildcard characters such as `notes[1].txt`.
    pub fn resolve(&self, patterns: &[String]) -> PackResult<Vec<PathBuf>> {
        let excludes = self.build_exclude_globset()?;
        let mut seen: HashSet<PathBuf> = HashSet::new();
        let mut files = Vec::new();

        for pattern in patterns {
            let matched = if is_glob_pattern(pattern) && !self.is_existing_file(pattern) {
                self.expand_glob(pattern, excludes.as_ref())?
            } else {
                self.resolve_literal(pattern)?.into_iter().collect()
            };

            if matched.is_empty() {
                tracing::info!("Pattern '{}' did not match any files", pattern);
            }

            for path in matched {
                if seen.insert(path.clone()) {
                    files.push(path);
                } else {
                    tracing::debug!("Skipping duplicate {}", path.display());
                }
            }
        }

        Ok(files)
    }

    fn build_exclude_globset(&self) -> PackResult<Option<GlobSet>> {
        if self.exclude_globs.is_empty() {
            return Ok(None);
        }
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.exclude_globs {
            builder.add(build_glob(pattern, pattern)?);
        }
        let set = builder.build().map_err(|source| PackError::InvalidPattern {
            pattern: self.exclude_globs.join(","),
            source,
        })?;
        Ok(Some(set))
    }

    fn is_existing_file(&self, pattern: &str) -> bool {
        std::fs::metadata(absolutize(&self.cwd, Path::new(pattern)))
            .map(|meta| meta.is_file())
            .unwrap_or(false)
    }

    fn resolve_literal(&self, pattern: &str) -> PackResult<Option<PathBuf>> {
        let path = absolutize(&self.cwd, Path::new(pattern));
        match std::fs::metadata(&path) {
            Ok(meta) if meta.is_file() => Ok(Some(path)),
            Ok(_) => {
                tracing::debug!("Skipping {}: not a regular file", path.display());
                Ok(None)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(PackError::NotFound { pattern: pattern.to_string() })
            }
            Err(source) => Err(PackError::Read { path, source }),
        }
    }

    fn expand_glob(&self, pattern: &str, excludes: Option<&GlobSet>) -> PackResult<Vec<PathBuf>> {
        let (base, segments) = split_glob(&self.cwd, pattern);
        self.expand_from(pattern, base, &segments, excludes)
    }

    /// Match `segments` below `base`. A `..` after a wildcard climbs out of
    /// every directory matched so far and continues from there.
    fn expand_from(
        &self,
        pattern: &str,
        mut base: PathBuf,
        segments: &[String],
        excludes: Option<&GlobSet>,
    ) -> PackResult<Vec<PathBuf>> {
        let literal_len = segments.iter().take_while(|seg| !is_glob_pattern(seg.as_str())).count();
        for seg in &segments[..literal_len] {
            match seg.as_str() {
                ".." => {
                    base.pop();
                }
                "." => {}
                other => base.push(other),
            }
        }
        let segments = &segments[literal_len..];

        if segments.is_empty() {
            if base.is_file() && !self.is_excluded(&base, excludes) {
                return Ok(vec![base]);
            }
            return Ok(Vec::new());
        }

        let Some(up) = segments.iter().position(|seg| seg == "..") else {
            return self.walk_matches(pattern, &base, &segments.join("/"), false, excludes);
        };

        let dirs = self.walk_matches(pattern, &base, &segments[..up].join("/"), true, None)?;
        let mut matched = Vec::new();
        for mut dir in dirs {
            dir.pop();
            matched.extend(self.expand_from(pattern, dir, &segments[up + 1..], excludes)?);
        }
        Ok(matched)
    }

    /// Walk `base` and return entries whose relative path matches `rest`,
    /// keeping either regular files or directories.
    fn walk_matches(
        &self,
        pattern: &str,
        base: &Path,
        rest: &str,
        want_dirs: bool,
        excludes: Option<&GlobSet>,
    ) -> PackResult<Vec<PathBuf>> {
        let matcher = build_glob(pattern, rest)?.compile_matcher();

        if !base.is_dir() {
            tracing::debug!("Glob base {} is not a directory", base.display());
            return Ok(Vec::new());
        }

        let allow_hidden = self.include_hidden || rest.split('/').any(|seg| seg.starts_with('.'));
        let max_depth = if rest.contains("**") { usize::MAX } else { rest.split('/').count() };

        let walker = WalkDir::new(base)
            .min_depth(1)
            .max_depth(max_depth)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| allow_hidden || !is_hidden(entry));

        let mut matched = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(err) => {
                    tracing::debug!("Skipping unreadable entry in '{}': {}", pattern, err);
                    continue;
                }
            };

            let Ok(rel) = entry.path().strip_prefix(base) else {
                continue;
            };
            if !matcher.is_match(to_slash(rel)) {
                continue;
            }

            let path = entry.path();
            // Whatever is not of the wanted kind is dropped silently.
            if (want_dirs && !path.is_dir()) || (!want_dirs && !path.is_file()) {
                continue;
            }
            if !want_dirs && self.is_excluded(path, excludes) {
                continue;
            }
            matched.push(path.to_path_buf());
        }

        Ok(matched)
    }

    fn is_excluded(&self, path: &Path, excludes: Option<&GlobSet>) -> bool {
        let Some(set) = excludes else {
            return false;
        };
        let rel = match path.strip_prefix(&self.cwd) {
            Ok(rel) => to_slash(rel),
            Err(_) => normalize_path(&path.to_string_lossy()),
        };
        let excluded = set.is_match(&rel);
        if excluded {
            tracing::debug!("Excluding {}", rel);
        }
        excluded
    }
}

/// Split a glob into its literal walk base and the remaining segments,
/// starting at the first segment with wildcard syntax.
fn split_glob(cwd: &Path, pattern: &str) -> (PathBuf, Vec<String>) {
    let mut base = PathBuf::new();
    let mut rest: Vec<String> = Vec::new();

    for component in Path::new(pattern).components() {
        let text = component.as_os_str().to_string_lossy();
        if rest.is_empty() && !is_glob_pattern(&text) {
            base.push(component.as_os_str());
        } else if component == Component::ParentDir {
            rest.push("..".to_string());
        } else {
            rest.push(text.into_owned());
        }
    }

    (absolutize(cwd, &base), rest)
}

/// Input and exclude globs share one dialect: `*` stays inside a segment.
fn build_glob(pattern: &str, glob: &str) -> PackResult<Glob> {
    GlobBuilder::new(glob)
        .literal_separator(true)
        .build()
        .map_err(|source| PackError::InvalidPattern { pattern: pattern.to_string(), source })
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_name().to_str().map(|name| name.starts_with('.')).unwrap_or(false)
}
