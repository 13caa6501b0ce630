//! File reading with strict UTF-8 decoding.
//!
//! Content that is not valid UTF-8 is never passed through as raw bytes and
//! never lossily repaired: it becomes [`FileContent::NonText`], which renders
//! as the sentinel. A UTF-8 byte order mark is valid UTF-8 and is kept as-is.

use crate::domain::FileContent;
use crate::error::{PackError, PackResult};
use encoding_rs::UTF_8;
use std::path::Path;

/// Read a whole file and decode it.
///
/// The file handle is dropped before decoding, whatever the outcome.
/// I/O failures (missing file, permissions) are fatal; bad encoding is not.
pub fn load_content(path: &Path) -> PackResult<FileContent> {
    let bytes = std::fs::read(path)
        .map_err(|source| PackError::Read { path: path.to_path_buf(), source })?;

    let content = decode_strict(&bytes);
    if content == FileContent::NonText {
        tracing::debug!("{} is not valid UTF-8, using placeholder", path.display());
    }
    Ok(content)
}

/// Strict UTF-8: no BOM sniffing, no replacement characters.
pub fn decode_strict(bytes: &[u8]) -> FileContent {
    match UTF_8.decode_without_bom_handling_and_without_replacement(bytes) {
        Some(text) => FileContent::Text(text.into_owned()),
        None => FileContent::NonText,
    }
}
