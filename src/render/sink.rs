//! Output destinations.

use crate::error::{PackError, PackResult};
use std::io::Write;
use std::path::PathBuf;

/// Where the finished document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSink {
    Stdout,
    /// Created if missing, truncated otherwise.
    File(PathBuf),
}

impl OutputSink {
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map(OutputSink::File).unwrap_or(OutputSink::Stdout)
    }

    fn target(&self) -> String {
        match self {
            OutputSink::Stdout => "<stdout>".to_string(),
            OutputSink::File(path) => path.display().to_string(),
        }
    }

    /// Write the whole document in one go.
    pub fn write(&self, document: &str) -> PackResult<()> {
        let result = match self {
            OutputSink::Stdout => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                write_all(&mut handle, document)
            }
            OutputSink::File(path) => std::fs::write(path, document),
        };

        result.map_err(|source| PackError::Write { target: self.target(), source })?;
        tracing::info!("Wrote {} bytes to {}", document.len(), self.target());
        Ok(())
    }
}

fn write_all<W: Write>(writer: &mut W, document: &str) -> std::io::Result<()> {
    writer.write_all(document.as_bytes())?;
    writer.flush()
}
