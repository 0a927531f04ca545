//! Loading the two documents under comparison.

use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::core::TextBuffer;

/// Maximum document size to load (50 MiB). Prevents OOM on huge files.
pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Errors from loading a document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    /// I/O error while reading.
    #[error("failed to read {label}: {source}")]
    Io {
        /// Which document failed.
        label: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// Document exceeds maximum allowed size.
    #[error("{label} is too large: {size} bytes (max {max} bytes)")]
    TooLarge {
        /// Which document failed.
        label: String,
        /// Actual size.
        size: u64,
        /// Maximum allowed size.
        max: u64,
    },
    /// Document looks like binary data.
    #[error("{label} looks like a binary file")]
    Binary {
        /// Which document failed.
        label: String,
    },
}

/// Where a document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    /// A file on disk.
    File(PathBuf),
    /// Standard input.
    Stdin,
}

impl DocumentSource {
    /// Parse a CLI argument; `-` means stdin.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    /// Display label.
    pub fn label(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Stdin => "<stdin>".to_string(),
        }
    }

    /// Path on disk, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File(path) => Some(path),
            Self::Stdin => None,
        }
    }

    /// Read the document.
    pub fn load(&self) -> Result<TextBuffer, LoadError> {
        match self {
            Self::File(path) => load_file(path),
            Self::Stdin => load_reader(std::io::stdin().lock(), &self.label()),
        }
    }
}

/// Load a document from a file.
pub fn load_file(path: &Path) -> Result<TextBuffer, LoadError> {
    let label = path.display().to_string();
    let meta = std::fs::metadata(path).map_err(|source| LoadError::Io {
        label: label.clone(),
        source,
    })?;
    if meta.len() > MAX_FILE_SIZE {
        return Err(LoadError::TooLarge {
            label,
            size: meta.len(),
            max: MAX_FILE_SIZE,
        });
    }
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        label: label.clone(),
        source,
    })?;
    load_reader(file, &label)
}

/// Load a document from any reader, enforcing the size cap.
pub fn load_reader<R: Read>(reader: R, label: &str) -> Result<TextBuffer, LoadError> {
    let mut bytes = Vec::new();
    reader
        .take(MAX_FILE_SIZE + 1)
        .read_to_end(&mut bytes)
        .map_err(|source| LoadError::Io {
            label: label.to_string(),
            source,
        })?;
    if bytes.len() as u64 > MAX_FILE_SIZE {
        return Err(LoadError::TooLarge {
            label: label.to_string(),
            size: bytes.len() as u64,
            max: MAX_FILE_SIZE,
        });
    }

    let buffer = TextBuffer::new(&bytes);
    if buffer.is_binary() {
        return Err(LoadError::Binary {
            label: label.to_string(),
        });
    }
    debug!(label, bytes = buffer.len(), lines = buffer.line_count(), "loaded document");
    Ok(buffer)
}
