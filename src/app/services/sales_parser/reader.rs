//! Sales log reading with text-encoding fallback
//!
//! The file is read once as raw bytes and then decoded with each configured
//! encoding in turn; the first encoding that decodes cleanly wins. The first
//! line is the column header and is dropped.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::{debug, info, warn};

/// Text encodings the reader knows how to try
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextEncoding {
    /// Strict UTF-8, fails on any invalid sequence
    Utf8,
    /// ISO-8859-1, maps every byte to the code point of the same value
    Latin1,
}

impl TextEncoding {
    /// Default fallback order
    pub const DEFAULT_ORDER: [TextEncoding; 2] = [TextEncoding::Utf8, TextEncoding::Latin1];

    /// Decode `bytes`, returning `None` if they are not valid in this encoding
    pub fn decode(&self, bytes: &[u8]) -> Option<String> {
        match self {
            TextEncoding::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_string),
            TextEncoding::Latin1 => Some(bytes.iter().map(|&b| b as char).collect()),
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextEncoding::Utf8 => write!(f, "utf-8"),
            TextEncoding::Latin1 => write!(f, "latin-1"),
        }
    }
}

/// Read the data lines of a sales log, failing on resource errors
///
/// # Errors
///
/// * `Error::FileNotFound` if `path` does not exist
/// * `Error::Io` if the file cannot be read
/// * `Error::Encoding` if no encoding in `encodings` decodes the bytes
pub fn try_read_sales_lines(path: &Path, encodings: &[TextEncoding]) -> Result<Vec<String>> {
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::file_not_found(path.display().to_string())
        } else {
            Error::io(format!("Failed to read {}", path.display()), e)
        }
    })?;

    for encoding in encodings {
        match encoding.decode(&bytes) {
            Some(content) => {
                debug!("Decoded {} as {}", path.display(), encoding);
                // Skip the first line because it is the header
                return Ok(content.lines().skip(1).map(str::to_string).collect());
            }
            None => {
                debug!("Encoding {} failed for {}", encoding, path.display());
            }
        }
    }

    let tried = encodings
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    Err(Error::encoding(path.display().to_string(), tried))
}

/// Read the data lines of a sales log, degrading to an empty list
///
/// Resource failures are logged as warnings and yield no lines, so a missing
/// or unreadable file produces a run over zero records instead of an abort.
pub fn read_sales_lines(path: &Path, encodings: &[TextEncoding]) -> Vec<String> {
    match try_read_sales_lines(path, encodings) {
        Ok(lines) => {
            info!("Read {} data lines from {}", lines.len(), path.display());
            lines
        }
        Err(e) => {
            warn!("Could not read sales data: {}", e);
            Vec::new()
        }
    }
}
