//! Lenient file reading
//!
//! Documentation files are read as text with:
//! - Lossy UTF-8 decoding (invalid sequences are replaced, never fatal)
//! - A size ceiling so a stray binary named README cannot exhaust memory

use std::fs;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Default maximum file size in bytes (16 MB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Configuration for file reading
#[derive(Debug, Clone)]
pub struct FileReadConfig {
    /// Maximum file size to read (bytes)
    pub max_file_size: u64,
}

impl Default for FileReadConfig {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

/// Errors raised while reading a text file
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} exceeds size limit ({size} > {limit} bytes)")]
    TooLarge { path: String, size: u64, limit: u64 },
}

/// Decoded file content
#[derive(Debug, Clone)]
pub struct FileReadResult {
    pub content: String,

    /// Size on disk in bytes
    pub size: u64,

    /// Whether lossy conversion was used
    pub lossy_conversion: bool,
}

/// Read a file with the given configuration
pub fn read_file_with_config(
    path: &Path,
    config: &FileReadConfig,
) -> Result<FileReadResult, ReadError> {
    let io_err = |source: std::io::Error| ReadError::Io {
        path: path.display().to_string(),
        source,
    };

    let file = fs::File::open(path).map_err(io_err)?;
    let size = file.metadata().map_err(io_err)?.len();

    if size > config.max_file_size {
        return Err(ReadError::TooLarge {
            path: path.display().to_string(),
            size,
            limit: config.max_file_size,
        });
    }

    let mut bytes = Vec::with_capacity(size as usize);
    std::io::BufReader::new(file)
        .read_to_end(&mut bytes)
        .map_err(io_err)?;

    match String::from_utf8(bytes) {
        Ok(content) => Ok(FileReadResult {
            content,
            size,
            lossy_conversion: false,
        }),
        Err(err) => Ok(FileReadResult {
            content: String::from_utf8_lossy(err.as_bytes()).into_owned(),
            size,
            lossy_conversion: true,
        }),
    }
}

/// Convenience function with default config
pub fn read_file_lossy(path: &Path) -> Result<FileReadResult, ReadError> {
    read_file_with_config(path, &FileReadConfig::default())
}
