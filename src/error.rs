use std::path::PathBuf;
use thiserror::Error;

pub type CropResult<T> = Result<T, CropError>;

/// Errors surfaced while cropping a mesh file.
#[derive(Debug, Error)]
pub enum CropError {
    /// Input path does not resolve to a readable file. Nothing is written.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A `v` line whose coordinate fields do not parse as floats.
    #[error("malformed vertex on line {line}: {text:?}")]
    MalformedVertex { line: usize, text: String },

    /// A face reference whose vertex-index part is not an integer.
    #[error("malformed face reference {token:?} on line {line}")]
    MalformedFaceRef { line: usize, token: String },
}
