use std::path::{Path, PathBuf};

/// Convenience result type used across the assembler.
pub type AssemblerResult<T> = Result<T, AssemblerError>;

/// Top-level error taxonomy used by assembler APIs.
#[derive(thiserror::Error, Debug)]
pub enum AssemblerError {
    /// None of the candidate input images exist.
    #[error(
        "no input images found in '{}': generate {pattern} files first",
        dir.display()
    )]
    NoInputs {
        /// Directory that was scanned.
        dir: PathBuf,
        /// Human-readable file name pattern, e.g. `app-<size>.png`.
        pattern: String,
    },

    /// Invalid layout or command-line configuration.
    #[error("config error: {0}")]
    Config(String),

    /// The base image could not be decoded.
    #[error("decode error: '{}': {source}", path.display())]
    Decode {
        /// Path of the image that failed to decode.
        path: PathBuf,
        /// Underlying codec error.
        #[source]
        source: image::ImageError,
    },

    /// The icon container could not be encoded.
    #[error("encode error: {0}")]
    Encode(#[from] image::ImageError),

    /// Malformed icon container data.
    #[error("container error: {0}")]
    Container(String),

    /// Filesystem failure with the path involved.
    #[error("io error: '{}': {source}", path.display())]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl AssemblerError {
    /// Build a [`AssemblerError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`AssemblerError::Container`] value.
    pub fn container(msg: impl Into<String>) -> Self {
        Self::Container(msg.into())
    }

    /// Build a [`AssemblerError::Decode`] value.
    pub fn decode(path: impl AsRef<Path>, source: image::ImageError) -> Self {
        Self::Decode {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Build a [`AssemblerError::Io`] value.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Whether this is the expected "nothing to assemble" condition.
    pub fn is_no_inputs(&self) -> bool {
        matches!(self, Self::NoInputs { .. })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
