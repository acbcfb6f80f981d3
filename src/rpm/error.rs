//! Custom error types for the rpm-inspect crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum RpmError {
    /// An error originating from I/O operations.
    ///
    /// Covers short reads (truncated archives), failed seeks, and report
    /// sink write failures. Always fatal for the current file.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// A magic-number check failed: the stream is not an RPM archive or the
    /// cursor is misaligned with the expected structure.
    #[error("Bad {section} magic {actual_hex}")]
    BadMagic {
        /// The structure whose magic was checked ("lead" or "header").
        section: &'static str,
        /// The observed bytes, two uppercase hex digits per byte.
        actual_hex: String,
    },

    /// An error annotated with the name of the file being inspected.
    #[error("{filename}: {source}")]
    WithFile {
        filename: String,
        #[source]
        source: Box<RpmError>,
    },
}

impl RpmError {
    /// Attaches the file name to the error. Applied once, at the per-file
    /// entry point; inner decode errors pass through unchanged.
    pub fn with_filename(self, filename: impl Into<String>) -> Self {
        RpmError::WithFile {
            filename: filename.into(),
            source: Box::new(self),
        }
    }
}

/// A convenience `Result` type alias using the crate's `RpmError` type.
pub type Result<T> = std::result::Result<T, RpmError>;
