use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GroveError {
    // Populate
    #[error("failed to create directory")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write file")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Scan
    #[error("failed to list directory")]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to query metadata")]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Output sinks
    #[error("failed to open manifest file")]
    Manifest {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open report file")]
    Report {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GroveError {
    /// The path this error occurred at.
    /// Callers use this to present "warning: ... (<path>)" without pattern
    /// matching on variants.
    pub fn path(&self) -> &Path {
        match self {
            Self::CreateDir { path, .. }
            | Self::WriteFile { path, .. }
            | Self::ListDir { path, .. }
            | Self::Metadata { path, .. }
            | Self::Manifest { path, .. }
            | Self::Report { path, .. } => path,
        }
    }

    /// Whether this error aborts the whole run.
    ///
    /// Per-entry and per-subtree failures (directory creation, file write,
    /// listing, metadata) are contained locally — siblings keep going.
    /// Only failures to acquire a top-level output sink are fatal.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Manifest { .. } | Self::Report { .. })
    }
}
