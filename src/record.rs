use std::path::PathBuf;

/// A regular file discovered by the scanner.
///
/// Created when a directory entry's metadata query classifies it as a
/// regular file. Immutable once created; owned exclusively by the
/// [`ScanOutcome`](crate::ScanOutcome) that collected it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Full path to the file, root-relative to whatever root the scan started at.
    pub path: PathBuf,

    /// File size in bytes.
    pub size_bytes: u64,
}

/// A directory discovered by the scanner.
///
/// Emitted post-order: the record is created only after every immediate
/// entry of the directory has been classified, so `immediate_file_count`
/// is final at construction. Nested directories produce their own records
/// first, meaning a child's record always precedes its parent's in the
/// collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirRecord {
    /// Full path to the directory.
    pub path: PathBuf,

    /// Regular files directly inside this directory. Files nested in
    /// subdirectories are not counted here.
    pub immediate_file_count: usize,
}

/// One row of the populate manifest — a single file the populator created.
///
/// Appended in creation order and never mutated afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Path of the created file.
    pub path: PathBuf,

    /// Exact number of bytes written, including word separators and
    /// line terminators.
    pub size_bytes: u64,

    /// Number of line terminators written.
    pub line_count: u32,

    /// Local wall-clock time the file was opened for writing,
    /// formatted `YYYY-MM-DD HH:MM:SS`.
    pub created: String,
}
