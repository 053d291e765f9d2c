//! # grove
//!
//! Directory-tree workbench — populate nested trees with random text,
//! then scan, rank, and report.
//!
//! grove is two pipeline stages connected only through the filesystem.
//! The **populator** builds a three-level directory hierarchy of fixed
//! fan-out, fills every directory with random text files, and returns a
//! manifest of exactly what it wrote. The **scanner** walks any existing
//! tree with a single-threaded depth-first recursion, collects bounded
//! file and directory records, and [`Summary`] ranks them (top-K largest
//! files, top-K directories by immediate file count).
//!
//! The library owns the traversal and aggregation engine, the record
//! types, and the error type. It does **not** own output formatting
//! beyond the plain-text report, CSV serialization, or CLI wiring —
//! those belong to the caller (the `grove` binary, for one).
//!
//! # Quick Start
//!
//! ```rust
//! let dir = tempfile::tempdir().unwrap();
//! let root = dir.path().join("example_root");
//!
//! // Stage 1: build the tree. 2/2/2 fan-out with 2 files per directory
//! // (root included) yields 2 * (1 + 2 + 4 + 8) = 30 files.
//! let populated = grove::populate(&root)
//!     .fan_out(2, 2, 2)
//!     .files_per_dir(2)
//!     .lines_per_file(10)
//!     .run()
//!     .unwrap();
//! assert_eq!(populated.manifest.len(), 30);
//!
//! // Stage 2: scan it back and rank.
//! let scanned = grove::scan(&root).run();
//! let summary = grove::Summary::compute(&scanned, 5);
//!
//! assert_eq!(summary.file_count, 30);
//! assert_eq!(summary.dir_count, 15);
//! assert_eq!(summary.top_files.len(), 5);
//! ```
//!
//! # Degradation, not crashes
//!
//! Everything below the two top-level output sinks degrades locally: an
//! uncreatable subdirectory skips that subtree, an unreadable entry skips
//! that entry, a missing scan root yields an empty (zero-record) outcome.
//! Each contained failure is surfaced in the outcome's `errors` rather
//! than aborting siblings.

#![forbid(unsafe_code)]

pub mod content;

mod builder;
mod engine;
mod error;
mod populate;
mod record;
mod report;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::{PopulateBuilder, ScanBuilder};
pub use engine::ScanOutcome;
pub use error::GroveError;
pub use populate::PopulateOutcome;
pub use record::{DirRecord, FileRecord, ManifestEntry};
pub use report::{render_report, Summary};

// ── Entry points ──────────────────────────────────────────────────────────────

/// Create a [`PopulateBuilder`] for building a tree rooted at `root`.
///
/// # Example
///
/// ```rust
/// let dir = tempfile::tempdir().unwrap();
/// let outcome = grove::populate(dir.path().join("root"))
///     .fan_out(1, 1, 1)
///     .files_per_dir(1)
///     .run()
///     .unwrap();
///
/// // One file each in the root and its three nested directories.
/// assert_eq!(outcome.manifest.len(), 4);
/// assert!(outcome.errors.is_empty());
/// ```
pub fn populate(root: impl Into<std::path::PathBuf>) -> PopulateBuilder {
    PopulateBuilder::new(root.into())
}

/// Create a [`ScanBuilder`] for scanning the tree rooted at `root`.
///
/// # Example
///
/// ```rust
/// // A root that does not exist is the documented degenerate case:
/// // zero records, no error.
/// let outcome = grove::scan("no/such/root").run();
/// assert!(outcome.files.is_empty());
/// assert!(outcome.dirs.is_empty());
/// ```
pub fn scan(root: impl Into<std::path::PathBuf>) -> ScanBuilder {
    ScanBuilder::new(root.into())
}
