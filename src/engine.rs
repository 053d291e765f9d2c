use std::fs;
use std::path::Path;

use crate::error::GroveError;
use crate::record::{DirRecord, FileRecord};

// ---------------------------------------------------------------------------
// ScanConfig
// ---------------------------------------------------------------------------

/// Traversal parameters passed from the builder to the engine.
///
/// `pub(crate)` — not part of the public API. Callers configure these
/// via the builder methods (`.max_files()`, `.max_dirs()`).
pub(crate) struct ScanConfig {
    pub max_files: usize,
    pub max_dirs:  usize,
}

// ---------------------------------------------------------------------------
// ScanOutcome
// ---------------------------------------------------------------------------

/// Everything a completed scan collected.
///
/// Both record collections are bounded: once a collection reaches its
/// configured capacity, further discoveries are dropped (the walk keeps
/// going so directory tallies stay correct) and counted in the
/// corresponding `dropped_*` field. Within capacity, order is traversal
/// order — no sorting happens until [`Summary::compute`](crate::Summary::compute).
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Regular files, in discovery order, capped at `max_files`.
    pub files: Vec<FileRecord>,

    /// Directories, post-order (children before parents), capped at `max_dirs`.
    pub dirs: Vec<DirRecord>,

    /// Non-fatal errors encountered during the walk (unlistable nested
    /// directories, failed metadata queries). Never aborts the scan.
    pub errors: Vec<GroveError>,

    /// Files discovered after the file collection filled up.
    pub dropped_files: usize,

    /// Directories discovered after the directory collection filled up.
    pub dropped_dirs: usize,
}

// ---------------------------------------------------------------------------
// run()
// ---------------------------------------------------------------------------

/// Execute a scan rooted at `root` using the given config.
///
/// This is the core engine — a blocking, single-threaded, depth-first
/// recursive walk. Called by `ScanBuilder::run()`.
///
/// An unlistable root (missing, not a directory, permission denied) is the
/// documented degenerate case: the outcome is empty, with no error recorded.
pub(crate) fn run(root: &Path, config: &ScanConfig) -> ScanOutcome {
    let mut outcome = ScanOutcome::default();
    if let Ok(entries) = fs::read_dir(root) {
        walk(root, entries, config, &mut outcome);
    }
    outcome
}

/// Visit one directory whose listing is already open, recursing into
/// subdirectories before emitting the directory's own record.
///
/// `read_dir` yields only real children — the `.`/`..` pseudo-entries are
/// already excluded. Each child costs one metadata query; entries whose
/// query fails (e.g. broken symlinks) are skipped without disturbing
/// their siblings.
fn walk(dir: &Path, entries: fs::ReadDir, config: &ScanConfig, out: &mut ScanOutcome) {
    let mut local_files = 0usize;

    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(source) => {
                out.errors.push(GroveError::ListDir {
                    path: dir.to_path_buf(),
                    source,
                });
                continue;
            }
        };

        let path = entry.path();
        let meta = match fs::metadata(&path) {
            Ok(m) => m,
            Err(source) => {
                out.errors.push(GroveError::Metadata { path, source });
                continue;
            }
        };

        if meta.is_dir() {
            match fs::read_dir(&path) {
                Ok(children) => walk(&path, children, config, out),
                // Unlistable nested directory: treated as empty, no record.
                Err(source) => out.errors.push(GroveError::ListDir { path, source }),
            }
        } else if meta.is_file() {
            if out.files.len() < config.max_files {
                out.files.push(FileRecord {
                    path,
                    size_bytes: meta.len(),
                });
            } else {
                out.dropped_files += 1;
            }
            local_files += 1;
        }
        // Sockets, pipes, devices: neither counted nor recorded.
    }

    // Post-order: by now every nested directory has already emitted its
    // own record, and local_files counts only direct children.
    if out.dirs.len() < config.max_dirs {
        out.dirs.push(DirRecord {
            path: dir.to_path_buf(),
            immediate_file_count: local_files,
        });
    } else {
        out.dropped_dirs += 1;
    }
}
