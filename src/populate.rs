use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use chrono::Local;
use rand::Rng;

use crate::content::{self, ContentSpec};
use crate::error::GroveError;
use crate::record::ManifestEntry;

// ---------------------------------------------------------------------------
// PopulateConfig
// ---------------------------------------------------------------------------

/// Tree-shape parameters passed from the builder to the populator.
///
/// `pub(crate)` — callers configure these via the builder methods
/// (`.fan_out()`, `.files_per_dir()`, `.lines_per_file()`).
pub(crate) struct PopulateConfig {
    /// Child directories created at levels 1, 2, and 3.
    pub fan_out: [u32; 3],
    pub files_per_dir:  u32,
    pub lines_per_file: u32,
}

// ---------------------------------------------------------------------------
// PopulateOutcome
// ---------------------------------------------------------------------------

/// The result of a completed populate run.
#[derive(Debug, Default)]
pub struct PopulateOutcome {
    /// One entry per created file, in creation order.
    pub manifest: Vec<ManifestEntry>,

    /// Non-fatal errors: a failed directory creation (that subtree was
    /// skipped) or a failed file write (that file has no manifest row).
    /// Siblings are unaffected either way.
    pub errors: Vec<GroveError>,
}

// ---------------------------------------------------------------------------
// run()
// ---------------------------------------------------------------------------

/// Build the three-level tree under `root` and return the manifest.
///
/// Layout is deterministic: level-N directories are named `dir_lN_<i>`
/// and each directory — the root included, as level 0 index 0 — receives
/// `files_per_dir` files named `file_lN_<i>_<j>.txt`. Construction is
/// depth-first: a directory's files are written before its children are
/// descended into.
///
/// Re-runs are safe: an already-existing directory counts as created,
/// and existing files are overwritten rather than duplicated.
///
/// # Errors
///
/// Only a root that cannot be created is fatal. Everything below the
/// root degrades per-subtree or per-file into [`PopulateOutcome::errors`].
pub(crate) fn run(root: &Path, config: &PopulateConfig) -> Result<PopulateOutcome, GroveError> {
    make_dir_if_needed(root).map_err(|source| GroveError::CreateDir {
        path: root.to_path_buf(),
        source,
    })?;

    let mut outcome = PopulateOutcome::default();
    let mut rng = rand::thread_rng();
    visit(root, 0, 0, config, &mut rng, &mut outcome);
    Ok(outcome)
}

/// Populate one directory, then recurse into its children at `level + 1`.
///
/// `level` is the directory's own nesting level (root = 0), `index` its
/// 1-based ordinal among siblings (root = 0). Both feed the file-naming
/// scheme `file_l{level}_{index}_{j}.txt`.
fn visit<R: Rng>(
    dir: &Path,
    level: u32,
    index: u32,
    config: &PopulateConfig,
    rng: &mut R,
    out: &mut PopulateOutcome,
) {
    for j in 1..=config.files_per_dir {
        let file_path = dir.join(format!("file_l{}_{}_{}.txt", level, index, j));
        match create_random_file(&file_path, config.lines_per_file, rng) {
            Ok(entry) => out.manifest.push(entry),
            Err(err) => out.errors.push(err),
        }
    }

    let Some(&children) = config.fan_out.get(level as usize) else {
        return; // deepest level
    };

    for i in 1..=children {
        let child = dir.join(format!("dir_l{}_{}", level + 1, i));
        if let Err(source) = make_dir_if_needed(&child) {
            // Skip this subtree, keep going with its siblings.
            out.errors.push(GroveError::CreateDir {
                path: child,
                source,
            });
            continue;
        }
        visit(&child, level + 1, i, config, rng, out);
    }
}

/// Create a directory, treating "already exists" as success.
/// This is what makes re-running the populator idempotent.
fn make_dir_if_needed(path: &Path) -> io::Result<()> {
    match fs::create_dir(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(e),
    }
}

/// Write one random text file and return its manifest entry.
///
/// The creation timestamp is wall-clock local time captured at open,
/// formatted `YYYY-MM-DD HH:MM:SS`. The recorded byte and line counts
/// come straight from the generator and match the on-disk content.
fn create_random_file<R: Rng>(
    path: &Path,
    lines: u32,
    rng: &mut R,
) -> Result<ManifestEntry, GroveError> {
    let write_err = |source: io::Error| GroveError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let created = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    let mut sink = BufWriter::new(file);
    let spec = ContentSpec {
        lines,
        ..ContentSpec::default()
    };
    let stats = content::generate(&mut sink, rng, &spec).map_err(write_err)?;
    sink.flush().map_err(write_err)?;

    Ok(ManifestEntry {
        path: path.to_path_buf(),
        size_bytes: stats.bytes,
        line_count: stats.lines,
        created,
    })
}
