use std::path::PathBuf;

use crate::engine::{self, ScanConfig, ScanOutcome};
use crate::error::GroveError;
use crate::populate::{self, PopulateConfig, PopulateOutcome};

// ---------------------------------------------------------------------------
// PopulateBuilder
// ---------------------------------------------------------------------------

/// Configures and executes a tree-populate run.
///
/// Created via [`grove::populate()`](crate::populate()). Configure with
/// chained builder methods, then call [`run()`](PopulateBuilder::run).
///
/// Defaults reproduce the reference tool: fan-out 2/2/2, 2 files per
/// directory, 10 lines per file.
///
/// # Example
///
/// ```rust,ignore
/// let outcome = grove::populate("example_root")
///     .fan_out(2, 2, 2)
///     .files_per_dir(2)
///     .lines_per_file(10)
///     .run()?;
/// ```
pub struct PopulateBuilder {
    root:           PathBuf,
    fan_out:        [u32; 3],
    files_per_dir:  u32,
    lines_per_file: u32,
}

impl PopulateBuilder {
    pub(crate) fn new(root: PathBuf) -> Self {
        Self {
            root,
            fan_out:        [2, 2, 2],
            files_per_dir:  2,
            lines_per_file: 10,
        }
    }

    /// Number of child directories at each of the three nesting levels.
    pub fn fan_out(mut self, l1: u32, l2: u32, l3: u32) -> Self {
        self.fan_out = [l1, l2, l3];
        self
    }

    /// Files written into every directory, the root included.
    pub fn files_per_dir(mut self, n: u32) -> Self {
        self.files_per_dir = n;
        self
    }

    /// Lines of random text per file.
    pub fn lines_per_file(mut self, n: u32) -> Self {
        self.lines_per_file = n;
        self
    }

    /// Build the tree and return the manifest.
    ///
    /// Blocks until the tree is fully written.
    ///
    /// # Errors
    ///
    /// Returns `Err` only when the root directory cannot be created.
    /// Failures below the root (an uncreatable subdirectory, an
    /// unwritable file) are contained and collected into
    /// [`PopulateOutcome::errors`].
    pub fn run(self) -> Result<PopulateOutcome, GroveError> {
        let config = PopulateConfig {
            fan_out:        self.fan_out,
            files_per_dir:  self.files_per_dir,
            lines_per_file: self.lines_per_file,
        };
        populate::run(&self.root, &config)
    }
}

// ---------------------------------------------------------------------------
// ScanBuilder
// ---------------------------------------------------------------------------

/// Configures and executes a recursive scan.
///
/// Created via [`grove::scan()`](crate::scan()).
///
/// # Example
///
/// ```rust,ignore
/// let outcome = grove::scan("example_root")
///     .max_files(1000)
///     .max_dirs(500)
///     .run();
/// let summary = grove::Summary::compute(&outcome, 5);
/// ```
pub struct ScanBuilder {
    root:      PathBuf,
    max_files: usize,
    max_dirs:  usize,
}

impl ScanBuilder {
    pub(crate) fn new(root: PathBuf) -> Self {
        Self {
            root,
            max_files: 1000,
            max_dirs:  500,
        }
    }

    /// Capacity of the file collection. Files discovered beyond it are
    /// dropped (and counted in [`ScanOutcome::dropped_files`]); directory
    /// tallies are unaffected. Default 1000.
    pub fn max_files(mut self, n: usize) -> Self {
        self.max_files = n;
        self
    }

    /// Capacity of the directory collection. Default 500.
    pub fn max_dirs(mut self, n: usize) -> Self {
        self.max_dirs = n;
        self
    }

    /// Execute the scan and return everything it collected.
    ///
    /// Infallible by design: an unlistable root yields an empty outcome,
    /// and every failure below the root is contained per entry. The walk
    /// itself never aborts.
    pub fn run(self) -> ScanOutcome {
        let config = ScanConfig {
            max_files: self.max_files,
            max_dirs:  self.max_dirs,
        };
        engine::run(&self.root, &config)
    }
}
