use std::io::{self, Write};

use crate::engine::ScanOutcome;
use crate::record::{DirRecord, FileRecord};

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Aggregated totals and top-K rankings over a completed scan.
pub struct Summary {
    /// Number of collected file records.
    pub file_count: usize,

    /// Number of collected directory records.
    pub dir_count: usize,

    /// Sum of all file sizes in bytes. 0 for an empty scan.
    pub total_bytes: u64,

    /// The K largest files, size descending. Ties keep discovery order.
    pub top_files: Vec<FileRecord>,

    /// The K directories with the most immediate files, count descending.
    /// Ties keep discovery order.
    pub top_dirs: Vec<DirRecord>,

    /// The K this summary was computed with.
    pub k: usize,
}

impl Summary {
    /// Rank a scan's collections and total its storage.
    ///
    /// Both top lists have length `min(k, collection size)`. Sorting is
    /// stable, so records of equal rank stay in traversal-discovery order,
    /// and ordering uses a proper three-way comparison — no subtraction
    /// that could wrap on large size differences.
    pub fn compute(outcome: &ScanOutcome, k: usize) -> Self {
        let total_bytes = outcome.files.iter().map(|f| f.size_bytes).sum();

        let mut top_files = outcome.files.clone();
        top_files.sort_by(|a, b| b.size_bytes.cmp(&a.size_bytes));
        top_files.truncate(k);

        let mut top_dirs = outcome.dirs.clone();
        top_dirs.sort_by(|a, b| b.immediate_file_count.cmp(&a.immediate_file_count));
        top_dirs.truncate(k);

        Self {
            file_count: outcome.files.len(),
            dir_count: outcome.dirs.len(),
            total_bytes,
            top_files,
            top_dirs,
            k,
        }
    }

    /// Total storage in kibibytes.
    pub fn total_kb(&self) -> f64 {
        self.total_bytes as f64 / 1024.0
    }
}

// ---------------------------------------------------------------------------
// render()
// ---------------------------------------------------------------------------

/// Write the plain-text report for `summary` to `out`.
///
/// Layout: header, totals, then the two ranked sections with 1-based
/// ordinals. Renders zero totals and empty sections for an empty scan
/// rather than erroring.
pub fn render_report<W: Write>(summary: &Summary, out: &mut W) -> io::Result<()> {
    writeln!(out, "   FILE SYSTEM REPORT")?;
    writeln!(out, "Total files found: {}", summary.file_count)?;
    writeln!(out, "Total directories found: {}", summary.dir_count)?;
    writeln!(
        out,
        "Total storage used: {} bytes ({:.2} KB)",
        summary.total_bytes,
        summary.total_kb()
    )?;
    writeln!(out)?;

    writeln!(out, "Top {} Largest Files:", summary.k)?;
    for (i, file) in summary.top_files.iter().enumerate() {
        writeln!(
            out,
            "{}. {} — {} bytes",
            i + 1,
            file.path.display(),
            file.size_bytes
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Directories with Most Files:")?;
    for (i, dir) in summary.top_dirs.iter().enumerate() {
        writeln!(
            out,
            "{}. {} — {} files",
            i + 1,
            dir.path.display(),
            dir.immediate_file_count
        )?;
    }

    Ok(())
}
