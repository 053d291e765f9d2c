use std::fs;
use std::path::Path;

use grove::{render_report, Summary};

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

/// Create a small two-directory tree with known sizes.
///
/// Structure:
/// ```text
/// tmp/
///   big.txt      (100 bytes)
///   sub/
///     small.txt  (50 bytes)
/// ```
fn setup_small_tree() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    fs::write(root.join("big.txt"), vec![b'x'; 100]).unwrap();

    let sub = root.join("sub");
    fs::create_dir(&sub).unwrap();
    fs::write(sub.join("small.txt"), vec![b'y'; 50]).unwrap();

    dir
}

/// Independent oracle: recursively sum regular-file sizes with walkdir.
fn walkdir_total(root: &Path) -> u64 {
    walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.metadata().unwrap().len())
        .sum()
}

/// Independent oracle: count regular files reachable from `root`.
fn walkdir_file_count(root: &Path) -> usize {
    walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .count()
}

// ---------------------------------------------------------------------------
// Scanner
// ---------------------------------------------------------------------------

#[test]
fn nested_tree_totals_and_immediate_counts() {
    let dir = setup_small_tree();
    let outcome = grove::scan(dir.path()).run();
    let summary = Summary::compute(&outcome, 5);

    assert_eq!(summary.file_count, 2);
    assert_eq!(summary.dir_count, 2, "root and sub");
    assert_eq!(summary.total_bytes, 150);

    // Both directories hold exactly one file directly.
    for rec in &outcome.dirs {
        assert_eq!(
            rec.immediate_file_count, 1,
            "direct children only: {}",
            rec.path.display()
        );
    }
}

#[test]
fn missing_root_is_empty_but_reportable() {
    let outcome = grove::scan("definitely/not/a/real/root").run();

    assert!(outcome.files.is_empty());
    assert!(outcome.dirs.is_empty());
    assert!(outcome.errors.is_empty(), "degenerate case, not an error");

    let summary = Summary::compute(&outcome, 5);
    assert_eq!(summary.total_bytes, 0);

    let mut buf = Vec::new();
    render_report(&summary, &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert!(text.contains("Total files found: 0"));
    assert!(text.contains("Total directories found: 0"));
}

#[test]
fn child_dir_records_precede_parents() {
    let dir = setup_small_tree();
    let outcome = grove::scan(dir.path()).run();

    let sub_pos = outcome
        .dirs
        .iter()
        .position(|d| d.path.ends_with("sub"))
        .expect("sub recorded");
    let root_pos = outcome
        .dirs
        .iter()
        .position(|d| d.path == dir.path())
        .expect("root recorded");
    assert!(sub_pos < root_pos, "post-order: children before parents");
}

#[test]
fn immediate_count_excludes_nested_files() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    fs::write(root.join("a.txt"), "a").unwrap();
    fs::write(root.join("b.txt"), "bb").unwrap();
    let nested = root.join("one").join("two");
    fs::create_dir_all(&nested).unwrap();
    fs::write(nested.join("deep.txt"), "deep").unwrap();

    let outcome = grove::scan(root).run();

    let count_of = |suffix: &Path| {
        outcome
            .dirs
            .iter()
            .find(|d| d.path.ends_with(suffix))
            .map(|d| d.immediate_file_count)
    };
    assert_eq!(
        outcome
            .dirs
            .iter()
            .find(|d| d.path == root)
            .unwrap()
            .immediate_file_count,
        2
    );
    assert_eq!(count_of(Path::new("one")), Some(0), "only a subdirectory inside");
    assert_eq!(count_of(Path::new("two")), Some(1));
}

#[test]
fn capacity_drops_are_counted_and_tallies_survive() {
    let dir = tempfile::tempdir().unwrap();
    for i in 0..5 {
        fs::write(dir.path().join(format!("f{i}.txt")), "x").unwrap();
    }

    let outcome = grove::scan(dir.path()).max_files(3).run();

    assert_eq!(outcome.files.len(), 3, "collection capped");
    assert_eq!(outcome.dropped_files, 2);
    assert_eq!(
        outcome.dirs[0].immediate_file_count, 5,
        "tally counts all direct files, dropped or not"
    );
}

#[test]
fn top_lists_are_sorted_and_bounded() {
    let dir = tempfile::tempdir().unwrap();
    let sizes = [3usize, 11, 7, 2, 19, 5];
    for (i, size) in sizes.iter().enumerate() {
        fs::write(dir.path().join(format!("f{i}.bin")), vec![0u8; *size]).unwrap();
    }

    let outcome = grove::scan(dir.path()).run();
    let summary = Summary::compute(&outcome, 5);

    assert_eq!(summary.top_files.len(), 5, "min(k, collection size)");
    assert!(summary
        .top_files
        .windows(2)
        .all(|w| w[0].size_bytes >= w[1].size_bytes));
    assert_eq!(summary.top_files[0].size_bytes, 19);

    let small = Summary::compute(&outcome, 100);
    assert_eq!(small.top_files.len(), sizes.len());
}

#[cfg(unix)]
#[test]
fn broken_symlink_is_skipped_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("real.txt"), "hello").unwrap();
    std::os::unix::fs::symlink("missing-target", dir.path().join("dangling")).unwrap();

    let outcome = grove::scan(dir.path()).run();

    assert_eq!(outcome.files.len(), 1, "the real file survives");
    assert_eq!(outcome.errors.len(), 1, "the dangling link is recorded");
    assert_eq!(
        outcome.dirs[0].immediate_file_count, 1,
        "the link does not count as a file"
    );
}

// ---------------------------------------------------------------------------
// Populator
// ---------------------------------------------------------------------------

#[test]
fn populate_file_arithmetic_is_exact() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("example_root");

    let outcome = grove::populate(&root)
        .fan_out(2, 2, 2)
        .files_per_dir(2)
        .lines_per_file(10)
        .run()
        .unwrap();

    // files_per_dir * (1 + l1 + l1*l2 + l1*l2*l3) = 2 * 15 = 30
    assert_eq!(outcome.manifest.len(), 30);
    assert!(outcome.errors.is_empty());
    assert_eq!(walkdir_file_count(&root), 30, "independent count agrees");
}

#[test]
fn manifest_matches_disk_exactly() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("root");

    let outcome = grove::populate(&root)
        .fan_out(1, 1, 1)
        .files_per_dir(3)
        .lines_per_file(6)
        .run()
        .unwrap();

    assert_eq!(outcome.manifest.len(), 12);
    for entry in &outcome.manifest {
        let on_disk = fs::read(&entry.path).unwrap();
        assert_eq!(
            entry.size_bytes,
            on_disk.len() as u64,
            "recorded size equals actual content: {}",
            entry.path.display()
        );
        let newlines = on_disk.iter().filter(|&&b| b == b'\n').count();
        assert_eq!(entry.line_count, 6);
        assert_eq!(newlines, 6);
    }
}

#[test]
fn manifest_timestamps_are_formatted() {
    let dir = tempfile::tempdir().unwrap();
    let outcome = grove::populate(dir.path().join("r"))
        .fan_out(0, 0, 0)
        .files_per_dir(1)
        .run()
        .unwrap();

    // YYYY-MM-DD HH:MM:SS
    let created = &outcome.manifest[0].created;
    assert_eq!(created.len(), 19);
    assert_eq!(&created[4..5], "-");
    assert_eq!(&created[10..11], " ");
    assert_eq!(&created[13..14], ":");
}

#[test]
fn repopulating_an_existing_root_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("root");

    grove::populate(&root).run().unwrap();
    let second = grove::populate(&root).run().expect("re-run must succeed");

    assert!(second.errors.is_empty(), "existing dirs are not failures");
    assert_eq!(second.manifest.len(), 30);
    assert_eq!(
        walkdir_file_count(&root),
        30,
        "files overwritten, not duplicated"
    );
}

#[test]
fn deterministic_naming_scheme() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("root");
    grove::populate(&root).fan_out(2, 1, 1).files_per_dir(1).run().unwrap();

    assert!(root.join("file_l0_0_1.txt").is_file());
    assert!(root.join("dir_l1_1").join("file_l1_1_1.txt").is_file());
    assert!(root.join("dir_l1_2").join("dir_l2_1").is_dir());
    assert!(root
        .join("dir_l1_1")
        .join("dir_l2_1")
        .join("dir_l3_1")
        .join("file_l3_1_1.txt")
        .is_file());
}

// ---------------------------------------------------------------------------
// Pipeline: populate then scan
// ---------------------------------------------------------------------------

#[test]
fn scan_total_matches_manifest_and_walkdir() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("root");

    let populated = grove::populate(&root).run().unwrap();
    let manifest_total: u64 = populated.manifest.iter().map(|e| e.size_bytes).sum();

    let outcome = grove::scan(&root).run();
    let summary = Summary::compute(&outcome, 5);

    assert_eq!(summary.total_bytes, manifest_total);
    assert_eq!(summary.total_bytes, walkdir_total(&root));
    assert_eq!(summary.file_count, populated.manifest.len());
}

#[test]
fn every_populated_dir_reports_files_per_dir() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("root");
    grove::populate(&root).fan_out(2, 2, 2).files_per_dir(2).run().unwrap();

    let outcome = grove::scan(&root).run();
    assert_eq!(outcome.dirs.len(), 15);
    for rec in &outcome.dirs {
        assert_eq!(
            rec.immediate_file_count, 2,
            "every directory in the tree holds exactly files_per_dir files"
        );
    }
}

#[test]
fn report_renders_expected_sections() {
    let dir = setup_small_tree();
    let outcome = grove::scan(dir.path()).run();
    let summary = Summary::compute(&outcome, 5);

    let mut buf = Vec::new();
    render_report(&summary, &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();

    assert!(text.contains("   FILE SYSTEM REPORT"));
    assert!(text.contains("Total files found: 2"));
    assert!(text.contains("Total directories found: 2"));
    assert!(text.contains("Total storage used: 150 bytes (0.15 KB)"));
    assert!(text.contains("Top 5 Largest Files:"));
    assert!(text.contains("1. "));
    assert!(text.contains("big.txt — 100 bytes"));
    assert!(text.contains("Directories with Most Files:"));
}
