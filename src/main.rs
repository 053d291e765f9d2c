use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use grove::{render_report, GroveError, Summary};

#[derive(Parser)]
#[command(
    name = "grove",
    version,
    about = "Populate nested directory trees with random text, then scan, rank, and report"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a three-level tree of random text files and write a CSV manifest
    Populate {
        /// Root directory to create the tree under
        #[arg(long, default_value = "example_root")]
        root: PathBuf,

        /// Child directories per nesting level
        #[arg(long, num_args = 3, value_names = ["L1", "L2", "L3"], default_values_t = [2u32, 2, 2])]
        fan_out: Vec<u32>,

        /// Files created in every directory, root included
        #[arg(long, default_value_t = 2)]
        files_per_dir: u32,

        /// Lines of random text per file
        #[arg(long, default_value_t = 10)]
        lines_per_file: u32,

        /// Where to write the CSV manifest
        #[arg(long, default_value = "summary.csv")]
        manifest: PathBuf,
    },

    /// Scan an existing tree and write a ranked plain-text report
    Report {
        /// Root directory to scan
        #[arg(long, default_value = "example_root")]
        root: PathBuf,

        /// Where to write the report
        #[arg(long, default_value = "file_system_report.txt")]
        output: PathBuf,

        /// Entries per top-K section
        #[arg(long, default_value_t = 5)]
        top: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Populate {
            root,
            fan_out,
            files_per_dir,
            lines_per_file,
            manifest,
        } => run_populate(
            root,
            [fan_out[0], fan_out[1], fan_out[2]],
            files_per_dir,
            lines_per_file,
            manifest,
        ),
        Commands::Report { root, output, top } => run_report(root, output, top),
    }
}

fn run_populate(
    root: PathBuf,
    fan_out: [u32; 3],
    files_per_dir: u32,
    lines_per_file: u32,
    manifest_path: PathBuf,
) -> Result<()> {
    // The manifest sink is acquired up front: failing to open it is one of
    // the two fatal cases, and we want to know before touching the tree.
    let manifest_file = File::create(&manifest_path).map_err(|source| GroveError::Manifest {
        path: manifest_path.clone(),
        source,
    })?;
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(BufWriter::new(manifest_file));
    wtr.write_record(["file_path", "size_bytes", "line_count", "creation_time"])?;

    let outcome = grove::populate(&root)
        .fan_out(fan_out[0], fan_out[1], fan_out[2])
        .files_per_dir(files_per_dir)
        .lines_per_file(lines_per_file)
        .run()?;

    for entry in &outcome.manifest {
        wtr.write_record([
            entry.path.display().to_string(),
            entry.size_bytes.to_string(),
            entry.line_count.to_string(),
            entry.created.clone(),
        ])?;
        println!(
            "Created {} ({} bytes, {} lines)",
            entry.path.display(),
            entry.size_bytes,
            entry.line_count
        );
    }
    wtr.flush().context("flushing manifest")?;

    report_skips(&outcome.errors);
    println!("Manifest written to {}", manifest_path.display());
    Ok(())
}

fn run_report(root: PathBuf, output: PathBuf, top: usize) -> Result<()> {
    // Same policy as the manifest: the report sink is the only fatal case.
    let report_file = File::create(&output).map_err(|source| GroveError::Report {
        path: output.clone(),
        source,
    })?;

    let outcome = grove::scan(&root).run();
    report_skips(&outcome.errors);
    if outcome.dropped_files > 0 || outcome.dropped_dirs > 0 {
        eprintln!(
            "warning: collection capacity reached, dropped {} files and {} directories",
            outcome.dropped_files, outcome.dropped_dirs
        );
    }

    let summary = Summary::compute(&outcome, top);
    let mut out = BufWriter::new(report_file);
    render_report(&summary, &mut out).context("writing report")?;
    out.flush().context("flushing report")?;

    println!(
        "Total files scanned: {}, Total storage: {} bytes",
        summary.file_count, summary.total_bytes
    );
    Ok(())
}

/// One stderr line per contained failure; processing already continued.
fn report_skips(errors: &[GroveError]) {
    for err in errors {
        eprintln!("warning: {} ({})", err, err.path().display());
    }
}
