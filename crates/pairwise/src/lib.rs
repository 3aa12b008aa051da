//! Pairwise positional comparison of a list of files
//!
//! Compares every pair of the configured files and writes one
//! `<first> vs <second>: <count> different lines` line per pair.

use anyhow::Result;
use clap::Parser;
use line_diff::{pair_count, FileList, PairReport};
use log::info;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pairwise",
    version,
    about = "Count differing lines between every pair of files",
    long_about = "Compares every pair of the given files line by line, by position, and prints how many lines differ for each pair. Without arguments, output_1.cnf through output_9.cnf in the working directory are compared.",
    after_help = "Examples:\n  pairwise\n  pairwise run_a.cnf run_b.cnf run_c.cnf\n  RUST_LOG=debug pairwise\n"
)]
pub struct Cli {
    /// Files to compare, in order (defaults to output_1.cnf .. output_9.cnf)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl Cli {
    /// Resolve the configured file list
    pub fn file_list(&self) -> FileList {
        if self.files.is_empty() {
            FileList::default()
        } else {
            FileList::new(self.files.iter().cloned())
        }
    }
}

/// Compare every pair of files and write the report to `out`.
///
/// Nothing is written unless every pair was compared successfully.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let files = cli.file_list();
    info!(
        "Comparing {} files ({} pairs)",
        files.len(),
        pair_count(files.len())
    );

    let report = PairReport::compare_files(files.paths())?;

    for result in &report {
        writeln!(out, "{}", result)?;
    }

    info!(
        "{} of {} pairs are identical",
        report.identical_pairs().count(),
        report.len()
    );
    Ok(())
}
