// Positional line diff library
// This crate counts differing lines between files and reports every pair of a file list

mod file_list;
mod line_comparison;
mod line_count;
mod pair_report;
mod pairs;

pub use file_list::FileList;
pub use line_comparison::LineComparison;
pub use line_count::{count_diff_lines, count_diff_lines_in_text, read_lines, trim_line};
pub use pair_report::{PairReport, PairResult};
pub use pairs::{pair_count, pairs};
