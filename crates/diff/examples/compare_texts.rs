use line_diff::{LineComparison, PairReport};

fn main() -> anyhow::Result<()> {
    // Two sample texts to compare
    let text1 = "p cnf 3 2\n1 -2 0\n2 3 0\n";
    let text2 = "p cnf 3 2\n1 -2 0\n-2 3 0\n2 0\n";

    let comparison = LineComparison::new(text1, text2);

    // Print comparison statistics
    println!("Comparison statistics:");
    println!("  Old lines: {}", comparison.old_line_count);
    println!("  New lines: {}", comparison.new_line_count);
    println!("  Compared positions: {}", comparison.max_len());
    println!("  Different lines: {}", comparison.diff_count());

    // Mark each position
    for i in 0..comparison.max_len() {
        if comparison.differs_at(i) {
            println!("    Line {}: \x1b[31mDifferent\x1b[0m", i);
        } else {
            println!("    Line {}: \x1b[37mSame\x1b[0m", i);
        }
    }

    // Report over in-memory "files"
    let texts = [("a.cnf", text1), ("b.cnf", text2), ("c.cnf", text1)];
    let names: Vec<&str> = texts.iter().map(|(name, _)| *name).collect();
    let report = PairReport::build(&names, |first, second| {
        let lookup = |path: &std::path::Path| {
            texts
                .iter()
                .find(|(name, _)| path == std::path::Path::new(name))
                .map(|(_, text)| *text)
                .unwrap_or_default()
        };
        Ok(LineComparison::new(lookup(first), lookup(second)).diff_count())
    })?;

    println!("\nPairwise report:");
    print!("{}", report);

    Ok(())
}
