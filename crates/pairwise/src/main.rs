use anyhow::Result;
use clap::Parser;
use pairwise::Cli;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    pairwise::run(&cli, &mut stdout.lock())
}
