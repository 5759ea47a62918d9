mod cli;
mod eval;
mod lex;
mod prompt;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = cli::CLI::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level)
        .init();

    prompt::run(cli.quiet)
}
