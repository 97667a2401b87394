mod app;
mod commands;
mod output;

use clap::Parser;

use crate::app::{Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Show sigbench info+ on stderr unless --json; --verbose enables debug; RUST_LOG overrides
    if !cli.global.json {
        let level = if cli.global.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        env_logger::Builder::new()
            .filter_module("sigbench", level)
            .parse_default_env()
            .target(env_logger::Target::Stderr)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false)
            .init();
    }

    match &cli.command {
        Command::Gen {
            output,
            start,
            end,
            seed,
        } => commands::gen::run(output, *start, *end, *seed, &cli.global),
        Command::Methods { path, signatures } => {
            commands::methods::run(path, *signatures, &cli.global)
        }
        Command::Show { path, method } => commands::show::run(path, method, &cli.global),
        Command::Verify { path } => commands::verify::run(path, &cli.global),
    }
}
