mod cli_bin;

use clap::Parser;
use cli_bin::args::{Cli, Commands};
use cli_bin::commands;
use jaxon::JaxonError;
use std::process;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Get(args) => commands::get_command(args),
        Commands::Items(args) => commands::items_command(args),
        Commands::Check(args) => commands::check_command(args),
    };

    if let Err(err) = result {
        eprintln!("error: {:#}", err);
        let code = err
            .downcast_ref::<JaxonError>()
            .map(JaxonError::exit_code)
            .unwrap_or(1);
        process::exit(code);
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
