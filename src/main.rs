mod adapters;
mod cli;
mod config;
mod core;

use clap::Parser;

use cli::context::Verbosity;
use cli::{Cli, Commands};

fn main() {
    let args = Cli::parse();

    cli::context::init(
        args.config.as_deref(),
        Verbosity::from_flags(args.quiet, args.verbose),
    );

    let result = match &args.command {
        Commands::Init => cli::commands::init::execute(),
        Commands::List { json } => cli::commands::list::execute(*json),
        Commands::Show { alias, field } => cli::commands::show::execute(alias, *field),
        Commands::Check => cli::commands::check::execute(),
        Commands::Export { aliases, output } => {
            cli::commands::export::execute(aliases, output.as_deref())
        }
    };

    if let Err(e) = result {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
