mod adapters;
mod cli;
mod config;
mod core;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::context::Context;
use cli::{Cli, Commands};

fn main() {
    let args = Cli::parse();

    init_tracing(args.verbose);
    cli::context::init(args.quiet);

    let result = Context::resolve(&args).and_then(|ctx| match &args.command {
        Commands::Generate { id, repository_url } => {
            cli::commands::generate::execute(&ctx, id, repository_url)
        }
        Commands::Get { id, field } => {
            cli::commands::get::execute(&ctx, id.as_deref(), field.as_deref())
        }
        Commands::Clone {
            id,
            destination,
            keep_key,
        } => cli::commands::clone::execute(&ctx, id, destination.as_deref(), *keep_key),
    });

    if let Err(e) = result {
        cli::output::error(&format!("Error: {} failed: {e}", args.command.name()));
        std::process::exit(e.exit_code());
    }
}

/// Send diagnostics to stderr. `GDKM_LOG` overrides the level implied by `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "gdkm=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("GDKM_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
