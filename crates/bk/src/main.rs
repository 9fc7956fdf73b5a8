//! `bk` -- launcher workflow backend.
//!
//! This is the entry point for the bundlekit workflow. It parses CLI
//! arguments with clap, resolves the runtime context, and dispatches to
//! command handlers. Stdout is reserved for launcher feedback; diagnostics go
//! to stderr.

mod cli;
mod commands;
mod context;
mod output;

use clap::Parser;

use cli::{Cli, Commands};
use context::RuntimeContext;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Set up logging based on verbosity
    if cli.global.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("bk=debug,bundlekit_icons=debug,bundlekit_utility=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    // Dispatch to command handler
    let result = match cli.command {
        // `version` must work even without resolvable workflow directories.
        Some(Commands::Version) => commands::version::run(),
        Some(command) => RuntimeContext::from_global_args(&cli.global).and_then(|ctx| {
            match command {
                Commands::Icons(args) => commands::icons::run(&ctx, &args),
                Commands::Notify(args) => commands::notify_cmd::run(&ctx, &args),
                Commands::Colour => commands::colour_cmd::run(&ctx),
                Commands::Times(args) => commands::times::run(&ctx, &args),
                Commands::Cache(args) => commands::cache_cmd::run(&ctx, &args),
                Commands::Version => unreachable!("handled above"),
            }
        }),
        None => {
            // No subcommand -- print help
            use clap::CommandFactory;
            Cli::command().print_help().ok();
            println!();
            Ok(())
        }
    };

    // Handle errors: print message and exit with code 1
    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
