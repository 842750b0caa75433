//! CLI Adapter.

mod init;
mod run;

use crate::domain::{APP_CONFIG_DIR, AppError};
use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "allcount")]
#[command(version)]
#[command(
    about = "Scaffold AllcountJS applications and run them locally",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize an application from a template
    Init {
        /// Application name (prompted for when omitted)
        name: Option<String>,
        /// Template to scaffold from
        #[arg(short, long, value_name = "template")]
        template: Option<String>,
        /// Scaffold into a non-empty directory without asking
        #[arg(short, long)]
        force: bool,
    },
    /// Run the application in the current directory
    Run {
        /// App config directory
        #[arg(short = 'c', long, value_name = "dir", default_value = APP_CONFIG_DIR)]
        app: String,
        /// Database connection URL [default: mongodb://localhost:27017/<project-name>]
        #[arg(short, long, value_name = "url")]
        db: Option<String>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<i32, AppError> = match cli.command {
        Some(Commands::Init { name, template, force }) => {
            init::run_init(name, template, force).map(|_| 0)
        }
        Some(Commands::Run { app, db }) => run::run_app(app, db),
        None => print_usage().map(|_| 0),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_usage() -> Result<(), AppError> {
    Cli::command().print_help()?;
    println!();
    Ok(())
}
