//! CLI Adapter.

mod init;
mod show;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "gebug")]
#[command(version)]
#[command(about = "Manage .gebug/ project build and run configuration", long_about = None)]
struct Cli {
    /// Project directory containing .gebug/ (defaults to current directory)
    #[arg(short, long, global = true, env = "GEBUG_WORKDIR")]
    workdir: Option<PathBuf>,
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create or update .gebug/config.yaml
    #[clap(visible_alias = "i")]
    Init(init::InitArgs),
    /// Print the effective configuration
    #[clap(visible_alias = "s")]
    Show {
        /// Output format
        #[arg(long, value_enum, default_value_t = show::ShowFormat::Yaml)]
        format: show::ShowFormat,
    },
    /// Print the configuration file path
    Path,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    crate::app::logging::init(cli.verbose);

    let result = resolve_work_dir(cli.workdir).and_then(|work_dir| match cli.command {
        Commands::Init(args) => init::run_init(&work_dir, &args),
        Commands::Show { format } => show::run_show(&work_dir, format),
        Commands::Path => show::run_path(&work_dir),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn resolve_work_dir(workdir: Option<PathBuf>) -> Result<PathBuf, AppError> {
    match workdir {
        Some(path) => Ok(path),
        None => Ok(std::env::current_dir()?),
    }
}
