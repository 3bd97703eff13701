use std::path::PathBuf;

use clap::{Parser, Subcommand};
use workup::{AppError, AssignOptions};

#[derive(Parser)]
#[command(name = "workup")]
#[command(version)]
#[command(
    about = "Collect a project description and team roster, then request AI task assignments",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Collect project input and request a task assignment
    #[clap(visible_alias = "a")]
    Assign {
        /// Roster CSV with columns: Project Description, Name, Expertise.
        /// Replaces the manual prompts; the language selector is skipped.
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Also request a creative app-name suggestion
        #[arg(long)]
        suggest_name: bool,
        /// Print the constructed prompts without calling the endpoint
        #[arg(long)]
        dry_run: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Assign { file, suggest_name, dry_run } => {
            workup::assign(AssignOptions { file, suggest_name, dry_run })
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
