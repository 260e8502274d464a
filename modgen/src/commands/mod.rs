mod check;
mod completions;
mod generate;
mod show;

use std::path::{Path, PathBuf};

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use modgen_blueprint::Blueprint;
use modgen_codegen::Diagnostic;
use show::ShowCommand;

/// Extension trait for exiting on blueprint errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for modgen_blueprint::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "modgen")]
#[command(version)]
#[command(about = "Generate Android build.gradle scripts from module blueprints")]
pub(crate) struct Cli {
    /// Log what is written (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Show(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate build.gradle for each blueprint
    Generate(GenerateCommand),

    /// Validate and lint blueprints without generating
    Check(CheckCommand),

    /// Print the build script for one blueprint
    Show(ShowCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Load every blueprint, exiting with a rendered diagnostic on the first failure.
fn load_blueprints(paths: &[PathBuf]) -> Vec<(PathBuf, Blueprint)> {
    paths
        .iter()
        .map(|path| {
            let blueprint = Blueprint::from_file(path).unwrap_or_exit();
            tracing::debug!(
                path = %path.display(),
                package = %blueprint.package_name,
                "loaded blueprint"
            );
            (path.clone(), blueprint)
        })
        .collect()
}

/// Print diagnostics for one blueprint file and return the number of errors.
fn print_diagnostics(file: &Path, diagnostics: &[Diagnostic]) -> usize {
    for diag in diagnostics {
        eprintln!("{diag}");
        eprintln!("  --> {}", file.display());
    }
    diagnostics
        .iter()
        .filter(|diag| diag.severity.is_error())
        .count()
}
