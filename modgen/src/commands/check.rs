use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use modgen_blueprint::BLUEPRINT_FILE_NAME;
use modgen_codegen::{Diagnostic, Linter};
use serde::Serialize;

use super::{load_blueprints, print_diagnostics};

#[derive(Args)]
pub struct CheckCommand {
    /// Blueprint files (defaults to ./module.toml)
    #[arg(default_value = BLUEPRINT_FILE_NAME)]
    pub blueprints: Vec<PathBuf>,

    /// Print diagnostics as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct FileReport<'a> {
    file: &'a PathBuf,
    diagnostics: &'a [Diagnostic],
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let blueprints = load_blueprints(&self.blueprints);
        let linter = Linter::new();
        tracing::debug!(lints = ?linter.lint_names(), "running lints");

        let results: Vec<(PathBuf, Vec<Diagnostic>)> = blueprints
            .into_iter()
            .map(|(path, bp)| {
                let diagnostics = linter.run(&bp);
                (path, diagnostics)
            })
            .collect();

        let has_errors = results
            .iter()
            .flat_map(|(_, diagnostics)| diagnostics)
            .any(|diag| diag.severity.is_error());

        if self.json {
            let reports: Vec<FileReport> = results
                .iter()
                .map(|(file, diagnostics)| FileReport { file, diagnostics })
                .collect();
            println!("{}", serde_json::to_string_pretty(&reports)?);
        } else {
            for (file, diagnostics) in &results {
                print_diagnostics(file, diagnostics);
            }
            if !has_errors {
                println!("✓ {} blueprint(s) valid", results.len());
            }
        }

        if has_errors {
            std::process::exit(1);
        }

        Ok(())
    }
}
