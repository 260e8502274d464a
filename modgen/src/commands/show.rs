use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use modgen_blueprint::{BLUEPRINT_FILE_NAME, Blueprint};
use modgen_codegen::Generator;
use modgen_core::File;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct ShowCommand {
    /// Path to the blueprint (defaults to ./module.toml)
    #[arg(default_value = BLUEPRINT_FILE_NAME)]
    pub blueprint: PathBuf,
}

impl ShowCommand {
    pub fn run(&self) -> Result<()> {
        let script = self.script().unwrap_or_exit();
        tracing::debug!(path = %script.path().display(), "previewing build script");
        println!("{}", script.content());
        Ok(())
    }

    fn script(&self) -> modgen_blueprint::Result<File> {
        let blueprint = Blueprint::from_file(&self.blueprint)?;
        Ok(Generator::new().preview(&blueprint))
    }
}
