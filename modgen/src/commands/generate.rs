use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result, bail};
use modgen_blueprint::{BLUEPRINT_FILE_NAME, Blueprint};
use modgen_codegen::{Generator, Linter};
use modgen_core::{FileSink, MemorySink, Sink};

use super::{load_blueprints, print_diagnostics};

#[derive(Args)]
pub struct GenerateCommand {
    /// Blueprint files (defaults to ./module.toml)
    #[arg(default_value = BLUEPRINT_FILE_NAME)]
    pub blueprints: Vec<PathBuf>,

    /// Project root that module paths are resolved against
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated scripts without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let blueprints = load_blueprints(&self.blueprints);
        self.lint(&blueprints)?;

        let modules: Vec<Blueprint> = blueprints.into_iter().map(|(_, bp)| bp).collect();
        if self.dry_run {
            self.run_preview(&modules)
        } else {
            self.run_generation(&modules)
        }
    }

    fn lint(&self, blueprints: &[(PathBuf, Blueprint)]) -> Result<()> {
        let linter = Linter::new();
        let errors: usize = blueprints
            .iter()
            .map(|(path, bp)| print_diagnostics(path, &linter.run(bp)))
            .sum();

        if errors > 0 {
            bail!("lint failed with {} error(s)", errors);
        }
        Ok(())
    }

    fn run_generation(&self, modules: &[Blueprint]) -> Result<()> {
        let mut sink = FileSink::new(&self.output);
        generate_all(modules, &mut sink)?;

        println!("Generated {} build script(s):", modules.len());
        for bp in modules {
            println!("  + {}", sink.base().join(bp.script_path()).display());
        }
        Ok(())
    }

    fn run_preview(&self, modules: &[Blueprint]) -> Result<()> {
        let mut sink = MemorySink::new();
        generate_all(modules, &mut sink)?;

        for file in sink.files() {
            println!("── {} ──", file.path().display());
            println!("{}", file.content());
        }

        println!("── Summary ──");
        println!("{} files would be generated", sink.files().len());
        Ok(())
    }
}

/// Generate every module in order, stopping at the first sink failure.
fn generate_all(modules: &[Blueprint], sink: &mut dyn Sink) -> Result<()> {
    let generator = Generator::new();
    for bp in modules {
        generator
            .generate(bp, sink)
            .wrap_err_with(|| format!("failed to generate module '{}'", bp.package_name))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    const BLUEPRINT: &str = r#"
        plugins = ["com.android.library"]

        [module]
        package = "com.example.core"
        path = "core"

        [sdk]
        compile = 28
        min = 21
        target = 28
    "#;

    #[test]
    fn test_generate_writes_under_output() {
        let temp = TempDir::new().unwrap();
        let blueprint = temp.path().join("module.toml");
        fs::write(&blueprint, BLUEPRINT).unwrap();

        let cmd = GenerateCommand {
            blueprints: vec![blueprint],
            output: temp.path().to_path_buf(),
            dry_run: false,
        };
        cmd.run().unwrap();

        let script = fs::read_to_string(temp.path().join("core").join("build.gradle")).unwrap();
        assert!(script.starts_with("apply plugin: 'com.android.library'\nandroid {"));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let blueprint = temp.path().join("module.toml");
        fs::write(&blueprint, BLUEPRINT).unwrap();

        let cmd = GenerateCommand {
            blueprints: vec![blueprint],
            output: temp.path().to_path_buf(),
            dry_run: true,
        };
        cmd.run().unwrap();

        assert!(!temp.path().join("core").exists());
    }

    #[test]
    fn test_lint_errors_block_generation() {
        let temp = TempDir::new().unwrap();
        let blueprint = temp.path().join("module.toml");
        let content = format!("{BLUEPRINT}\n[[flavors]]\nname = \"free\"\n\n[[flavors]]\nname = \"free\"\n");
        fs::write(&blueprint, content).unwrap();

        let cmd = GenerateCommand {
            blueprints: vec![blueprint],
            output: temp.path().to_path_buf(),
            dry_run: false,
        };

        let err = cmd.run().unwrap_err();
        assert!(err.to_string().contains("1 error(s)"));
        assert!(!temp.path().join("core").exists());
    }

    #[test]
    fn test_generate_all_stops_on_sink_error() {
        struct Refuse(usize);

        impl Sink for Refuse {
            fn write_to_file(&mut self, _text: &str, _path: &std::path::Path) -> Result<()> {
                self.0 += 1;
                bail!("read-only")
            }
        }

        let modules = [
            Blueprint::new("a.b", "a", 28, 21, 28),
            Blueprint::new("c.d", "c", 28, 21, 28),
        ];
        let mut sink = Refuse(0);

        let err = generate_all(&modules, &mut sink).unwrap_err();
        assert_eq!(sink.0, 1);
        assert_eq!(err.root_cause().to_string(), "read-only");
    }
}
