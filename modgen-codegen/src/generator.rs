use eyre::Result;
use modgen_blueprint::Blueprint;
use modgen_core::{File, Indent, Sink};

use crate::{Script, gradle::build_script};

/// Renders blueprints to Gradle build scripts and hands them to a [`Sink`].
///
/// A generator holds no per-module state; one instance can serve any number
/// of blueprints.
#[derive(Debug, Clone, Copy, Default)]
pub struct Generator {
    indent: Indent,
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// Build the statement tree without rendering it.
    pub fn build(&self, blueprint: &Blueprint) -> Script {
        build_script(blueprint)
    }

    /// Render the build script text for `blueprint`.
    pub fn render(&self, blueprint: &Blueprint) -> String {
        self.build(blueprint).render(self.indent)
    }

    /// Render the script and write it to `<module path>/build.gradle`.
    ///
    /// Sink errors are returned as-is.
    pub fn generate(&self, blueprint: &Blueprint, sink: &mut dyn Sink) -> Result<()> {
        let path = blueprint.script_path();
        let text = self.render(blueprint);
        tracing::debug!(
            package = %blueprint.package_name,
            path = %path.display(),
            "rendered build script"
        );
        sink.write_to_file(&text, &path)
    }

    /// Render the script as an in-memory file without writing anything.
    pub fn preview(&self, blueprint: &Blueprint) -> File {
        File::new(blueprint.script_path(), self.render(blueprint))
    }
}
