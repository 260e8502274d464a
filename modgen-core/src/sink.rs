use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// Destination for rendered scripts.
///
/// The generator calls [`Sink::write_to_file`] once per script and hands any
/// error back to its caller untouched.
pub trait Sink {
    /// Persist `text` under `path`.
    fn write_to_file(&mut self, text: &str, path: &Path) -> Result<()>;
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn write_to_file(&mut self, text: &str, path: &Path) -> Result<()> {
        (**self).write_to_file(text, path)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

/// Sink that writes scripts to disk.
///
/// Relative paths are resolved against the base directory. Existing files are
/// overwritten.
#[derive(Debug, Clone)]
pub struct FileSink {
    base: PathBuf,
}

impl FileSink {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Get the base directory
    pub fn base(&self) -> &Path {
        &self.base
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base.join(path)
        }
    }
}

impl Sink for FileSink {
    fn write_to_file(&mut self, text: &str, path: &Path) -> Result<()> {
        let target = self.resolve(path);
        write_file(&target, text)?;
        tracing::info!(path = %target.display(), bytes = text.len(), "wrote script");
        Ok(())
    }
}

/// A rendered file held in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Sink that collects scripts in memory, in write order.
#[derive(Debug, Default)]
pub struct MemorySink {
    files: Vec<File>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &[File] {
        &self.files
    }

    pub fn into_files(self) -> Vec<File> {
        self.files
    }
}

impl Sink for MemorySink {
    fn write_to_file(&mut self, text: &str, path: &Path) -> Result<()> {
        tracing::debug!(path = %path.display(), "captured script");
        self.files.push(File::new(path, text));
        Ok(())
    }
}
