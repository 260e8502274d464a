//! Advisory checks over blueprints.
//!
//! Lints never change generated output; they only report diagnostics.

mod diagnostic;
mod duplicate_flavor;
mod duplicate_release;
mod sdk_range;
mod undeclared_dimension;

pub use diagnostic::{Diagnostic, Severity};
pub use duplicate_flavor::DuplicateFlavorLint;
pub use duplicate_release::DuplicateReleaseLint;
use modgen_blueprint::Blueprint;
pub use sdk_range::SdkRangeLint;
pub use undeclared_dimension::UndeclaredDimensionLint;

/// A lint that checks a blueprint for issues.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// Check the blueprint and add any diagnostics.
    fn check(&self, blueprint: &Blueprint, diagnostics: &mut Vec<Diagnostic>);
}

/// Runs a set of lints over blueprints.
pub struct Linter {
    lints: Vec<Box<dyn Lint>>,
}

impl Linter {
    /// Create a linter with the default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(DuplicateFlavorLint),
                Box::new(DuplicateReleaseLint),
                Box::new(SdkRangeLint),
                Box::new(UndeclaredDimensionLint),
            ],
        }
    }

    /// Get the names of all lints that will be run.
    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }

    /// Run every lint and collect the diagnostics in lint order.
    pub fn run(&self, blueprint: &Blueprint) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for lint in &self.lints {
            lint.check(blueprint, &mut diagnostics);
        }
        diagnostics
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new()
    }
}
