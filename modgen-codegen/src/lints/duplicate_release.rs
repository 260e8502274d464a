//! Lint for a user build type that shadows the synthesized `release`.

use modgen_blueprint::Blueprint;

use super::{Diagnostic, Lint};
use crate::gradle::RELEASE_BUILD_TYPE;

/// Warns when a blueprint declares a build type named `release`.
///
/// The generator always emits its own `release` block first and does not
/// merge the two, so the script ends up with both.
pub struct DuplicateReleaseLint;

impl Lint for DuplicateReleaseLint {
    fn name(&self) -> &'static str {
        "duplicate-release"
    }

    fn check(&self, blueprint: &Blueprint, diagnostics: &mut Vec<Diagnostic>) {
        if blueprint
            .build_types
            .iter()
            .any(|build_type| build_type.name == RELEASE_BUILD_TYPE)
        {
            diagnostics.push(
                Diagnostic::warning(
                    self.name(),
                    "build type 'release' is emitted after the generated 'release' block",
                )
                .at(format!("build-types.{}", RELEASE_BUILD_TYPE)),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use modgen_blueprint::BuildType;

    use super::*;
    use crate::lints::Severity;

    #[test]
    fn test_declared_release() {
        let bp = Blueprint::new("com.example.app", "app", 28, 21, 28)
            .with_build_type(BuildType::new("release", "debuggable false"));

        let mut diagnostics = Vec::new();
        DuplicateReleaseLint.check(&bp, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Warning);
        assert_eq!(diagnostics[0].location.as_deref(), Some("build-types.release"));
    }

    #[test]
    fn test_other_build_types() {
        let bp = Blueprint::new("com.example.app", "app", 28, 21, 28)
            .with_build_type(BuildType::new("debug", ""))
            .with_build_type(BuildType::new("releaseStaging", ""));

        let mut diagnostics = Vec::new();
        DuplicateReleaseLint.check(&bp, &mut diagnostics);

        assert!(diagnostics.is_empty());
    }
}
