//! Lint for a target SDK above the compile SDK.

use modgen_blueprint::Blueprint;

use super::{Diagnostic, Lint};

/// Warns when `targetSdkVersion` exceeds `compileSdkVersion`.
pub struct SdkRangeLint;

impl Lint for SdkRangeLint {
    fn name(&self) -> &'static str {
        "sdk-range"
    }

    fn check(&self, blueprint: &Blueprint, diagnostics: &mut Vec<Diagnostic>) {
        if blueprint.target_sdk_version > blueprint.compile_sdk_version {
            diagnostics.push(
                Diagnostic::warning(
                    self.name(),
                    format!(
                        "target sdk {} is above compile sdk {}",
                        blueprint.target_sdk_version, blueprint.compile_sdk_version
                    ),
                )
                .at("sdk.target"),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_above_compile() {
        let bp = Blueprint::new("com.example.app", "app", 27, 21, 28);

        let mut diagnostics = Vec::new();
        SdkRangeLint.check(&bp, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "target sdk 28 is above compile sdk 27");
    }

    #[test]
    fn test_target_equal_to_compile() {
        let bp = Blueprint::new("com.example.app", "app", 28, 21, 28);

        let mut diagnostics = Vec::new();
        SdkRangeLint.check(&bp, &mut diagnostics);

        assert!(diagnostics.is_empty());
    }
}
