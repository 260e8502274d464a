//! Lint for flavors referring to a dimension that is not declared.

use modgen_blueprint::Blueprint;

use super::{Diagnostic, Lint};

/// Warns when a flavor's dimension is missing from `flavor-dimensions`.
pub struct UndeclaredDimensionLint;

impl Lint for UndeclaredDimensionLint {
    fn name(&self) -> &'static str {
        "undeclared-dimension"
    }

    fn check(&self, blueprint: &Blueprint, diagnostics: &mut Vec<Diagnostic>) {
        for flavor in &blueprint.product_flavors {
            let Some(dimension) = &flavor.dimension else {
                continue;
            };
            if !blueprint.flavor_dimensions.contains(dimension) {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!(
                            "flavor '{}' uses undeclared dimension '{}'",
                            flavor.name, dimension
                        ),
                    )
                    .at("flavor-dimensions"),
                );
            }
        }
    }
}
