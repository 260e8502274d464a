//! Lint for product flavors declared more than once.

use std::collections::HashSet;

use modgen_blueprint::Blueprint;

use super::{Diagnostic, Lint};

/// Errors on two flavors with the same name; Gradle rejects the script.
pub struct DuplicateFlavorLint;

impl Lint for DuplicateFlavorLint {
    fn name(&self) -> &'static str {
        "duplicate-flavor"
    }

    fn check(&self, blueprint: &Blueprint, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();

        for flavor in &blueprint.product_flavors {
            let name = flavor.name.as_str();
            if !seen.insert(name) && reported.insert(name) {
                diagnostics.push(
                    Diagnostic::error(
                        self.name(),
                        format!("flavor '{}' is declared more than once", name),
                    )
                    .at("flavors"),
                );
            }
        }
    }
}
