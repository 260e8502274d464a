//! Gradle build script generation.
//!
//! # Module Organization
//!
//! - [`ast`] - Statement grammar (`Line`, `KeyValue`, `Block`) and its renderer
//! - [`gradle`] - Translation rules from a [`Blueprint`] to a [`Script`]
//! - [`lints`] - Advisory checks over blueprints
//!
//! [`Generator`] ties them together and hands the rendered text to a
//! [`Sink`](modgen_core::Sink).

pub mod ast;
pub mod gradle;
pub mod lints;

mod generator;

pub use ast::{Script, Statement};
pub use generator::Generator;
pub use gradle::build_script;
pub use lints::{Diagnostic, Lint, Linter, Severity};
pub use modgen_blueprint::Blueprint;
