// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Blueprint model for a single Android module.
//!
//! A [`Blueprint`] is the immutable input of the generator. It can be built
//! in code through its `with_*` methods or loaded from a `module.toml` file.

mod blueprint;
mod error;
mod parse;

pub use blueprint::{
    Blueprint, BuildType, DEFAULT_METHOD, Flavor, LibraryDependency, ModuleDependency,
    SCRIPT_FILE_NAME,
};
pub use error::{Error, Result, SourceContext};
pub use parse::parse_blueprint;

/// Default blueprint file name.
pub const BLUEPRINT_FILE_NAME: &str = "module.toml";
