//! Core utilities and types for the modgen Gradle script generator.
//!
//! This crate provides the indentation unit shared by renderers and the
//! [`Sink`] abstraction through which rendered scripts are persisted.

mod indent;
mod sink;

pub use indent::Indent;
pub use sink::{File, FileSink, MemorySink, Sink};
