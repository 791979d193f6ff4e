//! Stateful emission of indented C# source text.
//!
//! This crate provides a small writer that tracks an indent level and
//! emits lines to a caller-supplied sink, with wrappers for the common
//! C# constructs generated code is made of.
//!
//! # Module Organization
//!
//! - [`CsWriter`] - the line-writing core and construct wrappers
//! - [`GeneratedWriter`] - writer preconfigured for generated files
//! - [`ClassModifier`] / [`PropertyModifier`] - combinable modifier sets
//! - [`Indent`] / [`Newline`] - whitespace and terminator configuration
//! - [`Error`] / [`Result`] - the library error surface

mod error;
mod generated;
mod indent;
mod modifier;
mod newline;
mod writer;

pub use error::{Error, Result};
pub use generated::{GeneratedWriter, GeneratorInfo, write_generated_header};
pub use sharpgen_core::Version;
pub use indent::Indent;
pub use modifier::{ClassModifier, PropertyModifier};
pub use newline::{Newline, Platform};
pub use writer::{CsWriter, WriterOptions};
