//! Core value types for the sharpgen C# source writer.
//!
//! This crate provides the fundamental types shared by the sharpgen
//! emitters, kept free of any emission logic.

mod utils;
mod version;

// String utilities
pub use utils::dedent;
// Fundamental types
pub use version::Version;
