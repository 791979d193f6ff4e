//! Writer preconfigured for machine-generated C# files.

use std::fmt::Write;

use sharpgen_core::Version;

use crate::{CsWriter, Result};

/// Identity embedded into generated-code attributes.
#[derive(Debug, Clone)]
pub struct GeneratorInfo {
    name: String,
    version: Version,
}

impl GeneratorInfo {
    pub fn new(name: impl Into<String>, version: Version) -> Self {
        Self {
            name: name.into(),
            version,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &Version {
        &self.version
    }
}

impl Default for GeneratorInfo {
    fn default() -> Self {
        Self {
            name: "GeneratedWriter".to_string(),
            version: env!("CARGO_PKG_VERSION").parse().unwrap_or_default(),
        }
    }
}

/// A [`CsWriter`] decorated for generated files.
///
/// Construction immediately writes the standard header (the
/// auto-generated marker comment, a warning-disable directive, and a
/// nullable-enable directive) and precomputes the attribute expressions
/// generated declarations conventionally carry. All further emission
/// goes through the exposed [`writer`](GeneratedWriter::writer) field.
///
/// # Example
///
/// ```
/// use sharpgen::{ClassModifier, GeneratedWriter};
///
/// let mut generated = GeneratedWriter::in_memory()?;
/// for attribute in generated.default_class_attributes.clone() {
///     generated.writer.write_attribute(&attribute)?;
/// }
/// generated.writer.write_class("Stub", ClassModifier::PUBLIC, None)?;
/// # Ok::<(), sharpgen::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct GeneratedWriter<W> {
    /// Underlying writer.
    pub writer: CsWriter<W>,
    /// Attribute expressions to attach to generated declarations, ready
    /// for [`CsWriter::write_attribute`].
    pub default_class_attributes: Vec<String>,
}

impl GeneratedWriter<String> {
    /// Create an in-memory generated-file writer with the default
    /// generator identity.
    pub fn in_memory() -> Result<Self> {
        Self::new(CsWriter::new(), GeneratorInfo::default())
    }
}

impl<W: Write> GeneratedWriter<W> {
    /// Wrap `writer`, writing the standard header immediately.
    pub fn new(mut writer: CsWriter<W>, generator: GeneratorInfo) -> Result<Self> {
        write_generated_header(&mut writer)?;

        let default_class_attributes = vec![
            format!(
                "global::System.CodeDom.Compiler.GeneratedCode(\"{}\", \"{}\")",
                generator.name(),
                generator.version()
            ),
            "global::System.Diagnostics.CodeAnalysis.ExcludeFromCodeCoverage".to_string(),
        ];

        Ok(Self {
            writer,
            default_class_attributes,
        })
    }
}

/// Write the three-line header marking a file as machine-generated.
pub fn write_generated_header<W: Write>(writer: &mut CsWriter<W>) -> Result<()> {
    writer.write_comment("<auto-generated/>")?;
    writer.write_directive("pragma warning disable")?;
    writer.write_directive("nullable enable")
}
