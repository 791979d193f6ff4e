//! Stateful line-by-line emission of C# source text.

use std::fmt::Write;

use sharpgen_core::dedent;

use crate::{ClassModifier, Error, Indent, Newline, PropertyModifier, Result};

/// Construction options for a [`CsWriter`].
///
/// The defaults are 4-space indentation and the host platform's line
/// terminator; callers that need deterministic cross-platform output
/// should set the terminator explicitly.
#[derive(Debug, Clone, Copy, Default)]
pub struct WriterOptions {
    pub indent: Indent,
    pub newline: Newline,
}

impl WriterOptions {
    /// Set the indentation width.
    pub fn indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// Set the line terminator.
    pub fn newline(mut self, newline: Newline) -> Self {
        self.newline = newline;
        self
    }
}

/// Writer emitting indented C# source text to a sink.
///
/// The writer tracks a single mutable indent level; block-structured
/// constructs take the block body as a closure so the closing text is
/// written and the indent level restored on every exit path, including
/// an error propagated out of the body.
///
/// # Example
///
/// ```
/// use sharpgen::{ClassModifier, CsWriter, PropertyModifier};
///
/// let mut writer = CsWriter::new();
/// writer.write_namespace("MyNamespace")?;
/// writer.write_empty_line()?;
/// writer.enter_class("MyClass", ClassModifier::PUBLIC | ClassModifier::PARTIAL, |w| {
///     w.write_auto_property("MyProperty", "int", PropertyModifier::PROTECTED)
/// })?;
///
/// assert!(writer.as_str().contains("public partial class MyClass"));
/// # Ok::<(), sharpgen::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct CsWriter<W> {
    sink: W,
    indent: Indent,
    newline: Newline,
    indent_level: usize,
}

impl CsWriter<String> {
    /// Create a writer emitting into an owned in-memory buffer.
    pub fn new() -> Self {
        Self::with_sink(String::new())
    }

    /// The text accumulated so far.
    pub fn as_str(&self) -> &str {
        &self.sink
    }

    /// Consume the writer and return the accumulated text.
    pub fn into_string(self) -> String {
        self.sink
    }
}

impl Default for CsWriter<String> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> CsWriter<W> {
    /// Create a writer emitting into `sink` with default options.
    pub fn with_sink(sink: W) -> Self {
        Self::with_options(sink, WriterOptions::default())
    }

    /// Create a writer emitting into `sink` with the given options.
    pub fn with_options(sink: W, options: WriterOptions) -> Self {
        Self {
            sink,
            indent: options.indent,
            newline: options.newline,
            indent_level: 0,
        }
    }

    /// The current indent level.
    pub fn indent_level(&self) -> usize {
        self.indent_level
    }

    /// The sink the writer emits into.
    pub fn sink(&self) -> &W {
        &self.sink
    }

    /// Consume the writer and return its sink.
    pub fn into_sink(self) -> W {
        self.sink
    }

    /// Append raw text with no indentation and no line terminator.
    ///
    /// Escape hatch for composing a line out of several pieces.
    pub fn write(&mut self, code: &str) -> Result<()> {
        self.sink.write_str(code)?;
        Ok(())
    }

    /// Write one line: indentation for the current level, `code`, then
    /// the line terminator.
    pub fn write_line(&mut self, code: &str) -> Result<()> {
        if self.indent_level > 0 {
            self.write_indent()?;
        }
        self.sink.write_str(code)?;
        self.sink.write_str(self.newline.as_str())?;
        Ok(())
    }

    /// Write an empty line.
    ///
    /// Indentation is still applied, so inside a block this produces a
    /// whitespace-only line rather than a truly blank one.
    pub fn write_empty_line(&mut self) -> Result<()> {
        self.write_line("")
    }

    /// Write each of `lines` through [`CsWriter::write_line`].
    pub fn write_lines<I>(&mut self, lines: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for line in lines {
            self.write_line(line.as_ref())?;
        }
        Ok(())
    }

    /// Write a multi-line block of text.
    ///
    /// The block is stripped of its common leading whitespace first, so
    /// indented raw-string literals emit at the writer's current level.
    pub fn write_block(&mut self, text: &str) -> Result<()> {
        let block = dedent(text);
        for line in block.lines() {
            self.write_line(line)?;
        }
        Ok(())
    }

    /// Write an attribute line, wrapping `attribute` in square brackets.
    ///
    /// Fails with [`Error::BracketedAttribute`] if the expression is
    /// already bracket-wrapped; double-wrapping is a caller bug worth
    /// surfacing immediately.
    pub fn write_attribute(&mut self, attribute: &str) -> Result<()> {
        if attribute.starts_with('[') && attribute.ends_with(']') {
            return Err(Error::bracketed_attribute(attribute));
        }
        self.write_line(&format!("[{attribute}]"))
    }

    /// Write a single-line comment (`// comment`).
    pub fn write_comment(&mut self, comment: &str) -> Result<()> {
        self.write_line(&format!("// {comment}"))
    }

    /// Write a preprocessor directive (`#nullable enable`).
    pub fn write_directive(&mut self, directive: &str) -> Result<()> {
        self.write_line(&format!("#{directive}"))
    }

    /// Write a `using` import line.
    pub fn write_using(&mut self, import_name: &str) -> Result<()> {
        self.write_line(&format!("using {import_name};"))
    }

    /// Write a file-scoped namespace declaration.
    pub fn write_namespace(&mut self, namespace: &str) -> Result<()> {
        self.write_line(&format!("namespace {namespace};"))
    }

    /// Write an auto-implemented property with `get`/`set` accessors.
    pub fn write_auto_property(
        &mut self,
        property_name: &str,
        type_name: &str,
        modifier: PropertyModifier,
    ) -> Result<()> {
        self.write_auto_property_with_accessors(property_name, type_name, modifier, "get", "set")
    }

    /// Write an auto-implemented property with custom accessor
    /// statements (e.g. `"get"` / `"private set"`).
    pub fn write_auto_property_with_accessors(
        &mut self,
        property_name: &str,
        type_name: &str,
        modifier: PropertyModifier,
        get_stmt: &str,
        set_stmt: &str,
    ) -> Result<()> {
        self.write_line(&format!(
            "{modifier} {type_name} {property_name} {{ {get_stmt}; {set_stmt}; }}"
        ))
    }

    /// Run `body` with the indent level raised by one.
    ///
    /// The level is restored on every exit path; decrements clamp at
    /// zero rather than underflowing.
    pub fn indented<F>(&mut self, body: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        self.indent_level += 1;
        let outcome = body(self);
        self.indent_level = self.indent_level.saturating_sub(1);
        outcome
    }

    /// Write a brace block: `{`, the indented body, `}`.
    ///
    /// The closing brace is written even when the body fails, in which
    /// case the body's error is the one returned.
    pub fn enter_brace<F>(&mut self, body: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        self.write_line("{")?;
        let outcome = self.indented(body);
        let closed = self.write_line("}");
        outcome.and(closed)
    }

    /// Write a class declaration header followed by a braced body.
    pub fn enter_class<F>(&mut self, class_name: &str, modifier: ClassModifier, body: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        self.write_line(&format!("{modifier} class {class_name}"))?;
        self.enter_brace(body)
    }

    /// Write a single-line, semicolon-terminated class declaration.
    pub fn write_class(
        &mut self,
        class_name: &str,
        modifier: ClassModifier,
        inherits: Option<&str>,
    ) -> Result<()> {
        let mut line = declaration_line("class", class_name, modifier, inherits);
        line.push(';');
        self.write_line(&line)
    }

    /// Write a record declaration header followed by a braced body,
    /// optionally with a base list.
    pub fn enter_record<F>(
        &mut self,
        record_name: &str,
        modifier: ClassModifier,
        inherits: Option<&str>,
        body: F,
    ) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        self.write_line(&declaration_line("record", record_name, modifier, inherits))?;
        self.enter_brace(body)
    }

    /// Write a single-line, semicolon-terminated record declaration.
    pub fn write_record(
        &mut self,
        record_name: &str,
        modifier: ClassModifier,
        inherits: Option<&str>,
    ) -> Result<()> {
        let mut line = declaration_line("record", record_name, modifier, inherits);
        line.push(';');
        self.write_line(&line)
    }

    fn write_indent(&mut self) -> Result<()> {
        for _ in 0..self.indent_level * self.indent.width() {
            self.sink.write_char(' ')?;
        }
        Ok(())
    }
}

fn declaration_line(
    keyword: &str,
    name: &str,
    modifier: ClassModifier,
    inherits: Option<&str>,
) -> String {
    let mut line = format!("{modifier} {keyword} {name}");
    if let Some(base) = inherits {
        line.push_str(" : ");
        line.push_str(base);
    }
    line
}
