use miette::Diagnostic;
use thiserror::Error;

/// Result type for sharpgen operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("attribute '{attribute}' is already surrounded by square brackets")]
    #[diagnostic(
        code(sharpgen::bracketed_attribute),
        help("pass the bare expression, e.g. 'Serializable' instead of '[Serializable]'")
    )]
    BracketedAttribute { attribute: String },

    #[error("failed to write to the output sink")]
    #[diagnostic(code(sharpgen::sink))]
    Sink(#[from] std::fmt::Error),
}

impl Error {
    /// Create a bracketed-attribute error.
    pub fn bracketed_attribute(attribute: impl Into<String>) -> Self {
        Error::BracketedAttribute {
            attribute: attribute.into(),
        }
    }
}
