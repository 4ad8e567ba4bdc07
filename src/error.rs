/// Error type for parsing, scanning and recomposing civil values.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Text does not match the canonical grammar of the target type.
    #[error("Invalid {kind} format: {input:?}")]
    Format { kind: &'static str, input: String },

    /// A scan adapter received a value kind it does not accept.
    #[error("unsupported scan type for {target}: {found}")]
    TypeMismatch {
        target: &'static str,
        found:  &'static str,
    },

    /// Recomposition fell outside the range supported by the time engine.
    #[error(transparent)]
    Range(#[from] jiff::Error),
}

impl Error {
    pub(crate) fn format(kind: &'static str, input: impl Into<String>) -> Self {
        Self::Format {
            kind,
            input: input.into(),
        }
    }

    pub(crate) const fn type_mismatch(target: &'static str, found: &'static str) -> Self {
        Self::TypeMismatch { target, found }
    }
}
