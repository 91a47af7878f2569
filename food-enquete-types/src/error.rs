/// Error type for typed access to form data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// No value was submitted for the field.
    #[error("Missing value for field: {0}")]
    Missing(String),

    /// A value was submitted but does not have the requested type.
    #[error("Type mismatch at field '{field}': expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },
}

impl FormError {
    /// Check if the field was absent rather than malformed.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing(_))
    }
}
