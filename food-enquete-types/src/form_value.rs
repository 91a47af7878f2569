/// A single value submitted for a form field.
///
/// HTTP forms deliver text. Callers that already hold typed input (JSON
/// bodies, tests) may submit integers directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
    /// Raw text as submitted.
    Text(String),

    /// An integer value.
    Int(i64),
}

impl FormValue {
    /// Try to get this value as a string reference.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Int(_) => None,
        }
    }

    /// Coerce this value to an integer.
    ///
    /// Text is trimmed and parsed. Empty or unparseable text yields `None`.
    pub fn to_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }

    /// Get the type name of this value for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "Text",
            Self::Int(_) => "Int",
        }
    }
}

impl From<String> for FormValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for FormValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<i64> for FormValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for FormValue {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<u32> for FormValue {
    fn from(i: u32) -> Self {
        Self::Int(i64::from(i))
    }
}
