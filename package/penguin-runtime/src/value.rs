use std::fmt::{Display, Formatter};
use derive_more::From;
use strum::{AsRefStr, Display as StrumDisplay};

/// Result of evaluating an expression.
#[derive(PartialEq, Clone, Debug, From)]
pub enum Value {
    String(String),
    Number(f64),
    Boolean(bool),
}

/// What `print` shows.
impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Number(n) => Display::fmt(n, f),
            Self::Boolean(true) => f.write_str("True"),
            Self::Boolean(false) => f.write_str("False"),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl Value {
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::String(_) => ValueKind::String,
            Self::Number(_) => ValueKind::Number,
            Self::Boolean(_) => ValueKind::Boolean,
        }
    }

    /// How the value reads inside a memory box: strings keep their quotes.
    #[must_use]
    pub fn display_literal(&self) -> String {
        match self {
            Self::String(s) => format!("\"{s}\""),
            other => other.to_string(),
        }
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash, StrumDisplay, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum ValueKind {
    String,
    Number,
    Boolean,
}
