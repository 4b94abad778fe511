#![deny(clippy::all)]
#![warn(clippy::pedantic, clippy::nursery)]

use std::fmt::{Display, Formatter};
use derive_more::Display;
use penguin_source_span::LineNumber;

pub mod dialect;
pub mod expression;

/// Words Python reserves; none of them may be used as a variable name.
pub const RESERVED_WORDS: [&str; 35] = [
    "False", "None", "True", "and", "as", "assert", "async", "await", "break",
    "class", "continue", "def", "del", "elif", "else", "except", "finally", "for",
    "from", "global", "if", "import", "in", "is", "lambda", "nonlocal", "not", "or",
    "pass", "raise", "return", "try", "while", "with", "yield",
];

#[derive(Eq, PartialEq, Clone, Debug, Hash)]
pub struct Identifier(String);

impl Identifier {
    /// Checks `[a-zA-Z_][a-zA-Z0-9_]*` and rejects reserved words.
    ///
    /// # Errors
    /// Returns the first rule the text breaks.
    pub fn parse(text: &str) -> Result<Self, IdentifierRejection> {
        let mut chars = text.chars();
        let Some(first) = chars.next() else {
            return Err(IdentifierRejection::Empty)
        };

        if first.is_ascii_digit() {
            return Err(IdentifierRejection::StartsWithDigit)
        }

        if let Some(c) = text.chars().find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
            return Err(IdentifierRejection::IllegalCharacter(c))
        }

        if RESERVED_WORDS.contains(&text) {
            return Err(IdentifierRejection::ReservedWord)
        }

        Ok(Self(text.to_string()))
    }

    #[must_use]
    pub fn is_valid(text: &str) -> bool {
        Self::parse(text).is_ok()
    }

    #[must_use = "If you don't use it, it will drop entire String"]
    pub fn name(self) -> String {
        self.0
    }

    #[expect(clippy::must_use_candidate)]
    pub fn as_name(&self) -> &str {
        &self.0
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug, Display)]
pub enum IdentifierRejection {
    #[display(fmt = "name is empty")]
    Empty,
    #[display(fmt = "name starts with a digit")]
    StartsWithDigit,
    #[display(fmt = "name contains `{}`", _0)]
    IllegalCharacter(char),
    #[display(fmt = "name is a reserved word")]
    ReservedWord,
}

/// One comment-stripped, trimmed, non-empty source line.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct LogicalLine {
    pub line: LineNumber,
    pub text: String,
}

#[derive(Eq, PartialEq, Clone, Debug)]
pub enum Statement {
    /// `name = <rhs>`
    Assignment {
        name: Identifier,
        rhs: String,
    },
    /// `print(<args>)`
    PrintCall {
        args: String,
    },
    /// `name = input("<prompt>")`, prompt already unquoted
    InputAssignment {
        name: Identifier,
        prompt: String,
    },
    Unsupported {
        raw: String,
    },
}

impl Statement {
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Assignment { .. } => "assignment",
            Self::PrintCall { .. } => "print",
            Self::InputAssignment { .. } => "input",
            Self::Unsupported { .. } => "unsupported",
        }
    }
}
