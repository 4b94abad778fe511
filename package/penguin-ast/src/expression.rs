use crate::Identifier;

/// Right-hand side of an assignment or one argument of `print`.
///
/// The grammar is flat: the only operator is `+`, and it always means
/// string concatenation.
#[derive(PartialEq, Clone, Debug)]
pub enum Expression {
    StringLiteral(String),
    NumberLiteral(f64),
    BooleanLiteral(bool),
    Variable {
        ident: Identifier,
    },
    /// Two or more segments, each stringified and joined.
    Concatenation {
        segments: Vec<Self>,
    },
}
