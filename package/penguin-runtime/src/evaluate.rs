use std::collections::HashSet;
use log::error;
use tap::Pipe;
use penguin_ast::expression::Expression;
use crate::error::RuntimeError;
use crate::store::VariableStore;
use crate::value::Value;

/// Words beginners type meaning text. An undefined bare one is reported as
/// missing quotes rather than as a missing variable.
pub const TEXT_LIKE_WORDS: [&str; 19] = [
    "hello", "hi", "hey", "world", "goodbye", "bye", "yes", "no", "ok", "okay",
    "thanks", "please", "welcome", "python", "good", "morning", "night", "friend",
    "everyone",
];

/// Evaluation context for one run.
#[derive(Debug)]
pub struct Scope<'a> {
    store: &'a VariableStore,
    /// Every name the program assigns on any line.
    assigned_anywhere: &'a HashSet<String>,
}

impl<'a> Scope<'a> {
    #[must_use]
    pub const fn new(store: &'a VariableStore, assigned_anywhere: &'a HashSet<String>) -> Self {
        Self { store, assigned_anywhere }
    }

    fn lookup(&self, name: &str) -> EvaluateResult {
        match self.store.get(name) {
            Ok(Some(v)) => Ok(v.clone()),
            Ok(None) => Err(self.undefined(name)),
            Err(_) => {
                error!("variable store index is out of sync for {name}");
                Err(RuntimeError::Internal { context: "variable store index out of sync" })
            }
        }
    }

    fn undefined(&self, name: &str) -> RuntimeError {
        let text_like = TEXT_LIKE_WORDS.contains(&name.to_ascii_lowercase().as_str());
        if text_like && !self.assigned_anywhere.contains(name) {
            RuntimeError::UnquotedText { word: name.into() }
        } else {
            RuntimeError::UndefinedVariable { identifier: name.into() }
        }
    }
}

pub type EvaluateResult = Result<Value, RuntimeError>;

pub trait CanBeEvaluated {
    fn evaluate(&self, scope: &Scope) -> EvaluateResult;
}

impl CanBeEvaluated for Expression {
    fn evaluate(&self, scope: &Scope) -> EvaluateResult {
        match self {
            Self::StringLiteral(s) => Ok(s.clone().into()),
            Self::NumberLiteral(n) => Ok((*n).into()),
            Self::BooleanLiteral(b) => Ok((*b).into()),
            Self::Variable { ident } => scope.lookup(ident.as_name()),
            Self::Concatenation { segments } => {
                let mut ret = String::new();
                for segment in segments {
                    ret += &segment.evaluate(scope)?.to_string();
                }

                ret.pipe(Value::String).pipe(Ok)
            }
        }
    }
}

impl<E: CanBeEvaluated> CanBeEvaluated for [E] {
    /// Evaluates each item and joins the results with a single space, as
    /// `print` does with several arguments.
    fn evaluate(&self, scope: &Scope) -> EvaluateResult {
        let mut parts = Vec::with_capacity(self.len());
        for e in self {
            parts.push(e.evaluate(scope)?.to_string());
        }

        Ok(parts.join(" ").into())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use penguin_ast::expression::Expression;
    use penguin_ast::Identifier;
    use crate::error::RuntimeError;
    use crate::evaluate::{CanBeEvaluated, Scope};
    use crate::store::VariableStore;
    use crate::value::Value;

    fn var(name: &str) -> Expression {
        Expression::Variable { ident: Identifier::parse(name).unwrap() }
    }

    #[test]
    fn concatenation_stringifies() {
        let mut store = VariableStore::empty();
        store.set(Identifier::parse("age").unwrap(), Value::Number(16.0));
        let assigned = HashSet::new();
        let scope = Scope::new(&store, &assigned);

        let e = Expression::Concatenation {
            segments: vec![Expression::StringLiteral("Age: ".to_string()), var("age"), Expression::BooleanLiteral(true)],
        };
        assert_eq!(e.evaluate(&scope), Ok(Value::from("Age: 16True")));
    }

    #[test]
    fn arguments_join_with_space() {
        let store = VariableStore::empty();
        let assigned = HashSet::new();
        let scope = Scope::new(&store, &assigned);

        let args = [Expression::StringLiteral("a".to_string()), Expression::NumberLiteral(1.5)];
        assert_eq!(args[..].evaluate(&scope), Ok(Value::from("a 1.5")));
        let none: [Expression; 0] = [];
        assert_eq!(none[..].evaluate(&scope), Ok(Value::from("")));
    }

    #[test]
    fn undefined_text_like_word() {
        let store = VariableStore::empty();
        let mut assigned = HashSet::new();
        let scope = Scope::new(&store, &assigned);
        assert_eq!(var("hello").evaluate(&scope), Err(RuntimeError::UnquotedText { word: "hello".into() }));
        assert_eq!(var("Hello").evaluate(&scope), Err(RuntimeError::UnquotedText { word: "Hello".into() }));
        assert_eq!(var("score").evaluate(&scope), Err(RuntimeError::UndefinedVariable { identifier: "score".into() }));

        assigned.insert("hello".to_string());
        let scope = Scope::new(&store, &assigned);
        assert_eq!(var("hello").evaluate(&scope), Err(RuntimeError::UndefinedVariable { identifier: "hello".into() }));
    }
}
