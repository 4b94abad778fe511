use std::collections::HashMap;
use log::trace;
use penguin_ast::Identifier;
use crate::value::{Value, ValueKind};

/// Name-to-value mapping for one run. Remembers first-assignment order
/// so memory boxes stay put when a variable is overwritten.
#[derive(Default, Debug, Clone)]
pub struct VariableStore {
    entries: Vec<(Identifier, Value)>,
    index: HashMap<String, usize>,
}

/// One memory box.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct VariableEntry {
    pub name: String,
    pub display: String,
    pub kind: ValueKind,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct StoreCorrupted;

impl VariableStore {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Inserts or overwrites. The value may change kind.
    pub fn set(&mut self, name: Identifier, value: Value) {
        if let Some(slot) = self.index.get(name.as_name()).and_then(|&i| self.entries.get_mut(i)) {
            trace!("overwrite {name}: {} -> {}", slot.1.display_literal(), value.display_literal());
            slot.1 = value;
            return
        }

        trace!("create {name}: {}", value.display_literal());
        self.index.insert(name.as_name().to_string(), self.entries.len());
        self.entries.push((name, value));
    }

    /// # Errors
    /// The index refers to an entry that does not exist.
    pub fn get(&self, name: &str) -> Result<Option<&Value>, StoreCorrupted> {
        self.index.get(name).map_or(Ok(None), |&i| {
            self.entries.get(i).map(|(_, v)| Some(v)).ok_or(StoreCorrupted)
        })
    }

    #[must_use]
    pub fn snapshot(&self) -> Vec<VariableEntry> {
        self.entries
            .iter()
            .map(|(name, value)| VariableEntry {
                name: name.to_string(),
                display: value.display_literal(),
                kind: value.kind(),
            })
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
