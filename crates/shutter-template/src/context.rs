/*
 * context.rs
 * Copyright (c) 2025 Shutter Gallery contributors
 */

//! Substitution context types.
//!
//! A [`Context`] holds the key-to-value bindings a handler registers before
//! rendering. Every key maps to exactly one tagged [`Value`]; registering the
//! same key twice (even under a different kind) replaces the earlier value,
//! so collisions between scalar, flag and block registrations resolve as
//! "last write wins".

use std::collections::{BTreeMap, HashMap};

/// A value bound to a context key.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A scalar replacement for `{NAME}` placeholders.
    Scalar(String),

    /// A flag controlling `<!-- IF NAME -->` conditionals.
    Flag(bool),

    /// Repetitions of a `<!-- BLOCK NAME -->` block, keyed by index.
    ///
    /// A `BTreeMap` keeps repetitions in ascending index order regardless of
    /// the order they were registered in; gaps in the index range simply
    /// don't render.
    Block(BTreeMap<usize, BlockEntry>),
}

impl Value {
    /// Check if this value is "truthy" for conditional evaluation.
    ///
    /// - A flag is its own boolean
    /// - Any non-empty string is truthy (even "false")
    /// - A block with at least one registered entry is truthy
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Flag(b) => *b,
            Value::Scalar(s) => !s.is_empty(),
            Value::Block(entries) => !entries.is_empty(),
        }
    }

    /// Render this value as a string for scalar output.
    ///
    /// - Scalar: returned as-is
    /// - Flag: "true" or "" (empty for false)
    /// - Block: "" (blocks have no scalar rendering)
    pub fn render(&self) -> String {
        match self {
            Value::Scalar(s) => s.clone(),
            Value::Flag(true) => "true".to_string(),
            Value::Flag(false) => String::new(),
            Value::Block(_) => String::new(),
        }
    }
}

/// Field values for one repetition of a repeatable block.
///
/// Entries carry only scalars and flags; blocks cannot be registered inside
/// a repetition, so nested block markers always resolve against the
/// top-level context.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockEntry {
    fields: HashMap<String, Value>,
}

impl BlockEntry {
    /// Create a new empty entry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a scalar field; last write wins.
    pub fn set_string(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.fields.insert(key.into(), Value::Scalar(value.into()));
        self
    }

    /// Record a flag field; last write wins.
    pub fn set_conditional(&mut self, key: impl Into<String>, value: bool) -> &mut Self {
        self.fields.insert(key.into(), Value::Flag(value));
        self
    }

    /// Get a field value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Build an entry from a JSON object, e.g. a database row.
    ///
    /// Strings and numbers become scalars, booleans become flags, everything
    /// else (null, arrays, nested objects) is skipped.
    pub fn from_json(row: &serde_json::Value) -> Self {
        Self {
            fields: json_fields(row).collect(),
        }
    }
}

/// Convert a JSON object's row-shaped fields into context values.
///
/// Strings and numbers become scalars, booleans become flags, everything
/// else (null, arrays, nested objects) is skipped.
fn json_fields(row: &serde_json::Value) -> impl Iterator<Item = (String, Value)> + '_ {
    let fields = match row {
        serde_json::Value::Object(fields) => Some(fields),
        _ => None,
    };
    fields
        .into_iter()
        .flatten()
        .filter_map(|(key, value)| match value {
            serde_json::Value::String(s) => Some((key.clone(), Value::Scalar(s.clone()))),
            serde_json::Value::Number(n) => Some((key.clone(), Value::Scalar(n.to_string()))),
            serde_json::Value::Bool(b) => Some((key.clone(), Value::Flag(*b))),
            _ => None,
        })
}

/// A substitution context: the bindings a handler supplies before rendering.
#[derive(Debug, Clone, Default)]
pub struct Context {
    values: HashMap<String, Value>,
}

impl Context {
    /// Create a new empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a scalar replacement; last write wins, including over an
    /// earlier flag or block registered under the same key.
    pub fn set_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), Value::Scalar(value.into()));
    }

    /// Record whether a named conditional block's body should be emitted.
    pub fn set_conditional(&mut self, key: impl Into<String>, value: bool) {
        self.values.insert(key.into(), Value::Flag(value));
    }

    /// Append or overwrite one repetition of a named repeatable block.
    ///
    /// Repetitions render in ascending index order regardless of the order
    /// this is called in. Registering an index twice replaces the earlier
    /// entry. If the key currently holds a scalar or flag, it is replaced by
    /// a fresh block holding only this entry.
    pub fn set_block_entry(&mut self, block: impl Into<String>, index: usize, entry: BlockEntry) {
        let value = self
            .values
            .entry(block.into())
            .or_insert_with(|| Value::Block(BTreeMap::new()));
        if !matches!(value, Value::Block(_)) {
            *value = Value::Block(BTreeMap::new());
        }
        if let Value::Block(entries) = value {
            entries.insert(index, entry);
        }
    }

    /// Merge a JSON object's fields into the context, e.g. a database row.
    ///
    /// Strings and numbers are registered as scalars, booleans as flags,
    /// everything else (null, arrays, nested objects) is skipped. Existing
    /// keys are overwritten, consistent with "last write wins".
    pub fn merge_json(&mut self, row: &serde_json::Value) {
        for (key, value) in json_fields(row) {
            self.values.insert(key, value);
        }
    }

    /// Get a bound value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_truthiness() {
        assert!(Value::Flag(true).is_truthy());
        assert!(!Value::Flag(false).is_truthy());

        assert!(Value::Scalar("hello".to_string()).is_truthy());
        assert!(Value::Scalar("false".to_string()).is_truthy()); // "false" string is truthy!
        assert!(!Value::Scalar(String::new()).is_truthy());

        let mut entries = BTreeMap::new();
        entries.insert(0, BlockEntry::new());
        assert!(Value::Block(entries).is_truthy());
        assert!(!Value::Block(BTreeMap::new()).is_truthy());
    }

    #[test]
    fn test_scalar_rendering() {
        assert_eq!(Value::Scalar("x".to_string()).render(), "x");
        assert_eq!(Value::Flag(true).render(), "true");
        assert_eq!(Value::Flag(false).render(), "");
        assert_eq!(Value::Block(BTreeMap::new()).render(), "");
    }

    #[test]
    fn test_last_write_wins_within_kind() {
        let mut ctx = Context::new();
        ctx.set_string("X", "first");
        ctx.set_string("X", "second");
        assert_eq!(ctx.get("X"), Some(&Value::Scalar("second".to_string())));
    }

    #[test]
    fn test_last_write_wins_across_kinds() {
        let mut ctx = Context::new();
        ctx.set_string("X", "text");
        ctx.set_conditional("X", true);
        assert_eq!(ctx.get("X"), Some(&Value::Flag(true)));

        ctx.set_string("X", "again");
        assert_eq!(ctx.get("X"), Some(&Value::Scalar("again".to_string())));
    }

    #[test]
    fn test_block_entry_replaces_scalar() {
        let mut ctx = Context::new();
        ctx.set_string("ROW", "not a block");

        let mut entry = BlockEntry::new();
        entry.set_string("X", "a");
        ctx.set_block_entry("ROW", 0, entry.clone());

        let mut expected = BTreeMap::new();
        expected.insert(0, entry);
        assert_eq!(ctx.get("ROW"), Some(&Value::Block(expected)));
    }

    #[test]
    fn test_block_entries_sorted_by_index() {
        let mut ctx = Context::new();
        let mut b = BlockEntry::new();
        b.set_string("X", "b");
        let mut a = BlockEntry::new();
        a.set_string("X", "a");

        ctx.set_block_entry("ROW", 2, b);
        ctx.set_block_entry("ROW", 0, a);

        let Some(Value::Block(entries)) = ctx.get("ROW") else {
            panic!("expected block value");
        };
        let indices: Vec<usize> = entries.keys().copied().collect();
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn test_block_entry_overwrite_same_index() {
        let mut ctx = Context::new();
        let mut first = BlockEntry::new();
        first.set_string("X", "first");
        let mut second = BlockEntry::new();
        second.set_string("X", "second");

        ctx.set_block_entry("ROW", 1, first);
        ctx.set_block_entry("ROW", 1, second);

        let Some(Value::Block(entries)) = ctx.get("ROW") else {
            panic!("expected block value");
        };
        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries[&1].get("X"),
            Some(&Value::Scalar("second".to_string()))
        );
    }

    #[test]
    fn test_block_entry_from_json() {
        let row = serde_json::json!({
            "CATEGORY_NAME": "Landscapes",
            "PHOTO_COUNT": 42,
            "IS_NEW": true,
            "IGNORED_LIST": [1, 2, 3],
            "IGNORED_NULL": null,
        });
        let entry = BlockEntry::from_json(&row);

        assert_eq!(
            entry.get("CATEGORY_NAME"),
            Some(&Value::Scalar("Landscapes".to_string()))
        );
        assert_eq!(
            entry.get("PHOTO_COUNT"),
            Some(&Value::Scalar("42".to_string()))
        );
        assert_eq!(entry.get("IS_NEW"), Some(&Value::Flag(true)));
        assert_eq!(entry.get("IGNORED_LIST"), None);
        assert_eq!(entry.get("IGNORED_NULL"), None);
    }

    #[test]
    fn test_context_merge_json() {
        let row = serde_json::json!({
            "USER_NAME": "ann",
            "USER_ID": 7,
            "IS_ADMIN": true,
            "IGNORED_OBJECT": { "nested": 1 },
        });

        let mut ctx = Context::new();
        ctx.merge_json(&row);

        assert_eq!(ctx.get("USER_NAME"), Some(&Value::Scalar("ann".to_string())));
        assert_eq!(ctx.get("USER_ID"), Some(&Value::Scalar("7".to_string())));
        assert_eq!(ctx.get("IS_ADMIN"), Some(&Value::Flag(true)));
        assert_eq!(ctx.get("IGNORED_OBJECT"), None);
    }

    #[test]
    fn test_merge_json_overwrites_existing_keys() {
        let mut ctx = Context::new();
        ctx.set_string("USER_NAME", "old");
        ctx.set_conditional("IS_ADMIN", true);

        ctx.merge_json(&serde_json::json!({
            "USER_NAME": "new",
            "IS_ADMIN": false,
        }));

        assert_eq!(ctx.get("USER_NAME"), Some(&Value::Scalar("new".to_string())));
        assert_eq!(ctx.get("IS_ADMIN"), Some(&Value::Flag(false)));
    }
}
