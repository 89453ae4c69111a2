//! Host keyspace abstraction.
//!
//! The module touches the host key-value store through this narrow
//! interface only: key type query, head push, length, full range read.
//! [`MemoryKeyspace`] is a HashMap-backed implementation used by the test
//! suite and by embedders that have no real host.

use std::collections::HashMap;

/// The type of a host key as seen by this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// The key does not exist (or holds an empty value the host treats as
    /// absent).
    Missing,
    /// The key holds a list.
    List,
    /// The key holds some other host type (string, hash, ...).
    Other,
}

/// Narrow collaborator interface onto the host's key/value namespace.
///
/// List-populating handlers type-check via [`Keyspace::key_kind`] before any
/// write; `list_push_head` may therefore assume the key is a list or absent.
pub trait Keyspace {
    /// Returns the kind of `key`.
    fn key_kind(&self, key: &str) -> KeyKind;

    /// Pushes one element onto the head of the list at `key`, creating the
    /// list when the key is missing.
    fn list_push_head(&mut self, key: &str, element: String);

    /// Returns the length of the list at `key`, 0 when missing.
    fn list_len(&self, key: &str) -> usize;

    /// Returns the full list contents, head to tail, or `None` when the key
    /// is missing or not a list.
    fn list_range_all(&self, key: &str) -> Option<Vec<String>>;
}

/// In-memory keyspace for tests and host-less embedding.
#[derive(Debug, Default)]
pub struct MemoryKeyspace {
    entries: HashMap<String, Value>,
}

#[derive(Debug)]
enum Value {
    /// Head is index 0.
    List(Vec<String>),
    Str(String),
}

impl MemoryKeyspace {
    /// Creates an empty keyspace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a plain string at `key`, for exercising wrong-type paths.
    pub fn set_string(&mut self, key: &str, value: &str) {
        self.entries
            .insert(key.to_string(), Value::Str(value.to_string()));
    }

    /// Creates an empty list at `key`, as a host that keeps empty lists
    /// alive would report it. Exercises the histogram's empty-list path.
    pub fn create_empty_list(&mut self, key: &str) {
        self.entries.insert(key.to_string(), Value::List(Vec::new()));
    }

    /// Returns the string stored at `key`, if any.
    pub fn get_string(&self, key: &str) -> Option<&str> {
        match self.entries.get(key) {
            Some(Value::Str(s)) => Some(s),
            _ => None,
        }
    }
}

impl Keyspace for MemoryKeyspace {
    fn key_kind(&self, key: &str) -> KeyKind {
        match self.entries.get(key) {
            None => KeyKind::Missing,
            Some(Value::List(_)) => KeyKind::List,
            Some(Value::Str(_)) => KeyKind::Other,
        }
    }

    fn list_push_head(&mut self, key: &str, element: String) {
        let entry = self
            .entries
            .entry(key.to_string())
            .or_insert_with(|| Value::List(Vec::new()));
        match entry {
            Value::List(items) => items.insert(0, element),
            // Handlers type-check before writing; reaching here is a bug in
            // the caller, and mirroring host semantics we refuse silently.
            Value::Str(_) => {}
        }
    }

    fn list_len(&self, key: &str) -> usize {
        match self.entries.get(key) {
            Some(Value::List(items)) => items.len(),
            _ => 0,
        }
    }

    fn list_range_all(&self, key: &str) -> Option<Vec<String>> {
        match self.entries.get(key) {
            Some(Value::List(items)) => Some(items.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_kind() {
        let keyspace = MemoryKeyspace::new();
        assert_eq!(keyspace.key_kind("nope"), KeyKind::Missing);
        assert_eq!(keyspace.list_len("nope"), 0);
        assert!(keyspace.list_range_all("nope").is_none());
    }

    #[test]
    fn head_push_reverses_read_order() {
        let mut keyspace = MemoryKeyspace::new();
        keyspace.list_push_head("k", "first".into());
        keyspace.list_push_head("k", "second".into());
        assert_eq!(keyspace.key_kind("k"), KeyKind::List);
        assert_eq!(
            keyspace.list_range_all("k").unwrap(),
            vec!["second".to_string(), "first".to_string()]
        );
    }

    #[test]
    fn string_keys_are_other() {
        let mut keyspace = MemoryKeyspace::new();
        keyspace.set_string("s", "hello");
        assert_eq!(keyspace.key_kind("s"), KeyKind::Other);
        assert!(keyspace.list_range_all("s").is_none());
    }
}
