//! The placeholder container: an ordered associative value collection with
//! output formatting.

use std::fmt;

use crate::capture::CaptureSession;
use crate::value::Value;

/// Key of a container entry: explicit name or implicit sequential index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Index(u64),
    Name(String),
}

impl From<u64> for Key {
    fn from(idx: u64) -> Self {
        Key::Index(idx)
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Name(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Name(name)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(idx) => write!(f, "{}", idx),
            Key::Name(name) => write!(f, "{}", name),
        }
    }
}

/// Indentation applied to rendered output: a column count or a literal
/// whitespace string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Indent {
    Spaces(usize),
    Literal(String),
}

impl Indent {
    fn into_string(self) -> String {
        match self {
            Indent::Spaces(n) => " ".repeat(n),
            Indent::Literal(s) => s,
        }
    }
}

impl From<usize> for Indent {
    fn from(n: usize) -> Self {
        Indent::Spaces(n)
    }
}

impl From<&str> for Indent {
    fn from(s: &str) -> Self {
        Indent::Literal(s.to_string())
    }
}

impl From<String> for Indent {
    fn from(s: String) -> Self {
        Indent::Literal(s)
    }
}

/// View of a container's contents: the sole value when exactly one entry is
/// present, otherwise the full ordered collection.
#[derive(Debug, PartialEq)]
pub enum ContainerValue<'a> {
    Single(&'a Value),
    All(&'a [(Key, Value)]),
}

/// An ordered, associative collection of content fragments with output
/// formatting (prefix, separator, postfix, indent) and capture support.
///
/// Entries keep insertion order. Implicit integer keys continue from the
/// current maximum integer key, so interleaving named and appended entries
/// never reuses an index.
#[derive(Debug, Default)]
pub struct PlaceholderContainer {
    entries: Vec<(Key, Value)>,
    prefix: String,
    postfix: String,
    separator: String,
    indent: String,
    pub(crate) capture: Option<CaptureSession>,
}

impl PlaceholderContainer {
    pub fn new() -> Self {
        Self::default()
    }

    // -- content ---------------------------------------------------------

    /// Overwrite the entire contents with a single implicit-keyed entry.
    pub fn set(&mut self, value: impl Into<Value>) {
        self.entries.clear();
        self.entries.push((Key::Index(0), value.into()));
    }

    /// Add a value at the end under the next available implicit index.
    pub fn append(&mut self, value: impl Into<Value>) {
        let key = Key::Index(self.next_index());
        self.entries.push((key, value.into()));
    }

    /// Add a value at the start under the next available implicit index.
    pub fn prepend(&mut self, value: impl Into<Value>) {
        let key = Key::Index(self.next_index());
        self.entries.insert(0, (key, value.into()));
    }

    /// Set a value under an explicit key. An existing entry keeps its
    /// position; a new key is appended.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: impl Into<Key>) -> Option<&Value> {
        let key = key.into();
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: impl Into<Key>) -> bool {
        self.get(key).is_some()
    }

    /// Remove an entry by key, returning its value if present.
    pub fn remove(&mut self, key: impl Into<Key>) -> Option<Value> {
        let key = key.into();
        let idx = self.entries.iter().position(|(k, _)| *k == key)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The sole value when the container holds exactly one entry, otherwise
    /// the full ordered collection.
    pub fn value(&self) -> ContainerValue<'_> {
        if self.entries.len() == 1 {
            ContainerValue::Single(&self.entries[0].1)
        } else {
            ContainerValue::All(&self.entries)
        }
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(Key, Value)> {
        self.entries.iter()
    }

    /// Next implicit index: one past the current maximum integer key.
    fn next_index(&self) -> u64 {
        self.entries
            .iter()
            .filter_map(|(k, _)| match k {
                Key::Index(idx) => Some(*idx),
                Key::Name(_) => None,
            })
            .max()
            .map_or(0, |max| max + 1)
    }

    // -- formatting ------------------------------------------------------

    pub fn set_prefix(&mut self, prefix: impl Into<String>) -> &mut Self {
        self.prefix = prefix.into();
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn set_postfix(&mut self, postfix: impl Into<String>) -> &mut Self {
        self.postfix = postfix.into();
        self
    }

    pub fn postfix(&self) -> &str {
        &self.postfix
    }

    pub fn set_separator(&mut self, separator: impl Into<String>) -> &mut Self {
        self.separator = separator.into();
        self
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn set_indent(&mut self, indent: impl Into<Indent>) -> &mut Self {
        self.indent = indent.into().into_string();
        self
    }

    pub fn indent(&self) -> &str {
        &self.indent
    }

    /// Render the container to a string.
    ///
    /// Values are joined with the separator and wrapped in prefix/postfix
    /// only when the container is non-empty. The indent is applied to the
    /// first line and re-applied after every line break, so lines introduced
    /// by the separator, prefix, or postfix are indented as well.
    pub fn render(&self) -> String {
        if self.entries.is_empty() {
            return String::new();
        }

        let joined = self
            .entries
            .iter()
            .map(|(_, v)| v.to_string())
            .collect::<Vec<_>>()
            .join(&self.separator);

        let mut out = String::with_capacity(
            self.indent.len() + self.prefix.len() + joined.len() + self.postfix.len(),
        );
        out.push_str(&self.prefix);
        out.push_str(&joined);
        out.push_str(&self.postfix);

        if self.indent.is_empty() {
            out
        } else {
            let mut indented = self.indent.clone();
            indented.push_str(&out.replace('\n', &format!("\n{}", self.indent)));
            indented
        }
    }
}

impl fmt::Display for PlaceholderContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
