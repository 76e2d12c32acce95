use std::collections::BTreeMap;

use super::value::Value;

/// Builder for nested documents from dot-separated paths.
///
/// `Document::new().set("peer.asn", 64512_i64)` produces
/// `{"peer": {"asn": 64512}}`.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Value,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            root: Value::Map(BTreeMap::new()),
        }
    }
}

impl Document {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value at a dot-separated path. Creates intermediate mappings as
    /// needed, replacing any non-mapping value in the way.
    #[must_use]
    pub fn set(mut self, path: &str, value: impl Into<Value>) -> Self {
        self.insert(path, value.into());
        self
    }

    /// Insert a value at a dot-separated path (mutable reference version).
    pub fn insert(&mut self, path: &str, value: Value) {
        let segments: Vec<&str> = path.split('.').collect();
        if let Value::Map(map) = &mut self.root {
            Self::insert_recursive(map, &segments, value);
        }
    }

    /// Look up a value by exact dot-separated path. Lists are not traversed.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Value> {
        path.split('.').try_fold(&self.root, |node, segment| match node {
            Value::Map(map) => map.get(segment),
            _ => None,
        })
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        self.root
    }

    fn insert_recursive(map: &mut BTreeMap<String, Value>, segments: &[&str], value: Value) {
        match segments {
            [] => {}
            [last] => {
                map.insert((*last).to_owned(), value);
            }
            [first, rest @ ..] => {
                let entry = map
                    .entry((*first).to_owned())
                    .or_insert_with(|| Value::Map(BTreeMap::new()));
                if !matches!(entry, Value::Map(_)) {
                    *entry = Value::Map(BTreeMap::new());
                }
                if let Value::Map(nested) = entry {
                    Self::insert_recursive(nested, rest, value);
                }
            }
        }
    }
}

impl AsRef<Value> for Document {
    fn as_ref(&self) -> &Value {
        &self.root
    }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Self {
        doc.root
    }
}
