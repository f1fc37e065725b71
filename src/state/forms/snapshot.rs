//! Immutable capture of the form at submit time

use serde::ser::{Serialize, SerializeMap, Serializer};

/// One captured input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotField {
    pub name: String,
    pub value: String,
    pub optional: bool,
}

/// Ordered name → value capture of every form input for one submit attempt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    fields: Vec<SnapshotField>,
}

impl FormSnapshot {
    pub fn new(fields: Vec<SnapshotField>) -> Self {
        Self { fields }
    }

    /// Build a snapshot from (name, value) pairs. Later duplicates are dropped.
    #[cfg(test)]
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut fields: Vec<SnapshotField> = Vec::new();
        for (name, value) in pairs {
            let name = name.into();
            if fields.iter().any(|f| f.name == name) {
                continue;
            }
            fields.push(SnapshotField {
                name,
                value: value.into(),
                optional: false,
            });
        }
        Self { fields }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    pub fn fields(&self) -> &[SnapshotField] {
        &self.fields
    }
}

impl Serialize for FormSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for field in self.fields() {
            map.serialize_entry(&field.name, &field.value)?;
        }
        map.end()
    }
}
