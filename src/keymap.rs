//! Insertion-ordered maps keyed by small integers.
//!
//! Season JSON keys blocks, books, and chapters by stringified integers.
//! Keys are decoded to `u32` immediately after parse and re-stringified only
//! at the JSON boundary, so the accessor layer never compares strings.
//! Entries keep document order; serde's `MapAccess` streams object entries
//! in input order, which is what makes the order survive a decode.
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// Ordered `u32 -> V` map with JSON-object serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedMap<V> {
    entries: Vec<(u32, V)>,
}

impl<V> Default for NumberedMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> NumberedMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a value by key. Linear scan; these maps hold a handful of
    /// blocks or chapters at most.
    pub fn get(&self, key: u32) -> Option<&V> {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == key)
            .map(|(_, value)| value)
    }

    /// Insert a value, replacing in place if the key already exists so the
    /// original position is kept.
    pub fn insert(&mut self, key: u32, value: V) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &V)> {
        self.entries.iter().map(|(key, value)| (*key, value))
    }

    pub fn keys(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }
}

impl<V> FromIterator<(u32, V)> for NumberedMap<V> {
    fn from_iter<I: IntoIterator<Item = (u32, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<V: Serialize> Serialize for NumberedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(&key.to_string(), value)?;
        }
        map.end()
    }
}

struct NumberedMapVisitor<V> {
    marker: PhantomData<V>,
}

impl<'de, V: Deserialize<'de>> Visitor<'de> for NumberedMapVisitor<V> {
    type Value = NumberedMap<V>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map with stringified integer keys")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, V>()? {
            let key: u32 = key
                .parse()
                .map_err(|_| de::Error::custom(format!("non-integer map key {key:?}")))?;
            entries.push((key, value));
        }
        Ok(NumberedMap { entries })
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for NumberedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(NumberedMapVisitor {
            marker: PhantomData,
        })
    }
}
