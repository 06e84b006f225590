use std::{
    collections::BTreeMap,
    ops::{Deref, DerefMut},
};

use serde::{Deserialize, Deserializer, Serialize};

/// Config entries keyed by the name of their enclosing toml table.
pub trait Named {
    fn name(&self) -> String;
    fn set_name(&mut self, name: String);
}

/// A toml table of named entries whose key is injected into each value on
/// deserialization. Backed by a BTreeMap so listings come out in a stable
/// order.
#[derive(Debug, Clone)]
pub struct NamedMap<T>(BTreeMap<String, T>);

impl<T> NamedMap<T> {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T> Default for NamedMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for NamedMap<T> {
    type Target = BTreeMap<String, T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for NamedMap<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> FromIterator<T> for NamedMap<T>
where
    T: Named,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self(iter.into_iter().map(|x| (x.name(), x)).collect())
    }
}

impl<T> Serialize for NamedMap<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for NamedMap<T>
where
    T: Deserialize<'de> + Named,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut map = BTreeMap::<String, T>::deserialize(deserializer)?;

        for (key, value) in map.iter_mut() {
            value.set_name(key.clone());
        }

        Ok(NamedMap(map))
    }
}
