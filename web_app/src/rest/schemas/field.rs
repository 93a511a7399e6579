use serde::{Deserialize, Deserializer};

/// A member of an update payload.
///
/// Distinguishes a key that was never sent from one sent as `null`, which a
/// plain `Option<T>` cannot. Must be declared with `#[serde(default)]` so that
/// absent keys become [`Field::Missing`].
#[derive(Debug, Clone, PartialEq)]
pub enum Field<T> {
    Missing,
    Null,
    Value(T),
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Missing
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Field::Value(value),
            None => Field::Null,
        })
    }
}

impl<T> Field<T> {
    /// Change for a `NOT NULL` column: an explicit `null` is rejected.
    pub fn required(self, name: &str) -> Result<Option<T>, String> {
        match self {
            Field::Missing => Ok(None),
            Field::Null => Err(format!("{name} may not be null")),
            Field::Value(value) => Ok(Some(value)),
        }
    }

    /// Change for a nullable column: `Some(None)` clears the stored value.
    pub fn nullable(self) -> Option<Option<T>> {
        match self {
            Field::Missing => None,
            Field::Null => Some(None),
            Field::Value(value) => Some(Some(value)),
        }
    }
}
