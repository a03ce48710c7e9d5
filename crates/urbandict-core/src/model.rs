use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit `null` the same as an absent field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One dictionary entry as returned by the service
///
/// Numeric fields are passed through unvalidated; absent or `null` fields
/// decode to their zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Definition {
    #[serde(deserialize_with = "null_as_default")]
    pub word: String,
    #[serde(deserialize_with = "null_as_default")]
    pub definition: String,
    #[serde(deserialize_with = "null_as_default")]
    pub example: String,
    #[serde(deserialize_with = "null_as_default")]
    pub permalink: String,
    #[serde(deserialize_with = "null_as_default")]
    pub author: String,
    /// Timestamp text in whatever format the service uses
    #[serde(deserialize_with = "null_as_default")]
    pub written_on: String,
    #[serde(deserialize_with = "null_as_default")]
    pub thumbs_up: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub thumbs_down: i64,
    #[serde(rename = "defid", deserialize_with = "null_as_default")]
    pub definition_id: i64,
    /// Opaque, kept verbatim
    #[serde(deserialize_with = "null_as_default")]
    pub current_vote: String,
}

/// Ordered definitions from a single lookup
///
/// A `null` list decodes as empty. A whole-body `null` is handled by the
/// fetcher, which also yields an empty response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    #[serde(default, deserialize_with = "null_as_default")]
    pub(crate) list: Vec<Definition>,
}

impl Response {
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn definitions(&self) -> &[Definition] {
        &self.list
    }

    pub fn first(&self) -> Option<&Definition> {
        self.list.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Definition> {
        self.list.iter()
    }

    pub fn into_definitions(self) -> Vec<Definition> {
        self.list
    }
}

impl<'a> IntoIterator for &'a Response {
    type Item = &'a Definition;
    type IntoIter = std::slice::Iter<'a, Definition>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.iter()
    }
}
