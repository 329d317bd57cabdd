use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Server-assigned movie identifier.
///
/// The backend stores integer keys, but the identifier is opaque to the
/// client: it is only ever compared and rendered into `/movies/{id}` paths.
/// Both JSON integers and JSON strings are accepted on input. Numeric ids
/// serialize back as integers so request bodies match what the server sent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MovieId(String);

impl MovieId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The id as an integer key, when it is one.
    pub fn as_i64(&self) -> Option<i64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for MovieId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for MovieId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for MovieId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Serialize for MovieId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_i64() {
            Some(n) => serializer.serialize_i64(n),
            None => serializer.serialize_str(&self.0),
        }
    }
}

impl<'de> Deserialize<'de> for MovieId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Int(i64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Int(n) => Self::from(n),
            RawId::Text(s) => Self(s),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_integer_and_string_ids() {
        let from_int: MovieId = serde_json::from_str("42").unwrap();
        let from_text: MovieId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(from_int, from_text);
        assert_eq!(from_int.as_i64(), Some(42));
    }

    #[test]
    fn numeric_ids_serialize_as_integers() {
        assert_eq!(serde_json::to_string(&MovieId::from(7)).unwrap(), "7");
        assert_eq!(
            serde_json::to_string(&MovieId::new("tt0111161")).unwrap(),
            "\"tt0111161\""
        );
    }

    #[test]
    fn display_renders_raw_value() {
        assert_eq!(format!("/movies/{}", MovieId::from(3)), "/movies/3");
    }
}
