//! JSON representation of 64-bit integers
//!
//! JavaScript clients lose precision above 2^53, so BIGINT columns go out as
//! decimal strings. On the way in both strings and plain numbers are accepted.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum BigIntRepr {
    Number(i64),
    Text(String),
}

impl BigIntRepr {
    fn into_i64(self) -> Result<i64, String> {
        match self {
            BigIntRepr::Number(n) => Ok(n),
            BigIntRepr::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| format!("'{}' is not a 64-bit integer", s)),
        }
    }
}

/// `#[serde(with = "bigint::string")]` for a single `i64`
pub mod string {
    use super::*;

    pub fn serialize<S>(value: &i64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        BigIntRepr::deserialize(deserializer)?
            .into_i64()
            .map_err(de::Error::custom)
    }
}

/// `#[serde(deserialize_with = "bigint::deserialize_list")]` for `Vec<i64>`
pub fn deserialize_list<'de, D>(deserializer: D) -> Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<BigIntRepr>::deserialize(deserializer)?
        .into_iter()
        .map(|repr| repr.into_i64().map_err(de::Error::custom))
        .collect()
}
