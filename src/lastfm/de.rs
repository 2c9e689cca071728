//! Lenient deserializers for Last.fm payload quirks.
//!
//! The API is loose with JSON types:
//! - counters arrive as numbers on some endpoints and strings on others
//! - a list with a single element is sometimes sent as a bare object
//! - an empty nested object is sometimes sent as `""`

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(u64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ObjectOrText<T> {
    Object(T),
    #[allow(dead_code)]
    Text(String),
}

/// Accept `123`, `"123"`, `null` or a missing field. Unparsable text is `None`.
pub fn lenient_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<NumberOrText>::deserialize(deserializer)? {
        Some(NumberOrText::Number(n)) => Some(n),
        Some(NumberOrText::Text(s)) => s.trim().parse().ok(),
        None => None,
    })
}

/// Accept an array, a single object, or `null`.
pub fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match Option::<OneOrMany<T>>::deserialize(deserializer)? {
        Some(OneOrMany::Many(items)) => items,
        Some(OneOrMany::One(item)) => vec![item],
        None => Vec::new(),
    })
}

/// Accept an object, or treat a string placeholder as absent.
pub fn object_or_empty<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match Option::<ObjectOrText<T>>::deserialize(deserializer)? {
        Some(ObjectOrText::Object(value)) => Some(value),
        Some(ObjectOrText::Text(_)) | None => None,
    })
}
