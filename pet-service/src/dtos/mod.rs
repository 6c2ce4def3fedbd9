pub mod cats;
pub mod dogs;

pub use cats::{CatResponse, CreateCatRequest, CREATE_CAT_MESSAGE};
pub use dogs::{CreateDogRequest, DogResponse, CREATE_DOG_MESSAGE};

use serde::{Deserialize, Deserializer, Serialize};

/// `?name=` query shared by the lookup endpoints.
#[derive(Debug, Deserialize)]
pub struct NameQuery {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct NameResponse {
    pub name: String,
}

/// Result of a lookup by name. A miss is reported in the body, not as a
/// 404.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Lookup<T> {
    Found(T),
    Missing { error: String },
}

impl<T> Lookup<T> {
    pub fn missing(message: &str) -> Self {
        Lookup::Missing {
            error: message.to_string(),
        }
    }
}

/// Treat absent, `null`, and whitespace-only text the same way. Non-blank
/// text is kept as sent.
pub fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
