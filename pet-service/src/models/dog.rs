use super::{Record, PLACEHOLDER_NAME};
use serde::{Deserialize, Serialize};
use service_core::error::AppError;
use uuid::Uuid;

pub const MAX_AGE_MESSAGE: &str = "Age cannot go higher";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dog {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub breed: String,
    pub age: i64,
}

impl Dog {
    pub fn new(name: String, breed: String, age: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            breed,
            age,
        }
    }

    pub fn placeholder() -> Self {
        Self::new(PLACEHOLDER_NAME.to_string(), "Unknown".to_string(), 0)
    }

    pub fn have_birthday(&mut self) -> Result<(), AppError> {
        self.age = self
            .age
            .checked_add(1)
            .ok_or_else(|| AppError::bad_request(MAX_AGE_MESSAGE))?;
        Ok(())
    }
}

impl Record for Dog {
    const COLLECTION: &'static str = "dogs";
    const KIND: &'static str = "dog";

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
