use super::blank_as_none;
use crate::models::Dog;
use serde::{Deserialize, Serialize};
use service_core::error::AppError;
use validator::Validate;

pub const CREATE_DOG_MESSAGE: &str = "You need a name, breed, and age";

#[derive(Debug, Deserialize, Validate)]
pub struct CreateDogRequest {
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(required(message = "You need a name, breed, and age"))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(required(message = "You need a name, breed, and age"))]
    pub breed: Option<String>,

    #[validate(
        required(message = "You need a name, breed, and age"),
        range(min = 0, message = "Age cannot be negative")
    )]
    pub age: Option<i64>,
}

impl CreateDogRequest {
    pub fn into_dog(self) -> Result<Dog, AppError> {
        match (self.name, self.breed, self.age) {
            (Some(name), Some(breed), Some(age)) => Ok(Dog::new(
                name.trim().to_string(),
                breed.trim().to_string(),
                age,
            )),
            _ => Err(AppError::bad_request(CREATE_DOG_MESSAGE)),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct DogResponse {
    pub name: String,
    pub breed: String,
    pub age: i64,
}

impl From<&Dog> for DogResponse {
    fn from(dog: &Dog) -> Self {
        Self {
            name: dog.name.clone(),
            breed: dog.breed.clone(),
            age: dog.age,
        }
    }
}
