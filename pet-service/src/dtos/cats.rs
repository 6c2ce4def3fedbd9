use super::blank_as_none;
use crate::models::Cat;
use serde::{Deserialize, Serialize};
use service_core::error::AppError;
use validator::Validate;

pub const CREATE_CAT_MESSAGE: &str = "You need a first name, last name, and bed count";

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCatRequest {
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(required(message = "You need a first name, last name, and bed count"))]
    pub firstname: Option<String>,

    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(required(message = "You need a first name, last name, and bed count"))]
    pub lastname: Option<String>,

    #[validate(
        required(message = "You need a first name, last name, and bed count"),
        range(min = 0, message = "Bed count cannot be negative")
    )]
    pub beds: Option<i64>,
}

impl CreateCatRequest {
    pub fn into_cat(self) -> Result<Cat, AppError> {
        match (self.firstname, self.lastname, self.beds) {
            (Some(first), Some(last), Some(beds)) => Ok(Cat::from_parts(&first, &last, beds)),
            _ => Err(AppError::bad_request(CREATE_CAT_MESSAGE)),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CatResponse {
    pub name: String,
    pub beds: i64,
}

impl From<&Cat> for CatResponse {
    fn from(cat: &Cat) -> Self {
        Self {
            name: cat.name.clone(),
            beds: cat.beds_owned,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> CreateCatRequest {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn complete_request_validates() {
        let req = parse(r#"{"firstname":"Anne","lastname":"Bonny","beds":3}"#);
        assert!(req.validate().is_ok());

        let cat = req.into_cat().unwrap();
        assert_eq!(cat.name, "Anne Bonny");
        assert_eq!(cat.beds_owned, 3);
    }

    #[test]
    fn zero_beds_is_present() {
        let req = parse(r#"{"firstname":"Anne","lastname":"Bonny","beds":0}"#);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn missing_or_blank_fields_fail() {
        for body in [
            r#"{"lastname":"Bonny","beds":3}"#,
            r#"{"firstname":"Anne","lastname":"","beds":3}"#,
            r#"{"firstname":"Anne","lastname":"Bonny","beds":null}"#,
        ] {
            let errors = parse(body).validate().unwrap_err();
            let message = errors
                .field_errors()
                .values()
                .flat_map(|errs| errs.iter())
                .find_map(|e| e.message.clone())
                .unwrap();
            assert_eq!(message, CREATE_CAT_MESSAGE, "body: {}", body);
        }
    }

    #[test]
    fn negative_beds_fail() {
        let req = parse(r#"{"firstname":"Anne","lastname":"Bonny","beds":-1}"#);
        assert!(req.validate().is_err());
    }
}
