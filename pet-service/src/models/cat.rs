use super::{Record, PLACEHOLDER_NAME};
use serde::{Deserialize, Serialize};
use service_core::error::AppError;
use uuid::Uuid;

pub const MAX_BEDS_MESSAGE: &str = "Bed count cannot go higher";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cat {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "bedsOwned")]
    pub beds_owned: i64,
}

impl Cat {
    pub fn new(name: String, beds_owned: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            beds_owned,
        }
    }

    /// Cat named from its first and last name parts.
    pub fn from_parts(firstname: &str, lastname: &str, beds_owned: i64) -> Self {
        Self::new(full_name(firstname, lastname), beds_owned)
    }

    pub fn placeholder() -> Self {
        Self::new(PLACEHOLDER_NAME.to_string(), 0)
    }

    pub fn add_bed(&mut self) -> Result<(), AppError> {
        self.beds_owned = self
            .beds_owned
            .checked_add(1)
            .ok_or_else(|| AppError::bad_request(MAX_BEDS_MESSAGE))?;
        Ok(())
    }
}

impl Record for Cat {
    const COLLECTION: &'static str = "cats";
    const KIND: &'static str = "cat";

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

fn full_name(firstname: &str, lastname: &str) -> String {
    format!("{} {}", firstname.trim(), lastname.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_parts_joins_trimmed_names() {
        let cat = Cat::from_parts(" Anne ", "Bonny", 3);
        assert_eq!(cat.name, "Anne Bonny");
        assert_eq!(cat.beds_owned, 3);
    }

    #[test]
    fn add_bed_increments_by_one() {
        let mut cat = Cat::new("Mary Read".to_string(), 1);
        cat.add_bed().unwrap();
        cat.add_bed().unwrap();
        assert_eq!(cat.beds_owned, 3);
    }

    #[test]
    fn add_bed_at_max_is_rejected_unchanged() {
        let mut cat = Cat::new("Mary Read".to_string(), i64::MAX);
        assert!(matches!(cat.add_bed(), Err(AppError::BadRequest(_))));
        assert_eq!(cat.beds_owned, i64::MAX);
    }

    #[test]
    fn serializes_with_store_field_names() {
        let cat = Cat::new("Anne Bonny".to_string(), 3);
        let value = serde_json::to_value(&cat).unwrap();
        assert_eq!(value["_id"], cat.id.as_str());
        assert_eq!(value["bedsOwned"], 3);
        assert!(value.get("beds_owned").is_none());
    }

    #[test]
    fn placeholders_get_distinct_ids() {
        assert_ne!(Cat::placeholder().id, Cat::placeholder().id);
    }
}
