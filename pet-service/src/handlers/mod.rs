pub mod cats;
pub mod dogs;
pub mod health;
pub mod pages;

pub use cats::{create_cat, get_last_cat_name, increment_last_cat_beds, list_cats, search_cat};
pub use dogs::{create_dog, get_last_dog_name, increment_dog_age, list_dogs};
pub use health::{health_check, metrics_endpoint, readiness_check};
pub use pages::{about, contact, index, not_found};

use crate::services::metrics::record_store_error;
use service_core::error::AppError;

/// Log and count a failed store call before it becomes the response.
pub(crate) fn store_failure(operation: &'static str, err: AppError) -> AppError {
    tracing::error!(operation, error = %err, "Store operation failed");
    record_store_error(operation);
    err
}

/// Required `?name=` parameter, or a 400 with `message`.
pub(crate) fn require_name(name: Option<String>, message: &str) -> Result<String, AppError> {
    name.ok_or_else(|| AppError::bad_request(message))
}
