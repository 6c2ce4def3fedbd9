pub mod validation;

pub use validation::{QueryParams, ValidatedJson};
