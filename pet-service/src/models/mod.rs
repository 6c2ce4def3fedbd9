pub mod cat;
pub mod dog;

pub use cat::Cat;
pub use dog::Dog;

use serde::{de::DeserializeOwned, Serialize};

/// A document stored in its own collection and addressable by `_id`.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + Unpin + 'static {
    /// Collection holding this record kind.
    const COLLECTION: &'static str;
    /// Label used in logs and metrics.
    const KIND: &'static str;

    fn id(&self) -> &str;
    fn name(&self) -> &str;
}

/// Name shown before any record of a kind has been created.
pub const PLACEHOLDER_NAME: &str = "Nobody yet";
