use serde::Deserialize;

pub use models::ad::{Model as Ad, NewAd};

/// Message returned when a create request lacks one of its required fields.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Title, description, and owner are required fields.";

/// Body of `POST /ads`.
///
/// Every field is optional at the schema level so a missing field becomes a
/// validation error instead of a deserialization failure. Unknown fields,
/// including a client-supplied `created_at`, are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateAdInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
}

/// A create request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidAd {
    pub title: String,
    pub description: String,
    pub owner: String,
}

impl CreateAdInput {
    pub fn new(title: &str, description: &str, owner: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            description: Some(description.to_string()),
            owner: Some(owner.to_string()),
        }
    }

    /// Presence check only: each field must be present and non-empty.
    pub fn validate(self) -> Result<ValidAd, crate::errors::ServiceError> {
        fn present(v: Option<String>) -> Option<String> {
            v.filter(|s| !s.is_empty())
        }
        match (present(self.title), present(self.description), present(self.owner)) {
            (Some(title), Some(description), Some(owner)) => Ok(ValidAd { title, description, owner }),
            _ => Err(crate::errors::ServiceError::Validation(REQUIRED_FIELDS_MESSAGE.into())),
        }
    }
}

impl ValidAd {
    pub fn stamped(self, created_at: String) -> NewAd {
        NewAd { title: self.title, description: self.description, owner: self.owner, created_at }
    }
}
