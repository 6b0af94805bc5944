use thiserror::Error;

use models::errors::ModelError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn storage(e: impl std::fmt::Display) -> Self { Self::Storage(e.to_string()) }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => ServiceError::Validation(msg),
            ModelError::Db(msg) => ServiceError::Storage(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_errors_map_to_service_kinds() {
        let v: ServiceError = ModelError::Validation("title required".into()).into();
        assert!(matches!(v, ServiceError::Validation(m) if m == "title required"));

        let d: ServiceError = ModelError::Db("disk I/O error".into()).into();
        assert!(matches!(d, ServiceError::Storage(m) if m == "disk I/O error"));
    }

    #[test]
    fn not_found_message() {
        assert_eq!(ServiceError::not_found("Ad").to_string(), "not found: Ad not found");
    }
}
