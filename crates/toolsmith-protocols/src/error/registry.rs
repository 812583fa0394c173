//! Registry errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Already registered: {0}")]
    AlreadyRegistered(String),

    #[error("Not registered: {0}")]
    NotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_registered_display() {
        let err = RegistryError::AlreadyRegistered("get_dad_joke".to_string());
        assert!(err.to_string().contains("Already registered"));
        assert!(err.to_string().contains("get_dad_joke"));
    }

    #[test]
    fn test_not_found_display() {
        let err = RegistryError::NotFound("missing".to_string());
        assert!(err.to_string().contains("missing"));
    }
}
