//! Configuration validation.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::schema::Config;

static ENV_VAR_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("env var name pattern is valid"));

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_logging(config, &mut result);
        Self::validate_models(config, &mut result);

        result
    }

    fn validate_logging(config: &Config, result: &mut ValidationResult) {
        if config.logging.level.trim().is_empty() {
            result.add_error(ValidationError::new(
                "logging.level",
                "Log level cannot be empty",
            ));
        }
    }

    fn validate_models(config: &Config, result: &mut ValidationResult) {
        for (agent, model) in &config.models {
            let path = format!("models.{}", agent);

            if model.model.trim().is_empty() {
                result.add_error(ValidationError::new(
                    format!("{}.model", path),
                    "Model name cannot be empty",
                ));
            }

            if let Some(var) = &model.api_key_env {
                if !ENV_VAR_NAME.is_match(var) {
                    result.add_error(ValidationError::new(
                        format!("{}.api_key_env", path),
                        format!("'{}' is not a valid environment variable name", var),
                    ));
                }
            }

            if let Some(url) = &model.base_url {
                if !url.starts_with("http://") && !url.starts_with("https://") {
                    result.add_warning(ValidationWarning::new(
                        format!("{}.base_url", path),
                        "base_url should start with http:// or https://",
                    ));
                }
                if model.api_key_env.is_none() {
                    result.add_warning(ValidationWarning::new(
                        format!("{}.api_key_env", path),
                        "Proxied model has no api_key_env; requests will be unauthenticated",
                    ));
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
