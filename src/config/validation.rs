//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate the bind address parses
//! - Reject empty or malformed content settings
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: ServerConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::ServerConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("listener.bind_address '{0}' is not a valid socket address")]
    BindAddress(String),

    #[error("content.{0} must not be empty")]
    EmptyField(&'static str),

    #[error("content.route_prefix '{0}' must be a single path segment")]
    PrefixNotSegment(String),
}

/// Check a parsed configuration for semantic problems.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    for (field, value) in [
        ("poc_dir", &config.content.poc_dir),
        ("dashboard_dir", &config.content.dashboard_dir),
        ("route_prefix", &config.content.route_prefix),
    ] {
        if value.is_empty() {
            errors.push(ValidationError::EmptyField(field));
        }
    }

    if config.content.route_prefix.contains('/') {
        errors.push(ValidationError::PrefixNotSegment(
            config.content.route_prefix.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&ServerConfig::default()).is_ok());
    }

    #[test]
    fn collects_every_error() {
        let mut config = ServerConfig::default();
        config.listener.bind_address = "not-an-address".into();
        config.content.poc_dir = "".into();
        config.content.route_prefix = "a/b".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
