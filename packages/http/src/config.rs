//! Client configuration.
//!
//! The base URL is read once from the process environment at startup and
//! falls back to a hardcoded local default. The two backends historically
//! listen on different ports, so each resource type carries its own
//! fallback; both honor the same override variable.

use url::Url;

use crate::error::Error;

/// Environment variable consulted for the API base URL.
pub const API_URL_VAR: &str = "REPLICA_API_URL";

/// Fallback base URL for the products backend.
pub const DEFAULT_PRODUCTS_URL: &str = "http://localhost:5000/api";

/// Fallback base URL for the users backend.
pub const DEFAULT_USERS_URL: &str = "http://localhost:5295/api";

/// Base URL configuration for a [`ResourceClient`](crate::ResourceClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: Url,
}

impl ClientConfig {
    /// Parse a base URL.
    ///
    /// A missing trailing slash is added so that later joins append path
    /// segments instead of replacing the last one.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let base_url = if base_url.ends_with('/') {
            Url::parse(base_url)?
        } else {
            Url::parse(&format!("{base_url}/"))?
        };

        Ok(Self { base_url })
    }

    /// Read the base URL from `var`, falling back to `fallback` when the
    /// variable is unset or blank.
    pub fn from_env(var: &str, fallback: &str) -> Result<Self, Error> {
        match std::env::var(var) {
            Ok(value) if !value.trim().is_empty() => Self::new(&value),
            _ => Self::new(fallback),
        }
    }

    /// Configuration for the products backend.
    pub fn for_products() -> Result<Self, Error> {
        Self::from_env(API_URL_VAR, DEFAULT_PRODUCTS_URL)
    }

    /// Configuration for the users backend.
    pub fn for_users() -> Result<Self, Error> {
        Self::from_env(API_URL_VAR, DEFAULT_USERS_URL)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}
