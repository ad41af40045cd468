//! # replica-http
//!
//! REST resource client for replica.
//!
//! This crate maps the five CRUD operations of a resource collection to
//! HTTP requests against a configured base URL. Construction is explicit:
//! a [`ClientConfig`] carries the base URL (read once from the environment,
//! with a hardcoded local fallback) and is injected into
//! [`ResourceClient::new`]. There is no process-wide client state.
//!
//! ```ignore
//! use replica_core::Product;
//! use replica_http::{ClientConfig, ResourceApi, ResourceClient};
//!
//! let config = ClientConfig::for_products()?;
//! let client: ResourceClient<Product> = ResourceClient::new(config)?;
//!
//! let products = client.list_all().await?;
//! ```
//!
//! Failures are not absorbed here: transport errors and non-2xx responses
//! propagate as [`Error`] to the caller. The client performs no retries and
//! no response-schema validation beyond JSON decoding into the record type.

pub mod client;
pub mod config;
pub mod error;

pub use client::{ResourceApi, ResourceClient};
pub use config::{ClientConfig, API_URL_VAR, DEFAULT_PRODUCTS_URL, DEFAULT_USERS_URL};
pub use error::Error;
