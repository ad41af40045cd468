//! # replica-core
//!
//! Core types for replica: the resources managed through the REST backend
//! and the pure form validation that runs before a payload is submitted.
//!
//! Two resource types exist, `Product` and `User`. Both implement the
//! [`Resource`] trait, which is the seam the client and store layers are
//! generic over. Each resource has a companion form payload (the editable
//! field subset, without the server-assigned id) implementing [`Validate`].

pub mod resource;
pub mod validate;

pub use resource::{Product, ProductForm, Resource, ResourceId, User, UserForm};
pub use validate::{Validate, ValidationError};
