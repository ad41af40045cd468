//! Resource records and their form payloads.
//!
//! A resource is a server-managed entity with a stable integer id. The id is
//! server-assigned: it is absent from form payloads and required for update
//! and delete operations. Wire field names follow what each backend actually
//! serves (the products backend speaks Spanish field names), while the Rust
//! side is named uniformly in English via serde renames.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Server-assigned resource identifier. Immutable after creation.
pub type ResourceId = i64;

/// A server-managed entity mirrored by the client.
///
/// Implementations tie together the record type, its editable form payload,
/// and the wire collection it lives under. The client and store layers are
/// generic over this trait.
pub trait Resource:
    Clone + std::fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// The editable field subset, without the id.
    type Form: Serialize + Clone + Send + Sync + 'static;

    /// Wire collection segment, also the plural noun for messages
    /// (e.g. `"productos"`).
    const COLLECTION: &'static str;

    /// Singular noun for messages (e.g. `"producto"`).
    const SINGULAR: &'static str;

    fn id(&self) -> ResourceId;
}

/// A product as served by the inventory backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ResourceId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio")]
    pub price: f64,
    #[serde(rename = "cantidad")]
    pub quantity: i64,
}

/// Editable product fields.
///
/// `price` and `quantity` are optional so that "missing" stays distinct from
/// `0`: a zero price or quantity is a valid value, an absent one is not.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductForm {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio")]
    pub price: Option<f64>,
    #[serde(rename = "cantidad")]
    pub quantity: Option<f64>,
}

impl From<&Product> for ProductForm {
    /// Pre-fill a form from an existing product for editing.
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: Some(product.price),
            quantity: Some(product.quantity as f64),
        }
    }
}

impl Resource for Product {
    type Form = ProductForm;

    const COLLECTION: &'static str = "productos";
    const SINGULAR: &'static str = "producto";

    fn id(&self) -> ResourceId {
        self.id
    }
}

/// A user as served by the accounts backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: ResourceId,
    pub name: String,
    pub email: String,
}

/// Editable user fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserForm {
    pub name: String,
    pub email: String,
}

impl From<&User> for UserForm {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

impl Resource for User {
    type Form = UserForm;

    const COLLECTION: &'static str = "usuarios";
    const SINGULAR: &'static str = "usuario";

    fn id(&self) -> ResourceId {
        self.id
    }
}
