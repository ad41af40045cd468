//! User-facing message strings.
//!
//! Each store operation surfaces exactly one fixed message on failure; the
//! underlying error detail goes to the log only. The strings are part of the
//! observed UI contract and stay in Spanish.

use replica_core::Resource;

pub fn load_failed<R: Resource>() -> String {
    format!("Error al cargar {}", R::COLLECTION)
}

pub fn create_failed<R: Resource>() -> String {
    format!("Error al crear {}", R::SINGULAR)
}

pub fn update_failed<R: Resource>() -> String {
    format!("Error al actualizar {}", R::SINGULAR)
}

pub fn delete_failed<R: Resource>() -> String {
    format!("Error al eliminar {}", R::SINGULAR)
}

pub fn confirm_delete<R: Resource>() -> String {
    format!("¿Está seguro de eliminar este {}?", R::SINGULAR)
}
