//! Route table.
//!
//! The application knows three paths: `/` redirects to `/productos`,
//! `/productos` shows the products view and `/usuarios` the users view.
//! No guards, no nesting.

/// A top-level view of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Products,
    Users,
}

impl Route {
    /// Resolve a path to its route, following the root redirect.
    ///
    /// Returns `None` for unknown paths.
    pub fn parse(path: &str) -> Option<Self> {
        match path.trim().trim_end_matches('/') {
            // "/" trims to "", the root redirect
            "" => Some(Self::Products),
            "/productos" => Some(Self::Products),
            "/usuarios" => Some(Self::Users),
            _ => None,
        }
    }

    /// The canonical path of this route.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Products => "/productos",
            Self::Users => "/usuarios",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_redirects_to_products() {
        assert_eq!(Route::parse("/"), Some(Route::Products));
        assert_eq!(Route::parse("/").unwrap().path(), "/productos");
    }

    #[test]
    fn known_paths_resolve() {
        assert_eq!(Route::parse("/productos"), Some(Route::Products));
        assert_eq!(Route::parse("/usuarios"), Some(Route::Users));
        assert_eq!(Route::parse("/usuarios/"), Some(Route::Users));
    }

    #[test]
    fn unknown_paths_do_not_resolve() {
        assert_eq!(Route::parse("/clientes"), None);
        assert_eq!(Route::parse("productos"), None);
        assert_eq!(Route::parse("/productos/1"), None);
    }
}
