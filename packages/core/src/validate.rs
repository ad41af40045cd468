//! Form validation.
//!
//! Validation is pure and synchronous: a form payload maps to the full set
//! of field-level violations, with no short-circuiting across fields. An
//! empty violation set means the payload is valid. Validation never runs on
//! the store path: submitting an invalid payload still issues the request
//! and lets the server reject it.

use lazy_static::lazy_static;
use regex::Regex;

use crate::resource::{ProductForm, UserForm};

lazy_static! {
    // No whitespace or '@' in local/domain parts, at least one '.' in the domain.
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// A single field-level violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: &'static str,
}

impl ValidationError {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Pure validation over a form payload.
pub trait Validate {
    /// Evaluate every applicable rule and return the full violation set.
    fn validate(&self) -> Vec<ValidationError>;

    /// A payload is valid when the violation set is empty.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

impl Validate for ProductForm {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(ValidationError::new("nombre", "El nombre es requerido"));
        } else if self.name.len() < 2 {
            errors.push(ValidationError::new(
                "nombre",
                "El nombre debe tener al menos 2 caracteres",
            ));
        }

        match self.price {
            None => errors.push(ValidationError::new("precio", "El precio es requerido")),
            Some(price) if price < 0.0 => {
                errors.push(ValidationError::new(
                    "precio",
                    "El precio no puede ser negativo",
                ));
            }
            Some(_) => {}
        }

        match self.quantity {
            None => errors.push(ValidationError::new("cantidad", "La cantidad es requerida")),
            Some(quantity) if quantity < 0.0 => {
                errors.push(ValidationError::new(
                    "cantidad",
                    "La cantidad no puede ser negativa",
                ));
            }
            Some(quantity) if quantity.fract() != 0.0 => {
                errors.push(ValidationError::new(
                    "cantidad",
                    "La cantidad debe ser un número entero",
                ));
            }
            Some(_) => {}
        }

        errors
    }
}

impl Validate for UserForm {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(ValidationError::new("name", "El nombre es requerido"));
        } else if self.name.len() < 2 {
            errors.push(ValidationError::new(
                "name",
                "El nombre debe tener al menos 2 caracteres",
            ));
        }

        if self.email.trim().is_empty() {
            errors.push(ValidationError::new("email", "El email es requerido"));
        } else if !EMAIL_RE.is_match(&self.email) {
            errors.push(ValidationError::new("email", "El email no es válido"));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, price: Option<f64>, quantity: Option<f64>) -> ProductForm {
        ProductForm {
            name: name.to_string(),
            price,
            quantity,
        }
    }

    fn user(name: &str, email: &str) -> UserForm {
        UserForm {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn valid_product_has_no_violations() {
        let form = product("Mesa", Some(100.0), Some(2.0));
        assert!(form.is_valid());
        assert!(form.validate().is_empty());
    }

    #[test]
    fn zero_price_and_quantity_are_valid() {
        assert!(product("Mesa", Some(0.0), Some(0.0)).is_valid());
    }

    #[test]
    fn missing_is_distinct_from_zero() {
        let form = product("Mesa", None, None);
        let errors = form.validate();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .any(|e| e.field == "precio" && e.message == "El precio es requerido"));
        assert!(errors
            .iter()
            .any(|e| e.field == "cantidad" && e.message == "La cantidad es requerida"));
    }

    #[test]
    fn negative_price_is_rejected() {
        let errors = product("Mesa", Some(-1.0), Some(2.0)).validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "precio");
        assert_eq!(errors[0].message, "El precio no puede ser negativo");
    }

    #[test]
    fn negative_and_fractional_quantity_are_rejected() {
        let errors = product("Mesa", Some(1.0), Some(-3.0)).validate();
        assert_eq!(errors[0].message, "La cantidad no puede ser negativa");

        let errors = product("Mesa", Some(1.0), Some(2.5)).validate();
        assert_eq!(errors[0].message, "La cantidad debe ser un número entero");
    }

    #[test]
    fn name_rules_run_alongside_other_fields() {
        // All applicable rules run; violations accumulate across fields.
        let errors = product("", Some(-1.0), Some(2.5)).validate();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0].message, "El nombre es requerido");

        let errors = product("M", Some(1.0), Some(1.0)).validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].message,
            "El nombre debe tener al menos 2 caracteres"
        );

        // Whitespace-only counts as empty.
        let errors = product("   ", Some(1.0), Some(1.0)).validate();
        assert_eq!(errors[0].message, "El nombre es requerido");
    }

    #[test]
    fn email_shape_check() {
        assert!(user("Alice", "a@b.co").is_valid());

        for bad in ["a@b", "a b@c.com", "a@b c.com", "a@@b.co"] {
            let errors = user("Alice", bad).validate();
            assert_eq!(errors.len(), 1, "expected one violation for {bad:?}");
            assert_eq!(errors[0].field, "email");
            assert_eq!(errors[0].message, "El email no es válido");
        }

        let errors = user("Alice", "").validate();
        assert_eq!(errors[0].message, "El email es requerido");
    }

    #[test]
    fn user_name_rules_match_product_name_rules() {
        let errors = user("", "a@b.co").validate();
        assert_eq!(errors[0].message, "El nombre es requerido");

        let errors = user("A", "a@b.co").validate();
        assert_eq!(
            errors[0].message,
            "El nombre debe tener al menos 2 caracteres"
        );
    }
}
