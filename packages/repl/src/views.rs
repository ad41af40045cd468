//! Collection views.
//!
//! A view renders one store snapshot as a table, with the busy flag and the
//! error slot appended as status lines. Rendering is pure text-in/text-out
//! so the route tests can compare whole views.

use replica_core::{Product, User};
use replica_store::Snapshot;

use crate::format::{format_currency, format_number};
use crate::theme::Theme;

/// Render the products view.
pub fn render_products(snapshot: &Snapshot<Product>, theme: &Theme) -> String {
    let mut out = String::new();
    heading(&mut out, "Productos", snapshot.items.len(), theme);

    if !snapshot.items.is_empty() {
        let name_width = column_width("NOMBRE", snapshot.items.iter().map(|p| p.name.as_str()));

        out.push_str(&format!(
            "  {:>4}  {:<name_width$}  {:>12}  {:>8}\n",
            "ID", "NOMBRE", "PRECIO", "CANTIDAD"
        ));
        for product in &snapshot.items {
            out.push_str(&format!(
                "  {:>4}  {:<name_width$}  {:>12}  {:>8}\n",
                product.id,
                product.name,
                format_currency(product.price),
                format_number(product.quantity),
            ));
        }
    }

    status_lines(&mut out, snapshot.busy, snapshot.last_error.as_deref(), theme);
    out
}

/// Render the users view.
pub fn render_users(snapshot: &Snapshot<User>, theme: &Theme) -> String {
    let mut out = String::new();
    heading(&mut out, "Usuarios", snapshot.items.len(), theme);

    if !snapshot.items.is_empty() {
        let name_width = column_width("NAME", snapshot.items.iter().map(|u| u.name.as_str()));

        out.push_str(&format!("  {:>4}  {:<name_width$}  EMAIL\n", "ID", "NAME"));
        for user in &snapshot.items {
            out.push_str(&format!(
                "  {:>4}  {:<name_width$}  {}\n",
                user.id, user.name, user.email
            ));
        }
    }

    status_lines(&mut out, snapshot.busy, snapshot.last_error.as_deref(), theme);
    out
}

/// Render one product, for `show`.
pub fn render_product_detail(product: &Product) -> String {
    format!(
        "id:       {}\nnombre:   {}\nprecio:   {}\ncantidad: {}\n",
        product.id,
        product.name,
        format_currency(product.price),
        format_number(product.quantity),
    )
}

/// Render one user, for `show`.
pub fn render_user_detail(user: &User) -> String {
    format!("id:    {}\nname:  {}\nemail: {}\n", user.id, user.name, user.email)
}

fn heading(out: &mut String, title: &str, count: usize, theme: &Theme) {
    out.push_str(&format!(
        "{} {}\n",
        theme.primary.paint(title),
        theme.secondary_text.paint(format!("({count})"))
    ));
}

fn status_lines(out: &mut String, busy: bool, last_error: Option<&str>, theme: &Theme) {
    if busy {
        out.push_str(&format!("{}\n", theme.warning.paint("(cargando...)")));
    }
    if let Some(error) = last_error {
        out.push_str(&format!("{}\n", theme.error.paint(error)));
    }
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(str::len)
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(header.len())
}
