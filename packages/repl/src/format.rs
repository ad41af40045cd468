//! Display formatting for the views.
//!
//! Mexican-Spanish conventions: `$` currency with two decimals, comma
//! thousands grouping, long-form dates ("6 de agosto de 2026").

use chrono::{Datelike, NaiveDate};

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Group an unsigned decimal string by thousands.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Format a price as MXN currency, e.g. `$1,234.50`.
pub fn format_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = group_thousands(&(cents / 100).to_string());
    format!("{sign}${whole}.{:02}", cents % 100)
}

/// Format an integer with thousands separators, e.g. `1,234,567`.
pub fn format_number(value: i64) -> String {
    let sign = if value < 0 { "-" } else { "" };
    format!("{sign}{}", group_thousands(&value.unsigned_abs().to_string()))
}

/// Format a date in Spanish long form, e.g. `6 de agosto de 2026`.
pub fn format_date(date: NaiveDate) -> String {
    let month = MONTHS[date.month0() as usize];
    format!("{} de {} de {}", date.day(), month, date.year())
}
