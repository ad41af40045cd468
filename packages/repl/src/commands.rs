//! Command parsing and execution.
//!
//! Commands:
//! - `open <path>` - Navigate to `/`, `/productos` or `/usuarios`
//! - `list` - Render the active collection
//! - `show <id>` - Fetch and render one resource
//! - `add campo=valor ...` - Validate a new payload and create it
//! - `edit <id> campo=valor ...` - Pre-fill from the listed resource, validate, update
//! - `rm <id>` - Delete after confirmation
//! - `reload` - Re-fetch the active collection
//! - `help` / `exit`
//!
//! `add` and `edit` run the form validator first and print the violation
//! set instead of submitting when it is non-empty. The stores themselves
//! never validate.

use std::sync::atomic::{AtomicBool, Ordering};

use replica_core::{ProductForm, UserForm, Validate, ValidationError};
use replica_http::ResourceApi;
use replica_store::ConfirmAction;

use crate::app::AppContext;
use crate::router::Route;
use crate::views;

/// Result of executing a command.
pub enum CommandResult {
    /// Command succeeded, optionally with output to display.
    Ok { display: Option<String> },
    /// Command failed with an error message.
    Error(String),
    /// User requested to exit.
    Exit,
    /// Show help.
    Help,
}

impl CommandResult {
    fn ok_display(display: impl Into<String>) -> Self {
        CommandResult::Ok {
            display: Some(display.into()),
        }
    }

    fn ok_none() -> Self {
        CommandResult::Ok { display: None }
    }
}

/// Parse and execute a command.
pub fn execute(input: &str, ctx: &mut AppContext, confirm: &dyn ConfirmAction) -> CommandResult {
    let input = input.trim();
    if input.is_empty() {
        return CommandResult::ok_none();
    }

    let mut parts = input.split_whitespace();
    let command = parts.next().unwrap_or_default();
    let args: Vec<&str> = parts.collect();

    match command {
        "open" => cmd_open(&args, ctx),
        "list" | "ls" => CommandResult::ok_display(ctx.render_current()),
        "show" => cmd_show(&args, ctx),
        "add" => cmd_add(&args, ctx),
        "edit" => cmd_edit(&args, ctx),
        "rm" => cmd_rm(&args, ctx, confirm),
        "reload" => cmd_reload(ctx),
        "help" => CommandResult::Help,
        "exit" | "quit" => CommandResult::Exit,
        other => CommandResult::Error(format!(
            "Comando desconocido: '{other}'. Escriba 'help' para ver los comandos."
        )),
    }
}

pub fn format_help() -> String {
    "Comandos:\n\
     \x20 open <ruta>             navegar (/, /productos, /usuarios)\n\
     \x20 list                    mostrar la colección activa\n\
     \x20 show <id>               mostrar un registro\n\
     \x20 add campo=valor ...     crear un registro\n\
     \x20 edit <id> campo=valor   actualizar un registro\n\
     \x20 rm <id>                 eliminar un registro\n\
     \x20 reload                  recargar la colección\n\
     \x20 exit                    salir"
        .to_string()
}

fn cmd_open(args: &[&str], ctx: &mut AppContext) -> CommandResult {
    let Some(path) = args.first() else {
        return CommandResult::Error("Uso: open <ruta>".to_string());
    };

    match Route::parse(path) {
        Some(route) => {
            ctx.set_route(route);
            CommandResult::ok_display(ctx.render_current())
        }
        None => CommandResult::Error(format!("Ruta desconocida: '{path}'")),
    }
}

fn cmd_show(args: &[&str], ctx: &mut AppContext) -> CommandResult {
    let id = match parse_id(args.first()) {
        Ok(id) => id,
        Err(message) => return CommandResult::Error(message),
    };

    match ctx.route() {
        Route::Products => match ctx.runtime.block_on(ctx.products_api.get_by_id(id)) {
            Ok(product) => CommandResult::ok_display(views::render_product_detail(&product)),
            Err(error) => {
                tracing::debug!(%error, "show failed");
                CommandResult::Error(format!("No se pudo obtener el producto {id}"))
            }
        },
        Route::Users => match ctx.runtime.block_on(ctx.users_api.get_by_id(id)) {
            Ok(user) => CommandResult::ok_display(views::render_user_detail(&user)),
            Err(error) => {
                tracing::debug!(%error, "show failed");
                CommandResult::Error(format!("No se pudo obtener el usuario {id}"))
            }
        },
    }
}

fn cmd_add(args: &[&str], ctx: &mut AppContext) -> CommandResult {
    match ctx.route() {
        Route::Products => {
            let mut form = ProductForm::default();
            if let Err(message) = apply_fields(&mut form, args, apply_product_field) {
                return CommandResult::Error(message);
            }
            submit_create_product(ctx, form)
        }
        Route::Users => {
            let mut form = UserForm::default();
            if let Err(message) = apply_fields(&mut form, args, apply_user_field) {
                return CommandResult::Error(message);
            }
            submit_create_user(ctx, form)
        }
    }
}

fn cmd_edit(args: &[&str], ctx: &mut AppContext) -> CommandResult {
    let id = match parse_id(args.first()) {
        Ok(id) => id,
        Err(message) => return CommandResult::Error(message),
    };
    let fields = &args[1..];

    match ctx.route() {
        Route::Products => {
            let Some(product) = ctx.find_product(id) else {
                return CommandResult::Error(format!("No hay producto con id {id}"));
            };
            let mut form = ProductForm::from(&product);
            if let Err(message) = apply_fields(&mut form, fields, apply_product_field) {
                return CommandResult::Error(message);
            }
            if let Some(violations) = violations(&form) {
                return CommandResult::Error(violations);
            }
            if ctx.runtime.block_on(ctx.products.update(id, form)) {
                CommandResult::ok_display(ctx.render_current())
            } else {
                CommandResult::Error(ctx.last_error_message())
            }
        }
        Route::Users => {
            let Some(user) = ctx.find_user(id) else {
                return CommandResult::Error(format!("No hay usuario con id {id}"));
            };
            let mut form = UserForm::from(&user);
            if let Err(message) = apply_fields(&mut form, fields, apply_user_field) {
                return CommandResult::Error(message);
            }
            if let Some(violations) = violations(&form) {
                return CommandResult::Error(violations);
            }
            if ctx.runtime.block_on(ctx.users.update(id, form)) {
                CommandResult::ok_display(ctx.render_current())
            } else {
                CommandResult::Error(ctx.last_error_message())
            }
        }
    }
}

fn cmd_rm(args: &[&str], ctx: &mut AppContext, confirm: &dyn ConfirmAction) -> CommandResult {
    let id = match parse_id(args.first()) {
        Ok(id) => id,
        Err(message) => return CommandResult::Error(message),
    };

    let recording = RecordingConfirm::new(confirm);
    let ok = match ctx.route() {
        Route::Products => ctx.runtime.block_on(ctx.products.delete(id, &recording)),
        Route::Users => ctx.runtime.block_on(ctx.users.delete(id, &recording)),
    };

    if ok {
        CommandResult::ok_display(ctx.render_current())
    } else if recording.declined() {
        CommandResult::ok_display("Eliminación cancelada.")
    } else {
        CommandResult::Error(ctx.last_error_message())
    }
}

fn cmd_reload(ctx: &mut AppContext) -> CommandResult {
    let ok = match ctx.route() {
        Route::Products => ctx.runtime.block_on(ctx.products.load()),
        Route::Users => ctx.runtime.block_on(ctx.users.load()),
    };

    if ok {
        CommandResult::ok_display(ctx.render_current())
    } else {
        CommandResult::Error(ctx.last_error_message())
    }
}

fn parse_id(arg: Option<&&str>) -> Result<i64, String> {
    let Some(arg) = arg else {
        return Err("Falta el id".to_string());
    };
    arg.parse().map_err(|_| format!("Id inválido: '{arg}'"))
}

/// Parse `campo=valor` arguments into a form via the field setter.
fn apply_fields<F>(
    form: &mut F,
    args: &[&str],
    apply: fn(&mut F, &str, &str) -> Result<(), String>,
) -> Result<(), String> {
    for arg in args {
        let Some((key, value)) = arg.split_once('=') else {
            return Err(format!("Se esperaba campo=valor, se recibió '{arg}'"));
        };
        apply(form, key, value)?;
    }
    Ok(())
}

fn apply_product_field(form: &mut ProductForm, key: &str, value: &str) -> Result<(), String> {
    match key {
        "nombre" => form.name = value.to_string(),
        "precio" => {
            form.price = Some(
                value
                    .parse()
                    .map_err(|_| format!("Valor inválido para precio: '{value}'"))?,
            );
        }
        "cantidad" => {
            form.quantity = Some(
                value
                    .parse()
                    .map_err(|_| format!("Valor inválido para cantidad: '{value}'"))?,
            );
        }
        _ => return Err(format!("Campo desconocido: '{key}'")),
    }
    Ok(())
}

fn apply_user_field(form: &mut UserForm, key: &str, value: &str) -> Result<(), String> {
    match key {
        "name" => form.name = value.to_string(),
        "email" => form.email = value.to_string(),
        _ => return Err(format!("Campo desconocido: '{key}'")),
    }
    Ok(())
}

/// Render a non-empty violation set, or `None` when the form is valid.
fn violations(form: &impl Validate) -> Option<String> {
    let errors = form.validate();
    if errors.is_empty() {
        return None;
    }
    Some(violations_display(&errors))
}

fn violations_display(errors: &[ValidationError]) -> String {
    let mut out = String::from("Datos inválidos:");
    for error in errors {
        out.push_str(&format!("\n  - {}: {}", error.field, error.message));
    }
    out
}

fn submit_create_product(ctx: &mut AppContext, form: ProductForm) -> CommandResult {
    if let Some(violations) = violations(&form) {
        return CommandResult::Error(violations);
    }
    if ctx.runtime.block_on(ctx.products.create(form)) {
        CommandResult::ok_display(ctx.render_current())
    } else {
        CommandResult::Error(ctx.last_error_message())
    }
}

fn submit_create_user(ctx: &mut AppContext, form: UserForm) -> CommandResult {
    if let Some(violations) = violations(&form) {
        return CommandResult::Error(violations);
    }
    if ctx.runtime.block_on(ctx.users.create(form)) {
        CommandResult::ok_display(ctx.render_current())
    } else {
        CommandResult::Error(ctx.last_error_message())
    }
}

/// Remembers whether the inner confirmation declined, so a cancelled delete
/// can be told apart from a failed one.
struct RecordingConfirm<'a> {
    inner: &'a dyn ConfirmAction,
    declined: AtomicBool,
}

impl<'a> RecordingConfirm<'a> {
    fn new(inner: &'a dyn ConfirmAction) -> Self {
        Self {
            inner,
            declined: AtomicBool::new(false),
        }
    }

    fn declined(&self) -> bool {
        self.declined.load(Ordering::SeqCst)
    }
}

impl ConfirmAction for RecordingConfirm<'_> {
    fn confirm(&self, prompt: &str) -> bool {
        let answer = self.inner.confirm(prompt);
        if !answer {
            self.declined.store(true, Ordering::SeqCst);
        }
        answer
    }
}
