//! Application core.
//!
//! [`AppContext`] owns the tokio runtime, the two collection stores (one per
//! resource type, independently configured) and the active route.
//! [`AppCore`] is the platform-independent loop: it reads events from an
//! [`IoHost`], hands lines to the command layer, and writes results back.
//! Attaching the stores performs their initial loads.

use replica_core::{Product, User};
use replica_http::{ClientConfig, ResourceClient};
use replica_store::{CollectionStore, ConfirmAction, ProductStore, UserStore};

use crate::commands::{self, CommandResult};
use crate::host::{TerminalConfirm, TerminalHost};
use crate::io::{ExitReason, HostEvent, IoError, IoHost, Output, PromptConfig};
use crate::router::Route;
use crate::theme::Theme;
use crate::views;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Http(#[from] replica_http::Error),

    #[error("host error: {0}")]
    Host(#[from] IoError),
}

/// Startup options resolved by the binary.
pub struct AppOptions {
    pub products_config: ClientConfig,
    pub users_config: ClientConfig,
    pub theme: Theme,
}

/// Shared state of a running session.
pub struct AppContext {
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) products: ProductStore,
    pub(crate) users: UserStore,
    pub(crate) products_api: ResourceClient<Product>,
    pub(crate) users_api: ResourceClient<User>,
    route: Route,
    theme: Theme,
}

impl AppContext {
    /// Build the clients and attach both stores, triggering their initial
    /// loads. A backend that is down does not fail startup; the store
    /// surfaces its load error instead.
    pub fn new(options: AppOptions) -> Result<Self, AppError> {
        let runtime = tokio::runtime::Runtime::new()?;

        let products_api: ResourceClient<Product> = ResourceClient::new(options.products_config)?;
        let users_api: ResourceClient<User> = ResourceClient::new(options.users_config)?;

        let products = runtime.block_on(CollectionStore::attach(products_api.clone()));
        let users = runtime.block_on(CollectionStore::attach(users_api.clone()));

        Ok(Self {
            runtime,
            products,
            users,
            products_api,
            users_api,
            route: Route::Products,
            theme: options.theme,
        })
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn set_route(&mut self, route: Route) {
        self.route = route;
    }

    /// Render the view of the active route.
    pub fn render_current(&self) -> String {
        match self.route {
            Route::Products => views::render_products(&self.products.snapshot(), &self.theme),
            Route::Users => views::render_users(&self.users.snapshot(), &self.theme),
        }
    }

    pub(crate) fn find_product(&self, id: i64) -> Option<Product> {
        self.products
            .snapshot()
            .items
            .into_iter()
            .find(|p| p.id == id)
    }

    pub(crate) fn find_user(&self, id: i64) -> Option<User> {
        self.users.snapshot().items.into_iter().find(|u| u.id == id)
    }

    /// The active store's error slot, for command error display.
    pub(crate) fn last_error_message(&self) -> String {
        let last_error = match self.route {
            Route::Products => self.products.snapshot().last_error,
            Route::Users => self.users.snapshot().last_error,
        };
        last_error.unwrap_or_else(|| "Error desconocido".to_string())
    }
}

/// The platform-independent application loop.
pub struct AppCore {
    ctx: AppContext,
    confirm: Box<dyn ConfirmAction>,
}

impl AppCore {
    pub fn new(ctx: AppContext, confirm: Box<dyn ConfirmAction>) -> Self {
        Self { ctx, confirm }
    }

    /// Run the loop, reading and writing through the provided host.
    pub fn run(&mut self, io: &mut impl IoHost) -> Result<ExitReason, IoError> {
        io.write_output(Output::banner(BANNER))?;

        loop {
            let prompt = PromptConfig {
                route: self.ctx.route().path().to_string(),
            };

            match io.read_event(&prompt)? {
                HostEvent::Eof => {
                    io.write_output(Output::info("¡Hasta luego!"))?;
                    io.flush()?;
                    return Ok(ExitReason::Eof);
                }
                HostEvent::Interrupt => {
                    io.write_output(Output::info("^C (use 'exit' para salir)"))?;
                    continue;
                }
                HostEvent::Line(line) => {
                    match commands::execute(&line, &mut self.ctx, self.confirm.as_ref()) {
                        CommandResult::Ok { display: None } => {}
                        CommandResult::Ok {
                            display: Some(text),
                        } => {
                            io.write_output(Output::normal(text))?;
                        }
                        CommandResult::Error(message) => {
                            io.write_output(Output::error(message))?;
                        }
                        CommandResult::Help => {
                            io.write_output(Output::normal(commands::format_help()))?;
                        }
                        CommandResult::Exit => {
                            io.write_output(Output::info("¡Hasta luego!"))?;
                            io.flush()?;
                            return Ok(ExitReason::UserExit);
                        }
                    }
                }
            }

            io.flush()?;
        }
    }

    pub fn context(&self) -> &AppContext {
        &self.ctx
    }
}

/// Entry point used by the binary: terminal host, stdin confirmation.
pub fn run(options: AppOptions) -> Result<ExitReason, AppError> {
    let ctx = AppContext::new(options)?;
    let mut core = AppCore::new(ctx, Box::new(TerminalConfirm));
    let mut host = TerminalHost::new()?;
    Ok(core.run(&mut host)?)
}

const BANNER: &str = r#"
                 _ _
 _ __ ___ _ __ | (_) ___ __ _
| '__/ _ \ '_ \| | |/ __/ _` |
| | |  __/ |_) | | | (_| (_| |
|_|  \___| .__/|_|_|\___\__,_|
         |_|

Escriba 'help' para ver los comandos, 'exit' para salir.
"#;
