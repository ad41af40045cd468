use clap::Parser;

use replica_http::ClientConfig;
use replica_repl::theme::ThemeChoice;
use replica_repl::{app, AppError, AppOptions};

/// replica - terminal front end for the products and users collections
#[derive(Parser, Debug)]
#[command(name = "replica")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL for the products backend (overrides REPLICA_API_URL)
    #[arg(long)]
    products_url: Option<String>,

    /// Base URL for the users backend (overrides REPLICA_API_URL)
    #[arg(long)]
    users_url: Option<String>,

    /// Color theme for the views
    #[arg(long, value_enum, default_value = "dark")]
    theme: ThemeChoice,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let products_config = match &args.products_url {
        Some(url) => ClientConfig::new(url)?,
        None => ClientConfig::for_products()?,
    };
    let users_config = match &args.users_url {
        Some(url) => ClientConfig::new(url)?,
        None => ClientConfig::for_users()?,
    };

    let options = AppOptions {
        products_config,
        users_config,
        theme: args.theme.into(),
    };

    app::run(options)?;
    Ok(())
}
