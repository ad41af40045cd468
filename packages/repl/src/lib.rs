//! # replica-repl
//!
//! Interactive terminal front end for replica.
//!
//! The application mirrors the products and users collections of a REST
//! backend and manages them from a prompt. The core loop is platform
//! independent: it talks to the terminal only through the [`io::IoHost`]
//! trait, so tests drive it with a scripted host.
//!
//! ## Usage
//!
//! ```bash
//! # Run the front end
//! replica
//!
//! # Inside the prompt:
//! /productos> open /usuarios
//! /usuarios> add name=Alice email=alice@example.com
//! /usuarios> edit 1 name=Alicia
//! /usuarios> rm 1
//! ```

pub mod app;
pub mod commands;
pub mod format;
pub mod host;
pub mod io;
pub mod router;
pub mod theme;
pub mod views;

pub use app::{AppContext, AppCore, AppError, AppOptions};
pub use router::Route;
