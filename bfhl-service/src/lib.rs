//! bfhl-service: one JSON endpoint dispatching to small numeric routines or
//! a one-word AI answer.
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

pub use error::DispatchError;
pub use startup::{build_router, AppState, Application};
