pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod services;

pub use app::{App, Wizard};
pub use cli::Cli;
pub use config::Config;
pub use error::{Error, Result};
