// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;

pub use app::run;
pub use cli::Args;
pub use config::{Config, FileConfig};
