pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{HtmlPage, LocalStorage, MetMuseumClient};
pub use app::{SearchSession, SessionReport};
pub use core::pipeline::{SearchPage, SearchPipeline, Submission};
pub use utils::error::{Result, SearchError};
