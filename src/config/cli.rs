use crate::adapters::http::DEFAULT_API_BASE_URL;
use crate::core::{ConfigProvider, ResponsePolicy};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_name, validate_path, validate_range, validate_url, Validate,
};
use clap::Parser;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "met-search")]
#[command(about = "Search the Met collection and collect the top match's image on a page")]
pub struct CliConfig {
    /// Search terms; each one is submitted to the page as a separate search
    pub terms: Vec<String>,

    #[arg(long, default_value = DEFAULT_API_BASE_URL)]
    pub api_base_url: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, default_value = "index.html")]
    pub page_file: String,

    #[arg(long, default_value = "Met Search")]
    pub title: String,

    #[arg(long, help = "Accept unexpected responses the way a plain browser page would")]
    pub lenient: bool,

    #[arg(long, help = "Abort requests after this many seconds (default: never)")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Read one search term per line from stdin")]
    pub interactive: bool,

    #[arg(long, help = "Load settings from a TOML file instead of flags")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn page_file(&self) -> &str {
        &self.page_file
    }

    fn page_title(&self) -> &str {
        &self.title
    }

    fn response_policy(&self) -> ResponsePolicy {
        if self.lenient {
            ResponsePolicy::Lenient
        } else {
            ResponsePolicy::Strict
        }
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_base_url", &self.api_base_url)?;
        validate_path("output_path", &self.output_path)?;
        validate_file_name("page_file", &self.page_file)?;
        if let Some(timeout) = self.timeout_seconds {
            validate_range("timeout_seconds", timeout, 1, 300)?;
        }
        Ok(())
    }
}
