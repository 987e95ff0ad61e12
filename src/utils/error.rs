use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid request URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unexpected HTTP status {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Malformed response from {endpoint}: {reason}")]
    MalformedResponse { endpoint: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Submission task failed: {message}")]
    TaskFailed { message: String },
}

impl SearchError {
    pub fn malformed(endpoint: impl Into<String>, reason: impl Into<String>) -> Self {
        SearchError::MalformedResponse {
            endpoint: endpoint.into(),
            reason: reason.into(),
        }
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            SearchError::ConfigError { .. }
                | SearchError::InvalidConfigValueError { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SearchError::Http(_) => "Could not reach the museum collection API".to_string(),
            SearchError::HttpStatus { status, .. } => {
                format!("The museum collection API answered with status {}", status)
            }
            SearchError::MalformedResponse { reason, .. } => {
                format!("The museum collection API returned an unusable answer ({})", reason)
            }
            SearchError::Serialization(_) => {
                "The museum collection API returned something that is not JSON".to_string()
            }
            SearchError::Io(e) => format!("Could not write the page: {}", e),
            other if other.is_config_error() => format!("Invalid configuration: {}", other),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SearchError::Http(_) => "Check your network connection and the --api-base-url value",
            SearchError::HttpStatus { .. } => {
                "Try another search term, or run with --lenient to ignore the status"
            }
            SearchError::MalformedResponse { .. } => {
                "Try another search term; the top match may have no image"
            }
            SearchError::Url(_) => "Check the --api-base-url value",
            SearchError::Io(_) => "Check that --output-path is writable",
            other if other.is_config_error() => "Fix the configuration and run again",
            _ => "Run again with --verbose for details",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            e if e.is_config_error() => 3,
            SearchError::Io(_) => 4,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
