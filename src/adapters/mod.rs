// Adapters layer: concrete implementations of the domain ports.

pub mod http;
pub mod page;
pub mod storage;

pub use http::{MetMuseumClient, DEFAULT_API_BASE_URL};
pub use page::HtmlPage;
pub use storage::LocalStorage;
