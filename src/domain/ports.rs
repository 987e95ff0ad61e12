use crate::domain::model::{ApiResponse, ImageElement, ObjectRef, ResponsePolicy, SearchTerm};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// The remote collection service. Implementations fetch and decode JSON but
/// leave shape and status checks to the caller.
#[async_trait]
pub trait MuseumApi: Send + Sync {
    async fn search(&self, term: &SearchTerm) -> Result<ApiResponse>;
    async fn object(&self, object: ObjectRef) -> Result<ApiResponse>;
}

/// The page's main content element.
#[async_trait]
pub trait Container: Send + Sync {
    /// Inserts `image` as the first child.
    async fn prepend(&self, image: ImageElement);
    async fn children(&self) -> Vec<ImageElement>;
}

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn output_path(&self) -> &str;
    fn page_file(&self) -> &str;
    fn page_title(&self) -> &str;
    fn response_policy(&self) -> ResponsePolicy;
    /// `None` means requests may stay pending indefinitely.
    fn request_timeout(&self) -> Option<Duration>;
}
