use crate::config::DisplaySettings;
use crate::domain::model::{Blog, PageContent, RenderedPage, ShopData};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn blogs_location(&self) -> &str;
    fn shop_location(&self) -> Option<&str>;
    fn request_timeout_seconds(&self) -> u64;
    fn display_settings(&self) -> DisplaySettings;
}

/// Where blog records and the shop descriptor come from.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch_blogs(&self) -> Result<Vec<Blog>>;
    async fn fetch_shop(&self) -> Result<Option<ShopData>>;
}

/// Rewrites an image reference into its delivery URL.
pub trait ImageOptimizer: Send + Sync {
    fn optimize(&self, url: &str) -> String;
}

/// Link targets for leaving the list: back to home, or into a single blog.
pub trait Navigator: Send + Sync {
    fn back_href(&self) -> String;
    fn blog_href(&self, blog: &Blog) -> String;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<PageContent>;
    async fn transform(&self, content: PageContent) -> Result<RenderedPage>;
    async fn load(&self, page: RenderedPage) -> Result<String>;
}
