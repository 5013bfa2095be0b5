use crate::adapters::source::content_source_for;
use crate::core::formatter::BlogListFormatter;
use crate::core::render::PageRenderer;
use crate::domain::model::{BlogListView, PageContent, RenderedPage};
use crate::domain::ports::{ConfigProvider, ContentSource, Pipeline, Storage};
use crate::utils::error::Result;
use std::sync::Arc;
use std::time::Duration;

pub const PAGE_FILE_NAME: &str = "all-general-blogs.html";

/// Fetches content and turns it into the rendered page. Shared by the
/// server (per request) and the one-shot render pipeline.
pub struct PageBuilder {
    source: Arc<dyn ContentSource>,
    formatter: BlogListFormatter,
    renderer: PageRenderer,
}

impl PageBuilder {
    pub fn new(
        source: Arc<dyn ContentSource>,
        formatter: BlogListFormatter,
        renderer: PageRenderer,
    ) -> Self {
        Self {
            source,
            formatter,
            renderer,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let source = content_source_for(
            config.blogs_location(),
            config.shop_location(),
            Duration::from_secs(config.request_timeout_seconds()),
        )?;
        let formatter = BlogListFormatter::from_settings(config.display_settings());
        Ok(Self::new(source, formatter, PageRenderer::new()?))
    }

    pub async fn fetch(&self) -> Result<PageContent> {
        let (blogs, shop) = tokio::join!(self.source.fetch_blogs(), self.source.fetch_shop());

        // 商店資料取不到時改用頁尾預設值
        let shop = shop.unwrap_or_else(|e| {
            tracing::warn!("⚠️ Shop details unavailable, using footer defaults: {}", e);
            None
        });

        Ok(PageContent {
            blogs: blogs?,
            shop,
        })
    }

    pub fn view(&self, content: &PageContent) -> BlogListView {
        self.formatter.format(&content.blogs, content.shop.as_ref())
    }

    pub fn build(&self, content: &PageContent) -> Result<RenderedPage> {
        let view = self.view(content);
        let html = self.renderer.render(&view)?;
        Ok(RenderedPage { view, html })
    }
}

/// Renders the page once and writes it into storage.
pub struct BlogPagePipeline<S: Storage> {
    builder: PageBuilder,
    storage: S,
    output_path: String,
}

impl<S: Storage> BlogPagePipeline<S> {
    pub fn new(builder: PageBuilder, storage: S, output_path: String) -> Self {
        Self {
            builder,
            storage,
            output_path,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage> Pipeline for BlogPagePipeline<S> {
    async fn extract(&self) -> Result<PageContent> {
        self.builder.fetch().await
    }

    async fn transform(&self, content: PageContent) -> Result<RenderedPage> {
        self.builder.build(&content)
    }

    async fn load(&self, page: RenderedPage) -> Result<String> {
        tracing::debug!(
            "Writing page with {} previews ({} bytes)",
            page.view.items.len(),
            page.html.len()
        );
        self.storage
            .write_file(PAGE_FILE_NAME, page.html.as_bytes())
            .await?;

        Ok(format!("{}/{}", self.output_path, PAGE_FILE_NAME))
    }
}
