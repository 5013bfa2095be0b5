use crate::domain::ports::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

pub struct RenderEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> RenderEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        let started = Instant::now();
        tracing::info!("Starting page render...");

        // Extract
        let content = self.pipeline.extract().await?;
        tracing::info!(
            "Extracted {} blog records (shop details: {})",
            content.blogs.len(),
            if content.shop.is_some() { "yes" } else { "defaults" }
        );

        // Transform
        let page = self.pipeline.transform(content).await?;
        tracing::info!("Formatted {} general blog previews", page.view.items.len());

        // Load
        let output_path = self.pipeline.load(page).await?;
        tracing::info!(
            "Page saved to: {} ({} ms)",
            output_path,
            started.elapsed().as_millis()
        );

        Ok(output_path)
    }
}
