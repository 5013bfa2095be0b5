pub mod engine;
pub mod formatter;
pub mod locale;
pub mod manifest;
pub mod pipeline;
pub mod render;
pub mod text;

pub use crate::domain::model::{Blog, BlogListView, Manifest, PageContent, RenderedPage, ShopData};
pub use crate::domain::ports::{ConfigProvider, ContentSource, Pipeline, Storage};
pub use crate::utils::error::Result;
