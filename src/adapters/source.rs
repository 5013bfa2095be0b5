use crate::adapters::storage::LocalStorage;
use crate::config::is_http_location;
use crate::domain::model::{Blog, ShopData};
use crate::domain::ports::{ContentSource, Storage};
use crate::utils::error::{Result, StorefrontError};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Accepts either a bare array of blogs or an object wrapping it under `blogs`.
/// Entries that are not blog objects are skipped.
pub fn parse_blogs(value: Value) -> Result<Vec<Blog>> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("blogs") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(StorefrontError::ContentFormatError {
                    message: "blog payload must be an array or an object with a `blogs` array"
                        .to_string(),
                })
            }
        },
        _ => {
            return Err(StorefrontError::ContentFormatError {
                message: "blog payload must be a JSON array".to_string(),
            })
        }
    };

    let mut blogs = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<Blog>(item) {
            Ok(blog) => blogs.push(blog),
            Err(e) => tracing::warn!("Skipping blog entry #{}: {}", index, e),
        }
    }
    Ok(blogs)
}

/// Accepts the shop object itself or one wrapped under `shop`.
pub fn parse_shop(value: Value) -> Result<ShopData> {
    let value = match value {
        Value::Object(mut map) if map.contains_key("shop") => {
            map.remove("shop").unwrap_or(Value::Null)
        }
        other => other,
    };
    Ok(serde_json::from_value(value)?)
}

pub struct HttpContentSource {
    client: Client,
    blogs_url: String,
    shop_url: Option<String>,
}

impl HttpContentSource {
    pub fn new(blogs_url: String, shop_url: Option<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, blogs_url, shop_url))
    }

    pub fn with_client(client: Client, blogs_url: String, shop_url: Option<String>) -> Self {
        Self {
            client,
            blogs_url,
            shop_url,
        }
    }
}

#[async_trait]
impl ContentSource for HttpContentSource {
    async fn fetch_blogs(&self) -> Result<Vec<Blog>> {
        tracing::debug!("Fetching blogs from: {}", self.blogs_url);
        let response = self.client.get(&self.blogs_url).send().await?;
        let status = response.status();
        tracing::debug!("Blogs response status: {}", status);

        if !status.is_success() {
            return Err(StorefrontError::SourceError {
                source_name: self.blogs_url.clone(),
                status: status.as_u16(),
            });
        }

        let json_data: Value = response.json().await?;
        let blogs = parse_blogs(json_data)?;
        tracing::debug!("Fetched {} blog records", blogs.len());
        Ok(blogs)
    }

    async fn fetch_shop(&self) -> Result<Option<ShopData>> {
        let Some(url) = &self.shop_url else {
            return Ok(None);
        };

        tracing::debug!("Fetching shop details from: {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StorefrontError::SourceError {
                source_name: url.clone(),
                status: status.as_u16(),
            });
        }

        let json_data: Value = response.json().await?;
        Ok(Some(parse_shop(json_data)?))
    }
}

/// Reads the same JSON payloads from files.
pub struct FileContentSource<S: Storage> {
    storage: S,
    blogs_path: String,
    shop_path: Option<String>,
}

impl<S: Storage> FileContentSource<S> {
    pub fn new(storage: S, blogs_path: String, shop_path: Option<String>) -> Self {
        Self {
            storage,
            blogs_path,
            shop_path,
        }
    }
}

#[async_trait]
impl<S: Storage> ContentSource for FileContentSource<S> {
    async fn fetch_blogs(&self) -> Result<Vec<Blog>> {
        tracing::debug!("Reading blogs from: {}", self.blogs_path);
        let data = self.storage.read_file(&self.blogs_path).await?;
        parse_blogs(serde_json::from_slice(&data)?)
    }

    async fn fetch_shop(&self) -> Result<Option<ShopData>> {
        let Some(path) = &self.shop_path else {
            return Ok(None);
        };

        tracing::debug!("Reading shop details from: {}", path);
        let data = self.storage.read_file(path).await?;
        Ok(Some(parse_shop(serde_json::from_slice(&data)?)?))
    }
}

/// 依照位置格式選擇 HTTP 或本機檔案來源
pub fn content_source_for(
    blogs_location: &str,
    shop_location: Option<&str>,
    timeout: Duration,
) -> Result<Arc<dyn ContentSource>> {
    let shop = shop_location.map(str::to_string);

    if is_http_location(blogs_location) {
        tracing::info!("📡 Using HTTP content source: {}", blogs_location);
        Ok(Arc::new(HttpContentSource::new(
            blogs_location.to_string(),
            shop,
            timeout,
        )?))
    } else {
        tracing::info!("📁 Using file content source: {}", blogs_location);
        Ok(Arc::new(FileContentSource::new(
            LocalStorage::new(".".to_string()),
            blogs_location.to_string(),
            shop,
        )))
    }
}
