#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::locale::Locale;
use crate::core::text::DEFAULT_PREVIEW_LENGTH;
use crate::utils::error::{Result, StorefrontError};
use crate::utils::validation::{
    validate_location, validate_path, validate_positive_number, validate_range,
};
use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = 330;
pub const DEFAULT_IMAGE_TRANSFORMATION: &str = "f_auto,q_auto,w_256";
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/128x128?text=Blog";
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 10;

/// How the blog list is formatted, shared by every config front-end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    pub locale: Locale,
    pub utc_offset_minutes: i32,
    pub preview_length: usize,
    pub home_href: String,
    pub blog_href_prefix: String,
    /// `None` disables CDN rewriting.
    pub image_transformation: Option<String>,
    pub placeholder_image: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            utc_offset_minutes: DEFAULT_UTC_OFFSET_MINUTES,
            preview_length: DEFAULT_PREVIEW_LENGTH,
            home_href: "/".to_string(),
            blog_href_prefix: "/blogs/".to_string(),
            image_transformation: Some(DEFAULT_IMAGE_TRANSFORMATION.to_string()),
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

impl DisplaySettings {
    pub fn utc_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_minutes * 60).unwrap_or_else(|| Utc.fix())
    }

    pub fn validate_fields(&self, prefix: &str) -> Result<()> {
        validate_positive_number(&format!("{prefix}preview_length"), self.preview_length, 1)?;
        validate_range(
            &format!("{prefix}utc_offset_minutes"),
            self.utc_offset_minutes,
            -720,
            840,
        )?;
        validate_path(&format!("{prefix}home_href"), &self.home_href)?;
        validate_path(&format!("{prefix}blog_href_prefix"), &self.blog_href_prefix)?;
        Ok(())
    }
}

/// 部落格與商店資料必須來自同一種來源（HTTP 或檔案）
pub fn validate_sources(
    blogs_field: &str,
    blogs: &str,
    shop_field: &str,
    shop: Option<&str>,
) -> Result<()> {
    validate_location(blogs_field, blogs)?;
    if let Some(shop) = shop {
        validate_location(shop_field, shop)?;
        if is_http_location(blogs) != is_http_location(shop) {
            return Err(StorefrontError::ConfigValidationError {
                field: shop_field.to_string(),
                message: format!(
                    "must be the same kind of location as {} (both URLs or both files)",
                    blogs_field
                ),
            });
        }
    }
    Ok(())
}

pub fn is_http_location(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}
