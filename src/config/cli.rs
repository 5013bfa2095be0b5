use super::{
    validate_sources, DisplaySettings, DEFAULT_IMAGE_TRANSFORMATION, DEFAULT_PLACEHOLDER_IMAGE,
    DEFAULT_REQUEST_TIMEOUT_SECONDS, DEFAULT_UTC_OFFSET_MINUTES,
};
use crate::core::locale::Locale;
use crate::core::text::DEFAULT_PREVIEW_LENGTH;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_socket_addr, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "krushi-kendra")]
#[command(about = "Agricultural shop storefront: PWA manifest and farming blog pages")]
pub struct CliConfig {
    #[arg(long, default_value = "0.0.0.0:8080")]
    pub bind: String,

    #[arg(long, default_value = "./content/blogs.json")]
    pub blogs_source: String,

    #[arg(long)]
    pub shop_source: Option<String>,

    #[arg(long, default_value = "mr-IN")]
    pub locale: Locale,

    #[arg(long, default_value_t = DEFAULT_UTC_OFFSET_MINUTES, allow_negative_numbers = true)]
    pub utc_offset_minutes: i32,

    #[arg(long, default_value_t = DEFAULT_PREVIEW_LENGTH)]
    pub preview_length: usize,

    #[arg(long, default_value = "/")]
    pub home_href: String,

    #[arg(long, default_value = "/blogs/")]
    pub blog_href_prefix: String,

    #[arg(long, default_value = DEFAULT_IMAGE_TRANSFORMATION)]
    pub image_transformation: String,

    #[arg(long, help = "Serve image URLs exactly as stored")]
    pub no_image_optimization: bool,

    #[arg(long, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn blogs_location(&self) -> &str {
        &self.blogs_source
    }

    fn shop_location(&self) -> Option<&str> {
        self.shop_source.as_deref()
    }

    fn request_timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn display_settings(&self) -> DisplaySettings {
        let image_transformation = if self.no_image_optimization
            || self.image_transformation.trim().is_empty()
        {
            None
        } else {
            Some(self.image_transformation.clone())
        };

        DisplaySettings {
            locale: self.locale,
            utc_offset_minutes: self.utc_offset_minutes,
            preview_length: self.preview_length,
            home_href: self.home_href.clone(),
            blog_href_prefix: self.blog_href_prefix.clone(),
            image_transformation,
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_socket_addr("bind", &self.bind)?;
        validate_sources(
            "blogs_source",
            &self.blogs_source,
            "shop_source",
            self.shop_source.as_deref(),
        )?;
        validate_positive_number("timeout_seconds", self.timeout_seconds as usize, 1)?;
        self.display_settings().validate_fields("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::StorefrontError;

    #[test]
    fn test_cli_defaults() {
        let config = CliConfig::parse_from(["krushi-kendra"]);
        assert_eq!(config.bind, "0.0.0.0:8080");
        assert_eq!(config.locale, Locale::Marathi);
        assert!(config.validate().is_ok());

        let display = config.display_settings();
        assert_eq!(display, DisplaySettings::default());
        assert_eq!(display.utc_offset().local_minus_utc(), 330 * 60);
    }

    #[test]
    fn test_cli_overrides() {
        let config = CliConfig::parse_from([
            "krushi-kendra",
            "--locale",
            "en-IN",
            "--utc-offset-minutes",
            "-300",
            "--no-image-optimization",
            "--blogs-source",
            "https://cms.example.com/blogs",
            "--shop-source",
            "https://cms.example.com/shop",
        ]);

        assert!(config.validate().is_ok());
        let display = config.display_settings();
        assert_eq!(display.locale, Locale::English);
        assert_eq!(display.utc_offset_minutes, -300);
        assert_eq!(display.image_transformation, None);
        assert_eq!(config.shop_location(), Some("https://cms.example.com/shop"));
    }

    #[test]
    fn test_mixed_source_kinds_are_rejected() {
        let config = CliConfig::parse_from([
            "krushi-kendra",
            "--blogs-source",
            "https://cms.example.com/blogs",
            "--shop-source",
            "./shop.json",
        ]);
        assert!(matches!(
            config.validate(),
            Err(StorefrontError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_server_has_no_output_path_flag() {
        // 伺服器直接回應頁面，不寫檔
        let result = CliConfig::try_parse_from(["krushi-kendra", "--output-path", "./public"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_bind_is_rejected() {
        let config = CliConfig::parse_from(["krushi-kendra", "--bind", "nowhere"]);
        assert!(config.validate().is_err());
    }
}
