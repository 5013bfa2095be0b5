use super::{
    validate_sources, DisplaySettings, DEFAULT_IMAGE_TRANSFORMATION, DEFAULT_PLACEHOLDER_IMAGE,
    DEFAULT_REQUEST_TIMEOUT_SECONDS, DEFAULT_UTC_OFFSET_MINUTES,
};
use crate::core::locale::Locale;
use crate::core::text::DEFAULT_PREVIEW_LENGTH;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, StorefrontError};
use crate::utils::validation::{validate_path, validate_positive_number, validate_socket_addr, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var regex"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub source: SourceConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8080".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub blogs: String,
    pub shop: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub locale: Option<Locale>,
    pub utc_offset_minutes: Option<i32>,
    pub preview_length: Option<usize>,
    pub home_href: Option<String>,
    pub blog_href_prefix: Option<String>,
    /// 空字串代表不做圖片轉換
    pub image_transformation: Option<String>,
    pub placeholder_image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: "./output".to_string(),
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(StorefrontError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| StorefrontError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CMS_URL})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn bind(&self) -> &str {
        &self.server.bind
    }

    /// Directory the rendered page is written into.
    pub fn output_path(&self) -> &str {
        &self.output.path
    }
}

impl ConfigProvider for TomlConfig {
    fn blogs_location(&self) -> &str {
        &self.source.blogs
    }

    fn shop_location(&self) -> Option<&str> {
        self.source.shop.as_deref()
    }

    fn request_timeout_seconds(&self) -> u64 {
        self.source
            .timeout_seconds
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECONDS)
    }

    fn display_settings(&self) -> DisplaySettings {
        let display = &self.display;
        let image_transformation = match &display.image_transformation {
            Some(t) if t.trim().is_empty() => None,
            Some(t) => Some(t.clone()),
            None => Some(DEFAULT_IMAGE_TRANSFORMATION.to_string()),
        };

        DisplaySettings {
            locale: display.locale.unwrap_or_default(),
            utc_offset_minutes: display
                .utc_offset_minutes
                .unwrap_or(DEFAULT_UTC_OFFSET_MINUTES),
            preview_length: display.preview_length.unwrap_or(DEFAULT_PREVIEW_LENGTH),
            home_href: display.home_href.clone().unwrap_or_else(|| "/".to_string()),
            blog_href_prefix: display
                .blog_href_prefix
                .clone()
                .unwrap_or_else(|| "/blogs/".to_string()),
            image_transformation,
            placeholder_image: display
                .placeholder_image
                .clone()
                .unwrap_or_else(|| DEFAULT_PLACEHOLDER_IMAGE.to_string()),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_socket_addr("server.bind", &self.server.bind)?;
        validate_sources(
            "source.blogs",
            &self.source.blogs,
            "source.shop",
            self.source.shop.as_deref(),
        )?;
        validate_positive_number(
            "source.timeout_seconds",
            self.request_timeout_seconds() as usize,
            1,
        )?;
        validate_path("output.path", &self.output.path)?;
        self.display_settings().validate_fields("display.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_minimal_toml_config() {
        let toml_content = r#"
[source]
blogs = "https://cms.example.com/api/blogs"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.blogs_location(), "https://cms.example.com/api/blogs");
        assert_eq!(config.shop_location(), None);
        assert_eq!(config.bind(), "0.0.0.0:8080");
        assert_eq!(config.output_path(), "./output");
        assert_eq!(config.request_timeout_seconds(), 10);
        assert_eq!(config.display_settings(), DisplaySettings::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[server]
bind = "127.0.0.1:3000"

[source]
blogs = "./content/blogs.json"
shop = "./content/shop.json"

[display]
locale = "en-IN"
utc_offset_minutes = 0
preview_length = 80
blog_href_prefix = "/articles/"
image_transformation = ""

[output]
path = "./public"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let display = config.display_settings();

        assert_eq!(config.bind(), "127.0.0.1:3000");
        assert_eq!(display.locale, Locale::English);
        assert_eq!(display.utc_offset_minutes, 0);
        assert_eq!(display.preview_length, 80);
        assert_eq!(display.blog_href_prefix, "/articles/");
        assert_eq!(display.image_transformation, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("KRUSHI_TEST_CMS_URL", "https://cms.test.example");

        let toml_content = r#"
[source]
blogs = "${KRUSHI_TEST_CMS_URL}/blogs"
shop = "${KRUSHI_TEST_UNSET_VAR}/shop"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.source.blogs, "https://cms.test.example/blogs");
        assert_eq!(
            config.source.shop.as_deref(),
            Some("${KRUSHI_TEST_UNSET_VAR}/shop")
        );

        std::env::remove_var("KRUSHI_TEST_CMS_URL");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[source]
blogs = "http://"

[display]
preview_length = 0
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_source_table_is_a_validation_error() {
        let toml_content = r#"
[server]
bind = "127.0.0.1:3000"
"#;
        let err = TomlConfig::from_toml_str(toml_content).unwrap_err();
        assert!(matches!(err, StorefrontError::ConfigValidationError { .. }));
        assert!(err.to_string().contains("source"));
    }

    #[test]
    fn test_unknown_locale_fails_parsing() {
        let toml_content = r#"
[source]
blogs = "./blogs.json"

[display]
locale = "de-DE"
"#;
        assert!(TomlConfig::from_toml_str(toml_content).is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[source]
blogs = "https://cms.example.com/blogs"
timeout_seconds = 3
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.request_timeout_seconds(), 3);
    }
}
