use chrono::{DateTime, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A blog record as supplied by the content source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(
        default,
        deserialize_with = "CreatedAt::deserialize_lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<CreatedAt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_crop: Option<Value>,
}

impl Blog {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            created_at: None,
            image: None,
            selected_crop: None,
        }
    }

    pub fn with_created_at(mut self, created_at: CreatedAt) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_crop(mut self, crop: impl Into<String>) -> Self {
        self.selected_crop = Some(Value::String(crop.into()));
        self
    }

    /// 沒有指定作物的文章屬於「一般」文章
    pub fn is_general(&self) -> bool {
        match &self.selected_crop {
            None | Some(Value::Null) | Some(Value::Bool(false)) => true,
            Some(Value::String(s)) => s.is_empty(),
            Some(Value::Number(n)) => n.as_f64() == Some(0.0),
            Some(_) => false,
        }
    }

    /// Sort key in epoch milliseconds; records without a timestamp count as 0.
    /// Naive timestamps are read in `offset`.
    pub fn sort_key(&self, offset: FixedOffset) -> i64 {
        self.created_at.map_or(0, |c| c.millis(offset))
    }
}

/// Creation time of a blog record.
///
/// Values carrying a zone (RFC 3339, epoch milliseconds, date-only strings,
/// which are UTC midnight) are fixed instants. Date-times without a zone are
/// wall-clock times in the storefront's display offset and are resolved
/// against it on use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CreatedAt {
    Instant(DateTime<Utc>),
    Local(NaiveDateTime),
}

impl CreatedAt {
    pub fn from_millis(millis: i64) -> Option<Self> {
        Utc.timestamp_millis_opt(millis).single().map(Self::Instant)
    }

    pub fn resolve(&self, offset: FixedOffset) -> DateTime<FixedOffset> {
        match self {
            Self::Instant(utc) => utc.with_timezone(&offset),
            Self::Local(naive) => match offset.from_local_datetime(naive) {
                LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt,
                LocalResult::None => naive.and_utc().with_timezone(&offset),
            },
        }
    }

    pub fn millis(&self, offset: FixedOffset) -> i64 {
        self.resolve(offset).timestamp_millis()
    }

    /// Accepts RFC 3339, naive date-times, `YYYY-MM-DD` and epoch milliseconds.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(Self::Instant(dt.with_timezone(&Utc)));
        }

        for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
                return Some(Self::Local(naive));
            }
        }

        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return date
                .and_hms_opt(0, 0, 0)
                .map(|naive| Self::Instant(naive.and_utc()));
        }

        raw.parse::<i64>().ok().and_then(Self::from_millis)
    }

    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Self::parse(s),
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f as i64))
                .and_then(Self::from_millis),
            _ => None,
        }
    }

    // 無法解析的時間視為沒有時間，不讓整份清單反序列化失敗
    fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Option<Self>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.as_ref().and_then(Self::from_value))
    }
}

/// Shop identity shown in the page footer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopData {
    #[serde(default, deserialize_with = "optional_string_or_number")]
    pub shop_name: Option<String>,
    #[serde(default, deserialize_with = "optional_string_or_number")]
    pub shop_address: Option<String>,
    #[serde(default, deserialize_with = "optional_string_or_number")]
    pub shop_number: Option<String>,
}

fn value_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_string(value).unwrap_or_default())
}

fn optional_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(value_to_string))
}

/// Raw content pulled from a source, before formatting.
#[derive(Debug, Clone, Default)]
pub struct PageContent {
    pub blogs: Vec<Blog>,
    pub shop: Option<ShopData>,
}

/// One entry of the rendered list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlogPreview {
    pub id: String,
    pub test_id: String,
    pub title: String,
    pub date: String,
    pub preview: String,
    pub image_url: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShopFooter {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub phone_href: String,
}

impl ShopFooter {
    pub const DEFAULT_NAME: &'static str = "Shop Name";
    pub const DEFAULT_ADDRESS: &'static str = "Shop Address";
    pub const DEFAULT_PHONE: &'static str = "0000000000";

    /// Substitutes the literal defaults for every missing or blank field.
    pub fn from_shop(shop: Option<&ShopData>) -> Self {
        fn pick(field: Option<&String>, fallback: &str) -> String {
            field
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .unwrap_or(fallback)
                .to_string()
        }

        let shop = shop.cloned().unwrap_or_default();
        let phone = pick(shop.shop_number.as_ref(), Self::DEFAULT_PHONE);
        Self {
            name: pick(shop.shop_name.as_ref(), Self::DEFAULT_NAME),
            address: pick(shop.shop_address.as_ref(), Self::DEFAULT_ADDRESS),
            phone_href: format!("tel:{}", phone.replace(' ', "")),
            phone,
        }
    }
}

/// Everything the "all general blogs" page needs, already formatted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlogListView {
    pub lang: String,
    pub heading: String,
    pub back_label: String,
    pub back_href: String,
    pub empty_title: String,
    pub empty_subtitle: String,
    pub read_more_label: String,
    pub items: Vec<BlogPreview>,
    pub footer: ShopFooter,
}

impl BlogListView {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub view: BlogListView,
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

/// PWA installability descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub start_url: String,
    pub display: String,
    pub background_color: String,
    pub theme_color: String,
    pub icons: Vec<ManifestIcon>,
}
