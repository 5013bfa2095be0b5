use crate::domain::ports::ImageOptimizer;
use regex::Regex;
use std::sync::LazyLock;

const CLOUDINARY_HOST: &str = "res.cloudinary.com";
const UPLOAD_SEGMENT: &str = "/upload/";

// 像 "w_300,c_fill" 這樣的片段代表網址已帶有轉換參數
static TRANSFORMATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z]{1,3}_[^/,.]+(,[a-z]{1,3}_[^/,.]+)*$").expect("transformation regex")
});

/// Inserts a delivery transformation into Cloudinary upload URLs.
#[derive(Debug, Clone)]
pub struct CloudinaryOptimizer {
    transformation: String,
}

impl CloudinaryOptimizer {
    pub fn new(transformation: impl Into<String>) -> Self {
        Self {
            transformation: transformation.into(),
        }
    }
}

impl ImageOptimizer for CloudinaryOptimizer {
    fn optimize(&self, url: &str) -> String {
        if !url.contains(CLOUDINARY_HOST) {
            return url.to_string();
        }

        match url.split_once(UPLOAD_SEGMENT) {
            Some((head, tail)) => {
                let first_segment = tail.split('/').next().unwrap_or_default();
                if TRANSFORMATION_RE.is_match(first_segment) {
                    url.to_string()
                } else {
                    format!("{}{}{}/{}", head, UPLOAD_SEGMENT, self.transformation, tail)
                }
            }
            None => url.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PassThroughOptimizer;

impl ImageOptimizer for PassThroughOptimizer {
    fn optimize(&self, url: &str) -> String {
        url.to_string()
    }
}
