use crate::domain::model::Blog;
use crate::domain::ports::Navigator;

/// Builds plain path links: home for "back", `{prefix}{id}` for a blog.
#[derive(Debug, Clone)]
pub struct PathNavigator {
    home_href: String,
    blog_href_prefix: String,
}

impl PathNavigator {
    pub fn new(home_href: impl Into<String>, blog_href_prefix: impl Into<String>) -> Self {
        Self {
            home_href: home_href.into(),
            blog_href_prefix: blog_href_prefix.into(),
        }
    }
}

impl Default for PathNavigator {
    fn default() -> Self {
        Self::new("/", "/blogs/")
    }
}

impl Navigator for PathNavigator {
    fn back_href(&self) -> String {
        self.home_href.clone()
    }

    fn blog_href(&self, blog: &Blog) -> String {
        let encoded: String = url::form_urlencoded::byte_serialize(blog.id.as_bytes()).collect();
        format!("{}{}", self.blog_href_prefix, encoded.replace('+', "%20"))
    }
}
