use crate::domain::model::BlogListView;
use crate::utils::error::Result;
use std::collections::HashMap;
use tera::{Context, Tera, Value};

const BLOG_LIST_TEMPLATE_NAME: &str = "all_general_blogs.html";
const BLOG_LIST_TEMPLATE: &str = include_str!("../../templates/all_general_blogs.html");

/// Escapes a URL for a quoted attribute. Unlike the default HTML escape it
/// leaves `/` alone so links and image sources stay readable.
fn escape_attribute(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    let raw = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("filter `attr` expects a string"))?;

    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    Ok(Value::String(escaped))
}

/// HTML renderer for the blog list page. Values are autoescaped; URL
/// attributes go through the `attr` filter.
pub struct PageRenderer {
    tera: Tera,
}

impl PageRenderer {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.register_filter("attr", escape_attribute);
        tera.add_raw_template(BLOG_LIST_TEMPLATE_NAME, BLOG_LIST_TEMPLATE)?;
        Ok(Self { tera })
    }

    pub fn render(&self, view: &BlogListView) -> Result<String> {
        let mut context = Context::from_serialize(view)?;
        context.insert("is_empty", &view.is_empty());
        Ok(self.tera.render(BLOG_LIST_TEMPLATE_NAME, &context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplaySettings;
    use crate::core::formatter::BlogListFormatter;
    use crate::domain::model::{Blog, CreatedAt, ShopData};

    fn render(blogs: &[Blog], shop: Option<&ShopData>) -> String {
        let formatter = BlogListFormatter::from_settings(DisplaySettings::default());
        let view = formatter.format(blogs, shop);
        PageRenderer::new().unwrap().render(&view).unwrap()
    }

    #[test]
    fn test_renders_items_with_test_ids() {
        let blogs = vec![Blog::new("42", "<h1>Drip Irrigation</h1><p>Save water.</p>")
            .with_created_at(CreatedAt::parse("2024-03-15").unwrap())];
        let html = render(&blogs, None);

        assert!(html.contains(r#"data-testid="back-from-all-general-blogs-btn""#));
        assert!(html.contains(r#"data-testid="all-general-blogs-title""#));
        assert!(html.contains(r#"data-testid="general-blog-preview-42""#));
        assert!(html.contains(r#"data-testid="blog-preview-title">Drip Irrigation</h3>"#));
        assert!(html.contains("📅 १५ मार्च, २०२४"));
        assert!(html.contains("संपूर्ण वाचा"));
        assert!(html.contains(r#"data-testid="all-general-blogs-list""#));
        assert!(!html.contains("अद्याप कृषी माहिती उपलब्ध नाही"));
    }

    #[test]
    fn test_empty_state_replaces_list() {
        let blogs = vec![Blog::new("1", "<h1>Onion</h1>").with_crop("onion")];
        let html = render(&blogs, None);

        assert!(html.contains("अद्याप कृषी माहिती उपलब्ध नाही"));
        assert!(html.contains("लवकरच आम्ही नवीन माहिती जोडू"));
        assert!(!html.contains(r#"data-testid="all-general-blogs-list""#));
        assert!(!html.contains("general-blog-preview-"));
    }

    #[test]
    fn test_footer_shows_shop_details() {
        let shop = ShopData {
            shop_name: Some("Shetkari Agro".to_string()),
            shop_address: Some("Bhosepati, Pandharpur".to_string()),
            shop_number: Some("9876543210".to_string()),
        };
        let html = render(&[], Some(&shop));

        assert!(html.contains("Shetkari Agro"));
        assert!(html.contains("Bhosepati, Pandharpur"));
        assert!(html.contains(r#"href="tel:9876543210""#));
        assert!(html.contains("📞 9876543210"));
    }

    #[test]
    fn test_links_and_image_sources_keep_slashes() {
        let blogs = vec![Blog::new("42", "<h1>Drip Irrigation</h1>")
            .with_image("https://res.cloudinary.com/demo/image/upload/drip.jpg")];
        let html = render(&blogs, None);

        assert!(html.contains(r#"href="/" class="#));
        assert!(html.contains(r#"href="/blogs/42""#));
        assert!(html.contains(
            r#"src="https://res.cloudinary.com/demo/image/upload/f_auto,q_auto,w_256/drip.jpg""#
        ));
        assert!(!html.contains("&#x2F;"));
    }

    #[test]
    fn test_attribute_quotes_are_escaped() {
        let blogs = vec![Blog::new("q", "<h1>Quotes</h1>")
            .with_image(r#"https://cdn.example.com/a.jpg" onerror="alert(1)"#)];
        let html = render(&blogs, None);

        assert!(html.contains(r#"src="https://cdn.example.com/a.jpg&quot; onerror=&quot;alert(1)""#));
        assert!(!html.contains(r#"" onerror=""#));
    }

    #[test]
    fn test_blog_text_is_escaped() {
        let blogs = vec![Blog::new("x", "<p>Use &lt;script&gt; carefully</p>")];
        let html = render(&blogs, None);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&amp;lt;script&amp;gt;"));
    }
}
