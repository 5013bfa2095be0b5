use crate::adapters::image::{CloudinaryOptimizer, PassThroughOptimizer};
use crate::adapters::navigation::PathNavigator;
use crate::config::DisplaySettings;
use crate::core::locale::Locale;
use crate::core::text::{extract_preview, extract_title};
use crate::domain::model::{Blog, BlogListView, BlogPreview, ShopData, ShopFooter};
use crate::domain::ports::{ImageOptimizer, Navigator};
use chrono::{Datelike, FixedOffset};
use std::cmp::Reverse;
use std::sync::Arc;

pub const PREVIEW_TEST_ID_PREFIX: &str = "general-blog-preview-";

/// General blogs only, newest first. Equal timestamps keep their input order.
/// Zone-less timestamps are compared as wall-clock times in `offset`.
pub fn general_blogs(blogs: &[Blog], offset: FixedOffset) -> Vec<&Blog> {
    let mut general: Vec<&Blog> = blogs.iter().filter(|blog| blog.is_general()).collect();
    general.sort_by_key(|blog| Reverse(blog.sort_key(offset)));
    general
}

pub fn format_date(blog: &Blog, locale: Locale, offset: FixedOffset) -> String {
    match blog.created_at {
        Some(created_at) => {
            let local = created_at.resolve(offset);
            locale.long_date(local.day(), local.month(), local.year())
        }
        None => locale.labels().latest.to_string(),
    }
}

/// Turns raw blog records into the list view model.
pub struct BlogListFormatter {
    settings: DisplaySettings,
    optimizer: Arc<dyn ImageOptimizer>,
    navigator: Arc<dyn Navigator>,
}

impl BlogListFormatter {
    pub fn new(
        settings: DisplaySettings,
        optimizer: Arc<dyn ImageOptimizer>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            settings,
            optimizer,
            navigator,
        }
    }

    pub fn from_settings(settings: DisplaySettings) -> Self {
        let optimizer: Arc<dyn ImageOptimizer> = match &settings.image_transformation {
            Some(transformation) => Arc::new(CloudinaryOptimizer::new(transformation.clone())),
            None => Arc::new(PassThroughOptimizer),
        };
        let navigator = Arc::new(PathNavigator::new(
            settings.home_href.clone(),
            settings.blog_href_prefix.clone(),
        ));
        Self::new(settings, optimizer, navigator)
    }

    pub fn format(&self, blogs: &[Blog], shop: Option<&ShopData>) -> BlogListView {
        let locale = self.settings.locale;
        let labels = locale.labels();
        let items: Vec<BlogPreview> = general_blogs(blogs, self.settings.utc_offset())
            .into_iter()
            .map(|blog| self.preview(blog))
            .collect();

        tracing::debug!(
            "Formatted {} of {} blogs as general previews",
            items.len(),
            blogs.len()
        );

        BlogListView {
            lang: locale.lang().to_string(),
            heading: labels.heading.to_string(),
            back_label: labels.back.to_string(),
            back_href: self.navigator.back_href(),
            empty_title: labels.empty_title.to_string(),
            empty_subtitle: labels.empty_subtitle.to_string(),
            read_more_label: labels.read_more.to_string(),
            items,
            footer: ShopFooter::from_shop(shop),
        }
    }

    fn preview(&self, blog: &Blog) -> BlogPreview {
        BlogPreview {
            id: blog.id.clone(),
            test_id: format!("{}{}", PREVIEW_TEST_ID_PREFIX, blog.id),
            title: extract_title(&blog.text),
            date: format_date(blog, self.settings.locale, self.settings.utc_offset()),
            preview: extract_preview(&blog.text, self.settings.preview_length),
            image_url: self.image_or_placeholder(blog.image.as_deref()),
            href: self.navigator.blog_href(blog),
        }
    }

    fn image_or_placeholder(&self, image: Option<&str>) -> String {
        image
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(|url| self.optimizer.optimize(url))
            .unwrap_or_else(|| self.settings.placeholder_image.clone())
    }
}
