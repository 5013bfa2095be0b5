use httpmock::prelude::*;
use krushi_kendra::core::pipeline::PAGE_FILE_NAME;
use krushi_kendra::{
    BlogPagePipeline, LocalStorage, PageBuilder, RenderEngine, StorefrontError, TomlConfig,
};
use tempfile::TempDir;

fn config_for(blogs: &str, shop: Option<&str>, output: &str) -> TomlConfig {
    let shop_line = shop
        .map(|s| format!("shop = \"{}\"\n", s))
        .unwrap_or_default();
    let content = format!(
        r#"
[source]
blogs = "{blogs}"
{shop_line}
[display]
locale = "mr-IN"

[output]
path = "{output}"
"#
    );
    TomlConfig::from_toml_str(&content).unwrap()
}

#[tokio::test]
async fn test_end_to_end_render_with_http_source() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().replace('\\', "/");

    let server = MockServer::start();
    let blogs_mock = server.mock(|when, then| {
        when.method(GET).path("/api/blogs");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                { "id": "older", "text": "<h1>Soil Testing</h1><p>Test every season.</p>", "createdAt": "2023-11-02T09:00:00Z" },
                { "id": "crop", "text": "<h1>Cotton Pests</h1>", "selectedCrop": "cotton", "createdAt": "2025-01-01T00:00:00Z" },
                { "id": "newer", "text": "<h2>Monsoon Sowing</h2>", "createdAt": "2024-03-15T00:00:00Z" },
                { "id": "undated", "text": "<p>Fertilizer stock update</p>" }
            ]));
    });
    let shop_mock = server.mock(|when, then| {
        when.method(GET).path("/api/shop");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "shop_name": "शेतकरी कृषी सेवा केंद्र",
                "shop_address": "भोसेपाटी, पंढरपूर",
                "shop_number": "9876543210"
            }));
    });

    let config = config_for(
        &server.url("/api/blogs"),
        Some(&server.url("/api/shop")),
        &output_path,
    );
    let builder = PageBuilder::from_config(&config).unwrap();
    let storage = LocalStorage::new(output_path.clone());
    let pipeline = BlogPagePipeline::new(builder, storage, output_path.clone());
    let engine = RenderEngine::new(pipeline);

    let result = engine.run().await.unwrap();

    blogs_mock.assert();
    shop_mock.assert();
    assert!(result.ends_with(PAGE_FILE_NAME));

    let html = std::fs::read_to_string(temp_dir.path().join(PAGE_FILE_NAME)).unwrap();

    let newer = html.find("general-blog-preview-newer").unwrap();
    let older = html.find("general-blog-preview-older").unwrap();
    let undated = html.find("general-blog-preview-undated").unwrap();
    assert!(newer < older && older < undated);
    assert!(!html.contains("general-blog-preview-crop"));

    assert!(html.contains("Monsoon Sowing"));
    assert!(html.contains("📅 नवीनतम"));
    assert!(html.contains("भोसेपाटी, पंढरपूर"));
    assert!(html.contains(r#"href="tel:9876543210""#));
}

#[tokio::test]
async fn test_end_to_end_with_blog_source_failure() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().replace('\\', "/");

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/blogs");
        then.status(503);
    });

    let config = config_for(&server.url("/api/blogs"), None, &output_path);
    let builder = PageBuilder::from_config(&config).unwrap();
    let pipeline = BlogPagePipeline::new(
        builder,
        LocalStorage::new(output_path.clone()),
        output_path.clone(),
    );
    let result = RenderEngine::new(pipeline).run().await;

    api_mock.assert();
    assert!(matches!(
        result,
        Err(StorefrontError::SourceError { status: 503, .. })
    ));
    assert!(!temp_dir.path().join(PAGE_FILE_NAME).exists());
}

#[tokio::test]
async fn test_end_to_end_with_file_source_and_no_general_blogs() {
    let temp_dir = TempDir::new().unwrap();
    let content_dir = temp_dir.path().join("content");
    std::fs::create_dir_all(&content_dir).unwrap();
    let blogs_path = content_dir.join("blogs.json");
    std::fs::write(
        &blogs_path,
        r#"{ "blogs": [ { "id": 1, "text": "<h1>Grapes</h1>", "selectedCrop": "grapes" } ] }"#,
    )
    .unwrap();

    let output_path = temp_dir.path().join("public");
    let output_path = output_path.to_str().unwrap().replace('\\', "/");
    let config = config_for(
        &blogs_path.to_str().unwrap().replace('\\', "/"),
        None,
        &output_path,
    );

    let builder = PageBuilder::from_config(&config).unwrap();
    let pipeline = BlogPagePipeline::new(
        builder,
        LocalStorage::new(output_path.clone()),
        output_path.clone(),
    );
    RenderEngine::new(pipeline).run().await.unwrap();

    let html =
        std::fs::read_to_string(std::path::Path::new(&output_path).join(PAGE_FILE_NAME)).unwrap();
    assert!(html.contains("अद्याप कृषी माहिती उपलब्ध नाही"));
    assert!(!html.contains(r#"data-testid="all-general-blogs-list""#));
    assert!(html.contains("Shop Name"));
    assert!(html.contains("Shop Address"));
    assert!(html.contains("📞 0000000000"));
}
