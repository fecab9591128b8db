//! Router behaviour under non-default configuration

use axum::http::{header, StatusCode};
use heroes_api::core::config::Config;
use heroes_api::core::types::ApiResponse;

use crate::common::{body_json, body_text, create_test_app_with, get, CatalogueFile, ImagesDir};

#[tokio::test]
async fn test_custom_catalogue_file() {
    let file = CatalogueFile::small();
    let mut config = Config::default();
    config.catalogue.data_file = Some(file.path().to_path_buf());
    let app = create_test_app_with(config);

    let first: ApiResponse = body_json(get(&app, "/boruto/heroes").await).await;
    assert_eq!(first.heroes.len(), 3);
    assert_eq!(first.prev_page, None);
    assert_eq!(first.next_page, Some(2));

    let last: ApiResponse = body_json(get(&app, "/boruto/heroes?page=2").await).await;
    assert_eq!(last.heroes.len(), 1);
    assert_eq!(last.prev_page, Some(1));
    assert_eq!(last.next_page, None);
    assert_eq!(last.heroes[0].nature_types, vec!["Wind".to_string()]);

    let response = get(&app, "/boruto/heroes?page=3").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_custom_catalogue_search_spans_pages() {
    let file = CatalogueFile::small();
    let mut config = Config::default();
    config.catalogue.data_file = Some(file.path().to_path_buf());
    let app = create_test_app_with(config);

    let found: ApiResponse = body_json(get(&app, "/boruto/heroes/search?name=shika").await).await;
    let names: Vec<_> = found.heroes.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, vec!["Shikamaru", "Shikadai"]);
}

#[tokio::test]
async fn test_serves_images() {
    let images = ImagesDir::with_files(&[("sasuke.jpg", b"not-really-a-jpeg")]);
    let mut config = Config::default();
    config.http.images_dir = Some(images.path().to_path_buf());
    let app = create_test_app_with(config);

    let response = get(&app, "/images/sasuke.jpg").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CACHE_CONTROL],
        "public, max-age=31536000, immutable"
    );
    assert_eq!(body_text(response).await, "not-really-a-jpeg");

    let missing = get(&app, "/images/naruto.jpg").await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_custom_cache_max_age() {
    let mut config = Config::default();
    config.http.cache_max_age_secs = 60;
    let app = create_test_app_with(config);

    let response = get(&app, "/").await;
    assert_eq!(
        response.headers()[header::CACHE_CONTROL],
        "public, max-age=60, immutable"
    );
}

#[tokio::test]
async fn test_cors_headers() {
    let app = create_test_app_with(Config::default());

    let request = axum::http::Request::builder()
        .uri("/boruto/heroes")
        .header(header::ORIGIN, "http://example.com")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();

    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}
