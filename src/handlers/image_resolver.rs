use crate::models::ImageResult;
use crate::services::pixabay::{PixabayClient, SearchOutcome};

/// Finds one representative photo for a recipe. Never fails: every problem
/// is reported as `ImageResult::LookupFailed`.
pub struct ImageResolver {
    pixabay: PixabayClient,
}

impl ImageResolver {
    pub fn new(pixabay: PixabayClient) -> Self {
        Self { pixabay }
    }

    pub async fn resolve(&self, recipe_name: &str) -> ImageResult {
        log::info!("🖼️ Looking up image for '{}'", recipe_name);

        let result = match self.pixabay.search(recipe_name).await {
            Ok(SearchOutcome::Hits(data)) => match data.hits.into_iter().next() {
                Some(hit) if data.total_hits > 0 => ImageResult::Found {
                    url: hit.webformat_url,
                },
                _ => {
                    log::warn!("⚠️ No image found for {}", recipe_name);
                    ImageResult::NotFound
                }
            },
            Ok(SearchOutcome::Status(code)) => {
                log::error!("❌ Image API returned status {}", code);
                ImageResult::LookupFailed {
                    reason: format!("Error in API request: {}", code),
                }
            }
            Err(e) => {
                log::error!("❌ Image lookup failed: {:#}", e);
                ImageResult::LookupFailed {
                    reason: format!("Error while retrieving the image: {}", e),
                }
            }
        };

        if let ImageResult::Found { url } = &result {
            log::info!("✅ Image found: {}", url);
        }
        result
    }
}

#[cfg(all(test, feature = "web-ui"))]
mod tests {
    use super::*;
    use crate::test_support::spawn_stub;
    use axum::{extract::Query, http::StatusCode, routing::get, Json, Router};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn resolver_for(base_url: &str) -> ImageResolver {
        ImageResolver::new(PixabayClient::new(
            Some("pix_key".to_string()),
            format!("{}/api/", base_url),
        ))
    }

    fn stub_returning(body: serde_json::Value) -> Router {
        Router::new().route(
            "/api/",
            get(move || {
                let body = body.clone();
                async move { Json(body) }
            }),
        )
    }

    #[tokio::test]
    async fn test_first_hit_is_selected() {
        let base = spawn_stub(stub_returning(serde_json::json!({
            "totalHits": 2,
            "hits": [
                {"webformatURL": "http://x/first.jpg"},
                {"webformatURL": "http://x/second.jpg"}
            ]
        })))
        .await;

        let result = resolver_for(&base).resolve("Pancakes").await;
        assert_eq!(result, ImageResult::Found { url: "http://x/first.jpg".to_string() });
    }

    #[tokio::test]
    async fn test_query_parameters() {
        let router = Router::new().route(
            "/api/",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                assert_eq!(params["key"], "pix_key");
                assert_eq!(params["q"], "Chicken Tikka Masala");
                assert_eq!(params["image_type"], "photo");
                assert_eq!(params["category"], "food");
                assert_eq!(params["per_page"], "5");
                assert_eq!(params["safesearch"], "true");
                Json(serde_json::json!({"totalHits": 1, "hits": [{"webformatURL": "http://x/t.jpg"}]}))
            }),
        );
        let base = spawn_stub(router).await;

        let result = resolver_for(&base).resolve("Chicken Tikka Masala").await;
        assert_eq!(result, ImageResult::Found { url: "http://x/t.jpg".to_string() });
    }

    #[tokio::test]
    async fn test_zero_hits_is_not_found() {
        let base = spawn_stub(stub_returning(serde_json::json!({"totalHits": 0, "hits": []}))).await;

        let result = resolver_for(&base).resolve("Pancakes").await;
        assert_eq!(result, ImageResult::NotFound);
    }

    #[tokio::test]
    async fn test_server_error_reports_status_code() {
        let router = Router::new().route(
            "/api/",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let base = spawn_stub(router).await;

        match resolver_for(&base).resolve("Pancakes").await {
            ImageResult::LookupFailed { reason } => assert!(reason.contains("500")),
            other => panic!("expected LookupFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unreachable_api_is_contained() {
        // Bind then drop a listener so the port is very likely closed.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = resolver_for(&format!("http://{}", addr)).resolve("Pancakes").await;
        assert!(matches!(result, ImageResult::LookupFailed { .. }));
    }

    #[tokio::test]
    async fn test_failure_reason_does_not_leak_api_key() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let resolver = ImageResolver::new(PixabayClient::new(
            Some("SECRETKEY".to_string()),
            format!("http://{}/api/", addr),
        ));

        match resolver.resolve("Pancakes").await {
            ImageResult::LookupFailed { reason } => {
                assert!(!reason.contains("SECRETKEY"), "key leaked: {}", reason);
                assert!(!reason.contains("key="));
            }
            other => panic!("expected LookupFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_key_still_searches() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let router = Router::new().route(
            "/api/",
            get(move |Query(params): Query<HashMap<String, String>>| {
                counter.fetch_add(1, Ordering::SeqCst);
                async move {
                    assert_eq!(params.get("key").map(String::as_str), Some(""));
                    assert_eq!(params["q"], "Pancakes");
                    (StatusCode::BAD_REQUEST, "[ERROR 400] \"key\" is required.")
                }
            }),
        );
        let base = spawn_stub(router).await;

        let resolver = ImageResolver::new(PixabayClient::new(None, format!("{}/api/", base)));

        assert_eq!(
            resolver.resolve("Pancakes").await,
            ImageResult::LookupFailed { reason: "Error in API request: 400".to_string() }
        );
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_total_hits_without_hit_records_is_not_found() {
        let base = spawn_stub(stub_returning(serde_json::json!({"totalHits": 3, "hits": []}))).await;

        let result = resolver_for(&base).resolve("Pancakes").await;
        assert_eq!(result, ImageResult::NotFound);
    }

    #[tokio::test]
    async fn test_invalid_json_is_contained() {
        let router = Router::new().route("/api/", get(|| async { "not json" }));
        let base = spawn_stub(router).await;

        match resolver_for(&base).resolve("Pancakes").await {
            ImageResult::LookupFailed { reason } => {
                assert!(reason.starts_with("Error while retrieving the image"))
            }
            other => panic!("expected LookupFailed, got {:?}", other),
        }
    }
}
