pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::ats::handlers as ats;
use crate::errors::AppError;
use crate::parsing::handlers as parse;
use crate::state::AppState;

async fn route_not_found() -> Result<(), AppError> {
    Err(AppError::NotFound("Route not found".to_string()))
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Parse API
        .route("/api/parse", post(parse::handle_parse_text))
        .route("/api/parse/upload", post(parse::handle_parse_upload))
        .route("/api/parse/manual", post(parse::handle_parse_manual))
        // ATS API
        .route("/api/ats-score", post(ats::handle_ats_score))
        .route("/api/ats-score/compare", post(ats::handle_compare_scores))
        .fallback(route_not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::ats::InternalAtsScorer;
    use crate::config::Config;

    const FIXTURE: &str = "John Doe\njohn@x.com\n\nEducation\nBachelor of Science\nMIT\n2020\n\n\
        Experience\nEngineer\nAcme Corp\n2020-Present\n• Built things\n\nSkills\nPython, Go, Rust";

    const BOUNDARY: &str = "X-RESUME-BOUNDARY";

    fn app() -> Router {
        build_router(AppState {
            config: Config::default(),
            ats_scorer: Arc::new(InternalAtsScorer::default()),
        })
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn post_file(filename: &str, content_type: &str, contents: &str) -> Request<Body> {
        let body = format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"resume\"; filename=\"{filename}\"\r\n\
             Content-Type: {content_type}\r\n\r\n\
             {contents}\r\n\
             --{BOUNDARY}--\r\n"
        );
        Request::post("/api/parse/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(Request::get("/health").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_parse_text() {
        let (status, body) = send(post_json("/api/parse", json!({ "text": FIXTURE }))).await;
        assert_eq!(status, StatusCode::OK);
        let resume = &body["resume"];
        assert_eq!(resume["personal_info"]["name"], "John Doe");
        assert_eq!(resume["personal_info"]["email"], "john@x.com");
        assert_eq!(resume["skills"], json!(["Python", "Go", "Rust"]));
        assert_eq!(resume["experience"][0]["company"], "Acme Corp");
        assert_eq!(resume["rawText"], FIXTURE);
    }

    #[tokio::test]
    async fn test_parse_empty_text_rejected() {
        let (status, body) = send(post_json("/api/parse", json!({ "text": "   " }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let (status, _) = send(post_json("/api/parse", json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_parse_manual_sets_raw_text() {
        let record = json!({
            "personal_info": { "name": "Jane Roe", "email": "jane@example.com" },
            "skills": ["Rust", "SQL"],
            "rawText": "ignored"
        });
        let (status, body) = send(post_json("/api/parse/manual", record)).await;
        assert_eq!(status, StatusCode::OK);
        let raw = body["resume"]["rawText"].as_str().unwrap();
        assert!(raw.contains("Jane Roe"));
        assert!(!raw.contains("ignored"));
        assert_eq!(body["resume"]["skills"], json!(["Rust", "SQL"]));
    }

    #[tokio::test]
    async fn test_parse_manual_requires_name() {
        let (status, body) = send(post_json(
            "/api/parse/manual",
            json!({ "personal_info": { "email": "a@b.com" } }),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"]["message"],
            "Personal information with name is required"
        );
    }

    #[tokio::test]
    async fn test_upload_plain_text() {
        let (status, body) = send(post_file("cv.txt", "text/plain", FIXTURE)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["resume"]["personal_info"]["name"], "John Doe");
        assert_eq!(body["source"]["filename"], "cv.txt");
        assert_eq!(body["source"]["kind"], "plain_text");
        assert_eq!(body["source"]["bytes"], FIXTURE.len());
    }

    #[tokio::test]
    async fn test_upload_docx_unsupported() {
        let (status, body) = send(post_file(
            "cv.docx",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            "PK",
        ))
        .await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(body["error"]["code"], "UNSUPPORTED_MEDIA_TYPE");
    }

    #[tokio::test]
    async fn test_upload_blank_text_unprocessable() {
        let (status, _) = send(post_file("cv.txt", "text/plain", "   ")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_ats_score_from_text() {
        let (status, body) = send(post_json(
            "/api/ats-score",
            json!({ "resume_text": FIXTURE }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["scorer_backend"], "internal");
        let overall = body["ats_score"]["overall_score"].as_u64().unwrap();
        assert!(overall <= 100);
        assert!(body["ats_score"]["suggestions"].is_array());
    }

    #[tokio::test]
    async fn test_ats_score_from_record_camel_case() {
        let (status, body) = send(post_json(
            "/api/ats-score",
            json!({ "resumeData": { "personal_info": { "name": "Jane" }, "skills": ["Rust"] } }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        // Serialized records carry the "projects" key, so the projects hint is never given.
        let suggestions = body["ats_score"]["suggestions"].as_array().unwrap();
        assert!(!suggestions
            .iter()
            .any(|s| s.as_str().unwrap().contains("Projects section")));
    }

    #[tokio::test]
    async fn test_ats_score_requires_input() {
        let (status, body) = send(post_json("/api/ats-score", json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Resume text or data is required");
    }

    #[tokio::test]
    async fn test_compare_scores() {
        let enhanced = format!(
            "{FIXTURE}\nLed migration that increased revenue 30% and reduced by 20 the incidents."
        );
        let (status, body) = send(post_json(
            "/api/ats-score/compare",
            json!({ "original_text": FIXTURE, "enhanced_text": enhanced }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        let original = body["original"]["keyword_match"].as_i64().unwrap();
        let improved = body["enhanced"]["keyword_match"].as_i64().unwrap();
        assert_eq!(body["improvement"]["keyword_match"], improved - original);
        assert!(improved > original);
    }

    #[tokio::test]
    async fn test_compare_requires_both_texts() {
        let (status, _) = send(post_json(
            "/api/ats-score/compare",
            json!({ "original_text": FIXTURE }),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let (status, body) = send(Request::get("/api/nope").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["message"], "Route not found");
    }
}
