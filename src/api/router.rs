//! Quiz API router.
//!
//! Returns a composable `Router` that can be mounted on any axum
//! server. Routes are nested under `/api/`. Authentication and rate
//! limiting belong to the deployment in front of this service.

use axum::routing::{get, post};
use axum::Router;

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Build the quiz API router.
pub fn api_router(ctx: ApiContext) -> Router {
    Router::new()
        .route("/api/health", get(endpoints::health::check))
        .route("/api/quiz/generate", post(endpoints::quiz::generate))
        .route("/api/quiz/grade", post(endpoints::quiz::grade))
        .route("/api/chat/send", post(endpoints::chat::send))
        .with_state(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use base64::engine::general_purpose::STANDARD as BASE64;
    use base64::Engine as _;
    use serde_json::json;
    use tower::ServiceExt;

    use crate::pipeline::extraction::pdf::make_test_pdf;
    use crate::pipeline::generation::MockCompletionClient;

    fn test_ctx(response: &str) -> ApiContext {
        ApiContext::new(
            Arc::new(MockCompletionClient::new(response)),
            std::env::temp_dir(),
        )
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn response_json(response: axum::http::Response<Body>) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), 1 << 20)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn quiz_response() -> &'static str {
        r#"{"title": "Motion", "questions": [
            {"id": "1", "question": "What is velocity?", "type": "short",
             "options": ["Rate of change of displacement", "Mass"], "correctAnswer": "Rate of change of displacement"},
            {"id": "2", "question": "Explain uniform motion.", "type": "long"}
        ]}"#
    }

    #[tokio::test]
    async fn health_response_shape() {
        let app = api_router(test_ctx("unused"));
        let req = Request::builder()
            .method("GET")
            .uri("/api/health")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["status"], "ok");
        assert!(!json["version"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn generate_without_document_returns_no_document() {
        let app = api_router(test_ctx("unused"));
        let response = app
            .oneshot(post_json("/api/quiz/generate", json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = response_json(response).await;
        assert_eq!(json["error"]["code"], "NO_DOCUMENT");
    }

    #[tokio::test]
    async fn generate_with_invalid_base64_returns_bad_request() {
        let app = api_router(test_ctx("unused"));
        let response = app
            .oneshot(post_json(
                "/api/quiz/generate",
                json!({"document": "%%% not base64 %%%"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = response_json(response).await;
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn generate_from_inline_document() {
        let app = api_router(test_ctx(quiz_response()));
        let pdf = make_test_pdf("Velocity is the rate of change of displacement");
        let body = json!({
            "document": BASE64.encode(&pdf),
            "filename": "physics.pdf",
            "params": {"question_type": "mixed", "question_count": 2, "difficulty": "medium"}
        });

        let response = app
            .oneshot(post_json("/api/quiz/generate", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        let quiz = &json["quiz"];
        assert_eq!(quiz["title"], "Motion");
        assert_eq!(quiz["questions"].as_array().unwrap().len(), 2);
        assert_eq!(quiz["questions"][0]["kind"], "multiple_choice");
        assert_eq!(
            quiz["questions"][0]["correct_answer"],
            "Rate of change of displacement"
        );
    }

    #[tokio::test]
    async fn generate_accepts_data_url_documents() {
        let app = api_router(test_ctx(quiz_response()));
        let pdf = make_test_pdf("Displacement basics");
        let body = json!({
            "document": format!("data:application/pdf;base64,{}", BASE64.encode(&pdf)),
        });

        let response = app
            .oneshot(post_json("/api/quiz/generate", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn generate_from_stored_document_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("chapter.pdf"),
            make_test_pdf("Uniform motion covers equal displacements"),
        )
        .unwrap();

        let ctx = ApiContext::new(
            Arc::new(MockCompletionClient::new(quiz_response())),
            dir.path().to_path_buf(),
        );
        let app = api_router(ctx);

        let response = app
            .oneshot(post_json(
                "/api/quiz/generate",
                json!({"document_path": "chapter.pdf"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn generate_rejects_path_traversal() {
        let app = api_router(test_ctx("unused"));
        let response = app
            .oneshot(post_json(
                "/api/quiz/generate",
                json!({"document_path": "../../etc/passwd"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn generate_missing_stored_document_returns_404() {
        let app = api_router(test_ctx("unused"));
        let response = app
            .oneshot(post_json(
                "/api/quiz/generate",
                json!({"document_path": "no-such-file.pdf"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = response_json(response).await;
        assert_eq!(json["error"]["code"], "DOCUMENT_NOT_FOUND");
    }

    #[tokio::test]
    async fn generate_unreadable_document_reports_extraction_failure() {
        let app = api_router(test_ctx("unused"));
        let body = json!({"document": BASE64.encode(b"definitely not a pdf")});

        let response = app
            .oneshot(post_json("/api/quiz/generate", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = response_json(response).await;
        assert_eq!(json["error"]["code"], "EXTRACTION_FAILED");
    }

    #[tokio::test]
    async fn generate_degrades_to_fallback_on_prose_response() {
        let app = api_router(test_ctx("No JSON here, just an apology."));
        let body = json!({"document": BASE64.encode(make_test_pdf("Some content"))});

        let response = app
            .oneshot(post_json("/api/quiz/generate", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        let questions = json["quiz"]["questions"].as_array().unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0]["kind"], "open_ended");
        assert_eq!(questions[0]["options"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn grade_round_trip() {
        let body = json!({
            "quiz": {
                "id": "1730000000000",
                "title": "Motion",
                "questions": [
                    {"id": "1", "text": "Capital of France?", "kind": "multiple_choice",
                     "options": ["Paris", "Lyon"], "correct_answer": "Paris"},
                    {"id": "2", "text": "Explain.", "kind": "open_ended"}
                ]
            },
            "answers": {"1": " paris "}
        });

        let app = api_router(test_ctx("unused"));
        let response = app.oneshot(post_json("/api/quiz/grade", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["score"], 1);
        assert_eq!(json["total"], 2);
        assert_eq!(json["message"], "Good job!");
        assert_eq!(json["correct_by_question"]["1"], "Paris");
        assert_eq!(json["correct_by_question"]["2"], "");
    }

    #[tokio::test]
    async fn grade_missing_answers_defaults_to_blank() {
        let body = json!({
            "quiz": {
                "id": "1",
                "title": "T",
                "questions": [{"id": "1", "text": "Q?", "kind": "multiple_choice",
                               "options": ["A"], "correct_answer": "A"}]
            }
        });

        let app = api_router(test_ctx("unused"));
        let response = app.oneshot(post_json("/api/quiz/grade", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["score"], 0);
        assert_eq!(json["message"], "Keep practicing!");
    }

    #[tokio::test]
    async fn grade_invalid_quiz_returns_400() {
        let body = json!({"quiz": {"id": "1", "title": "T"}, "answers": {}});

        let app = api_router(test_ctx("unused"));
        let response = app.oneshot(post_json("/api/quiz/grade", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = response_json(response).await;
        assert_eq!(json["error"]["code"], "INVALID_QUIZ");
    }

    #[tokio::test]
    async fn chat_send_passes_through() {
        let app = api_router(test_ctx("Velocity is speed with direction."));
        let body = json!({
            "message": "What is velocity?",
            "context": ["Velocity is the rate of change of displacement."]
        });

        let response = app.oneshot(post_json("/api/chat/send", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["answer"], "Velocity is speed with direction.");
    }

    #[tokio::test]
    async fn chat_send_rejects_empty_message() {
        let app = api_router(test_ctx("unused"));
        let response = app
            .oneshot(post_json("/api/chat/send", json!({"message": "  "})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let app = api_router(test_ctx("unused"));
        let req = Request::builder()
            .method("GET")
            .uri("/api/nonexistent")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
