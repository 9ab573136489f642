use super::types::{ErrorResponse, RagQuery};
use crate::rag::RagBackend;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, Json},
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub rag: Arc<dyn RagBackend>,
}

const LANDING_PAGE: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <title>RAG Demo</title>
  </head>
  <body>
    <main style="padding: 20px">
      <h1>Welcome to your RAG Demo</h1>
      <p>Try querying <code>/rag?question=Hello</code></p>
    </main>
  </body>
</html>
"#;

pub async fn rag_search(
    State(state): State<AppState>,
    // `Option` absorbs the extractor's rejection so a malformed query string
    // gets the same JSON 400 as an absent parameter.
    query: Option<Query<RagQuery>>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<ErrorResponse>)> {
    let question = match query {
        Some(Query(RagQuery {
            question: Some(question),
        })) if !question.is_empty() => question,
        _ => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Missing question parameter".to_string(),
                }),
            ));
        }
    };

    info!("Received RAG query: {}", question);

    match state.rag.search(&question).await {
        Ok(payload) => Ok(Json(payload)),
        Err(e) => {
            error!("Backend call failed: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
    }
}

pub async fn index() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

pub async fn method_not_allowed() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse {
            error: "Method not allowed".to_string(),
        }),
    )
}

pub async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
        }),
    )
}
