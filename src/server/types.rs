use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct RagQuery {
    #[serde(default)]
    pub question: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
