use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx response; `message` is what the server said went wrong.
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("Could not reach the study spaces API: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Unexpected response from the study spaces API: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Please sign in to continue")]
    Unauthenticated,
    #[error("Could not get a session token: {0}")]
    Token(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND.as_u16())
    }
}

/// `{"error": "..."}` body, else the raw body text, else the status line.
pub(crate) fn error_message(status: StatusCode, body: &str) -> String {
    let fallback = || match status.canonical_reason() {
        Some(reason) => format!("HTTP {} {}", status.as_u16(), reason),
        None => format!("HTTP {}", status.as_u16()),
    };
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(json) => json
            .get("error")
            .and_then(|e| e.as_str())
            .filter(|e| !e.is_empty())
            .map(String::from)
            .unwrap_or_else(fallback),
        Err(_) if !body.trim().is_empty() => body.trim().to_string(),
        Err(_) => fallback(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_prefers_json_error_field() {
        assert_eq!(error_message(StatusCode::NOT_FOUND, r#"{"error":"Space not found"}"#), "Space not found");
        assert_eq!(error_message(StatusCode::BAD_REQUEST, r#"{"detail":"x"}"#), "HTTP 400 Bad Request");
        assert_eq!(error_message(StatusCode::BAD_GATEWAY, "upstream down\n"), "upstream down");
        assert_eq!(error_message(StatusCode::INTERNAL_SERVER_ERROR, ""), "HTTP 500 Internal Server Error");
    }
}
