//! # Coderoom Remote
//!
//! Asynchronous client for the execution and AI-assist backends.
//!
//! Both endpoints take the same request shape (`{language, code}`) and
//! are fire-and-forget from the editor's point of view: the caller
//! renders whatever comes back — output, error text, or a synthesized
//! failure message — and never retries.

use coderoom_core::Language;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Request body shared by the run and debug endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct CodeRequest {
    pub language: Language,
    pub code: String,
}

impl CodeRequest {
    pub fn new(language: Language, code: impl Into<String>) -> Self {
        Self {
            language,
            code: code.into(),
        }
    }
}

/// Response from `POST /run`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RunResponse {
    pub output: Option<String>,
    pub error: Option<String>,
}

impl RunResponse {
    /// The text to show in the output panel: standard output if any,
    /// otherwise the error text, otherwise a placeholder. Empty strings
    /// count as absent (a clean run still reports an empty `error`).
    pub fn panel_text(self) -> String {
        let non_empty = |s: String| if s.is_empty() { None } else { Some(s) };
        self.output
            .and_then(non_empty)
            .or_else(|| self.error.and_then(non_empty))
            .unwrap_or_else(|| "No output".to_string())
    }
}

/// Response from `POST /debug`.
#[derive(Debug, Clone, Deserialize)]
pub struct DebugResponse {
    pub suggestion: String,
}

/// Errors from backend calls.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status: {status} body={body}")]
    UnexpectedStatus {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Client for the run/debug HTTP endpoints.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Submits code for execution and returns its output.
    pub async fn run(&self, request: &CodeRequest) -> Result<RunResponse, BackendError> {
        self.post_json("/run", request).await
    }

    /// Requests an AI suggestion for the code.
    pub async fn debug(&self, request: &CodeRequest) -> Result<DebugResponse, BackendError> {
        self.post_json("/debug", request).await
    }

    async fn post_json<T>(&self, path: &str, request: &CodeRequest) -> Result<T, BackendError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), path);
        tracing::debug!(%url, language = request.language.id(), "posting to backend");
        let res = self.http.post(url).json(request).send().await?;

        if res.status().is_success() {
            Ok(res.json::<T>().await?)
        } else {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            Err(BackendError::UnexpectedStatus { status, body })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let request = CodeRequest::new(Language::Python, "print(1)");
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"language":"python","code":"print(1)"}"#);
    }

    #[test]
    fn test_panel_text_prefers_output() {
        let response = RunResponse {
            output: Some("1\n".to_string()),
            error: Some("".to_string()),
        };
        assert_eq!(response.panel_text(), "1\n");
    }

    #[test]
    fn test_panel_text_falls_back_to_error() {
        let response = RunResponse {
            output: Some(String::new()),
            error: Some("SyntaxError".to_string()),
        };
        assert_eq!(response.panel_text(), "SyntaxError");
    }

    #[test]
    fn test_panel_text_placeholder_when_both_empty() {
        assert_eq!(RunResponse::default().panel_text(), "No output");

        let response = RunResponse {
            output: Some(String::new()),
            error: Some(String::new()),
        };
        assert_eq!(response.panel_text(), "No output");
    }

    #[test]
    fn test_run_response_parses_partial_bodies() {
        let response: RunResponse = serde_json::from_str(r#"{"output":"1\n"}"#).unwrap();
        assert_eq!(response.output.as_deref(), Some("1\n"));
        assert!(response.error.is_none());

        let response: RunResponse =
            serde_json::from_str(r#"{"error":"Language not supported yet"}"#).unwrap();
        assert_eq!(response.panel_text(), "Language not supported yet");
    }
}
