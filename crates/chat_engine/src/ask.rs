use std::time::Duration;

use chat_logging::{chat_debug, chat_warn};
use reqwest::Url;

use crate::wire::{AskRequest, AskResponse, ASK_PATH};
use crate::{ExchangeError, FailureKind};

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8080";

/// Transport settings. Unset timeouts leave reqwest's defaults in charge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeSettings {
    pub server_url: String,
    pub connect_timeout: Option<Duration>,
    pub request_timeout: Option<Duration>,
}

impl Default for ExchangeSettings {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            connect_timeout: None,
            request_timeout: None,
        }
    }
}

impl ExchangeSettings {
    /// Resolves the `/ask` endpoint against the configured server.
    pub fn ask_endpoint(&self) -> Result<Url, ExchangeError> {
        let base = Url::parse(self.server_url.trim())
            .map_err(|err| ExchangeError::new(FailureKind::InvalidServerUrl, err.to_string()))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(ExchangeError::new(
                FailureKind::InvalidServerUrl,
                format!("unsupported scheme {}", base.scheme()),
            ));
        }
        base.join(ASK_PATH)
            .map_err(|err| ExchangeError::new(FailureKind::InvalidServerUrl, err.to_string()))
    }
}

/// One question in, one answer out.
#[async_trait::async_trait]
pub trait Asker: Send + Sync {
    async fn ask(&self, question: &str) -> Result<String, ExchangeError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestAsker {
    client: reqwest::Client,
    endpoint: Url,
}

impl ReqwestAsker {
    pub fn new(settings: &ExchangeSettings) -> Result<Self, ExchangeError> {
        let endpoint = settings.ask_endpoint()?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ExchangeError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl Asker for ReqwestAsker {
    async fn ask(&self, question: &str) -> Result<String, ExchangeError> {
        // `.json` also sets `Content-Type: application/json`.
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&AskRequest { question })
            .send()
            .await
            .map_err(map_reqwest_error)?;

        // The status alone does not decide the outcome: an error status that
        // still carries an answer is shown like any other answer.
        let status = response.status();
        let body = response.text().await.map_err(map_reqwest_error)?;
        chat_debug!(
            "ask: {} byte reply with status {} from {}",
            body.len(),
            status,
            self.endpoint
        );

        let reply: AskResponse = match serde_json::from_str(&body) {
            Ok(reply) => reply,
            Err(err) if !status.is_success() => {
                return Err(ExchangeError::new(
                    FailureKind::HttpStatus(status.as_u16()),
                    format!("{status}: {err}"),
                ));
            }
            Err(err) => {
                return Err(ExchangeError::new(
                    FailureKind::MalformedResponse,
                    err.to_string(),
                ));
            }
        };
        if !status.is_success() {
            chat_warn!("ask: answer delivered with status {}", status);
        }

        if reply.answer.is_empty() {
            return Err(ExchangeError::new(
                FailureKind::EmptyAnswer,
                "server returned an empty answer",
            ));
        }

        Ok(reply.answer)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ExchangeError {
    if err.is_timeout() {
        return ExchangeError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return ExchangeError::new(FailureKind::MalformedResponse, err.to_string());
    }
    ExchangeError::new(FailureKind::Network, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(server_url: &str) -> ExchangeSettings {
        ExchangeSettings {
            server_url: server_url.to_string(),
            ..ExchangeSettings::default()
        }
    }

    #[test]
    fn endpoint_is_rooted_at_the_server_origin() {
        let endpoint = settings("http://localhost:8080/chat/").ask_endpoint().unwrap();
        assert_eq!(endpoint.as_str(), "http://localhost:8080/ask");

        let endpoint = ExchangeSettings::default().ask_endpoint().unwrap();
        assert_eq!(endpoint.as_str(), "http://127.0.0.1:8080/ask");
    }

    #[test]
    fn endpoint_rejects_non_http_servers() {
        for bad in ["localhost:8080", "ftp://example.com", "not a url"] {
            let err = settings(bad).ask_endpoint().unwrap_err();
            assert_eq!(err.kind, FailureKind::InvalidServerUrl, "{bad}");
        }
    }

    #[test]
    fn request_body_has_only_the_question() {
        let body = serde_json::to_string(&AskRequest { question: "Hello" }).unwrap();
        assert_eq!(body, r#"{"question":"Hello"}"#);
    }
}
