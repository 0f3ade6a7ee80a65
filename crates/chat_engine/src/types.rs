use std::fmt;

pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// One remote exchange finished. Sent exactly once per `EngineHandle::ask`.
    ExchangeCompleted {
        request_id: RequestId,
        result: Result<String, ExchangeError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ExchangeError {
    pub kind: FailureKind,
    pub message: String,
}

impl ExchangeError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidServerUrl,
    /// Error status whose body held no decodable answer.
    HttpStatus(u16),
    Timeout,
    MalformedResponse,
    EmptyAnswer,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidServerUrl => write!(f, "invalid server url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::MalformedResponse => write!(f, "malformed response"),
            FailureKind::EmptyAnswer => write!(f, "empty answer"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
