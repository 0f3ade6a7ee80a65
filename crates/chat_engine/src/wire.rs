//! JSON bodies exchanged with the `/ask` route.
use serde::{Deserialize, Serialize};

/// Path of the question route, resolved against the configured server.
pub const ASK_PATH: &str = "/ask";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AskRequest<'a> {
    pub question: &'a str,
}

/// Reply body. Fields other than `answer` are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AskResponse {
    pub answer: String,
}
