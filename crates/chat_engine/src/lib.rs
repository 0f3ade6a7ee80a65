//! Chat engine: the remote question/answer exchange and its runtime.
mod ask;
mod engine;
mod types;
mod wire;

pub use ask::{Asker, ExchangeSettings, ReqwestAsker, DEFAULT_SERVER_URL};
pub use engine::EngineHandle;
pub use types::{EngineEvent, ExchangeError, FailureKind, RequestId};
pub use wire::{AskRequest, AskResponse, ASK_PATH};
