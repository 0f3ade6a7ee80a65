/// I/O requested by the state machine. The platform layer executes these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Start one remote exchange; its completion comes back as
    /// `Msg::ReplyReceived` or `Msg::ExchangeFailed` with the same id.
    AskQuestion {
        request_id: crate::RequestId,
        question: String,
    },
}
