/// Key identity as seen by the widget. Only `Enter` activates a submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    Char(char),
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the input field.
    InputChanged(String),
    /// User activated the Send control.
    SendClicked,
    /// User pressed a key while the input field has focus.
    KeyActivated(Key),
    /// User asked for the message list to be cleared.
    ClearClicked,
    /// User acknowledged the validation notice.
    NoticeDismissed,
    /// Scroll the message list towards older entries by the given rows.
    ScrollUp(u16),
    /// Scroll the message list towards newer entries by the given rows.
    ScrollDown(u16),
    /// Renderer measured how far back the list can scroll at its current size.
    ScrollLimitMeasured(u16),
    /// Remote exchange finished with an answer.
    ReplyReceived {
        request_id: crate::RequestId,
        answer: String,
    },
    /// Remote exchange failed; details are logged by the platform.
    ExchangeFailed { request_id: crate::RequestId },
    /// UI/render tick to coalesce rendering.
    Tick,
}

impl Msg {
    /// Messages that originate from a user gesture. These are held back while
    /// the validation notice is blocking the widget.
    pub(crate) fn is_user_gesture(&self) -> bool {
        matches!(
            self,
            Msg::InputChanged(_)
                | Msg::SendClicked
                | Msg::KeyActivated(_)
                | Msg::ClearClicked
                | Msg::ScrollUp(_)
                | Msg::ScrollDown(_)
        )
    }
}
