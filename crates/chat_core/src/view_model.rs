use crate::MessageNode;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    /// Current value of the input field.
    pub input: String,
    /// Message list, oldest first.
    pub messages: Vec<MessageNode>,
    /// Blocking validation notice, if one is showing.
    pub notice: Option<String>,
    /// Rows scrolled up from the newest line; 0 keeps the newest entry visible.
    pub scroll_back: u16,
    /// Exchanges started but not yet completed.
    pub in_flight: usize,
    pub dirty: bool,
}
