use ratatui::style::Color;

pub const TICK_MILLIS: u64 = 250;
/// Rows moved by PageUp/PageDown.
pub const SCROLL_PAGE: u16 = 10;

pub const TITLE_MESSAGES: &str = " Chat ";
pub const TITLE_INPUT: &str = " Message ";
pub const TITLE_NOTICE: &str = " Notice ";
pub const INPUT_PROMPT: &str = "> ";
pub const HELP_TEXT: &str = "Enter: send | Ctrl+L: clear | PgUp/PgDn: scroll | Esc: quit";
pub const NOTICE_HINT: &str = "Press Enter to continue.";

pub const USER_PREFIX: &str = "You: ";
pub const BOT_PREFIX: &str = "Bot: ";
pub const CONTINUATION_INDENT: &str = "     ";

pub const USER_COLOR: Color = Color::Green;
pub const BOT_COLOR: Color = Color::Cyan;
pub const NOTICE_COLOR: Color = Color::Yellow;
