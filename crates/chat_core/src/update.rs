use crate::{AppState, Effect, Key, Msg, EXCHANGE_FAILED_TEXT};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    // The notice is modal: user input waits until it is acknowledged, remote
    // completions do not.
    if state.is_blocked() && msg.is_user_gesture() {
        return (state, Vec::new());
    }

    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::SendClicked | Msg::KeyActivated(Key::Enter) => match state.submit() {
            Ok((request_id, question)) => vec![Effect::AskQuestion {
                request_id,
                question,
            }],
            Err(_) => Vec::new(),
        },
        Msg::KeyActivated(_) => Vec::new(),
        Msg::ClearClicked => {
            state.clear_messages();
            Vec::new()
        }
        Msg::NoticeDismissed => {
            state.dismiss_notice();
            Vec::new()
        }
        Msg::ScrollUp(rows) => {
            state.scroll_up(rows);
            Vec::new()
        }
        Msg::ScrollDown(rows) => {
            state.scroll_down(rows);
            Vec::new()
        }
        Msg::ScrollLimitMeasured(limit) => {
            state.set_scroll_limit(limit);
            Vec::new()
        }
        Msg::ReplyReceived { request_id, answer } => {
            // An empty answer would break the non-empty node invariant.
            let text = if answer.is_empty() {
                EXCHANGE_FAILED_TEXT.to_owned()
            } else {
                answer
            };
            state.complete(request_id, text);
            Vec::new()
        }
        Msg::ExchangeFailed { request_id } => {
            state.complete(request_id, EXCHANGE_FAILED_TEXT.to_owned());
            Vec::new()
        }
        Msg::Tick => Vec::new(),
    };

    (state, effects)
}
