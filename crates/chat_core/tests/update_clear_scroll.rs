use chat_core::{update, AppState, Effect, Msg, Role};

fn type_and_send(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::InputChanged(input.to_string()));
    update(state, Msg::SendClicked)
}

#[test]
fn clear_empties_any_list() {
    let mut state = AppState::new();
    for text in ["a", "b", "c"] {
        state = type_and_send(state, text).0;
    }
    assert_eq!(state.view().messages.len(), 3);

    let (mut state, effects) = update(state, Msg::ClearClicked);
    assert!(effects.is_empty());
    assert!(state.view().messages.is_empty());
    assert!(state.consume_dirty());

    // Clearing an empty list changes nothing.
    let (mut state, _) = update(state, Msg::ClearClicked);
    assert!(state.view().messages.is_empty());
    assert!(!state.consume_dirty());
}

#[test]
fn pending_reply_still_lands_after_clear() {
    let (state, effects) = type_and_send(AppState::new(), "Hello");
    let Effect::AskQuestion { request_id, .. } = effects[0].clone();

    let (state, _) = update(state, Msg::ClearClicked);
    let (state, _) = update(
        state,
        Msg::ReplyReceived {
            request_id,
            answer: "late".to_string(),
        },
    );

    let view = state.view();
    assert_eq!(view.messages.len(), 1);
    assert_eq!(view.messages[0].role, Role::Bot);
    assert_eq!(view.messages[0].text, "late");
}

#[test]
fn scrolling_saturates_and_new_messages_snap_to_bottom() {
    let (state, _) = type_and_send(AppState::new(), "Hello");

    let (state, _) = update(state, Msg::ScrollDown(3));
    assert_eq!(state.view().scroll_back, 0);

    let (state, _) = update(state, Msg::ScrollUp(5));
    let (state, _) = update(state, Msg::ScrollUp(u16::MAX));
    assert_eq!(state.view().scroll_back, u16::MAX);

    let (state, _) = update(state, Msg::ScrollDown(10));
    assert_eq!(state.view().scroll_back, u16::MAX - 10);

    let (state, _) = type_and_send(state, "again");
    assert_eq!(state.view().scroll_back, 0);
}

#[test]
fn scrolling_stops_at_the_measured_top() {
    let (state, _) = type_and_send(AppState::new(), "Hello");
    let (state, _) = update(state, Msg::ScrollLimitMeasured(12));

    let mut state = state;
    for _ in 0..20 {
        state = update(state, Msg::ScrollUp(10)).0;
    }
    assert_eq!(state.view().scroll_back, 12);

    // One step down moves off the top straight away.
    let (state, _) = update(state, Msg::ScrollDown(10));
    assert_eq!(state.view().scroll_back, 2);
}

#[test]
fn shrinking_limit_pulls_position_back() {
    let (state, _) = type_and_send(AppState::new(), "Hello");
    let (state, _) = update(state, Msg::ScrollUp(30));
    assert_eq!(state.view().scroll_back, 30);

    let (mut state, _) = update(state, Msg::ScrollLimitMeasured(8));
    assert_eq!(state.view().scroll_back, 8);
    assert!(state.consume_dirty());

    // Re-measuring the same limit is not a change.
    let (mut state, _) = update(state, Msg::ScrollLimitMeasured(8));
    assert!(!state.consume_dirty());
}

#[test]
fn scroll_limit_applies_while_notice_is_showing() {
    let (state, _) = update(AppState::new(), Msg::ScrollUp(40));
    let (state, _) = update(state, Msg::SendClicked);
    assert!(state.view().notice.is_some());

    let (state, _) = update(state, Msg::ScrollLimitMeasured(0));
    assert_eq!(state.view().scroll_back, 0);
}
