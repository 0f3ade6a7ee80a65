use chat_core::{update, AppState, Effect, MessageNode, Msg, Role, EXCHANGE_FAILED_TEXT};
use pretty_assertions::assert_eq;

fn type_and_send(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::InputChanged(input.to_string()));
    update(state, Msg::SendClicked)
}

fn request_id(effects: &[Effect]) -> u64 {
    effects
        .iter()
        .map(|effect| match effect {
            Effect::AskQuestion { request_id, .. } => *request_id,
        })
        .next()
        .expect("ask effect")
}

fn node(text: &str, role: Role) -> MessageNode {
    MessageNode {
        text: text.to_string(),
        role,
    }
}

#[test]
fn reply_is_rendered_verbatim_after_the_question() {
    let (state, effects) = type_and_send(AppState::new(), "Hello");
    let id = request_id(&effects);

    let (mut state, effects) = update(
        state,
        Msg::ReplyReceived {
            request_id: id,
            answer: "Hi there!".to_string(),
        },
    );

    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    let view = state.view();
    assert_eq!(
        view.messages,
        vec![node("Hello", Role::User), node("Hi there!", Role::Bot)]
    );
    assert_eq!(view.in_flight, 0);
}

#[test]
fn failure_renders_fixed_fallback_text() {
    let (state, effects) = type_and_send(AppState::new(), "Ping");
    let id = request_id(&effects);

    let (state, _) = update(state, Msg::ExchangeFailed { request_id: id });

    assert_eq!(
        state.view().messages,
        vec![
            node("Ping", Role::User),
            node("An error occurred while fetching the response.", Role::Bot),
        ]
    );
}

#[test]
fn widget_stays_usable_after_a_failure() {
    let (state, effects) = type_and_send(AppState::new(), "Ping");
    let (state, _) = update(
        state,
        Msg::ExchangeFailed {
            request_id: request_id(&effects),
        },
    );

    let (state, effects) = type_and_send(state, "Ping again");
    assert_eq!(effects.len(), 1);
    assert_eq!(state.view().messages.len(), 3);
}

#[test]
fn out_of_order_replies_each_match_their_own_request() {
    let (state, first) = type_and_send(AppState::new(), "first");
    let (state, second) = type_and_send(state, "second");

    let (state, _) = update(
        state,
        Msg::ReplyReceived {
            request_id: request_id(&second),
            answer: "answer to second".to_string(),
        },
    );
    let (state, _) = update(
        state,
        Msg::ReplyReceived {
            request_id: request_id(&first),
            answer: "answer to first".to_string(),
        },
    );

    assert_eq!(
        state.view().messages,
        vec![
            node("first", Role::User),
            node("second", Role::User),
            node("answer to second", Role::Bot),
            node("answer to first", Role::Bot),
        ]
    );
}

#[test]
fn each_request_completes_at_most_once() {
    let (state, effects) = type_and_send(AppState::new(), "Hello");
    let id = request_id(&effects);

    let (state, _) = update(
        state,
        Msg::ReplyReceived {
            request_id: id,
            answer: "Hi".to_string(),
        },
    );
    let (mut state, _) = update(state, Msg::ExchangeFailed { request_id: id });
    assert!(state.consume_dirty());

    let (mut state, _) = update(
        state,
        Msg::ReplyReceived {
            request_id: 99,
            answer: "stray".to_string(),
        },
    );

    assert_eq!(state.view().messages.len(), 2);
    assert!(!state.consume_dirty());
}

#[test]
fn empty_answer_falls_back_to_error_text() {
    let (state, effects) = type_and_send(AppState::new(), "Hello");
    let (state, _) = update(
        state,
        Msg::ReplyReceived {
            request_id: request_id(&effects),
            answer: String::new(),
        },
    );

    let last = state.view().messages.last().cloned().expect("bot node");
    assert_eq!(last, node(EXCHANGE_FAILED_TEXT, Role::Bot));
}

#[test]
fn whitespace_answer_is_kept_verbatim() {
    let (state, effects) = type_and_send(AppState::new(), "Hello");
    let (state, _) = update(
        state,
        Msg::ReplyReceived {
            request_id: request_id(&effects),
            answer: "  ".to_string(),
        },
    );

    let last = state.view().messages.last().cloned().expect("bot node");
    assert_eq!(last, node("  ", Role::Bot));
}

#[test]
fn completions_apply_while_notice_is_showing() {
    let (state, effects) = type_and_send(AppState::new(), "Hello");
    let (state, _) = update(state, Msg::SendClicked);
    assert!(state.view().notice.is_some());

    let (state, _) = update(
        state,
        Msg::ReplyReceived {
            request_id: request_id(&effects),
            answer: "Hi".to_string(),
        },
    );

    assert_eq!(state.view().messages.len(), 2);
    assert!(state.view().notice.is_some());
}
