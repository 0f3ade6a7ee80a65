use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use chat_core::{Effect, Msg};
use chat_engine::{Asker, EngineEvent, EngineHandle};
use chat_logging::{chat_info, chat_warn};

use super::app::AppEvent;

/// Executes core effects and turns engine completions back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(asker: Arc<dyn Asker>, app_tx: mpsc::Sender<AppEvent>) -> io::Result<Self> {
        let (engine_tx, engine_rx) = mpsc::channel();
        let engine = EngineHandle::new(asker, engine_tx)?;
        spawn_event_loop(engine_rx, app_tx)?;
        Ok(Self { engine })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::AskQuestion {
                    request_id,
                    question,
                } => {
                    chat_info!(
                        "AskQuestion request_id={} question_len={}",
                        request_id,
                        question.len()
                    );
                    self.engine.ask(request_id, question);
                }
            }
        }
    }
}

fn spawn_event_loop(
    engine_rx: mpsc::Receiver<EngineEvent>,
    app_tx: mpsc::Sender<AppEvent>,
) -> io::Result<()> {
    thread::Builder::new()
        .name("chat-effects".to_string())
        .spawn(move || {
            for event in engine_rx {
                if app_tx.send(AppEvent::Core(completion_msg(event))).is_err() {
                    break;
                }
            }
        })?;
    Ok(())
}

/// Maps an engine completion onto the core message. Failure detail is for
/// the log only; the user sees the fixed fallback text.
fn completion_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::ExchangeCompleted { request_id, result } => match result {
            Ok(answer) => {
                chat_info!(
                    "Exchange done request_id={} answer_len={}",
                    request_id,
                    answer.len()
                );
                Msg::ReplyReceived { request_id, answer }
            }
            Err(err) => {
                chat_warn!("Exchange {} failed: {}", request_id, err);
                Msg::ExchangeFailed { request_id }
            }
        },
    }
}
