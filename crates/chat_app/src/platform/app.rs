use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use chat_core::{update, AppState, Msg};
use chat_engine::ReqwestAsker;
use chat_logging::{chat_error, chat_info, chat_trace};
use crossterm::event::KeyEvent;

use super::config::Cli;
use super::effects::EffectRunner;
use super::terminal::{self, Tui};
use super::{logging, ui};

/// Everything the message pump reacts to.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    InputClosed,
    Core(Msg),
}

pub fn run_app(cli: Cli) -> anyhow::Result<()> {
    logging::initialize(cli.log_to, cli.log_level);

    let settings = cli.exchange_settings();
    let asker = ReqwestAsker::new(&settings)
        .with_context(|| format!("cannot use server `{}`", settings.server_url))?;
    chat_info!("chat_app starting, questions go to {}", asker.endpoint());

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let effects = EffectRunner::new(Arc::new(asker), event_tx.clone())
        .context("failed to start the exchange engine")?;

    let mut tui = terminal::init().context("failed to set up the terminal")?;
    let result = terminal::spawn_input_thread(event_tx.clone())
        .context("failed to start the input thread")
        .and_then(|()| {
            spawn_ticker(event_tx);
            MessagePump::new(effects).run(&mut tui, &event_rx)
        });
    terminal::restore().context("failed to restore the terminal")?;

    match &result {
        Ok(()) => chat_info!("chat_app stopped"),
        Err(err) => chat_error!("chat_app stopped: {:#}", err),
    }
    result
}

// Background tick to throttle rendering and UI updates.
fn spawn_ticker(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let interval = Duration::from_millis(ui::constants::TICK_MILLIS);
        while tx.send(AppEvent::Core(Msg::Tick)).is_ok() {
            thread::sleep(interval);
        }
    });
}

enum Flow {
    Continue,
    Quit,
}

/// Single owner of the chat state. All mutations happen here, one message at a time.
struct MessagePump {
    state: AppState,
    effects: EffectRunner,
    needs_redraw: bool,
}

impl MessagePump {
    fn new(effects: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            effects,
            needs_redraw: true,
        }
    }

    fn run(mut self, tui: &mut Tui, events: &mpsc::Receiver<AppEvent>) -> anyhow::Result<()> {
        self.draw(tui)?;
        while let Ok(event) = events.recv() {
            if let Flow::Quit = self.handle_event(event) {
                return Ok(());
            }
            // Coalesce a burst of events into one frame.
            while let Ok(event) = events.try_recv() {
                if let Flow::Quit = self.handle_event(event) {
                    return Ok(());
                }
            }
            self.draw(tui)?;
        }
        Ok(())
    }

    fn handle_event(&mut self, event: AppEvent) -> Flow {
        match event {
            AppEvent::Key(key) => {
                let view = self.state.view();
                let action = ui::keys::map_key(key, &view);
                chat_trace!("key {:?} -> {:?}", key.code, action);
                match action {
                    ui::keys::KeyAction::Dispatch(msg) => self.dispatch_msg(msg),
                    ui::keys::KeyAction::Quit => return Flow::Quit,
                    ui::keys::KeyAction::Ignore => {}
                }
            }
            AppEvent::Resize => self.needs_redraw = true,
            AppEvent::InputClosed => return Flow::Quit,
            AppEvent::Core(msg) => self.dispatch_msg(msg),
        }
        Flow::Continue
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.needs_redraw = true;
        }
        self.state = state;
        self.effects.enqueue(effects);
    }

    fn draw(&mut self, tui: &mut Tui) -> anyhow::Result<()> {
        // A second pass only happens when the measured limit moved the scroll
        // position; the re-measure of an unchanged frame is stable.
        for _ in 0..2 {
            if !std::mem::take(&mut self.needs_redraw) {
                break;
            }
            let view = self.state.view();
            let mut max_scroll_back = 0;
            tui.draw(|frame| max_scroll_back = ui::render::render(frame, &view))?;
            self.dispatch_msg(Msg::ScrollLimitMeasured(max_scroll_back));
        }
        Ok(())
    }
}
