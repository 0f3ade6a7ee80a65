use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use chat_logging::{chat_debug, chat_info};

use crate::ask::Asker;
use crate::{EngineEvent, RequestId};

enum EngineCommand {
    Ask {
        request_id: RequestId,
        question: String,
    },
}

/// Runs remote exchanges on a background tokio runtime.
///
/// Every `ask` is spawned as its own task, so exchanges overlap freely and
/// complete in whatever order the server answers. There is no queue limit
/// and no cancellation. Dropping the handle shuts the runtime down and
/// abandons exchanges still in flight.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(asker: Arc<dyn Asker>, event_tx: mpsc::Sender<EngineEvent>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .thread_name("chat-engine")
            .build()?;

        thread::Builder::new()
            .name("chat-engine-dispatch".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let asker = asker.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(asker.as_ref(), command, event_tx).await;
                    });
                }
                chat_info!("engine command channel closed");
                runtime.shutdown_background();
            })?;

        Ok(Self { cmd_tx })
    }

    /// Schedules one exchange and returns immediately.
    pub fn ask(&self, request_id: RequestId, question: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Ask {
            request_id,
            question: question.into(),
        });
    }
}

async fn handle_command(
    asker: &dyn Asker,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Ask {
            request_id,
            question,
        } => {
            chat_debug!(
                "exchange start request_id={} question_len={}",
                request_id,
                question.len()
            );
            let result = asker.ask(&question).await;
            let _ = event_tx.send(EngineEvent::ExchangeCompleted { request_id, result });
        }
    }
}
