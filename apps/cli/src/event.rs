use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind};
use tokio::sync::mpsc;
use tokio_stream::StreamExt;

pub enum AppEvent {
    /// New label text from a finished retrieval.
    Motd(String),
    Key(KeyEvent),
    Resize,
}

/// Merges terminal input and retrieval results into one queue drained by the UI loop.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
    _task: tokio::task::JoinHandle<()>,
}

impl EventHandler {
    pub fn new(mut motd_rx: mpsc::UnboundedReceiver<String>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        let task = tokio::spawn(async move {
            let mut terminal_events = EventStream::new();

            loop {
                let event = tokio::select! {
                    Some(motd) = motd_rx.recv() => AppEvent::Motd(motd),
                    Some(Ok(ct_event)) = terminal_events.next() => match ct_event {
                        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                            AppEvent::Key(key)
                        }
                        CrosstermEvent::Resize(_, _) => AppEvent::Resize,
                        _ => continue,
                    },
                    else => break,
                };

                if tx.send(event).is_err() {
                    break;
                }
            }
        });

        Self { rx, _task: task }
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }
}
