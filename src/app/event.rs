//! Terminal event source.
//!
//! crossterm's reader blocks, so it runs on tokio's blocking pool and forwards
//! the events the browser cares about over a channel.  The main loop never
//! waits on the terminal directly.

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind, MouseEvent};
use tokio::sync::mpsc;

/// High-level events consumed by the application.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
}

impl AppEvent {
    /// Convert a raw crossterm event.  Key releases and repeats, focus and
    /// paste events are dropped.
    fn from_crossterm(ev: CtEvent) -> Option<Self> {
        match ev {
            CtEvent::Key(k) if k.kind == KeyEventKind::Press => Some(AppEvent::Key(k)),
            CtEvent::Mouse(m) => Some(AppEvent::Mouse(m)),
            CtEvent::Resize(w, h) => Some(AppEvent::Resize(w, h)),
            _ => None,
        }
    }
}

/// Start the reader and return the receiving end.  The reader stops once the
/// receiver is dropped or the terminal read fails.
pub fn spawn_event_reader() -> mpsc::UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::task::spawn_blocking(move || loop {
        let ev = match event::read() {
            Ok(ev) => ev,
            Err(e) => {
                tracing::warn!(error = %e, "terminal event read failed");
                break;
            }
        };
        let Some(app_event) = AppEvent::from_crossterm(ev) else {
            continue;
        };
        if tx.send(app_event).is_err() {
            break;
        }
    });

    rx
}
