//! ChatApp struct definition and constructor.

use tenmile_common::SessionId;
use tenmile_config::TenmileConfig;
use tenmile_session::{Session, SessionEvent};
use tokio::sync::mpsc;

use crate::view::ConversationView;

/// Top-level application state.
pub struct ChatApp {
    pub(super) session: Session,
    /// Events from the connection task. `None` once the task has finished
    /// or when no connection was ever started.
    pub(super) events: Option<mpsc::Receiver<SessionEvent>>,
    pub(super) view: ConversationView,
}

impl ChatApp {
    /// Build the app and start connecting to `session_id`.
    ///
    /// Must be called inside a tokio runtime.
    pub fn new(config: TenmileConfig, session_id: SessionId) -> Self {
        let (session, events) = Session::open(&config.connection, session_id);
        Self::with_session(config, session, events)
    }

    pub(super) fn with_session(
        config: TenmileConfig,
        session: Session,
        events: Option<mpsc::Receiver<SessionEvent>>,
    ) -> Self {
        Self {
            session,
            events,
            view: ConversationView::new(config.view),
        }
    }
}
