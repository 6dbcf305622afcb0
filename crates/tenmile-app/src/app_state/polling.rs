//! Session events from the connection task.

use tenmile_common::ChatError;
use tenmile_session::SessionEvent;
use tokio::sync::mpsc;

use super::core::ChatApp;

/// Wait for the next event, or forever when there is no receiver.
pub(super) async fn recv_event(
    events: &mut Option<mpsc::Receiver<SessionEvent>>,
) -> Option<SessionEvent> {
    match events {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}

impl ChatApp {
    /// Feed one event into the session. `None` means the task is gone.
    pub(super) fn apply_event(&mut self, event: Option<SessionEvent>) -> Result<(), ChatError> {
        match event {
            Some(event) => self.session.handle_event(event),
            None => {
                self.events = None;
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenmile_common::SessionId;
    use tenmile_config::TenmileConfig;
    use tenmile_session::{CloseReason, Connection, ConnectionState, Session, Turn, TurnKind};

    fn app(events: Option<mpsc::Receiver<SessionEvent>>) -> ChatApp {
        ChatApp::with_session(
            TenmileConfig::default(),
            Session::new(SessionId::default()),
            events,
        )
    }

    #[tokio::test]
    async fn events_reach_the_session() {
        let (tx, rx) = mpsc::channel(4);
        let mut app = app(Some(rx));
        // The handshake never completes; only the scripted events matter.
        let (connection, _unused) =
            Connection::spawn("ws://127.0.0.1:9".into(), std::time::Duration::from_secs(1));
        app.session.attach(connection);
        tx.send(SessionEvent::ConnectionOpened).await.unwrap();
        tx.send(SessionEvent::TurnReceived(Turn::bot("Hi", TurnKind::Text)))
            .await
            .unwrap();
        drop(tx);

        for _ in 0..2 {
            let event = recv_event(&mut app.events).await;
            app.apply_event(event).unwrap();
        }
        assert_eq!(app.session.connection_state(), ConnectionState::Open);
        assert_eq!(app.session.turns().len(), 1);

        let event = recv_event(&mut app.events).await;
        assert!(event.is_none());
        app.apply_event(event).unwrap();
        assert!(app.events.is_none());
    }

    #[tokio::test]
    async fn missing_receiver_never_yields() {
        let mut events = None;
        let waited = tokio::time::timeout(
            std::time::Duration::from_millis(20),
            recv_event(&mut events),
        )
        .await;
        assert!(waited.is_err());
    }

    #[test]
    fn fault_is_returned() {
        let mut app = app(None);
        let err = app
            .apply_event(Some(SessionEvent::ConnectionClosed(CloseReason::Fault(
                "bad json".into(),
            ))))
            .unwrap_err();
        assert!(matches!(err, ChatError::MalformedPayload(_)));
    }
}
