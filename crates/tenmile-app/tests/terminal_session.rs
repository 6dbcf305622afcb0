//! Runs the `tenmile` binary against a local WebSocket backend.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;
use tokio::process::{Child, Command};
use tokio::sync::oneshot;
use tokio_tungstenite::tungstenite::Message;

/// Accept one connection and answer every text frame with `reply`.
/// Resolves to how the client left: "close-frame", "error" or "eof".
async fn backend(reply: &'static str) -> (String, oneshot::Receiver<&'static str>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (done_tx, done_rx) = oneshot::channel();

    tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let mut ws = tokio_tungstenite::accept_async(stream).await.unwrap();
        let outcome = loop {
            match ws.next().await {
                Some(Ok(Message::Text(_))) => {
                    let _ = ws.send(Message::Text(reply.to_string().into())).await;
                }
                Some(Ok(Message::Close(_))) => break "close-frame",
                Some(Ok(_)) => {}
                Some(Err(_)) => break "error",
                None => break "eof",
            }
        };
        let _ = done_tx.send(outcome);
    });

    (format!("ws://{addr}"), done_rx)
}

/// An empty config file so the run never touches the user's config dir.
fn empty_config() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "").unwrap();
    (dir, path)
}

fn spawn_tenmile(config: &Path, endpoint: &str) -> Child {
    Command::new(env!("CARGO_BIN_EXE_tenmile"))
        .arg("--config")
        .arg(config)
        .arg("--endpoint")
        .arg(endpoint)
        .arg("--session-id")
        .arg("cli")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()
        .expect("failed to start tenmile")
}

#[tokio::test]
async fn malformed_reply_exits_while_stdin_is_open() {
    let (endpoint, _done) = backend("plain text, not json").await;
    let (_dir, config) = empty_config();
    let mut child = spawn_tenmile(&config, &endpoint);

    let mut stdin = child.stdin.take().unwrap();
    stdin.write_all(b"Hello\n").await.unwrap();
    stdin.flush().await.unwrap();

    // stdin stays open for the whole wait.
    let status = tokio::time::timeout(Duration::from_secs(10), child.wait())
        .await
        .expect("tenmile kept running after a malformed reply")
        .unwrap();
    assert!(!status.success());
    drop(stdin);
}

#[tokio::test]
async fn quit_closes_the_socket_with_a_close_frame() {
    let (endpoint, done) = backend(r#"{"content":"Hi"}"#).await;
    let (_dir, config) = empty_config();
    let mut child = spawn_tenmile(&config, &endpoint);

    let mut stdin = child.stdin.take().unwrap();
    stdin.write_all(b"Hello\n/quit\n").await.unwrap();
    stdin.flush().await.unwrap();

    let status = tokio::time::timeout(Duration::from_secs(10), child.wait())
        .await
        .expect("tenmile did not exit on /quit")
        .unwrap();
    assert!(status.success());

    let outcome = tokio::time::timeout(Duration::from_secs(5), done)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(outcome, "close-frame");
}
