//! Plain-text rendering of a session.

use std::fmt::Write;

use tenmile_config::ViewConfig;
use tenmile_session::{ConnectionState, Session, Turn, TurnKind};

use super::segments::{split_segments, Segment};

pub(crate) const TITLE: &str = "Welcome to Tenmile Land";
pub(crate) const SUBTITLE: &str = "Your AI-powered Chatbot for your queries";
pub(crate) const BOT_LABEL: &str = "bot";
pub(crate) const PENDING_MARK: &str = "...";
pub(crate) const PROMPT: &str = "> ";

const CODE_GUTTER: &str = "| ";

/// Render the whole conversation, ending with the input prompt.
pub(crate) fn render_session(config: &ViewConfig, session: &Session) -> String {
    let mut out = String::new();
    let width = BOT_LABEL.len().max(config.user_initials.chars().count());

    let _ = writeln!(out, "{TITLE}");
    let _ = writeln!(out, "{SUBTITLE}");
    let _ = writeln!(
        out,
        "[session {} | {}]",
        session.identifier(),
        session.connection_state()
    );
    out.push('\n');

    if session.connection_state() == ConnectionState::Connecting {
        let _ = writeln!(out, "connecting...");
    } else {
        push_lines(&mut out, BOT_LABEL, width, [config.greeting.as_str()]);
        for turn in session.turns() {
            let label = if turn.is_from_user() {
                config.user_initials.as_str()
            } else {
                BOT_LABEL
            };
            push_turn(&mut out, label, width, turn);
        }
        if session.pending_reply() && config.show_pending_indicator {
            push_lines(&mut out, BOT_LABEL, width, [PENDING_MARK]);
        }
    }

    out.push('\n');
    out.push_str(PROMPT);
    out
}

fn push_turn(out: &mut String, label: &str, width: usize, turn: &Turn) {
    if turn.kind() == TurnKind::Image {
        let line = format!("[image] {}", turn.content());
        push_lines(out, label, width, [line.as_str()]);
        return;
    }

    let mut lines: Vec<String> = Vec::new();
    for segment in split_segments(turn.content()) {
        match segment {
            Segment::Text(text) => lines.extend(text.lines().map(str::to_string)),
            Segment::Code { lang, lines: code } => {
                lines.push(format!("{CODE_GUTTER}[{}]", lang.unwrap_or("code")));
                lines.extend(code.into_iter().map(|l| format!("{CODE_GUTTER}{l}")));
            }
        }
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    push_lines(out, label, width, lines.iter().map(String::as_str));
}

/// Write `lines` with `label` on the first and matching indent on the rest.
fn push_lines<'a>(
    out: &mut String,
    label: &str,
    width: usize,
    lines: impl IntoIterator<Item = &'a str>,
) {
    for (i, line) in lines.into_iter().enumerate() {
        let tag = if i == 0 { label } else { "" };
        let _ = writeln!(out, "{tag:<width$}  {line}");
    }
}
