//! Split message text into prose and fenced code segments.

/// A run of message content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Code {
        lang: Option<&'a str>,
        lines: Vec<&'a str>,
    },
}

const FENCE: &str = "```";

/// Split `content` on ``` fences. An unterminated fence runs to the end of
/// the message. Blank text runs between segments are dropped.
pub fn split_segments(content: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut text_start: Option<usize> = None;
    let mut text_end = 0;
    let mut code: Option<(Option<&str>, Vec<&str>)> = None;

    let mut offset = 0;
    for line in content.split_inclusive('\n') {
        let start = offset;
        offset += line.len();
        let bare = line.trim_end_matches(['\n', '\r']);
        let fence = bare.trim_start().strip_prefix(FENCE);

        if code.is_some() {
            if fence.is_some() {
                if let Some((lang, lines)) = code.take() {
                    segments.push(Segment::Code { lang, lines });
                }
            } else if let Some((_, lines)) = code.as_mut() {
                lines.push(bare);
            }
        } else if let Some(info) = fence {
            push_text(&mut segments, content, text_start.take(), text_end);
            let lang = info.trim();
            code = Some(((!lang.is_empty()).then_some(lang), Vec::new()));
        } else {
            text_start.get_or_insert(start);
            text_end = offset;
        }
    }

    match code {
        Some((lang, lines)) => segments.push(Segment::Code { lang, lines }),
        None => push_text(&mut segments, content, text_start, text_end),
    }
    segments
}

fn push_text<'a>(
    segments: &mut Vec<Segment<'a>>,
    content: &'a str,
    start: Option<usize>,
    end: usize,
) {
    if let Some(start) = start {
        let text = content[start..end].trim_matches(['\n', '\r']);
        if !text.trim().is_empty() {
            segments.push(Segment::Text(text));
        }
    }
}
