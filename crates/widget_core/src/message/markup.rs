//! Assistant message markup
//!
//! The backend decorates assistant text with `**bold**` spans and literal
//! newlines. Renderers get a pre-split segment list instead of parsing the
//! raw string themselves.

/// One renderable piece of an assistant message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    /// Plain text run.
    Text(String),
    /// Text wrapped in `**` markers.
    Bold(String),
    /// A literal newline in the content.
    LineBreak,
}

/// Split message content into [`Segment`]s.
///
/// An unterminated `**` marker is kept as literal text rather than
/// swallowing the rest of the message.
pub fn segments(content: &str) -> Vec<Segment> {
    let mut out = Vec::new();
    for (i, line) in content.split('\n').enumerate() {
        if i > 0 {
            out.push(Segment::LineBreak);
        }
        split_bold(line, &mut out);
    }
    out
}

fn split_bold(line: &str, out: &mut Vec<Segment>) {
    let mut rest = line;
    while let Some(start) = rest.find("**") {
        match rest[start + 2..].find("**") {
            Some(len) => {
                if start > 0 {
                    out.push(Segment::Text(rest[..start].to_string()));
                }
                let bold = &rest[start + 2..start + 2 + len];
                out.push(Segment::Bold(bold.to_string()));
                rest = &rest[start + 2 + len + 2..];
            }
            None => break,
        }
    }
    if !rest.is_empty() {
        out.push(Segment::Text(rest.to_string()));
    }
}
