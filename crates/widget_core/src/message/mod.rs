//! Message module - Transcript message types
//!
//! Shared message types used across the widget crates.

mod markup;

pub use markup::{segments, Segment};

use serde::{Deserialize, Serialize};

/// Who authored a transcript message.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

/// How a user input was produced. Purely informational: the wire body is
/// the same for every kind, but hosts and logs can tell a typed message
/// from a button click.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// Free text typed into the input box.
    Text,
    /// Hidden protocol command (never echoed).
    Command,
    /// A buttons/dropdown option click.
    Button,
    /// Contact form submission.
    Form,
    /// Synthesized follow-up after a file upload.
    File,
}

/// A single transcript entry.
///
/// Assistant content may carry simple markup (`**bold**` spans, newlines);
/// use [`segments`] to split it for rendering.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    /// Split the content into renderable segments.
    pub fn segments(&self) -> Vec<Segment> {
        segments(&self.content)
    }
}
