//! Render updates emitted to the embedding host

use widget_core::{ChatMessage, UiDirective};

/// One change to the view state. Hosts either consume this feed or poll
/// [`crate::ConversationManager::snapshot`].
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetUpdate {
    /// The widget window opened or closed.
    OpenedChanged(bool),

    /// The welcome splash finished; show the transcript.
    WelcomeFinished,

    /// A message was appended to the transcript.
    MessageAppended(ChatMessage),

    /// The pending directive changed (cleared or replaced).
    DirectiveChanged(Option<UiDirective>),

    /// The loading indicator toggled.
    LoadingChanged(bool),

    /// The backend moved the conversation to a new stage.
    StageChanged(String),

    /// The post-close reset ran; the session is back to initial values.
    SessionReset,
}
