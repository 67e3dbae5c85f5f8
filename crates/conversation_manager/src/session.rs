//! Session data structures

use serde::{Deserialize, Serialize};
use widget_core::protocol::INITIAL_STAGE;
use widget_core::{ChatMessage, UiDirective, UserDetails};

/// Everything the widget knows about the current conversation.
///
/// The stage and user details are server-authoritative: the client stores
/// what the last reply said and echoes it back on the next request, it
/// never computes a stage itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    /// Current conversation stage tag, as last reported by the backend.
    pub stage: String,

    /// Details the backend has collected so far, echoed on each request.
    pub user_details: UserDetails,

    /// Ordered transcript of user and assistant messages.
    pub transcript: Vec<ChatMessage>,

    /// The single interactive affordance currently offered, if any.
    pub pending_directive: Option<UiDirective>,

    /// Whether a primary exchange is in flight; hosts disable the input
    /// while set.
    pub loading: bool,

    /// Latched once the hidden kick-off command has been sent for this
    /// open cycle; cleared by the post-close reset.
    pub has_started: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::initial()
    }
}

impl Session {
    /// A fresh session, as created on first open of a mount cycle.
    pub fn initial() -> Self {
        Self {
            stage: INITIAL_STAGE.to_string(),
            user_details: UserDetails::default(),
            transcript: Vec::new(),
            pending_directive: None,
            loading: false,
            has_started: false,
        }
    }

    /// Return the session to its initial values.
    pub fn reset(&mut self) {
        *self = Self::initial();
    }

    /// Append a transcript entry.
    pub fn push(&mut self, message: ChatMessage) {
        self.transcript.push(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_session() {
        let session = Session::initial();
        assert_eq!(session.stage, INITIAL_STAGE);
        assert!(session.transcript.is_empty());
        assert!(session.pending_directive.is_none());
        assert!(!session.loading);
        assert!(!session.has_started);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = Session::initial();
        session.stage = "get_email".to_string();
        session.push(ChatMessage::user("hi"));
        session.pending_directive = Some(UiDirective::Buttons { options: vec![] });
        session.loading = true;
        session.has_started = true;

        session.reset();
        assert_eq!(session, Session::initial());
    }
}
