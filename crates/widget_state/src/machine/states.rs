//! Widget phases - Defines all possible states of the widget shell
//!
//! These are view-facing phases only. What the conversation is about is
//! decided by the backend's stage tags, which the session stores as
//! opaque strings.

use serde::{Deserialize, Serialize};

/// Defines the possible phases of the widget shell.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WidgetPhase {
    // ========== Closed ==========
    /// Only the launcher bubble is visible.
    Closed,

    // ========== Open ==========
    /// Welcome splash is up; the transcript is hidden behind it.
    Welcome,

    /// Transcript visible, input enabled.
    Idle,

    /// A `/chat` exchange is in flight or its display delay is pending;
    /// input is disabled.
    AwaitingReply,

    /// Proposal generation has been triggered for the terminal stage.
    GeneratingProposal,

    /// A file upload is in flight.
    Uploading,
}

impl Default for WidgetPhase {
    fn default() -> Self {
        WidgetPhase::Closed
    }
}

impl WidgetPhase {
    /// Whether the widget window is open in this phase.
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Whether the input affordance is enabled.
    pub fn accepts_user_input(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Whether something is in flight (hosts render the typing/loading
    /// indicator in these phases).
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            Self::AwaitingReply | Self::GeneratingProposal | Self::Uploading
        )
    }

    /// Get a human-readable description of the current phase.
    pub fn description(&self) -> &str {
        match self {
            Self::Closed => "Closed",
            Self::Welcome => "Showing welcome",
            Self::Idle => "Ready for input",
            Self::AwaitingReply => "Waiting for reply",
            Self::GeneratingProposal => "Generating proposal",
            Self::Uploading => "Uploading file",
        }
    }
}
