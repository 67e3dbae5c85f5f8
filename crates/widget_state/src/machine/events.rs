//! Widget events - Defines events that trigger phase transitions

use serde::{Deserialize, Serialize};

/// Defines the events that can trigger phase transitions in the FSM.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WidgetEvent {
    // ========== User Events ==========
    /// User clicked the launcher bubble.
    Opened,

    /// User closed the widget window.
    ClosedByUser,

    /// A message (typed, clicked or synthesized) was submitted.
    MessageSubmitted,

    /// A file upload started.
    UploadStarted,

    // ========== Timer Events ==========
    /// The welcome splash finished.
    WelcomeElapsed,

    /// The post-close reset delay finished.
    ResetElapsed,

    // ========== Exchange Events ==========
    /// A `/chat` reply was applied to the session.
    ReplyApplied,

    /// A network exchange failed; input is re-enabled.
    ExchangeFailed,

    /// The terminal stage was reached and generation was kicked off.
    GenerationStarted,

    /// Generation settled (success message or timeout warning shown).
    GenerationSettled,

    /// The upload settled (follow-up sent or failure message shown).
    UploadSettled,
}
