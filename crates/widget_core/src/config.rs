//! Widget configuration
//!
//! Everything is compiled-in or supplied by the embedding host; there is
//! no file or environment loading. The display delays are plain
//! `Duration`s so tests can zero them.

use std::time::Duration;

use serde::{Deserialize, Serialize};

const DEFAULT_API_BASE: &str = "https://vingsfirechatbot-prod.onrender.com";
const DEFAULT_LOGO_PATH: &str = "/logo.png";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Base URL of the proposal backend.
    pub api_base: String,
    /// Static logo asset the host renders in the header and bubbles.
    pub logo_path: String,
    #[serde(default)]
    pub delays: Delays,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            logo_path: DEFAULT_LOGO_PATH.to_string(),
            delays: Delays::default(),
        }
    }
}

impl WidgetConfig {
    /// Config pointed at a different backend, keeping default delays.
    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            ..Self::default()
        }
    }
}

/// Fixed display delays. The pauses are part of the observed widget
/// behavior, not transport timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Delays {
    /// Pause before a `/chat` reply is applied to the transcript.
    pub reply_display: Duration,
    /// Pause before the locally synthesized proposal-sent message.
    pub proposal_success: Duration,
    /// Pause before the synthesized follow-up after an upload.
    pub upload_followup: Duration,
    /// How long the welcome splash stays up after opening.
    pub welcome: Duration,
    /// Pause between closing and the session reset, covering the closing
    /// animation.
    pub close_reset: Duration,
}

impl Default for Delays {
    fn default() -> Self {
        Self {
            reply_display: Duration::from_millis(1000),
            proposal_success: Duration::from_millis(2000),
            upload_followup: Duration::from_millis(2000),
            welcome: Duration::from_millis(3000),
            close_reset: Duration::from_millis(300),
        }
    }
}

impl Delays {
    /// All-zero delays, for tests.
    pub fn none() -> Self {
        Self {
            reply_display: Duration::ZERO,
            proposal_success: Duration::ZERO,
            upload_followup: Duration::ZERO,
            welcome: Duration::ZERO,
            close_reset: Duration::ZERO,
        }
    }
}
