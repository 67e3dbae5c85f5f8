//! Conversation protocol constants
//!
//! Stage tags and commands are owned by the backend; the client only
//! compares against them, it never invents new ones. The canned assistant
//! lines live here so the conversation driver and renderers agree on the
//! exact text.

/// Stage the backend starts every conversation in.
pub const INITIAL_STAGE: &str = "get_name";

/// Stage that signals the backend has collected everything it needs and
/// proposal generation should be kicked off.
pub const GENERATION_STAGE: &str = "final_generation";

/// Local stage the widget moves to once generation has been triggered.
pub const POST_ENGAGEMENT_STAGE: &str = "post_engagement";

/// Hidden command sent on first open to start a fresh conversation.
pub const NEW_PROPOSAL_COMMAND: &str = "new proposal";

/// Hidden command asking the backend to pop its stage history.
pub const GO_BACK_COMMAND: &str = "__GO_BACK__";

/// Options offered after a proposal has been sent.
pub const POST_PROPOSAL_OPTIONS: [&str; 3] =
    ["Create Another Proposal", "Visit Website", "Contact Sales"];

/// Assistant line shown once generation has been triggered successfully.
pub const PROPOSAL_SENT_MESSAGE: &str = "\u{2705} **Proposal Sent!** Please check your email inbox.\n\nIs there anything else I can help you with?";

/// Assistant line shown when the generation request itself failed.
pub const PROPOSAL_TIMEOUT_MESSAGE: &str = "\u{26a0}\u{fe0f} Proposal generation initiated, but server response timed out. Please check your email shortly.";

/// Assistant line shown when an upload could not be completed.
pub const UPLOAD_FAILED_MESSAGE: &str = "\u{274c} Upload failed.";

/// Placeholder shown while a file is being uploaded.
pub fn uploading_message(file_name: &str) -> String {
    format!("Uploading **{}**...", file_name)
}

/// User-side confirmation sent back through the conversation after an
/// upload succeeded.
pub fn uploaded_message(file_name: &str) -> String {
    format!("Uploaded: {}", file_name)
}
