//! conversation_manager - The conversation client behind the chat widget
//!
//! Owns the session (stage, collected details, transcript, pending
//! directive) and drives it forward: one HTTP exchange per user action,
//! server reply applied to local state after the fixed display delay,
//! render updates emitted over a channel for the embedding host.

mod manager;
mod session;
mod update;

pub use manager::ConversationManager;
pub use session::Session;
pub use update::WidgetUpdate;
