//! widget_core - Core types for the proposal chat widget
//!
//! This crate provides the foundational types used across the widget crates:
//! - `message` - Transcript messages and assistant markup
//! - `directive` - Server-driven UI directives
//! - `details` - Server-collected user details
//! - `wire` - Request/response bodies for the backend endpoints
//! - `config` - Widget configuration and display delays
//! - `protocol` - Stage tags, hidden commands and canned assistant lines

pub mod config;
pub mod details;
pub mod directive;
pub mod message;
pub mod protocol;
pub mod wire;

// Re-export commonly used types
pub use config::{Delays, WidgetConfig};
pub use details::UserDetails;
pub use directive::UiDirective;
pub use message::{ChatMessage, MessageKind, Role, Segment};
pub use wire::{ChatReply, ChatRequest, ProposalRequest};
