//! widget_state - State machine for the widget lifecycle
//!
//! This crate tracks which phase the widget shell is in (closed, welcome
//! splash, idle, waiting on the backend, ...). Conversation stages stay
//! server-owned strings and are never mirrored here.

pub mod machine;

// Re-export commonly used types
pub use machine::{StateMachine, StateTransition, WidgetEvent, WidgetPhase};
