//! State machine module
//!
//! Contains the FSM implementation for the widget lifecycle.

mod events;
mod states;
mod transitions;

pub use events::WidgetEvent;
pub use states::WidgetPhase;
pub use transitions::{StateMachine, StateTransition};
