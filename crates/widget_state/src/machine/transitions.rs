//! Phase transitions - FSM transition logic
//!
//! Implements the event-driven transition table for the widget shell.
//! Unlisted (phase, event) pairs keep the current phase: the machine is
//! deliberately tolerant, since the conversation flow itself is owned by
//! the backend.

use tracing::debug;

use super::events::WidgetEvent;
use super::states::WidgetPhase;

/// Represents a phase transition result.
#[derive(Debug, Clone)]
pub struct StateTransition {
    /// The phase before the transition.
    pub from: WidgetPhase,
    /// The phase after the transition.
    pub to: WidgetPhase,
    /// The event that triggered the transition.
    pub event: WidgetEvent,
    /// Whether the phase actually changed.
    pub changed: bool,
}

/// State machine for the widget lifecycle.
#[derive(Debug, Clone)]
pub struct StateMachine {
    /// Current phase.
    current_phase: WidgetPhase,
    /// Transition history (limited).
    history: Vec<StateTransition>,
    /// Max history entries to keep.
    max_history: usize,
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl StateMachine {
    /// Create a new state machine in the Closed phase.
    pub fn new() -> Self {
        Self {
            current_phase: WidgetPhase::Closed,
            history: Vec::new(),
            max_history: 50,
        }
    }

    /// Create a state machine in a specific phase.
    pub fn with_phase(phase: WidgetPhase) -> Self {
        Self {
            current_phase: phase,
            history: Vec::new(),
            max_history: 50,
        }
    }

    /// Get the current phase.
    pub fn phase(&self) -> &WidgetPhase {
        &self.current_phase
    }

    /// Get the transition history.
    pub fn history(&self) -> &[StateTransition] {
        &self.history
    }

    /// Handle an event and transition to a new phase.
    pub fn handle_event(&mut self, event: WidgetEvent) -> StateTransition {
        let old_phase = self.current_phase.clone();
        let new_phase = Self::compute_next_phase(&old_phase, &event);
        let changed = old_phase != new_phase;

        if changed {
            debug!(from = ?old_phase, to = ?new_phase, event = ?event, "widget phase change");
        }

        self.current_phase = new_phase.clone();

        let transition = StateTransition {
            from: old_phase,
            to: new_phase,
            event,
            changed,
        };

        self.history.push(transition.clone());
        if self.history.len() > self.max_history {
            self.history.remove(0);
        }

        transition
    }

    /// Compute the next phase given current phase and event.
    fn compute_next_phase(phase: &WidgetPhase, event: &WidgetEvent) -> WidgetPhase {
        use WidgetEvent::*;
        use WidgetPhase::*;

        match (phase, event) {
            // ========== Open / Close ==========
            (Closed, Opened) => Welcome,
            (_, ClosedByUser) => Closed,

            // ========== Welcome ==========
            (Welcome, WelcomeElapsed) => Idle,
            // The hidden first exchange fires while the splash is still up.
            (Welcome, MessageSubmitted) => AwaitingReply,

            // ========== Primary Exchange ==========
            (Idle, MessageSubmitted) => AwaitingReply,
            (AwaitingReply, ReplyApplied) => Idle,
            (AwaitingReply, ExchangeFailed) => Idle,
            (AwaitingReply, GenerationStarted) => GeneratingProposal,

            // ========== Proposal Generation ==========
            (GeneratingProposal, GenerationSettled) => Idle,

            // ========== File Upload ==========
            (Idle, UploadStarted) => Uploading,
            // Successful upload synthesizes a follow-up message.
            (Uploading, MessageSubmitted) => AwaitingReply,
            (Uploading, UploadSettled) => Idle,
            (Uploading, ExchangeFailed) => Idle,

            // ========== Default: No transition ==========
            _ => phase.clone(),
        }
    }

    /// Check if a transition is valid without executing it.
    pub fn can_transition(&self, event: &WidgetEvent) -> bool {
        let next = Self::compute_next_phase(&self.current_phase, event);
        next != self.current_phase
    }

    /// Reset to the Closed phase.
    pub fn reset(&mut self) {
        self.current_phase = WidgetPhase::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_flow() {
        let mut sm = StateMachine::new();
        assert_eq!(sm.phase(), &WidgetPhase::Closed);

        let t1 = sm.handle_event(WidgetEvent::Opened);
        assert!(t1.changed);
        assert_eq!(sm.phase(), &WidgetPhase::Welcome);

        // Hidden first exchange fires during the splash.
        let t2 = sm.handle_event(WidgetEvent::MessageSubmitted);
        assert!(t2.changed);
        assert_eq!(sm.phase(), &WidgetPhase::AwaitingReply);

        sm.handle_event(WidgetEvent::ReplyApplied);
        assert_eq!(sm.phase(), &WidgetPhase::Idle);
    }

    #[test]
    fn test_close_from_any_phase() {
        for phase in [
            WidgetPhase::Welcome,
            WidgetPhase::Idle,
            WidgetPhase::AwaitingReply,
            WidgetPhase::GeneratingProposal,
            WidgetPhase::Uploading,
        ] {
            let mut sm = StateMachine::with_phase(phase);
            sm.handle_event(WidgetEvent::ClosedByUser);
            assert_eq!(sm.phase(), &WidgetPhase::Closed);
        }
    }

    #[test]
    fn test_generation_flow() {
        let mut sm = StateMachine::with_phase(WidgetPhase::AwaitingReply);
        sm.handle_event(WidgetEvent::GenerationStarted);
        assert_eq!(sm.phase(), &WidgetPhase::GeneratingProposal);
        sm.handle_event(WidgetEvent::GenerationSettled);
        assert_eq!(sm.phase(), &WidgetPhase::Idle);
    }

    #[test]
    fn test_upload_failure_reenables_input() {
        let mut sm = StateMachine::with_phase(WidgetPhase::Idle);
        sm.handle_event(WidgetEvent::UploadStarted);
        assert_eq!(sm.phase(), &WidgetPhase::Uploading);
        sm.handle_event(WidgetEvent::ExchangeFailed);
        assert!(sm.phase().accepts_user_input());
    }

    #[test]
    fn test_unlisted_pair_keeps_phase() {
        let mut sm = StateMachine::with_phase(WidgetPhase::Idle);
        let t = sm.handle_event(WidgetEvent::WelcomeElapsed);
        assert!(!t.changed);
        assert_eq!(sm.phase(), &WidgetPhase::Idle);
    }

    #[test]
    fn test_can_transition() {
        let sm = StateMachine::new();
        assert!(sm.can_transition(&WidgetEvent::Opened));
        assert!(!sm.can_transition(&WidgetEvent::MessageSubmitted));
    }

    #[test]
    fn test_history_tracking() {
        let mut sm = StateMachine::new();
        sm.handle_event(WidgetEvent::Opened);
        sm.handle_event(WidgetEvent::WelcomeElapsed);

        assert_eq!(sm.history().len(), 2);
        assert_eq!(sm.history()[0].from, WidgetPhase::Closed);
    }
}
