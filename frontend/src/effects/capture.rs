//! State of the newsletter capture bar.

use std::rc::Rc;

use thiserror::Error;
use yew::functional::Reducible;

use crate::config;

pub const JOINED_LABEL: &str = "Joined!";
pub const ERROR_LABEL: &str = "Error - Try Again";

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("form endpoint answered with status {status}")]
    Rejected { status: u16 },
    #[error("request failed: {0}")]
    Transport(String),
    #[error("could not build form data: {0}")]
    Encode(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Joined,
    Failed,
}

impl SubmitPhase {
    /// Delay before a transient label is cleared.
    pub fn settle_after_ms(self) -> Option<u32> {
        match self {
            SubmitPhase::Joined => Some(config::JOINED_LABEL_MS),
            SubmitPhase::Failed => Some(config::ERROR_LABEL_MS),
            SubmitPhase::Idle | SubmitPhase::Submitting => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaptureState {
    pub visible: bool,
    pub email: String,
    pub phase: SubmitPhase,
}

impl Default for CaptureState {
    fn default() -> Self {
        // Shown on every page load; dismissal is not remembered.
        Self {
            visible: true,
            email: String::new(),
            phase: SubmitPhase::Idle,
        }
    }
}

pub enum CaptureAction {
    Input(String),
    Submit,
    Finished(Result<(), SubmitError>),
    Settle,
    Dismiss,
    Escape,
}

impl CaptureState {
    /// The address to send, if a submission may start now.
    pub fn submission(&self) -> Option<String> {
        if self.phase != SubmitPhase::Idle || self.email.trim().is_empty() {
            return None;
        }
        Some(self.email.trim().to_string())
    }

    pub fn is_loading(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn label<'a>(&self, idle_label: &'a str) -> &'a str {
        match self.phase {
            SubmitPhase::Joined => JOINED_LABEL,
            SubmitPhase::Failed => ERROR_LABEL,
            SubmitPhase::Idle | SubmitPhase::Submitting => idle_label,
        }
    }

    pub fn apply(&mut self, action: CaptureAction) {
        match action {
            CaptureAction::Input(email) => self.email = email,
            CaptureAction::Submit => {
                if self.submission().is_some() {
                    self.phase = SubmitPhase::Submitting;
                }
            }
            CaptureAction::Finished(Ok(())) => {
                self.email.clear();
                self.phase = SubmitPhase::Joined;
            }
            CaptureAction::Finished(Err(_)) => {
                self.phase = SubmitPhase::Failed;
            }
            CaptureAction::Settle => match self.phase {
                SubmitPhase::Joined => {
                    self.phase = SubmitPhase::Idle;
                    self.visible = false;
                }
                SubmitPhase::Failed => self.phase = SubmitPhase::Idle,
                SubmitPhase::Idle | SubmitPhase::Submitting => {}
            },
            CaptureAction::Dismiss => self.visible = false,
            CaptureAction::Escape => {
                if self.visible {
                    self.visible = false;
                }
            }
        }
    }
}

impl Reducible for CaptureState {
    type Action = CaptureAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(email: &str) -> CaptureState {
        let mut state = CaptureState::default();
        state.apply(CaptureAction::Input(email.to_string()));
        state
    }

    #[test]
    fn empty_address_does_not_submit() {
        let mut state = typed("   ");
        assert_eq!(state.submission(), None);
        state.apply(CaptureAction::Submit);
        assert_eq!(state.phase, SubmitPhase::Idle);
    }

    #[test]
    fn successful_submit_clears_input_and_shows_joined() {
        let mut state = typed("ada@example.com");
        assert_eq!(state.submission().as_deref(), Some("ada@example.com"));
        state.apply(CaptureAction::Submit);
        assert!(state.is_loading());
        assert_eq!(state.label("Join"), "Join");

        state.apply(CaptureAction::Finished(Ok(())));
        assert!(!state.is_loading());
        assert!(state.email.is_empty());
        assert_eq!(state.label("Join"), JOINED_LABEL);
        assert_eq!(state.phase.settle_after_ms(), Some(1_500));

        state.apply(CaptureAction::Settle);
        assert_eq!(state.label("Join"), "Join");
        assert!(!state.visible);
    }

    #[test]
    fn failed_submit_restores_label_after_two_seconds() {
        let mut state = typed("ada@example.com");
        state.apply(CaptureAction::Submit);
        state.apply(CaptureAction::Finished(Err(SubmitError::Rejected { status: 422 })));
        assert_eq!(state.label("Join"), ERROR_LABEL);
        assert_eq!(state.phase.settle_after_ms(), Some(2_000));
        assert_eq!(state.email, "ada@example.com");

        state.apply(CaptureAction::Settle);
        assert_eq!(state.label("Join"), "Join");
        assert!(state.visible);
        assert_eq!(state.phase, SubmitPhase::Idle);
    }

    #[test]
    fn second_submit_while_loading_is_ignored() {
        let mut state = typed("ada@example.com");
        state.apply(CaptureAction::Submit);
        assert_eq!(state.submission(), None);
    }

    #[test]
    fn escape_hides_a_visible_bar_and_keeps_the_draft() {
        let mut state = typed("ada@example.com");
        state.apply(CaptureAction::Escape);
        assert!(!state.visible);
        assert_eq!(state.email, "ada@example.com");
        assert_eq!(state.phase, SubmitPhase::Idle);
    }

    #[test]
    fn escape_on_a_hidden_bar_changes_nothing() {
        let mut state = typed("ada@example.com");
        state.apply(CaptureAction::Dismiss);
        let hidden = state.clone();
        state.apply(CaptureAction::Escape);
        assert_eq!(state, hidden);
    }

    #[test]
    fn close_button_hides_the_bar() {
        let mut state = CaptureState::default();
        state.apply(CaptureAction::Dismiss);
        assert!(!state.visible);
    }

    #[test]
    fn errors_describe_the_failure() {
        assert_eq!(
            SubmitError::Rejected { status: 500 }.to_string(),
            "form endpoint answered with status 500"
        );
        assert_eq!(
            SubmitError::Transport("offline".into()).to_string(),
            "request failed: offline"
        );
    }
}
