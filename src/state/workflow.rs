/// The submission workflow state machine.
///
/// A submit intent runs validate -> submit -> success/failure -> reset as
/// one explicit machine with guarded transitions, instead of independent
/// boolean flags that could disagree (submitting and success at once, say).
/// The machine owns no I/O: the caller performs the actual submission and
/// feeds the outcome back through `finish_submit`.

use std::time::Duration;

use super::draft::DraftReport;
use super::validate::{validate, ValidationIssue};
use crate::submit::SubmissionError;

/// How long the success overlay stays up before dismissing itself
pub const SUCCESS_DISMISS_DELAY: Duration = Duration::from_secs(5);

/// The submission lifecycle phase.
///
/// `Success` carries the token of its pending auto-dismiss timer; a timer
/// firing with any other token is stale and ignored, so a manual dismissal
/// followed by a later timer callback can never double-transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowState {
    Idle,
    Submitting,
    Success { token: u64 },
    Failure,
}

/// What `begin_submit` decided to do with the intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Draft is valid; state moved to `Submitting` and the caller should
    /// now invoke the submission collaborator.
    Accepted,
    /// Validation found blocking issues; state untouched.
    Rejected(Vec<ValidationIssue>),
    /// A submission is already in flight (or the success overlay is up);
    /// the intent is a no-op.
    Ignored,
}

/// What `finish_submit` resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Entered `Success`; caller resets the draft and schedules the
    /// auto-dismiss timer with this token.
    Submitted { dismiss_token: u64 },
    /// Entered `Failure`; caller reports it, then calls `recover()` to
    /// return to `Idle` with the draft preserved for retry.
    Failed,
}

#[derive(Debug)]
pub struct SubmissionWorkflow {
    state: WorkflowState,
    /// Source of auto-dismiss tokens; bumping it invalidates older timers
    next_token: u64,
}

impl Default for SubmissionWorkflow {
    fn default() -> Self {
        Self {
            state: WorkflowState::Idle,
            next_token: 0,
        }
    }
}

impl SubmissionWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> WorkflowState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == WorkflowState::Submitting
    }

    pub fn is_success(&self) -> bool {
        matches!(self.state, WorkflowState::Success { .. })
    }

    /// Handle a submit intent against the current draft.
    ///
    /// Only valid from `Idle`: re-submitting while a call is in flight is
    /// a no-op, and the success overlay must be dismissed first.
    pub fn begin_submit(&mut self, draft: &DraftReport) -> SubmitDecision {
        if self.state != WorkflowState::Idle {
            return SubmitDecision::Ignored;
        }

        let issues = validate(draft);
        if !issues.is_empty() {
            return SubmitDecision::Rejected(issues);
        }

        self.state = WorkflowState::Submitting;
        SubmitDecision::Accepted
    }

    /// Record the collaborator's outcome. Clears the in-flight state on
    /// both arms, unconditionally.
    pub fn finish_submit(&mut self, result: Result<(), SubmissionError>) -> SubmitOutcome {
        debug_assert_eq!(self.state, WorkflowState::Submitting);

        match result {
            Ok(()) => {
                let token = self.next_token;
                self.next_token += 1;
                self.state = WorkflowState::Success { token };
                SubmitOutcome::Submitted {
                    dismiss_token: token,
                }
            }
            Err(error) => {
                eprintln!("⚠️  Report submission failed: {error}");
                self.state = WorkflowState::Failure;
                SubmitOutcome::Failed
            }
        }
    }

    /// Leave `Failure` for `Idle`. There is no failure screen: the caller
    /// invokes this in the same event-loop turn that reported the error,
    /// leaving the form populated and interactive for retry.
    pub fn recover(&mut self) {
        if self.state == WorkflowState::Failure {
            self.state = WorkflowState::Idle;
        }
    }

    /// Manual dismissal of the success overlay. Returns whether a
    /// transition happened. Invalidates the pending auto-dismiss timer by
    /// leaving `Success`, so its later firing finds a stale token.
    pub fn dismiss_success(&mut self) -> bool {
        if self.is_success() {
            self.state = WorkflowState::Idle;
            true
        } else {
            false
        }
    }

    /// Timer-driven dismissal. Only acts if the machine is still in the
    /// `Success` that scheduled this exact token.
    pub fn auto_dismiss(&mut self, token: u64) -> bool {
        match self.state {
            WorkflowState::Success { token: current } if current == token => {
                self.state = WorkflowState::Idle;
                true
            }
            _ => false,
        }
    }
}
