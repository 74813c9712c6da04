//! Flow Runner - Step Execution Driver
//!
//! Drives a planned `StepSequence` through the external executor:
//! one step at a time, advancing on success, marking the sequence
//! failed on the first error and stopping there. No retry happens
//! here; a retry is a fresh planning cycle initiated by the user.
//! Completing a flow that contained a trade step yields the
//! notification record for it.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::domain::order::{Notification, NotificationKind};
use crate::domain::step::{Step, StepKind};
use crate::ports::step_executor::StepExecutor;

use super::sequencer::StepSequence;

/// Result of driving a flow to its end.
#[derive(Debug, Clone)]
pub enum FlowOutcome {
  /// Every step ran; the flow is done. Carries the notification for
  /// the flow's trade step, if it had one.
  Completed {
    steps_run: usize,
    notification: Option<Notification>,
  },
  /// A step failed; the sequence is marked failed with this reason.
  Failed { step: StepKind, reason: String },
}

/// Executes planned flows through the step executor port.
pub struct FlowRunner<E: StepExecutor> {
  executor: Arc<E>,
}

impl<E: StepExecutor> FlowRunner<E> {
  pub fn new(executor: Arc<E>) -> Self {
    Self { executor }
  }

  /// Run the sequence's steps in order until done or failed.
  ///
  /// Each step executes to completion before the sequence advances;
  /// steps never run in parallel.
  #[instrument(skip(self, sequence))]
  pub async fn run(&self, sequence: &mut StepSequence) -> FlowOutcome {
    let mut steps_run = 0;
    let mut notification = None;
    while let Some(step) = sequence.current_step().cloned() {
      let kind = step.kind();
      match self.executor.execute_step(&step).await {
        Ok(()) => {
          steps_run += 1;
          info!(step = %kind, "Step completed");
          if let Some(n) = Self::notification_for(&step) {
            // A combined flow notifies for its final trade step.
            notification = Some(n);
          }
          sequence.advance();
        }
        Err(err) => {
          warn!(step = %kind, error = %err, "Step failed; flow stopped");
          sequence.mark_failed(err.to_string());
          return FlowOutcome::Failed {
            step: kind,
            reason: err.to_string(),
          };
        }
      }
    }
    info!(steps_run, "Flow completed");
    FlowOutcome::Completed {
      steps_run,
      notification,
    }
  }

  // Trade steps produce a user-facing record; wallet steps do not.
  fn notification_for(step: &Step) -> Option<Notification> {
    match step {
      Step::BuySellMarket {
        token,
        amount,
        side,
        ..
      } => Some(Notification::new(
        NotificationKind::Market,
        *amount,
        token.symbol.as_str(),
        *side,
      )),
      Step::BuySellLimit {
        token,
        amount,
        side,
        ..
      } => Some(Notification::new(
        NotificationKind::Limit,
        *amount,
        token.symbol.as_str(),
        *side,
      )),
      Step::ToggleTokenLock { .. } | Step::WrapEth { .. } => None,
    }
  }
}
