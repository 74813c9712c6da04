//! Step Sequencer - Trade Flow Position Tracking
//!
//! Holds the ordered list of pending steps, the currently active step,
//! and the completed steps, advancing linearly. There is exactly one
//! live sequence per trade session: starting a new plan replaces the
//! previous contents. The sequencer never runs steps itself.

use std::collections::VecDeque;

use tracing::debug;

use crate::domain::step::Step;

/// Position state of a planned trade flow.
#[derive(Debug, Default)]
pub struct StepSequence {
  pending: VecDeque<Step>,
  current: Option<Step>,
  done: Vec<Step>,
  failure: Option<String>,
}

impl StepSequence {
  pub fn new() -> Self {
    Self::default()
  }

  /// Install a freshly planned flow, discarding any previous state.
  ///
  /// The first step becomes current; the rest go to pending. An empty
  /// flow leaves the sequence empty.
  pub fn start(&mut self, steps: Vec<Step>) {
    self.reset();
    let mut pending: VecDeque<Step> = steps.into();
    self.current = pending.pop_front();
    self.pending = pending;
    debug!(
      pending = self.pending.len(),
      has_current = self.current.is_some(),
      "Step sequence started"
    );
  }

  /// Move the current step to done and promote the next pending step.
  ///
  /// The single linear transition; no re-planning happens here.
  pub fn advance(&mut self) {
    if let Some(step) = self.current.take() {
      self.done.push(step);
    }
    self.current = self.pending.pop_front();
  }

  /// Clear all state. Used on flow abandonment or restart.
  pub fn reset(&mut self) {
    self.pending.clear();
    self.current = None;
    self.done.clear();
    self.failure = None;
    debug!("Step sequence reset");
  }

  /// Record a step execution failure. The sequence stops where it is;
  /// the failing step stays current and is never retried here.
  pub fn mark_failed(&mut self, reason: impl Into<String>) {
    self.failure = Some(reason.into());
  }

  pub fn current_step(&self) -> Option<&Step> {
    self.current.as_ref()
  }

  pub fn pending_steps(&self) -> &VecDeque<Step> {
    &self.pending
  }

  pub fn done_steps(&self) -> &[Step] {
    &self.done
  }

  pub fn failure(&self) -> Option<&str> {
    self.failure.as_deref()
  }

  pub fn is_failed(&self) -> bool {
    self.failure.is_some()
  }

  /// All planned steps ran to completion.
  pub fn is_complete(&self) -> bool {
    self.current.is_none() && self.pending.is_empty() && !self.is_failed()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::step::{Step, StepContext};
  use crate::domain::token::Token;
  use rust_decimal_macros::dec;

  fn lock_step(symbol: &str) -> Step {
    Step::ToggleTokenLock {
      token: Token::new(symbol, "0x01", 18),
      is_unlocked: false,
      context: StepContext::Flow,
    }
  }

  fn wrap_step() -> Step {
    Step::WrapEth {
      current_weth_balance: dec!(0),
      new_weth_balance: dec!(5),
      context: StepContext::Flow,
    }
  }

  #[test]
  fn test_start_partitions_first_and_rest() {
    let mut seq = StepSequence::new();
    seq.start(vec![lock_step("ZRX"), wrap_step()]);

    assert!(seq.current_step().is_some());
    assert_eq!(seq.pending_steps().len(), 1);
    assert!(seq.done_steps().is_empty());
  }

  #[test]
  fn test_advance_walks_linearly() {
    let mut seq = StepSequence::new();
    seq.start(vec![lock_step("ZRX"), wrap_step()]);

    seq.advance();
    assert_eq!(seq.done_steps().len(), 1);
    assert_eq!(seq.current_step(), Some(&wrap_step()));
    assert!(seq.pending_steps().is_empty());

    seq.advance();
    assert_eq!(seq.done_steps().len(), 2);
    assert_eq!(seq.current_step(), None);
    assert!(seq.is_complete());
  }

  #[test]
  fn test_advance_on_empty_sequence_is_noop() {
    let mut seq = StepSequence::new();
    seq.advance();
    assert!(seq.done_steps().is_empty());
    assert_eq!(seq.current_step(), None);
  }

  #[test]
  fn test_reset_clears_everything() {
    let mut seq = StepSequence::new();
    seq.start(vec![lock_step("ZRX"), wrap_step()]);
    seq.advance();
    seq.mark_failed("wallet rejected");
    seq.reset();

    assert_eq!(seq.current_step(), None);
    assert!(seq.pending_steps().is_empty());
    assert!(seq.done_steps().is_empty());
    assert!(!seq.is_failed());
  }

  #[test]
  fn test_start_replaces_previous_flow() {
    let mut seq = StepSequence::new();
    seq.start(vec![lock_step("ZRX"), wrap_step()]);
    seq.advance();

    seq.start(vec![lock_step("DAI")]);
    assert_eq!(seq.current_step(), Some(&lock_step("DAI")));
    assert!(seq.done_steps().is_empty());
    assert!(seq.pending_steps().is_empty());
  }

  #[test]
  fn test_failure_keeps_current_step() {
    let mut seq = StepSequence::new();
    seq.start(vec![lock_step("ZRX"), wrap_step()]);
    seq.mark_failed("execution reverted");

    assert!(seq.is_failed());
    assert!(!seq.is_complete());
    assert_eq!(seq.failure(), Some("execution reverted"));
    assert_eq!(seq.current_step(), Some(&lock_step("ZRX")));
  }
}
