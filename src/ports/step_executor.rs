//! Step Executor Port - External Step Execution Interface
//!
//! Runs one step to completion against the wallet/chain. The planner
//! and sequencer never execute anything themselves; they only decide
//! and track. One step executes at a time - the flow runner does not
//! start a step until its predecessor completed.

use async_trait::async_trait;

use crate::domain::step::Step;

/// Trait for external step executors.
#[async_trait]
pub trait StepExecutor: Send + Sync + 'static {
  /// Execute a single step to completion.
  ///
  /// # Errors
  /// Any error terminates the flow; the sequence is marked failed and
  /// never advanced past the failing step. Retry, if any, is a fresh
  /// planning cycle initiated by the user.
  async fn execute_step(&self, step: &Step) -> anyhow::Result<()>;
}
