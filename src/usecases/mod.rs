//! Use Cases Layer - Application Business Logic
//!
//! Orchestrates domain logic with port interfaces to implement the
//! planner's workflows. Each use case is a self-contained operation.
//!
//! Use cases:
//! - `TradePlanner`: validates, matches, and plans trade flows
//! - `StepSequence`: tracks position in a planned flow
//! - `FlowRunner`: drives step execution through the executor port

pub mod flow_runner;
pub mod planner;
pub mod sequencer;
