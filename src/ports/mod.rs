//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) that the domain/usecases layer
//! requires from the outside world. Adapters implement these traits.
//!
//! Port categories:
//! - `StepGenerator`: builds the concrete steps of a trade sub-flow
//! - `StepExecutor`: runs one step against the wallet/chain
//! - `OrderSigner`: builds and signs a new resting limit order

pub mod order_signer;
pub mod step_executor;
pub mod step_generator;
