//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports`. Wallet,
//! chain and signing adapters belong to the embedding application;
//! this crate ships only the reference step generator.
//!
//! Adapter categories:
//! - `steps`: reference `StepGenerator` (unlock, wrap, trade)

pub mod steps;
