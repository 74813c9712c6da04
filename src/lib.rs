//! CLOB Trade Planner — Library Root
//!
//! Market-order execution planner and order-book normalizer for a
//! 0x-style peer-to-peer exchange. Re-exports all modules for
//! integration tests and benchmarks.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod usecases;
