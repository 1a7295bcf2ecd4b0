//! Test utilities
//!
//! Manual test doubles and fixtures for unit testing.
//!
//! Hand-written doubles keep the chain tests explicit: a spy counts how many
//! times it was reached, which is what the short-circuit checks need.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
