//! CuidaDeMim
//!
//! Pet adoption record keeping: species-aware pet creation, a decorator
//! chain for registrations and mocked administrative reports.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;

#[cfg(test)]
mod test_utils;
