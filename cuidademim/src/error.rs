//! Unified error types for CuidaDeMim
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic errors surfaced to callers
//! - `ConfigError`: Startup configuration errors
//!
//! The registration chain never returns these across a component boundary;
//! its failures are carried as data in `RegistrationOutcome`.

use thiserror::Error;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Entrada inválida: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    Validation(String),

    #[error("Pet não encontrado: {0}")]
    NotFound(String),

    #[error("Erro de armazenamento: {0}")]
    Storage(String),

    #[error("Tipo de Relatório Inválido: {0}")]
    InvalidReportType(String),
}

/// Configuration errors raised while reading the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown registration stage: {0}")]
    UnknownStage(String),

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}
