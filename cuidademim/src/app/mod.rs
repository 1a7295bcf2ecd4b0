//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and the registration
//! chain.

pub mod pet_factory;
pub mod pet_service;
pub mod registration;
pub mod reports;

pub use pet_factory::PetFactory;
pub use pet_service::{DeletionOutcome, PetService};
pub use registration::{
    PetRegistration, RegistrationChain, RegistrationFailure, RegistrationOutcome,
    RegistrationSettings, Stage,
};
pub use reports::{ReportContext, ReportRegistry};
