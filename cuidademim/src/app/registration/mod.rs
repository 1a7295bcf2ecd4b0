//! Pet registration chain
//!
//! A registration is one call to `PetRegistration::register` on the
//! outermost component. Decorators wrap a single inner component and decide
//! on their own whether to delegate:
//!
//! - `AuthenticatorDecorator` and `ValidatorDecorator` short-circuit on
//!   failure and never reach the inner component.
//! - `FormatterDecorator` mutates the pet, then always delegates.
//! - `NotifierDecorator` always delegates, then attaches a notification on
//!   success only.
//! - `LoggerDecorator` always delegates and only emits audit records.
//!
//! The chain terminates in `BaseRegistration`, which persists the pet.
//! Failures are returned as data in `RegistrationOutcome`.

pub mod authenticator;
pub mod base;
pub mod chain;
pub mod formatter;
pub mod logger;
pub mod notifier;
pub mod validator;

use serde::Serialize;

use crate::domain::entities::Pet;

pub use authenticator::AuthenticatorDecorator;
pub use base::BaseRegistration;
pub use chain::{RegistrationChain, RegistrationSettings, Stage};
pub use formatter::FormatterDecorator;
pub use logger::LoggerDecorator;
pub use notifier::NotifierDecorator;
pub use validator::{ValidatorDecorator, MAX_PLAUSIBLE_AGE};

/// A component of the registration chain
///
/// The pet is handed in by value and comes back inside the outcome, with its
/// id assigned when persistence succeeded.
pub trait PetRegistration {
    fn register(&self, pet: Pet) -> RegistrationOutcome;
}

impl<C: PetRegistration + ?Sized> PetRegistration for Box<C> {
    fn register(&self, pet: Pet) -> RegistrationOutcome {
        (**self).register(pet)
    }
}

impl<C: PetRegistration + ?Sized> PetRegistration for &C {
    fn register(&self, pet: Pet) -> RegistrationOutcome {
        (**self).register(pet)
    }
}

/// Which stage turned a registration down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationFailure {
    Authentication,
    Validation,
    Persistence,
}

/// Notification attached by `NotifierDecorator` after a successful registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub channel: String,
    pub sent: bool,
    pub message: String,
}

/// Result of a registration stage
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationOutcome {
    pub success: bool,
    pub message: String,
    pub pet: Pet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<RegistrationFailure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<Notification>,
}

impl RegistrationOutcome {
    pub fn succeeded(message: impl Into<String>, pet: Pet) -> Self {
        Self {
            success: true,
            message: message.into(),
            pet,
            failure: None,
            notification: None,
        }
    }

    pub fn failed(kind: RegistrationFailure, message: impl Into<String>, pet: Pet) -> Self {
        Self {
            success: false,
            message: message.into(),
            pet,
            failure: Some(kind),
            notification: None,
        }
    }
}
