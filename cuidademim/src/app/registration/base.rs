//! Base registration component
//!
//! Persists the pet through the repository port.

use std::sync::Arc;

use crate::app::registration::{PetRegistration, RegistrationFailure, RegistrationOutcome};
use crate::domain::entities::Pet;
use crate::domain::ports::PetRepository;
use crate::error::DomainError;

/// Innermost component of every registration chain
pub struct BaseRegistration<R>
where
    R: PetRepository,
{
    pets: Arc<R>,
}

impl<R> BaseRegistration<R>
where
    R: PetRepository,
{
    pub fn new(pets: Arc<R>) -> Self {
        Self { pets }
    }
}

impl<R> PetRegistration for BaseRegistration<R>
where
    R: PetRepository,
{
    fn register(&self, mut pet: Pet) -> RegistrationOutcome {
        match self.pets.save(&mut pet) {
            Ok(()) => {
                tracing::debug!(pet_id = ?pet.id, name = %pet.name, "Pet persisted");
                let message = format!("Pet '{}' cadastrado com sucesso!", pet.name);
                RegistrationOutcome::succeeded(message, pet)
            }
            Err(DomainError::Validation(errors)) => RegistrationOutcome::failed(
                RegistrationFailure::Persistence,
                format!("Erro ao cadastrar pet: {}", errors),
                pet,
            ),
            Err(e) => {
                tracing::error!(error = %e, name = %pet.name, "Unexpected failure persisting pet");
                RegistrationOutcome::failed(
                    RegistrationFailure::Persistence,
                    format!("Erro inesperado ao cadastrar pet: {}", e),
                    pet,
                )
            }
        }
    }
}
