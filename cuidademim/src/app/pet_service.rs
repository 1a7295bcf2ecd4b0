//! Pet service
//!
//! Handles pet registration, lookup, updates and removal.

use std::sync::Arc;

use serde::Serialize;

use crate::app::pet_factory::PetFactory;
use crate::app::registration::{
    BaseRegistration, PetRegistration, RegistrationChain, RegistrationOutcome,
    RegistrationSettings,
};
use crate::domain::entities::{Pet, PetId, PetParams};
use crate::domain::ports::PetRepository;
use crate::error::DomainError;

/// Result of removing a pet
#[derive(Debug, Clone, Serialize)]
pub struct DeletionOutcome {
    pub success: bool,
    pub message: String,
    pub pet: Pet,
}

/// Service for managing pets
pub struct PetService<R>
where
    R: PetRepository,
{
    pets: Arc<R>,
    chain: RegistrationChain,
}

impl<R> PetService<R>
where
    R: PetRepository,
{
    pub fn new(pets: Arc<R>, chain: RegistrationChain) -> Self {
        Self { pets, chain }
    }

    /// The stage order new registrations go through
    pub fn chain(&self) -> &RegistrationChain {
        &self.chain
    }

    /// Register a new pet
    ///
    /// The factory picks the species variant, then the configured chain runs
    /// once. Only a factory rejection is returned as an error; every chain
    /// failure comes back as an unsuccessful outcome.
    pub fn create(
        &self,
        params: &PetParams,
        settings: &RegistrationSettings,
    ) -> Result<RegistrationOutcome, DomainError> {
        let pet = PetFactory::create(params)?;

        let registration = self
            .chain
            .build(BaseRegistration::new(self.pets.clone()), settings);
        let outcome = registration.register(pet);

        if outcome.success {
            tracing::info!(
                kind = %outcome.pet.kind,
                sound = outcome.pet.sound(),
                movement = outcome.pet.movement(),
                "Pet criado com sucesso usando a Factory"
            );
        }

        Ok(outcome)
    }

    /// All pets, oldest first
    pub fn list(&self) -> Result<Vec<Pet>, DomainError> {
        self.pets.list()
    }

    pub fn find(&self, id: &PetId) -> Result<Option<Pet>, DomainError> {
        self.pets.find_by_id(id)
    }

    /// Apply the present params to a stored pet
    pub fn update(&self, id: &PetId, params: &PetParams) -> Result<Pet, DomainError> {
        let mut pet = self
            .pets
            .find_by_id(id)?
            .ok_or_else(|| DomainError::NotFound(id.to_string()))?;

        pet.apply(params);
        self.pets.update(&mut pet)?;
        Ok(pet)
    }

    /// Remove a stored pet
    ///
    /// Lookup failures (missing pet or store fault) are errors, since there is
    /// no pet to report on. Once found, a store failure while removing comes
    /// back as an unsuccessful outcome.
    pub fn delete(&self, id: &PetId) -> Result<DeletionOutcome, DomainError> {
        let pet = self
            .pets
            .find_by_id(id)?
            .ok_or_else(|| DomainError::NotFound(id.to_string()))?;

        let outcome = match self.pets.delete(id) {
            Ok(()) => {
                tracing::info!(name = %pet.name, "Pet excluído com sucesso");
                DeletionOutcome {
                    success: true,
                    message: format!("Pet '{}' excluído com sucesso!", pet.name),
                    pet,
                }
            }
            Err(e) => {
                tracing::error!(error = %e, name = %pet.name, "Erro ao excluir pet");
                DeletionOutcome {
                    success: false,
                    message: format!("Erro ao excluir pet: {}", e),
                    pet,
                }
            }
        };

        Ok(outcome)
    }
}
