//! Audit logging stage

use crate::app::registration::{PetRegistration, RegistrationOutcome};
use crate::domain::entities::Pet;

/// Emits an audit record around the inner call and returns its outcome as is
pub struct LoggerDecorator<C> {
    inner: C,
}

impl<C: PetRegistration> LoggerDecorator<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<C: PetRegistration> PetRegistration for LoggerDecorator<C> {
    fn register(&self, pet: Pet) -> RegistrationOutcome {
        tracing::info!(name = %pet.name, "AUDITORIA: Tentativa de cadastro do Pet");

        let outcome = self.inner.register(pet);

        if outcome.success {
            tracing::info!(
                name = %outcome.pet.name,
                pet_id = ?outcome.pet.id,
                "AUDITORIA: Cadastro de Pet realizado com SUCESSO"
            );
        } else {
            tracing::error!(
                name = %outcome.pet.name,
                reason = %outcome.message,
                "AUDITORIA: Falha no cadastro do Pet"
            );
        }

        outcome
    }
}
