//! Validation stage
//!
//! Checks every field rule and reports all violations at once.

use crate::app::registration::{PetRegistration, RegistrationFailure, RegistrationOutcome};
use crate::domain::entities::Pet;

/// Ages above this are flagged as implausible
pub const MAX_PLAUSIBLE_AGE: i32 = 30;

/// Rejects pets that break a field rule without reaching the inner component
pub struct ValidatorDecorator<C> {
    inner: C,
}

impl<C: PetRegistration> ValidatorDecorator<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

/// Every rule the pet violates, in a fixed order
pub fn violations(pet: &Pet) -> Vec<String> {
    let mut errors = Vec::new();

    if pet.name.trim().is_empty() {
        errors.push("Nome do pet não pode estar vazio".to_string());
    }

    match pet.age {
        None => errors.push("Idade do pet deve ser informada".to_string()),
        Some(age) if age < 0 => {
            errors.push("Idade do pet deve ser um valor positivo".to_string())
        }
        Some(age) if age > MAX_PLAUSIBLE_AGE => {
            errors.push("Idade do pet parece inválida (muito alta)".to_string())
        }
        Some(_) => {}
    }

    if pet.species.trim().is_empty() {
        errors.push("Espécie do pet não pode estar vazia".to_string());
    }

    errors
}

impl<C: PetRegistration> PetRegistration for ValidatorDecorator<C> {
    fn register(&self, pet: Pet) -> RegistrationOutcome {
        let errors = violations(&pet);

        if !errors.is_empty() {
            let joined = errors.join(", ");
            tracing::warn!(name = %pet.name, violations = %joined, "Validação falhou");
            return RegistrationOutcome::failed(
                RegistrationFailure::Validation,
                format!("Validação falhou: {}", joined),
                pet,
            );
        }

        tracing::info!(name = %pet.name, "Validação bem-sucedida");
        self.inner.register(pet)
    }
}
