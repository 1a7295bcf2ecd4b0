//! Pet factory
//!
//! Turns untrusted params into a `Pet` of the right species variant.

use crate::domain::entities::{Pet, PetKind, PetParams};
use crate::error::DomainError;

/// Factory for species-specific pets
pub struct PetFactory;

impl PetFactory {
    /// Build an unsaved pet from caller params
    ///
    /// Rejects empty params and a missing or blank species. Unrecognised
    /// species degrade to `PetKind::Generic` with a warning.
    pub fn create(params: &PetParams) -> Result<Pet, DomainError> {
        if params.is_empty() {
            return Err(DomainError::InvalidInput(
                "Parâmetros de pet não podem ser vazios".to_string(),
            ));
        }

        let species = params.species.as_deref().unwrap_or_default();
        if species.trim().is_empty() {
            return Err(DomainError::InvalidInput(
                "Espécie é obrigatória".to_string(),
            ));
        }

        let mut pet = Pet::new(
            params.name.clone().unwrap_or_default(),
            species.to_string(),
            params.age,
        );
        pet.description = params.description.clone();
        pet.adopted = params.adopted.unwrap_or(false);

        if pet.kind == PetKind::Generic {
            tracing::warn!(
                species = %species.to_lowercase(),
                "Espécie não reconhecida. Criando Pet genérico."
            );
        }

        Ok(pet)
    }

    /// Species spellings with a dedicated variant
    pub fn supported_species() -> Vec<&'static str> {
        PetKind::recognized_species().collect()
    }

    /// Case-insensitive check against `supported_species`
    pub fn species_supported(species: &str) -> bool {
        let species = species.to_lowercase();
        PetKind::recognized_species().any(|s| s == species)
    }
}
