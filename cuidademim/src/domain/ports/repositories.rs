//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., in-memory).

use crate::domain::entities::{Pet, PetId};
use crate::error::DomainError;

/// Repository for Pet entities
///
/// A single `save` is expected to be atomic; nothing here spans records.
pub trait PetRepository: Send + Sync {
    /// Persist a new pet, assigning its id and timestamps
    ///
    /// Fails with `DomainError::Validation` carrying the joined presence
    /// errors when the record is incomplete.
    fn save(&self, pet: &mut Pet) -> Result<(), DomainError>;

    /// Find a pet by ID
    fn find_by_id(&self, id: &PetId) -> Result<Option<Pet>, DomainError>;

    /// List all pets, oldest first
    fn list(&self) -> Result<Vec<Pet>, DomainError>;

    /// Replace a stored pet
    fn update(&self, pet: &mut Pet) -> Result<(), DomainError>;

    /// Remove a pet
    fn delete(&self, id: &PetId) -> Result<(), DomainError>;
}
