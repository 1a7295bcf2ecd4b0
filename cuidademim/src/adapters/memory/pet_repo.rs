//! In-memory adapter for PetRepository

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use crate::domain::entities::{Pet, PetId};
use crate::domain::ports::PetRepository;
use crate::error::DomainError;

/// In-memory implementation of PetRepository
///
/// Records are kept in insertion order.
#[derive(Default)]
pub struct InMemoryPetRepository {
    pets: RwLock<Vec<Pet>>,
}

impl InMemoryPetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored pets
    pub fn count(&self) -> Result<usize, DomainError> {
        Ok(self.read()?.len())
    }

    /// Drop every stored pet
    pub fn clear(&self) -> Result<(), DomainError> {
        self.write()?.clear();
        Ok(())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Pet>>, DomainError> {
        self.pets
            .read()
            .map_err(|e| DomainError::Storage(e.to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Pet>>, DomainError> {
        self.pets
            .write()
            .map_err(|e| DomainError::Storage(e.to_string()))
    }
}

fn check_presence(pet: &Pet) -> Result<(), DomainError> {
    let errors = pet.presence_errors();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(DomainError::Validation(errors.join(", ")))
    }
}

impl PetRepository for InMemoryPetRepository {
    fn save(&self, pet: &mut Pet) -> Result<(), DomainError> {
        check_presence(pet)?;

        let now = Utc::now();
        pet.id = Some(PetId::new());
        pet.created_at = Some(now);
        pet.updated_at = Some(now);

        self.write()?.push(pet.clone());
        Ok(())
    }

    fn find_by_id(&self, id: &PetId) -> Result<Option<Pet>, DomainError> {
        let pets = self.read()?;
        Ok(pets.iter().find(|p| p.id.as_ref() == Some(id)).cloned())
    }

    fn list(&self) -> Result<Vec<Pet>, DomainError> {
        Ok(self.read()?.clone())
    }

    fn update(&self, pet: &mut Pet) -> Result<(), DomainError> {
        let id = pet
            .id
            .ok_or_else(|| DomainError::NotFound("pet has no id".to_string()))?;
        check_presence(pet)?;

        let mut pets = self.write()?;
        let slot = pets
            .iter_mut()
            .find(|p| p.id == Some(id))
            .ok_or_else(|| DomainError::NotFound(id.to_string()))?;

        pet.updated_at = Some(Utc::now());
        *slot = pet.clone();
        Ok(())
    }

    fn delete(&self, id: &PetId) -> Result<(), DomainError> {
        let mut pets = self.write()?;
        let before = pets.len();
        pets.retain(|p| p.id.as_ref() != Some(id));
        if pets.len() == before {
            return Err(DomainError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_assigns_id_and_timestamps() {
        let repo = InMemoryPetRepository::new();
        let mut pet = Pet::new("Rex", "Dog", Some(3));

        repo.save(&mut pet).unwrap();

        assert!(pet.is_persisted());
        assert!(pet.created_at.is_some());
        assert_eq!(pet.created_at, pet.updated_at);
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn save_rejects_blank_name_and_species() {
        let repo = InMemoryPetRepository::new();
        let mut pet = Pet::new("", "", None);

        let result = repo.save(&mut pet);

        assert_eq!(
            result,
            Err(DomainError::Validation(
                "Nome não pode ficar em branco, Espécie não pode ficar em branco".to_string()
            ))
        );
        assert!(!pet.is_persisted());
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn find_by_id_returns_stored_copy() {
        let repo = InMemoryPetRepository::new();
        let mut pet = Pet::new("Luna", "Cat", Some(2));
        repo.save(&mut pet).unwrap();

        let found = repo.find_by_id(&pet.id.unwrap()).unwrap();

        assert_eq!(found, Some(pet));
    }

    #[test]
    fn find_by_id_missing() {
        let repo = InMemoryPetRepository::new();
        assert_eq!(repo.find_by_id(&PetId::new()).unwrap(), None);
    }

    #[test]
    fn list_keeps_insertion_order() {
        let repo = InMemoryPetRepository::new();
        for name in ["Rex", "Luna", "Thor"] {
            let mut pet = Pet::new(name, "Dog", Some(1));
            repo.save(&mut pet).unwrap();
        }

        let names: Vec<String> = repo.list().unwrap().into_iter().map(|p| p.name).collect();

        assert_eq!(names, vec!["Rex", "Luna", "Thor"]);
    }

    #[test]
    fn update_replaces_record() {
        let repo = InMemoryPetRepository::new();
        let mut pet = Pet::new("Rex", "Dog", Some(3));
        repo.save(&mut pet).unwrap();

        pet.adopted = true;
        repo.update(&mut pet).unwrap();

        let stored = repo.find_by_id(&pet.id.unwrap()).unwrap().unwrap();
        assert!(stored.adopted);
    }

    #[test]
    fn update_unsaved_pet_is_not_found() {
        let repo = InMemoryPetRepository::new();
        let mut pet = Pet::new("Rex", "Dog", Some(3));

        assert!(matches!(
            repo.update(&mut pet),
            Err(DomainError::NotFound(_))
        ));
    }

    #[test]
    fn update_rejects_blank_name() {
        let repo = InMemoryPetRepository::new();
        let mut pet = Pet::new("Rex", "Dog", Some(3));
        repo.save(&mut pet).unwrap();

        pet.name = " ".to_string();

        assert!(matches!(
            repo.update(&mut pet),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn delete_removes_record() {
        let repo = InMemoryPetRepository::new();
        let mut pet = Pet::new("Rex", "Dog", Some(3));
        repo.save(&mut pet).unwrap();

        repo.delete(&pet.id.unwrap()).unwrap();

        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn delete_missing_is_not_found() {
        let repo = InMemoryPetRepository::new();
        assert!(matches!(
            repo.delete(&PetId::new()),
            Err(DomainError::NotFound(_))
        ));
    }
}
