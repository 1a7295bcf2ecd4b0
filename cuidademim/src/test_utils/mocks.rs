//! Test doubles for the registration chain and the repository port

use std::cell::{Cell, RefCell};

use crate::adapters::InMemoryPetRepository;
use crate::app::registration::{PetRegistration, RegistrationFailure, RegistrationOutcome};
use crate::domain::entities::{Pet, PetId};
use crate::domain::ports::PetRepository;
use crate::error::DomainError;

// ============================================================================
// Spy registration component
// ============================================================================

/// Inner component that records each call and answers with a fixed outcome
pub struct SpyRegistration {
    calls: Cell<usize>,
    last_seen: RefCell<Option<Pet>>,
    failure: Option<String>,
}

impl SpyRegistration {
    pub const SUCCESS_MESSAGE: &'static str = "spy: registered";

    pub fn succeeding() -> Self {
        Self {
            calls: Cell::new(0),
            last_seen: RefCell::new(None),
            failure: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::succeeding()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn last_seen_name(&self) -> Option<String> {
        self.last_seen.borrow().as_ref().map(|p| p.name.clone())
    }
}

impl PetRegistration for SpyRegistration {
    fn register(&self, pet: Pet) -> RegistrationOutcome {
        self.calls.set(self.calls.get() + 1);
        *self.last_seen.borrow_mut() = Some(pet.clone());

        match self.failure {
            Some(ref message) => {
                RegistrationOutcome::failed(RegistrationFailure::Persistence, message.clone(), pet)
            }
            None => RegistrationOutcome::succeeded(Self::SUCCESS_MESSAGE, pet),
        }
    }
}

// ============================================================================
// Failing repository
// ============================================================================

/// Repository whose every call fails with a storage error
pub struct FailingPetRepository {
    reason: String,
}

impl FailingPetRepository {
    pub fn new(reason: &str) -> Self {
        Self {
            reason: reason.to_string(),
        }
    }

    fn err(&self) -> DomainError {
        DomainError::Storage(self.reason.clone())
    }
}

impl PetRepository for FailingPetRepository {
    fn save(&self, _pet: &mut Pet) -> Result<(), DomainError> {
        Err(self.err())
    }

    fn find_by_id(&self, _id: &PetId) -> Result<Option<Pet>, DomainError> {
        Err(self.err())
    }

    fn list(&self) -> Result<Vec<Pet>, DomainError> {
        Err(self.err())
    }

    fn update(&self, _pet: &mut Pet) -> Result<(), DomainError> {
        Err(self.err())
    }

    fn delete(&self, _id: &PetId) -> Result<(), DomainError> {
        Err(self.err())
    }
}

// ============================================================================
// Repository that refuses removals
// ============================================================================

/// In-memory repository whose `delete` always fails with a storage error
pub struct UndeletablePetRepository {
    inner: InMemoryPetRepository,
    reason: String,
}

impl UndeletablePetRepository {
    pub fn new(reason: &str) -> Self {
        Self {
            inner: InMemoryPetRepository::new(),
            reason: reason.to_string(),
        }
    }
}

impl PetRepository for UndeletablePetRepository {
    fn save(&self, pet: &mut Pet) -> Result<(), DomainError> {
        self.inner.save(pet)
    }

    fn find_by_id(&self, id: &PetId) -> Result<Option<Pet>, DomainError> {
        self.inner.find_by_id(id)
    }

    fn list(&self) -> Result<Vec<Pet>, DomainError> {
        self.inner.list()
    }

    fn update(&self, pet: &mut Pet) -> Result<(), DomainError> {
        self.inner.update(pet)
    }

    fn delete(&self, _id: &PetId) -> Result<(), DomainError> {
        Err(DomainError::Storage(self.reason.clone()))
    }
}
