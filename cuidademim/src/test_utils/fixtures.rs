//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{Pet, PetParams};

/// A valid, unsaved dog
pub fn test_pet() -> Pet {
    Pet::new("Rex", "Dog", Some(3))
}

/// An unsaved pet with the given fields
pub fn test_pet_with(name: &str, species: &str, age: Option<i32>) -> Pet {
    Pet::new(name, species, age)
}

/// Params as a form submission would produce them
pub fn test_params(name: &str, species: &str, age: i32) -> PetParams {
    PetParams {
        name: Some(name.to_string()),
        species: Some(species.to_string()),
        age: Some(age),
        description: None,
        adopted: None,
    }
}
