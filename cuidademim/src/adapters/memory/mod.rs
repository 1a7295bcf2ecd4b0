//! In-memory adapters
//!
//! Process-local implementations of repository traits.

pub mod pet_repo;

pub use pet_repo::InMemoryPetRepository;
