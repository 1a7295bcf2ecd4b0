//! Pet domain entity
//!
//! Represents an animal registered for adoption.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a pet, assigned when the record is persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PetId(pub Uuid);

impl PetId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PetId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for PetId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Species variant chosen by the factory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetKind {
    Dog,
    Cat,
    Generic,
}

/// Species spellings with a dedicated variant. Anything else is `Generic`.
const SPECIES_TABLE: &[(&str, PetKind)] = &[
    ("cachorro", PetKind::Dog),
    ("dog", PetKind::Dog),
    ("gato", PetKind::Cat),
    ("cat", PetKind::Cat),
];

impl PetKind {
    /// Look up the variant for a species string (case and surrounding
    /// whitespace are ignored)
    pub fn from_species(species: &str) -> Self {
        let key = species.trim().to_lowercase();
        SPECIES_TABLE
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, kind)| *kind)
            .unwrap_or(PetKind::Generic)
    }

    /// Species spellings that map to a dedicated variant
    pub fn recognized_species() -> impl Iterator<Item = &'static str> {
        SPECIES_TABLE.iter().map(|(name, _)| *name)
    }

    pub fn sound(&self) -> &'static str {
        match self {
            PetKind::Dog => "Au au! (Sou um Dog, minha Factory me criou com este som)",
            PetKind::Cat => "Miau! (Sou um Cat, minha Factory me criou com este som)",
            PetKind::Generic => "...",
        }
    }

    pub fn movement(&self) -> &'static str {
        match self {
            PetKind::Dog => "(Correndo e abanando o rabo)",
            PetKind::Cat | PetKind::Generic => "(Se movendo de forma genérica)",
        }
    }
}

impl std::fmt::Display for PetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PetKind::Dog => write!(f, "dog"),
            PetKind::Cat => write!(f, "cat"),
            PetKind::Generic => write!(f, "generic"),
        }
    }
}

/// A pet record
///
/// `id` and the timestamps stay `None` until the record is persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pet {
    pub id: Option<PetId>,
    pub kind: PetKind,
    pub name: String,
    pub species: String,
    pub age: Option<i32>,
    pub description: Option<String>,
    pub adopted: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Pet {
    /// Create an unsaved pet, deriving its kind from the species
    pub fn new(name: impl Into<String>, species: impl Into<String>, age: Option<i32>) -> Self {
        let species = species.into();
        Self {
            id: None,
            kind: PetKind::from_species(&species),
            name: name.into(),
            species,
            age,
            description: None,
            adopted: false,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Check if this pet has been stored
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    pub fn sound(&self) -> &'static str {
        self.kind.sound()
    }

    pub fn movement(&self) -> &'static str {
        self.kind.movement()
    }

    /// Presence checks the store enforces before accepting a record
    pub fn presence_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push("Nome não pode ficar em branco".to_string());
        }
        if self.species.trim().is_empty() {
            errors.push("Espécie não pode ficar em branco".to_string());
        }
        errors
    }

    /// Overwrite the fields present in `params`
    ///
    /// A new species re-derives the kind.
    pub fn apply(&mut self, params: &PetParams) {
        if let Some(ref name) = params.name {
            self.name = name.clone();
        }
        if let Some(ref species) = params.species {
            self.species = species.clone();
            self.kind = PetKind::from_species(species);
        }
        if params.age.is_some() {
            self.age = params.age;
        }
        if params.description.is_some() {
            self.description = params.description.clone();
        }
        if let Some(adopted) = params.adopted {
            self.adopted = adopted;
        }
    }
}

/// Untrusted pet attributes as submitted by a caller
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PetParams {
    pub name: Option<String>,
    pub species: Option<String>,
    pub age: Option<i32>,
    pub description: Option<String>,
    pub adopted: Option<bool>,
}

impl PetParams {
    /// True when no attribute was submitted at all
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.species.is_none()
            && self.age.is_none()
            && self.description.is_none()
            && self.adopted.is_none()
    }
}
