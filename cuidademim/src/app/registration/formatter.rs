//! Formatting stage
//!
//! Normalises free-text fields before the rest of the chain sees them.

use crate::app::registration::{PetRegistration, RegistrationOutcome};
use crate::domain::entities::Pet;

/// Trims and re-cases the pet's text fields, then always delegates
pub struct FormatterDecorator<C> {
    inner: C,
}

impl<C: PetRegistration> FormatterDecorator<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

/// Uppercase the first character and lowercase the rest
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Normalise a pet in place
///
/// Blank fields are left untouched. Applying this twice changes nothing.
pub fn format_pet(pet: &mut Pet) {
    if !pet.name.trim().is_empty() {
        pet.name = capitalize(pet.name.trim());
    }
    if !pet.species.trim().is_empty() {
        pet.species = pet.species.trim().to_lowercase();
    }
    if let Some(ref description) = pet.description {
        if !description.trim().is_empty() {
            pet.description = Some(capitalize(description.trim()));
        }
    }
}

impl<C: PetRegistration> PetRegistration for FormatterDecorator<C> {
    fn register(&self, mut pet: Pet) -> RegistrationOutcome {
        format_pet(&mut pet);
        tracing::debug!(name = %pet.name, species = %pet.species, "Dados do pet formatados");
        self.inner.register(pet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_pet_with, SpyRegistration};

    #[test]
    fn capitalize_cases() {
        assert_eq!(capitalize("fido"), "Fido");
        assert_eq!(capitalize("BOLT"), "Bolt");
        assert_eq!(capitalize("ágata"), "Ágata");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn format_trims_and_recases() {
        let mut pet = test_pet_with("  fido  ", "  DOG  ", Some(4))
            .with_description("  um cãozinho BRINCALHÃO  ");

        format_pet(&mut pet);

        assert_eq!(pet.name, "Fido");
        assert_eq!(pet.species, "dog");
        assert_eq!(pet.description.as_deref(), Some("Um cãozinho brincalhão"));
    }

    #[test]
    fn format_is_idempotent() {
        let mut pet = test_pet_with("Luna", "cat", Some(2)).with_description("Gata amigável");
        let before = pet.clone();

        format_pet(&mut pet);
        assert_eq!(pet, before);

        format_pet(&mut pet);
        assert_eq!(pet, before);
    }

    #[test]
    fn format_leaves_blank_fields_alone() {
        let mut pet = test_pet_with("   ", "", Some(2)).with_description("  ");

        format_pet(&mut pet);

        assert_eq!(pet.name, "   ");
        assert_eq!(pet.species, "");
        assert_eq!(pet.description.as_deref(), Some("  "));
    }

    #[test]
    fn formats_before_delegating() {
        let spy = SpyRegistration::succeeding();
        let formatter = FormatterDecorator::new(&spy);

        let outcome = formatter.register(test_pet_with(" rex ", " Dog", Some(3)));

        assert_eq!(spy.calls(), 1);
        assert_eq!(spy.last_seen_name().as_deref(), Some("Rex"));
        assert_eq!(outcome.pet.species, "dog");
    }

    #[test]
    fn delegates_even_when_inner_fails() {
        let spy = SpyRegistration::failing("boom");
        let formatter = FormatterDecorator::new(&spy);

        let outcome = formatter.register(test_pet_with("rex", "dog", Some(3)));

        assert!(!outcome.success);
        assert_eq!(spy.calls(), 1);
    }
}
