//! Authentication stage
//!
//! Turns away unauthenticated partners before anything else runs.

use crate::app::registration::{PetRegistration, RegistrationFailure, RegistrationOutcome};
use crate::domain::entities::Pet;

/// Rejects the registration unless the partner is authenticated
pub struct AuthenticatorDecorator<C> {
    inner: C,
    authenticated: bool,
    partner: Option<String>,
}

impl<C: PetRegistration> AuthenticatorDecorator<C> {
    pub fn new(inner: C, authenticated: bool, partner: Option<String>) -> Self {
        Self {
            inner,
            authenticated,
            partner,
        }
    }
}

impl<C: PetRegistration> PetRegistration for AuthenticatorDecorator<C> {
    fn register(&self, pet: Pet) -> RegistrationOutcome {
        if !self.authenticated {
            let mut message =
                "Acesso negado (access denied)! Parceiro não autenticado.".to_string();
            if let Some(ref partner) = self.partner {
                message.push_str(&format!(" Usuário: {}", partner));
            }
            tracing::warn!(partner = ?self.partner, "{}", message);
            return RegistrationOutcome::failed(RegistrationFailure::Authentication, message, pet);
        }

        match self.partner {
            Some(ref partner) => tracing::info!(
                partner = %partner,
                name = %pet.name,
                "Parceiro autenticado, procedendo com o cadastro do pet"
            ),
            None => tracing::info!(
                name = %pet.name,
                "Parceiro autenticado, procedendo com o cadastro do pet"
            ),
        }

        self.inner.register(pet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_pet, SpyRegistration};

    #[test]
    fn authenticated_delegates_unchanged() {
        let spy = SpyRegistration::succeeding();
        let auth = AuthenticatorDecorator::new(&spy, true, Some("ONG Teste".to_string()));

        let outcome = auth.register(test_pet());

        assert!(outcome.success);
        assert_eq!(outcome.message, SpyRegistration::SUCCESS_MESSAGE);
        assert_eq!(spy.calls(), 1);
    }

    #[test]
    fn authenticated_passes_inner_failure_through() {
        let spy = SpyRegistration::failing("Erro ao cadastrar pet: x");
        let auth = AuthenticatorDecorator::new(&spy, true, None);

        let outcome = auth.register(test_pet());

        assert!(!outcome.success);
        assert_eq!(outcome.message, "Erro ao cadastrar pet: x");
    }

    #[test]
    fn unauthenticated_short_circuits() {
        let spy = SpyRegistration::succeeding();
        let auth = AuthenticatorDecorator::new(&spy, false, None);

        let outcome = auth.register(test_pet());

        assert!(!outcome.success);
        assert_eq!(outcome.failure, Some(RegistrationFailure::Authentication));
        assert!(outcome.message.contains("Acesso negado"));
        assert!(outcome.message.contains("access denied"));
        assert!(!outcome.message.contains("Usuário"));
        assert_eq!(spy.calls(), 0);
        assert!(!outcome.pet.is_persisted());
    }

    #[test]
    fn unauthenticated_message_names_partner() {
        let spy = SpyRegistration::succeeding();
        let auth = AuthenticatorDecorator::new(&spy, false, Some("Parceiro Teste".to_string()));

        let outcome = auth.register(test_pet());

        assert!(outcome.message.ends_with("Usuário: Parceiro Teste"));
        assert_eq!(spy.calls(), 0);
    }
}
