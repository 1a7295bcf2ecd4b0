//! Notification stage
//!
//! Announces a successful registration on the configured channel.

use crate::app::registration::{Notification, PetRegistration, RegistrationOutcome};
use crate::domain::entities::Pet;

/// Channel used when none is configured
pub const DEFAULT_CHANNEL: &str = "email";

/// Delegates first, then attaches a notification when the inner result
/// succeeded
pub struct NotifierDecorator<C> {
    inner: C,
    channel: String,
}

impl<C: PetRegistration> NotifierDecorator<C> {
    pub fn new(inner: C, channel: impl Into<String>) -> Self {
        Self {
            inner,
            channel: channel.into(),
        }
    }

    /// Body of the notification as it would be delivered
    fn render(&self, pet: &Pet) -> String {
        let age = pet
            .age
            .map(|a| a.to_string())
            .unwrap_or_else(|| "?".to_string());
        format!(
            "NOTIFICAÇÃO DE CADASTRO (via {})\n\
             Pet: {}\n\
             Espécie: {}\n\
             Idade: {} ano(s)\n\
             Descrição: {}\n\
             O pet foi cadastrado com sucesso no sistema CuidaDeMim! \
             Em breve estará disponível para adoção.",
            self.channel.to_uppercase(),
            pet.name,
            pet.species,
            age,
            pet.description.as_deref().unwrap_or("Sem descrição"),
        )
    }
}

impl<C: PetRegistration> PetRegistration for NotifierDecorator<C> {
    fn register(&self, pet: Pet) -> RegistrationOutcome {
        let mut outcome = self.inner.register(pet);

        if !outcome.success {
            tracing::info!(channel = %self.channel, "Cadastro falhou, notificação não será enviada");
            return outcome;
        }

        // Delivery is simulated: the rendered body goes to the log.
        tracing::info!(channel = %self.channel, "{}", self.render(&outcome.pet));

        outcome.notification = Some(Notification {
            channel: self.channel.clone(),
            sent: true,
            message: format!("Notificação enviada com sucesso via {}", self.channel),
        });
        outcome
    }
}
