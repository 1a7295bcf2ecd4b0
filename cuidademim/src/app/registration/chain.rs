//! Chain assembly
//!
//! A chain is an ordered list of stages, outermost first, wrapped around a
//! single base component.

use crate::app::registration::notifier::DEFAULT_CHANNEL;
use crate::app::registration::{
    AuthenticatorDecorator, FormatterDecorator, LoggerDecorator, NotifierDecorator,
    PetRegistration, ValidatorDecorator,
};
use crate::error::ConfigError;

/// A decorator kind that can appear in a chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Logger,
    Authenticator,
    Validator,
    Notifier,
    Formatter,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Logger => write!(f, "logger"),
            Stage::Authenticator => write!(f, "authenticator"),
            Stage::Validator => write!(f, "validator"),
            Stage::Notifier => write!(f, "notifier"),
            Stage::Formatter => write!(f, "formatter"),
        }
    }
}

impl std::str::FromStr for Stage {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "logger" => Ok(Stage::Logger),
            "authenticator" => Ok(Stage::Authenticator),
            "validator" => Ok(Stage::Validator),
            "notifier" => Ok(Stage::Notifier),
            "formatter" => Ok(Stage::Formatter),
            _ => Err(ConfigError::UnknownStage(s.to_string())),
        }
    }
}

/// Per-request values the stages read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationSettings {
    /// Stub session flag checked by the authenticator
    pub authenticated: bool,
    /// Partner shown in authentication messages
    pub partner: Option<String>,
    /// Channel the notifier reports
    pub channel: String,
}

impl Default for RegistrationSettings {
    fn default() -> Self {
        Self {
            authenticated: true,
            partner: None,
            channel: DEFAULT_CHANNEL.to_string(),
        }
    }
}

/// Ordered stage list, outermost first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationChain {
    stages: Vec<Stage>,
}

impl Default for RegistrationChain {
    /// Audit outermost, then authentication, validation and notification
    fn default() -> Self {
        Self::new(vec![
            Stage::Logger,
            Stage::Authenticator,
            Stage::Validator,
            Stage::Notifier,
        ])
    }
}

impl RegistrationChain {
    pub fn new(stages: Vec<Stage>) -> Self {
        Self { stages }
    }

    /// Parse a comma-separated stage list such as `"logger,validator"`
    ///
    /// An empty list yields a chain with no decorators.
    pub fn parse(list: &str) -> Result<Self, ConfigError> {
        let stages = list
            .split(',')
            .filter(|s| !s.trim().is_empty())
            .map(str::parse)
            .collect::<Result<Vec<Stage>, _>>()?;
        Ok(Self::new(stages))
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Wrap `base` so that `stages[0]` is the entry point
    pub fn build<'a, C>(
        &self,
        base: C,
        settings: &RegistrationSettings,
    ) -> Box<dyn PetRegistration + 'a>
    where
        C: PetRegistration + 'a,
    {
        let mut component: Box<dyn PetRegistration + 'a> = Box::new(base);

        for stage in self.stages.iter().rev() {
            component = match stage {
                Stage::Logger => Box::new(LoggerDecorator::new(component)),
                Stage::Authenticator => Box::new(AuthenticatorDecorator::new(
                    component,
                    settings.authenticated,
                    settings.partner.clone(),
                )),
                Stage::Validator => Box::new(ValidatorDecorator::new(component)),
                Stage::Notifier => {
                    Box::new(NotifierDecorator::new(component, settings.channel.clone()))
                }
                Stage::Formatter => Box::new(FormatterDecorator::new(component)),
            };
        }

        component
    }
}

impl std::fmt::Display for RegistrationChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<String> = self.stages.iter().map(|s| s.to_string()).collect();
        write!(f, "{}", names.join(" -> "))
    }
}
