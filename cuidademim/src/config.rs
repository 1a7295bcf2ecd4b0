use std::env;

use crate::app::registration::notifier::DEFAULT_CHANNEL;
use crate::app::{RegistrationChain, RegistrationSettings};
use crate::error::ConfigError;

#[derive(Debug, Clone)]
pub struct Config {
    /// Channel reported by the notifier stage
    pub notification_channel: String,
    /// Partner shown in authentication messages
    pub partner_name: Option<String>,
    /// Stub session flag until a real login exists
    pub partner_authenticated: bool,
    /// Registration stages, outermost first
    pub registration_chain: RegistrationChain,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the config from any variable source
    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let partner_authenticated = match lookup("PARTNER_AUTHENTICATED") {
            Some(v) => parse_bool("PARTNER_AUTHENTICATED", &v)?,
            None => true,
        };

        let registration_chain = match lookup("REGISTRATION_STAGES") {
            Some(v) => RegistrationChain::parse(&v)?,
            None => RegistrationChain::default(),
        };

        Ok(Self {
            notification_channel: lookup("NOTIFICATION_CHANNEL")
                .unwrap_or_else(|| DEFAULT_CHANNEL.to_string()),
            partner_name: lookup("PARTNER_NAME").filter(|p| !p.trim().is_empty()),
            partner_authenticated,
            registration_chain,
        })
    }

    /// Settings for a registration made on behalf of the configured partner
    pub fn registration_settings(&self) -> RegistrationSettings {
        RegistrationSettings {
            authenticated: self.partner_authenticated,
            partner: self.partner_name.clone(),
            channel: self.notification_channel.clone(),
        }
    }
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            name,
            value: value.to_string(),
        }),
    }
}
