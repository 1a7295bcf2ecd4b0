//! CuidaDeMim demo runner
//!
//! Walks through the registration chain and the administrative reports
//! against an in-memory repository.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cuidademim::adapters::InMemoryPetRepository;
use cuidademim::app::registration::{
    AuthenticatorDecorator, BaseRegistration, FormatterDecorator, NotifierDecorator,
    ValidatorDecorator,
};
use cuidademim::app::{
    PetRegistration, PetService, RegistrationOutcome, RegistrationSettings, ReportContext,
    ReportRegistry,
};
use cuidademim::config::Config;
use cuidademim::domain::entities::{Pet, PetParams, ReportOptions};

fn print_outcome(label: &str, outcome: &RegistrationOutcome) {
    let mark = if outcome.success { "ok" } else { "FAILED" };
    println!("  [{}] {}: {}", mark, label, outcome.message);
    if let Some(ref notification) = outcome.notification {
        println!("       {}", notification.message);
    }
}

fn registration_demos(repo: &Arc<InMemoryPetRepository>, settings: &RegistrationSettings) {
    println!("== Registration chain ==");

    let simple = BaseRegistration::new(repo.clone());
    print_outcome(
        "simple",
        &simple.register(Pet::new("Rex", "Dog", Some(3)).with_description("Labrador amigável")),
    );

    let validated = ValidatorDecorator::new(BaseRegistration::new(repo.clone()));
    print_outcome(
        "validated, invalid",
        &validated.register(Pet::new("", "Cat", Some(-1))),
    );

    let denied = AuthenticatorDecorator::new(
        BaseRegistration::new(repo.clone()),
        false,
        Some("Usuário Desconhecido".to_string()),
    );
    print_outcome("unauthenticated", &denied.register(Pet::new("Thor", "Dog", Some(5))));

    let full = AuthenticatorDecorator::new(
        ValidatorDecorator::new(NotifierDecorator::new(
            BaseRegistration::new(repo.clone()),
            settings.channel.clone(),
        )),
        true,
        settings.partner.clone(),
    );
    print_outcome(
        "full chain",
        &full.register(Pet::new("Bolt", "Dog", Some(4)).with_description("Border Collie")),
    );
    print_outcome("full chain, bad age", &full.register(Pet::new("Max", "Dog", Some(-5))));

    let formatted = FormatterDecorator::new(BaseRegistration::new(repo.clone()));
    let outcome = formatted.register(
        Pet::new("  fido  ", "  DOG  ", Some(4)).with_description("  um cãozinho brincalhão  "),
    );
    print_outcome("formatted", &outcome);
    println!(
        "       stored as: {}, {}, {}",
        outcome.pet.name,
        outcome.pet.species,
        outcome.pet.description.as_deref().unwrap_or_default()
    );
}

fn service_demo(
    repo: &Arc<InMemoryPetRepository>,
    config: &Config,
    settings: &RegistrationSettings,
) -> anyhow::Result<()> {
    println!("== Configured chain: {} ==", config.registration_chain);

    let service = PetService::new(repo.clone(), config.registration_chain.clone());
    let params = PetParams {
        name: Some("Luna".to_string()),
        species: Some("gato".to_string()),
        age: Some(2),
        description: Some("Gata siamesa".to_string()),
        adopted: None,
    };
    let outcome = service.create(&params, settings)?;
    print_outcome("service", &outcome);
    println!("       sound: {}", outcome.pet.sound());

    for pet in service.list()? {
        println!("  - {} ({}, {})", pet.name, pet.species, pet.kind);
    }
    Ok(())
}

fn report_demo() {
    println!("== Reports ==");

    let registry = ReportRegistry::default();
    let context = ReportContext::new(&registry);

    for key in registry.available_strategies() {
        match context.execute_report(key, &ReportOptions::default()) {
            Ok(report) => println!(
                "  {} [{}]: {} rows",
                report.title,
                report.headers.join(", "),
                report.rows.len()
            ),
            Err(e) => println!("  {}: {}", key, e),
        }
    }

    if let Ok(report) = context.execute_report("user_report", &ReportOptions::for_user_type("ong")) {
        println!("  NGOs only: {} rows", report.rows.len());
    }

    if let Err(e) = context.execute_report("sales_report", &ReportOptions::default()) {
        println!("  Erro: {}", e);
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,cuidademim=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting CuidaDeMim demo...");

    let config = Config::from_env().context("Failed to load configuration")?;
    let settings = config.registration_settings();
    let repo = Arc::new(InMemoryPetRepository::new());

    registration_demos(&repo, &settings);
    service_demo(&repo, &config, &settings)?;
    report_demo();

    tracing::info!(pets = repo.count()?, "Demo finished");
    Ok(())
}
