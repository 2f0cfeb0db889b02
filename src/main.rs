use anyhow::Context;
use clap::Parser;
use podium::utils::{logger, validation::Validate};
use podium::{CliArgs, InMemoryStore, Registrar, RegistrationOutcome, RulePolicy, Speaker};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("Starting podium CLI");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    if let Err(e) = args.validate() {
        tracing::error!("Argument validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let policy = match &args.policy {
        Some(path) => {
            RulePolicy::from_file(path).with_context(|| format!("loading policy from {}", path))?
        }
        None => RulePolicy::default(),
    };
    policy.validate().context("policy validation failed")?;

    let speaker = Speaker::from_json_file(&args.speaker)
        .with_context(|| format!("loading speaker profile from {}", args.speaker))?;

    let mut registrar = Registrar::new(InMemoryStore::new(), policy);

    match registrar.register(speaker) {
        Ok(RegistrationOutcome::Registered(id)) => {
            println!("✅ Speaker registered with id {}", id);
        }
        Ok(RegistrationOutcome::Rejected(reason)) => {
            eprintln!("❌ Registration rejected: {}", reason);
            std::process::exit(2);
        }
        Err(e) => {
            tracing::error!("Registration failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
