pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use adapters::memory::InMemoryStore;
pub use config::policy::RulePolicy;
pub use core::registrar::Registrar;
pub use domain::model::{
    BrowserInfo, BrowserName, RegisterError, RegistrationOutcome, Session, Speaker, SpeakerId,
    SpeakerRecord,
};
pub use utils::error::{PodiumError, Result};
