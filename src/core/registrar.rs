use crate::core::rules;
use crate::domain::model::{RegisterError, RegistrationOutcome, Speaker, SpeakerRecord};
use crate::domain::ports::{PolicyProvider, SpeakerStore};
use crate::utils::error::Result;
use crate::utils::validation;

/// Runs the registration workflow: profile validation, qualification,
/// session screening, fee calculation, persistence. The store and the rule
/// policy are injected through their ports.
pub struct Registrar<S: SpeakerStore, P: PolicyProvider> {
    store: S,
    policy: P,
}

impl<S: SpeakerStore, P: PolicyProvider> Registrar<S, P> {
    pub fn new(store: S, policy: P) -> Self {
        Self { store, policy }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Evaluate one speaker. A rejection is returned as a value; only a
    /// store failure surfaces through the error channel.
    pub fn register(&mut self, speaker: Speaker) -> Result<RegistrationOutcome> {
        tracing::info!(
            "Evaluating registration for {} {}",
            speaker.first_name,
            speaker.last_name
        );

        if let Err(reason) = rules::validate_profile(&speaker) {
            tracing::debug!("Profile validation failed: {}", reason);
            return Ok(RegistrationOutcome::Rejected(reason));
        }

        if !rules::appears_qualified(&speaker, &self.policy) {
            tracing::debug!("Speaker <{}> did not clear the qualification bar", speaker.email);
            return Ok(RegistrationOutcome::Rejected(
                RegisterError::SpeakerDoesNotMeetStandards,
            ));
        }

        // Advisory only; a broken blog link never changes the outcome.
        if speaker.has_blog {
            if let Some(blog_url) = &speaker.blog_url {
                if let Err(e) = validation::validate_url("blog_url", blog_url) {
                    tracing::warn!("Blog URL looks malformed: {}", e);
                }
            }
        }

        let screened = rules::screen_sessions(&speaker.sessions, &self.policy);
        let approved = screened.iter().filter(|s| s.approved).count();
        tracing::debug!("Approved {} of {} sessions", approved, screened.len());

        if approved == 0 {
            return Ok(RegistrationOutcome::Rejected(
                RegisterError::NoSessionsApproved,
            ));
        }

        let fee = rules::registration_fee(speaker.years_experience);
        let record = SpeakerRecord::new(speaker, screened, fee);

        let speaker_id = self.store.save_speaker(&record)?;
        tracing::info!("Registered speaker {} with fee {}", speaker_id, fee);

        Ok(RegistrationOutcome::Registered(speaker_id))
    }
}
