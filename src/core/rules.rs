use crate::domain::model::{BrowserName, RegisterError, ScreenedSession, Session, Speaker};
use crate::domain::ports::PolicyProvider;

/// Required-field checks. The first failing check wins; the order is part
/// of the contract.
pub fn validate_profile(speaker: &Speaker) -> Result<(), RegisterError> {
    if speaker.first_name.trim().is_empty() {
        return Err(RegisterError::FirstNameRequired);
    }
    if speaker.last_name.trim().is_empty() {
        return Err(RegisterError::LastNameRequired);
    }
    if speaker.email.trim().is_empty() {
        return Err(RegisterError::EmailRequired);
    }
    if speaker.sessions.is_empty() {
        return Err(RegisterError::NoSessionsProvided);
    }
    Ok(())
}

/// Qualified = exceptional signal, or failing that, no red flags.
pub fn appears_qualified<P: PolicyProvider>(speaker: &Speaker, policy: &P) -> bool {
    appears_exceptional(speaker, policy) || !has_red_flags(speaker, policy)
}

pub fn appears_exceptional<P: PolicyProvider>(speaker: &Speaker, policy: &P) -> bool {
    if speaker.years_experience.map_or(false, |years| years > 10) {
        return true;
    }
    if speaker.has_blog {
        return true;
    }
    if speaker.certifications.len() > 3 {
        return true;
    }
    policy
        .preferred_employers()
        .iter()
        .any(|employer| employer == &speaker.employer)
}

pub fn has_red_flags<P: PolicyProvider>(speaker: &Speaker, policy: &P) -> bool {
    let domain = email_domain(&speaker.email);
    if policy
        .ancient_email_domains()
        .iter()
        .any(|ancient| ancient == domain)
    {
        return true;
    }
    speaker.browser.name == BrowserName::InternetExplorer && speaker.browser.major_version < 9
}

/// The part after the last `@`; an address without one is compared whole.
fn email_domain(email: &str) -> &str {
    email.rsplit('@').next().unwrap_or(email)
}

/// Screen every session against the legacy-technology terms. Produces a new
/// list; the input sessions are left untouched.
pub fn screen_sessions<P: PolicyProvider>(
    sessions: &[Session],
    policy: &P,
) -> Vec<ScreenedSession> {
    sessions
        .iter()
        .map(|session| ScreenedSession {
            approved: !covers_legacy_technology(session, policy.legacy_technology_terms()),
            session: session.clone(),
        })
        .collect()
}

fn covers_legacy_technology(session: &Session, terms: &[String]) -> bool {
    terms.iter().any(|term| {
        session.title.contains(term.as_str()) || session.description.contains(term.as_str())
    })
}

/// Fee bands by years of experience; unset experience registers free.
pub fn registration_fee(years_experience: Option<u32>) -> u32 {
    match years_experience {
        Some(years) if years <= 1 => 500,
        Some(years) if years <= 3 => 250,
        Some(years) if years <= 5 => 100,
        Some(years) if years <= 9 => 50,
        _ => 0,
    }
}
