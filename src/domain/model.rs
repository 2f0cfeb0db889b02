use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Speaker profile as submitted by the caller. Sessions ride along; their
/// approval status is only ever produced as output, never written back here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Speaker {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub years_experience: Option<u32>,
    pub has_blog: bool,
    pub blog_url: Option<String>,
    pub browser: BrowserInfo,
    pub certifications: Vec<String>,
    pub employer: String,
    pub sessions: Vec<Session>,
}

impl Speaker {
    /// Load a profile from a JSON file.
    pub fn from_json_file<P: AsRef<std::path::Path>>(path: P) -> crate::utils::error::Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        let speaker = serde_json::from_str(&content)?;
        Ok(speaker)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub title: String,
    pub description: String,
}

impl Session {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrowserInfo {
    pub name: BrowserName,
    pub major_version: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrowserName {
    #[default]
    Unknown,
    InternetExplorer,
    Firefox,
    Chrome,
    Edge,
    Opera,
    Safari,
}

/// A session paired with its screening verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenedSession {
    pub session: Session,
    pub approved: bool,
}

/// The persisted form of a speaker: profile fields, screened sessions, and
/// the computed registration fee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeakerRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub years_experience: Option<u32>,
    pub has_blog: bool,
    pub blog_url: Option<String>,
    pub browser: BrowserInfo,
    pub certifications: Vec<String>,
    pub employer: String,
    pub registration_fee: u32,
    pub sessions: Vec<ScreenedSession>,
}

impl SpeakerRecord {
    pub fn new(speaker: Speaker, sessions: Vec<ScreenedSession>, registration_fee: u32) -> Self {
        Self {
            first_name: speaker.first_name,
            last_name: speaker.last_name,
            email: speaker.email,
            years_experience: speaker.years_experience,
            has_blog: speaker.has_blog,
            blog_url: speaker.blog_url,
            browser: speaker.browser,
            certifications: speaker.certifications,
            employer: speaker.employer,
            registration_fee,
            sessions,
        }
    }

    pub fn approved_sessions(&self) -> impl Iterator<Item = &Session> {
        self.sessions
            .iter()
            .filter(|s| s.approved)
            .map(|s| &s.session)
    }
}

/// Identifier assigned by the speaker store on save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpeakerId(pub u64);

impl std::fmt::Display for SpeakerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of a registration attempt. Rule rejections are ordinary values;
/// only store failures travel in the error channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Registered(SpeakerId),
    Rejected(RegisterError),
}

impl RegistrationOutcome {
    pub fn is_registered(&self) -> bool {
        matches!(self, RegistrationOutcome::Registered(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum RegisterError {
    #[error("first name is required")]
    FirstNameRequired,

    #[error("last name is required")]
    LastNameRequired,

    #[error("email is required")]
    EmailRequired,

    #[error("at least one session is required")]
    NoSessionsProvided,

    #[error("speaker does not meet the standards for registration")]
    SpeakerDoesNotMeetStandards,

    #[error("no sessions were approved")]
    NoSessionsApproved,
}
