pub mod registrar;
pub mod rules;

pub use crate::domain::model::{
    RegisterError, RegistrationOutcome, ScreenedSession, Session, Speaker, SpeakerId, SpeakerRecord,
};
pub use crate::domain::ports::{PolicyProvider, SpeakerStore};
pub use crate::utils::error::Result;
