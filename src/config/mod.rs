#[cfg(feature = "cli")]
pub mod cli;
pub mod policy;

pub use policy::RulePolicy;
