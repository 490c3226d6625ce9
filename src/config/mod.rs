//! Configuration module for telugu-tutor.
//!
//! Handles loading and managing application settings.

mod settings;

pub use settings::{GeneralSettings, ScoringSettings, ServerSettings, Settings};
