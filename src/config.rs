//! Registry configuration loading from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//! - `RUST_LOG`: Log filter; overrides `RUST_LOG_DEFAULT` when set
//! - `RUST_LOG_DEFAULT`: Fallback log filter (default: "info,pet_registry=debug")
//! - `REJECT_BLANK_PHONE`: Treat an empty owner phone as missing (default: true)

use crate::application::registration::policy::RegistrationPolicy;

/// Complete registry configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log filter used when `RUST_LOG` is not set
    pub log_filter: String,

    /// Reject owners whose phone is present but empty
    pub reject_blank_phone: bool,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_source<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            log_filter: env_or(&lookup, "RUST_LOG_DEFAULT", "info,pet_registry=debug".to_string())?,
            reject_blank_phone: env_or(&lookup, "REJECT_BLANK_PHONE", true)?,
        })
    }

    pub fn registration_policy(&self) -> RegistrationPolicy {
        RegistrationPolicy {
            reject_blank_phone: self.reject_blank_phone,
        }
    }
}

/// Load a variable with a default value.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T, F>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        None => Ok(default),
    }
}
