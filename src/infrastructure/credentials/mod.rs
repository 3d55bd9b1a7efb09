//! Credential provider implementations

mod env_provider;

pub use env_provider::{EnvCredentialProvider, EnvMapping, PARAM_BASE_URL, PARAM_ORGANIZATION};
