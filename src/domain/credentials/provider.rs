use std::fmt::Debug;

use super::{Credential, CredentialType};
use crate::domain::DomainError;

/// Trait for credential sources (environment, secret stores, ...)
///
/// Lookups are synchronous: credentials are resolved while a client is
/// being constructed, which happens outside any async context.
pub trait CredentialProvider: Send + Sync + Debug {
    /// Get a credential by its type
    fn get_credential(&self, credential_type: &CredentialType) -> Result<Credential, DomainError>;

    /// Get provider name for logging/debugging
    fn provider_name(&self) -> &'static str;
}
