use std::collections::HashMap;
use std::env;

use tracing::debug;

use crate::domain::{Credential, CredentialProvider, CredentialType, DomainError};

/// Credential parameter holding an alternative API base URL
pub const PARAM_BASE_URL: &str = "base_url";
/// Credential parameter holding the organization sent with each request
pub const PARAM_ORGANIZATION: &str = "organization";

/// Environment variable mappings for a credential type
#[derive(Debug, Clone)]
pub struct EnvMapping {
    pub api_key_var: String,
    pub additional_vars: HashMap<String, String>,
}

impl EnvMapping {
    pub fn new(api_key_var: impl Into<String>) -> Self {
        Self {
            api_key_var: api_key_var.into(),
            additional_vars: HashMap::new(),
        }
    }

    pub fn with_var(mut self, param_name: impl Into<String>, env_var: impl Into<String>) -> Self {
        self.additional_vars.insert(param_name.into(), env_var.into());
        self
    }
}

/// Credential provider that reads from environment variables
///
/// Variables are read on every lookup, never cached.
#[derive(Debug)]
pub struct EnvCredentialProvider {
    mappings: HashMap<CredentialType, EnvMapping>,
}

impl EnvCredentialProvider {
    pub fn new() -> Self {
        Self {
            mappings: HashMap::new(),
        }
    }

    pub fn with_mapping(mut self, credential_type: CredentialType, mapping: EnvMapping) -> Self {
        self.mappings.insert(credential_type, mapping);
        self
    }

    pub fn with_defaults(mut self) -> Self {
        self.mappings.insert(
            CredentialType::OpenAi,
            EnvMapping::new("OPENAI_API_KEY")
                .with_var(PARAM_BASE_URL, "OPENAI_API_BASE")
                .with_var(PARAM_ORGANIZATION, "OPENAI_ORG_ID"),
        );

        self
    }
}

impl Default for EnvCredentialProvider {
    fn default() -> Self {
        Self::new().with_defaults()
    }
}

impl CredentialProvider for EnvCredentialProvider {
    fn get_credential(&self, credential_type: &CredentialType) -> Result<Credential, DomainError> {
        let mapping = self.mappings.get(credential_type).ok_or_else(|| {
            DomainError::credential(format!(
                "No environment mapping configured for credential type: {}",
                credential_type
            ))
        })?;

        let api_key = env::var(&mapping.api_key_var).map_err(|_| {
            DomainError::credential(format!(
                "Environment variable '{}' not set for credential type: {}",
                mapping.api_key_var, credential_type
            ))
        })?;

        let mut credential = Credential::new(credential_type.clone(), api_key);

        for (param_name, env_var) in &mapping.additional_vars {
            if let Ok(value) = env::var(env_var) {
                debug!(param = %param_name, var = %env_var, "Credential parameter read from environment");
                credential = credential.with_param(param_name, value);
            }
        }

        Ok(credential)
    }

    fn provider_name(&self) -> &'static str {
        "env"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_provider_with_set_variable() {
        // SAFETY: variable name is unique to this test
        unsafe { env::set_var("TEST_EMBED_OPENAI_KEY", "sk-test-123") };

        let provider = EnvCredentialProvider::new()
            .with_mapping(CredentialType::OpenAi, EnvMapping::new("TEST_EMBED_OPENAI_KEY"));

        let cred = provider.get_credential(&CredentialType::OpenAi).unwrap();
        assert_eq!(cred.api_key(), "sk-test-123");

        // SAFETY: Test cleanup
        unsafe { env::remove_var("TEST_EMBED_OPENAI_KEY") };
    }

    #[test]
    fn test_env_provider_missing_variable() {
        let provider = EnvCredentialProvider::new().with_mapping(
            CredentialType::OpenAi,
            EnvMapping::new("NONEXISTENT_EMBED_VAR_12345"),
        );

        let result = provider.get_credential(&CredentialType::OpenAi);

        assert!(matches!(result, Err(DomainError::Credential { .. })));
    }

    #[test]
    fn test_env_provider_unmapped_type() {
        let provider = EnvCredentialProvider::new();

        let result = provider.get_credential(&CredentialType::OpenAi);

        match result {
            Err(DomainError::Credential { message }) => {
                assert!(message.contains("No environment mapping"));
            }
            other => panic!("expected credential error, got {:?}", other),
        }
    }

    #[test]
    fn test_env_provider_with_additional_params() {
        // SAFETY: variable names are unique to this test
        unsafe {
            env::set_var("TEST_EMBED_PARAMS_KEY", "sk-key");
            env::set_var("TEST_EMBED_PARAMS_BASE", "http://localhost:4000");
        }

        let provider = EnvCredentialProvider::new().with_mapping(
            CredentialType::OpenAi,
            EnvMapping::new("TEST_EMBED_PARAMS_KEY")
                .with_var(PARAM_BASE_URL, "TEST_EMBED_PARAMS_BASE")
                .with_var(PARAM_ORGANIZATION, "TEST_EMBED_PARAMS_ORG_UNSET"),
        );

        let cred = provider.get_credential(&CredentialType::OpenAi).unwrap();

        assert_eq!(cred.api_key(), "sk-key");
        assert_eq!(cred.get_param(PARAM_BASE_URL), Some("http://localhost:4000"));
        assert_eq!(cred.get_param(PARAM_ORGANIZATION), None);

        // SAFETY: Test cleanup
        unsafe {
            env::remove_var("TEST_EMBED_PARAMS_KEY");
            env::remove_var("TEST_EMBED_PARAMS_BASE");
        }
    }

    #[test]
    fn test_defaults_map_openai() {
        let provider = EnvCredentialProvider::default();

        assert_eq!(provider.provider_name(), "env");
        assert!(provider.mappings.contains_key(&CredentialType::OpenAi));
    }
}
