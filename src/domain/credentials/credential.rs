use std::collections::HashMap;

/// Which service a credential authenticates against
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CredentialType {
    OpenAi,
}

/// Credential entity: an API key plus provider-specific parameters
#[derive(Clone)]
pub struct Credential {
    credential_type: CredentialType,
    api_key: String,
    additional_params: HashMap<String, String>,
}

impl Credential {
    pub fn new(credential_type: CredentialType, api_key: impl Into<String>) -> Self {
        Self {
            credential_type,
            api_key: api_key.into(),
            additional_params: HashMap::new(),
        }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.additional_params.insert(key.into(), value.into());
        self
    }

    pub fn credential_type(&self) -> &CredentialType {
        &self.credential_type
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn get_param(&self, key: &str) -> Option<&str> {
        self.additional_params.get(key).map(String::as_str)
    }
}

// Keeps the key out of logs and panic messages.
impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("credential_type", &self.credential_type)
            .field("api_key", &"***")
            .field("additional_params", &self.additional_params)
            .finish()
    }
}

impl std::fmt::Display for CredentialType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CredentialType::OpenAi => write!(f, "openai"),
        }
    }
}
