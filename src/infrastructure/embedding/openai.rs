//! OpenAI embedding client

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::domain::{
    CredentialProvider, CredentialType, DomainError, Embedding, EmbeddingInput,
    EmbeddingProvider, EmbeddingRequest, EmbeddingResponse, EmbeddingUsage,
};
use crate::infrastructure::credentials::{
    EnvCredentialProvider, PARAM_BASE_URL, PARAM_ORGANIZATION,
};
use crate::infrastructure::http_client::{HttpClient, HttpClientTrait};

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";

/// Known OpenAI embedding models and their dimensions
const EMBEDDING_MODELS: &[(&str, usize)] = &[
    ("text-embedding-3-small", 1536),
    ("text-embedding-3-large", 3072),
    ("text-embedding-ada-002", 1536),
];

/// Native output dimensions of a known OpenAI embedding model
pub fn model_dimensions(model: &str) -> Option<usize> {
    EMBEDDING_MODELS
        .iter()
        .find(|(name, _)| *name == model)
        .map(|(_, dims)| *dims)
}

/// Handle on the OpenAI embeddings endpoint, bound to one model
///
/// The model is fixed when the handle is built and cannot be changed
/// afterwards. Building a handle never touches the network.
#[derive(Debug)]
pub struct OpenAiEmbeddings<C: HttpClientTrait> {
    client: C,
    model: String,
    auth_header: String,
    organization: Option<String>,
    base_url: String,
}

impl<C: HttpClientTrait> OpenAiEmbeddings<C> {
    pub fn new(client: C, model: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::with_base_url(client, model, api_key, DEFAULT_OPENAI_BASE_URL)
    }

    /// Create a handle that talks to an OpenAI-compatible server at `base_url`
    pub fn with_base_url(
        client: C,
        model: impl Into<String>,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let auth_header = format!("Bearer {}", api_key.into());
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            client,
            model: model.into(),
            auth_header,
            organization: None,
            base_url,
        }
    }

    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn organization(&self) -> Option<&str> {
        self.organization.as_deref()
    }

    fn embeddings_url(&self) -> String {
        format!("{}/v1/embeddings", self.base_url)
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        let mut headers = vec![
            ("Authorization", self.auth_header.as_str()),
            ("Content-Type", "application/json"),
        ];

        if let Some(org) = self.organization.as_deref() {
            headers.push(("OpenAI-Organization", org));
        }

        headers
    }

    fn build_request(&self, request: &EmbeddingRequest) -> serde_json::Value {
        let input = match request.input() {
            EmbeddingInput::Single(s) => serde_json::json!(s),
            EmbeddingInput::Batch(v) => serde_json::json!(v),
        };

        let mut body = serde_json::json!({
            "model": request.model(),
            "input": input,
        });

        if let Some(dims) = request.dimensions() {
            body["dimensions"] = serde_json::json!(dims);
        }

        body
    }

    fn parse_response(&self, json: serde_json::Value) -> Result<EmbeddingResponse, DomainError> {
        let response: OpenAiEmbeddingResponse = serde_json::from_value(json).map_err(|e| {
            DomainError::provider("openai", format!("Failed to parse embedding response: {}", e))
        })?;

        let embeddings: Vec<Embedding> = response
            .data
            .into_iter()
            .map(|d| Embedding::new(d.index, d.embedding))
            .collect();

        let usage = EmbeddingUsage::new(response.usage.prompt_tokens, response.usage.total_tokens);

        Ok(EmbeddingResponse::new(response.model, embeddings, usage))
    }
}

impl OpenAiEmbeddings<HttpClient> {
    /// Build a handle from the `OpenAi` credential of `credentials`
    ///
    /// The credential's `base_url` and `organization` parameters, when
    /// present, override the public endpoint and add the organization header.
    pub fn from_credentials(
        model: impl Into<String>,
        credentials: &dyn CredentialProvider,
    ) -> Result<Self, DomainError> {
        let credential = credentials.get_credential(&CredentialType::OpenAi)?;
        // OPENAI_API_BASE is conventionally given with the `/v1` suffix
        let base_url = credential
            .get_param(PARAM_BASE_URL)
            .map(|url| {
                let url = url.trim_end_matches('/');
                url.strip_suffix("/v1").unwrap_or(url)
            })
            .unwrap_or(DEFAULT_OPENAI_BASE_URL);

        let mut embeddings =
            Self::with_base_url(HttpClient::new(), model, credential.api_key(), base_url);

        if let Some(org) = credential.get_param(PARAM_ORGANIZATION) {
            embeddings = embeddings.with_organization(org);
        }

        debug!(
            model = %embeddings.model,
            base_url = %embeddings.base_url,
            source = credentials.provider_name(),
            "OpenAI embeddings client configured"
        );

        Ok(embeddings)
    }

    /// Build a handle from `OPENAI_API_KEY`, `OPENAI_API_BASE` and `OPENAI_ORG_ID`
    pub fn from_env(model: impl Into<String>) -> Result<Self, DomainError> {
        Self::from_credentials(model, &EnvCredentialProvider::default())
    }
}

#[async_trait]
impl<C: HttpClientTrait> EmbeddingProvider for OpenAiEmbeddings<C> {
    async fn embed(&self, request: EmbeddingRequest) -> Result<EmbeddingResponse, DomainError> {
        let url = self.embeddings_url();
        let body = self.build_request(&request);

        debug!(model = request.model(), inputs = request.input().len(), "Requesting embeddings");

        let response = self.client.post_json(&url, self.headers(), &body).await?;

        self.parse_response(response)
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn dimensions(&self, model: &str) -> Option<usize> {
        model_dimensions(model)
    }
}

// OpenAI API types for embeddings

#[derive(Debug, Deserialize)]
struct OpenAiEmbeddingResponse {
    model: String,
    data: Vec<OpenAiEmbeddingData>,
    usage: OpenAiEmbeddingUsage,
}

#[derive(Debug, Deserialize)]
struct OpenAiEmbeddingData {
    index: usize,
    embedding: Vec<f32>,
}

#[derive(Debug, Deserialize)]
struct OpenAiEmbeddingUsage {
    prompt_tokens: u32,
    total_tokens: u32,
}
