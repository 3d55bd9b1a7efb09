//! Embedding provider trait definition

use async_trait::async_trait;
use std::fmt::Debug;

use super::{EmbeddingRequest, EmbeddingResponse};
use crate::domain::DomainError;

/// Trait for embedding providers
///
/// `embed` is the only required call; `embed_query` and `embed_documents`
/// are the text-in, vectors-out conveniences callers normally use.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync + Debug {
    /// Generate embeddings for the given request
    async fn embed(&self, request: EmbeddingRequest) -> Result<EmbeddingResponse, DomainError>;

    /// Model identifier this provider sends when none is given explicitly
    fn model(&self) -> &str;

    fn provider_name(&self) -> &'static str;

    /// Get the embedding dimensions for a model, if known
    fn dimensions(&self, model: &str) -> Option<usize>;

    /// Embed a single text with the configured model
    async fn embed_query(&self, text: &str) -> Result<Vec<f32>, DomainError> {
        let response = self
            .embed(EmbeddingRequest::single(self.model(), text))
            .await?;

        if !response.covers_inputs(1) {
            return Err(DomainError::provider(
                self.provider_name(),
                format!(
                    "Expected one embedding for query, provider returned {}",
                    response.embeddings().len()
                ),
            ));
        }

        Ok(response.into_vectors().into_iter().next().unwrap_or_default())
    }

    /// Embed several texts with the configured model, in one request
    ///
    /// Returns one vector per input, in input order. The response must carry
    /// every index from 0 to `texts.len() - 1` exactly once.
    async fn embed_documents(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, DomainError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let response = self
            .embed(EmbeddingRequest::batch(self.model(), texts.to_vec()))
            .await?;

        if !response.covers_inputs(texts.len()) {
            let indices: Vec<usize> = response.embeddings().iter().map(|e| e.index()).collect();
            return Err(DomainError::provider(
                self.provider_name(),
                format!(
                    "Expected one embedding per index 0..{}, provider returned indices {:?}",
                    texts.len(),
                    indices
                ),
            ));
        }

        Ok(response.into_vectors())
    }
}
