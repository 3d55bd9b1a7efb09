//! Embedding response types

/// A single embedding vector
#[derive(Debug, Clone, PartialEq)]
pub struct Embedding {
    /// Position of the source text in the request
    index: usize,
    embedding: Vec<f32>,
}

impl Embedding {
    pub fn new(index: usize, embedding: Vec<f32>) -> Self {
        Self { index, embedding }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn vector(&self) -> &[f32] {
        &self.embedding
    }

    pub fn dimensions(&self) -> usize {
        self.embedding.len()
    }

    pub fn into_vector(self) -> Vec<f32> {
        self.embedding
    }
}

/// Token usage reported by the provider
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmbeddingUsage {
    prompt_tokens: u32,
    total_tokens: u32,
}

impl EmbeddingUsage {
    pub fn new(prompt_tokens: u32, total_tokens: u32) -> Self {
        Self {
            prompt_tokens,
            total_tokens,
        }
    }

    pub fn prompt_tokens(&self) -> u32 {
        self.prompt_tokens
    }

    pub fn total_tokens(&self) -> u32 {
        self.total_tokens
    }
}

/// Response from an embedding request
///
/// Embeddings are kept sorted by index, so `embeddings()[i]` belongs to the
/// i-th input even when the provider returned them out of order.
#[derive(Debug, Clone)]
pub struct EmbeddingResponse {
    model: String,
    data: Vec<Embedding>,
    usage: EmbeddingUsage,
}

impl EmbeddingResponse {
    pub fn new(model: String, mut data: Vec<Embedding>, usage: EmbeddingUsage) -> Self {
        data.sort_by_key(Embedding::index);
        Self { model, data, usage }
    }

    /// Model reported by the provider
    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn embeddings(&self) -> &[Embedding] {
        &self.data
    }

    /// Get the first embedding (for single input requests)
    pub fn first(&self) -> Option<&Embedding> {
        self.data.first()
    }

    pub fn usage(&self) -> &EmbeddingUsage {
        &self.usage
    }

    /// True when there is exactly one embedding for each of `count` inputs
    ///
    /// A duplicated or missing index fails this even if the length matches.
    pub fn covers_inputs(&self, count: usize) -> bool {
        self.data.len() == count
            && self
                .data
                .iter()
                .enumerate()
                .all(|(position, embedding)| embedding.index() == position)
    }

    /// Consume and return the raw vectors in input order
    pub fn into_vectors(self) -> Vec<Vec<f32>> {
        self.data.into_iter().map(Embedding::into_vector).collect()
    }
}
