//! Domain layer - Core entities and traits

pub mod credentials;
pub mod embedding;
pub mod error;

pub use credentials::{Credential, CredentialProvider, CredentialType};
pub use embedding::{
    Embedding, EmbeddingInput, EmbeddingProvider, EmbeddingRequest, EmbeddingResponse,
    EmbeddingUsage,
};
pub use error::DomainError;
