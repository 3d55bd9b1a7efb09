//! Embedding function
//!
//! One place to obtain the application's text-embedding client:
//! [`get_embedding_function`] returns an OpenAI embeddings client bound to
//! [`EMBEDDING_MODEL`] (`text-embedding-3-large`), so calling code never
//! names a model or provider itself.
//!
//! ```no_run
//! use embedding_function::{get_embedding_function, EmbeddingProvider};
//!
//! # async fn run() -> Result<(), embedding_function::DomainError> {
//! let embeddings = get_embedding_function()?;
//! let vector = embeddings.embed_query("What is a vector?").await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{DomainError, EmbeddingProvider};
pub use infrastructure::embedding::{
    build_embedding_function, get_embedding_function, OpenAiEmbeddings, EMBEDDING_MODEL,
};
