//! Embedding client and its construction point

mod factory;
mod openai;

pub use factory::{build_embedding_function, get_embedding_function, EMBEDDING_MODEL};
pub use openai::{model_dimensions, OpenAiEmbeddings};
