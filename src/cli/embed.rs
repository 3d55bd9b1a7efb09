//! Embedding subcommands

use serde::Serialize;
use tracing::info;

use crate::domain::EmbeddingProvider;
use crate::infrastructure::embedding::{get_embedding_function, model_dimensions, EMBEDDING_MODEL};

#[derive(Debug, Serialize)]
struct ModelInfo<'a> {
    model: &'a str,
    dimensions: Option<usize>,
}

/// Embed `text` and print the vector
pub async fn query(text: &str) -> anyhow::Result<()> {
    let embeddings = get_embedding_function()?;
    let vector = embeddings.embed_query(text).await?;

    info!(model = embeddings.model(), dimensions = vector.len(), "Query embedded");
    println!("{}", serde_json::to_string(&vector)?);

    Ok(())
}

/// Embed `texts` and print one vector per line
pub async fn documents(texts: &[String]) -> anyhow::Result<()> {
    let embeddings = get_embedding_function()?;
    let vectors = embeddings.embed_documents(texts).await?;

    info!(model = embeddings.model(), count = vectors.len(), "Documents embedded");
    for vector in &vectors {
        println!("{}", serde_json::to_string(vector)?);
    }

    Ok(())
}

/// Print the configured model; needs no credentials
pub fn model() -> anyhow::Result<()> {
    println!("{}", model_info_json()?);
    Ok(())
}

fn model_info_json() -> serde_json::Result<String> {
    serde_json::to_string(&ModelInfo {
        model: EMBEDDING_MODEL,
        dimensions: model_dimensions(EMBEDDING_MODEL),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_info_json() {
        let json: serde_json::Value = serde_json::from_str(&model_info_json().unwrap()).unwrap();

        assert_eq!(json["model"], "text-embedding-3-large");
        assert_eq!(json["dimensions"], 3072);
    }
}
