//! CLI module for the embedding-function tool
//!
//! Every subcommand obtains its client through
//! [`get_embedding_function`](crate::infrastructure::embedding::get_embedding_function):
//! - `query`: embed one text
//! - `documents`: embed several texts in one request
//! - `model`: show the configured model without calling the API

pub mod embed;

use clap::{Parser, Subcommand};

/// Embed text with the application's fixed OpenAI embedding model
#[derive(Parser)]
#[command(name = "embedding-function")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Embed a single text and print the vector as JSON
    Query {
        /// Text to embed
        text: String,
    },

    /// Embed several texts and print one vector per text as JSON
    Documents {
        /// Texts to embed
        #[arg(required = true)]
        texts: Vec<String>,
    },

    /// Print the model identifier and its known dimensions
    Model,
}
