//! Construction point for the application's embedding client
//!
//! Callers ask for "the" embedding client here instead of naming a model
//! or provider themselves. Changing the embedding model is a one-line edit
//! of [`EMBEDDING_MODEL`].

use tracing::debug;

use super::OpenAiEmbeddings;
use crate::domain::DomainError;
use crate::infrastructure::http_client::HttpClient;

/// Model every client returned by [`get_embedding_function`] is bound to
pub const EMBEDDING_MODEL: &str = "text-embedding-3-large";

/// Return a new embedding client bound to [`EMBEDDING_MODEL`]
///
/// Credentials are resolved by the client itself from `OPENAI_API_KEY`
/// (plus the optional `OPENAI_API_BASE` and `OPENAI_ORG_ID`). Every call
/// builds a fresh, independently owned client; no network request is made.
///
/// # Errors
///
/// Whatever the client constructor returns, unchanged: typically
/// [`DomainError::Credential`] when `OPENAI_API_KEY` is not set.
pub fn get_embedding_function() -> Result<OpenAiEmbeddings<HttpClient>, DomainError> {
    build_embedding_function(|model| OpenAiEmbeddings::from_env(model))
}

/// Hand [`EMBEDDING_MODEL`] to `construct` and return its result as is
pub fn build_embedding_function<T, E>(
    construct: impl FnOnce(&'static str) -> Result<T, E>,
) -> Result<T, E> {
    debug!(model = EMBEDDING_MODEL, "Constructing embedding client");
    construct(EMBEDDING_MODEL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::credentials::mock::MockCredentialProvider;
    use crate::domain::{Credential, CredentialType, EmbeddingProvider};
    use crate::infrastructure::credentials::EnvCredentialProvider;
    use std::env;
    use wiremock::matchers::any;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn credentials() -> MockCredentialProvider {
        MockCredentialProvider::new("mock")
            .with_credential(Credential::new(CredentialType::OpenAi, "sk-test"))
    }

    fn construct(model: &str) -> Result<OpenAiEmbeddings<HttpClient>, DomainError> {
        OpenAiEmbeddings::from_credentials(model, &credentials())
    }

    #[test]
    fn test_model_is_text_embedding_3_large() {
        let embeddings = build_embedding_function(construct).unwrap();

        assert_eq!(embeddings.model(), "text-embedding-3-large");
        assert_eq!(EMBEDDING_MODEL, "text-embedding-3-large");
    }

    #[test]
    fn test_each_call_returns_independent_handle() {
        let first = build_embedding_function(construct).unwrap();
        let second = build_embedding_function(construct).unwrap();

        assert_eq!(first.model(), second.model());
        // Each handle owns its own copy of the model name
        assert_ne!(first.model().as_ptr(), second.model().as_ptr());

        drop(first);
        assert_eq!(second.model(), EMBEDDING_MODEL);
    }

    #[test]
    fn test_model_is_stable_across_many_calls() {
        for _ in 0..10 {
            let embeddings = build_embedding_function(construct).unwrap();
            assert_eq!(embeddings.model(), EMBEDDING_MODEL);
        }
    }

    #[test]
    fn test_constructor_error_passes_through_unchanged() {
        #[derive(Debug, PartialEq)]
        struct ConstructFailed(&'static str);

        let result: Result<(), _> =
            build_embedding_function(|_| Err(ConstructFailed("no credentials")));

        assert_eq!(result, Err(ConstructFailed("no credentials")));
    }

    #[test]
    fn test_constructor_receives_fixed_model() {
        let received = build_embedding_function(|model| Ok::<_, DomainError>(model)).unwrap();

        assert_eq!(received, EMBEDDING_MODEL);
    }

    #[test]
    fn test_credential_error_is_not_wrapped() {
        let result = build_embedding_function(|model| {
            OpenAiEmbeddings::from_credentials(model, &EnvCredentialProvider::new())
        });

        match result {
            Err(DomainError::Credential { message }) => {
                assert!(message.contains("No environment mapping"));
            }
            other => panic!("expected credential error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_construction_makes_no_request() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;

        let credentials = MockCredentialProvider::new("mock").with_credential(
            Credential::new(CredentialType::OpenAi, "sk-test")
                .with_param(crate::infrastructure::credentials::PARAM_BASE_URL, server.uri()),
        );

        let embeddings = build_embedding_function(|model| {
            OpenAiEmbeddings::from_credentials(model, &credentials)
        })
        .unwrap();

        assert_eq!(embeddings.base_url(), server.uri());
        server.verify().await;
    }

    // The only test touching the real OPENAI_* variables.
    #[test]
    fn test_get_embedding_function_reads_environment() {
        // SAFETY: no other test reads or writes these variables
        unsafe {
            env::remove_var("OPENAI_API_KEY");
            env::remove_var("OPENAI_API_BASE");
            env::remove_var("OPENAI_ORG_ID");
        }

        let missing = get_embedding_function();
        assert!(matches!(missing, Err(DomainError::Credential { .. })));

        // SAFETY: see above
        unsafe { env::set_var("OPENAI_API_KEY", "sk-env") };

        let embeddings = get_embedding_function().unwrap();
        assert_eq!(embeddings.model(), EMBEDDING_MODEL);
        assert_eq!(embeddings.base_url(), "https://api.openai.com");
        assert_eq!(embeddings.organization(), None);

        // SAFETY: Test cleanup
        unsafe { env::remove_var("OPENAI_API_KEY") };
    }
}
