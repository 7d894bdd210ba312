use thiserror::Error;

/// chat-ai errors
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Please set the {name} env variable")]
    MissingEnv { name: &'static str },
    #[error("{provider} request failed: {source}")]
    Provider {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{provider} returned a malformed response: {source}")]
    MalformedResponse {
        provider: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("{provider} returned an empty reply")]
    EmptyReply { provider: &'static str },
    #[error(transparent)]
    StdioError(#[from] std::io::Error),
}
