//! Error types for the generative AI client.

use thiserror::Error;

/// Errors that can occur while configuring or using the client.
#[derive(Error, Debug)]
pub enum GenAiError {
    /// The API key environment variable is unset or blank.
    #[error("{var} is not set; the AI client cannot start without an API key")]
    MissingApiKey {
        /// Name of the environment variable that was checked.
        var: &'static str,
    },

    /// A configuration value could not be parsed.
    #[error("Invalid value for {var}: {message}")]
    InvalidSetting {
        /// Name of the offending environment variable.
        var: &'static str,
        /// Description of the parse failure.
        message: String,
    },

    /// Model identifier is not of the form `<provider>/<model-name>`
    /// or names a provider other than the configured plugin.
    #[error("Invalid model identifier: {0}")]
    InvalidModel(String),

    /// HTTP request failed.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Service returned a non-success status.
    #[error("Upstream error ({status}): {message}")]
    Upstream {
        /// HTTP status code.
        status: u16,
        /// Response body returned by the service.
        message: String,
    },

    /// Service answered without any candidate text.
    #[error("Response contained no generated text")]
    EmptyResponse,
}
