use std::{env, sync::Arc};

use vitrina_core::{Result, VitrinaError};

use crate::client::OpenAiClient;

pub(crate) const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Thin wrapper that wires the HTTP client [`OpenAiClient`] into a value
/// that implements [`vitrina_core::TextGenerationProvider`].
///
/// It stores the API key, the target model name and a shareable,
/// connection-pooled `reqwest::Client`.  All user-facing functionality sits
/// on the capability trait once the adapter is plugged in.
pub struct OpenAiAdapter {
    pub(crate) client: Arc<OpenAiClient>,
    pub(crate) model: String,
}

/// Builder for [`OpenAiAdapter`].
///
/// # Typical usage
///
/// ```rust,no_run
/// use vitrina_openai::OpenAiAdapterBuilder;
///
/// let backend = OpenAiAdapterBuilder::new_from_env()
///     .build()
///     .expect("OPENAI_API_KEY must be set");
/// ```
#[derive(Default)]
pub struct OpenAiAdapterBuilder {
    api_key: Option<String>,
    model: Option<String>,
}

impl OpenAiAdapterBuilder {
    /// Create an *empty* builder. Remember to supply an API key manually.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor that tries to load the `OPENAI_API_KEY`
    /// environment variable.  Missing keys only surface during
    /// [`Self::build`].
    pub fn new_from_env() -> Self {
        Self {
            api_key: env::var("OPENAI_API_KEY").ok(),
            model: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the model name sent on every request.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Finalise the builder and return a ready-to-use adapter.
    ///
    /// # Errors
    ///
    /// * [`VitrinaError::Invalid`] – if the API key is missing.
    pub fn build(self) -> Result<OpenAiAdapter> {
        let api_key = self.api_key.ok_or(VitrinaError::Invalid(
            "missing env variable: `OPENAI_API_KEY`".into(),
        ))?;

        Ok(OpenAiAdapter {
            client: Arc::new(OpenAiClient::new(api_key)),
            model: self.model.unwrap_or_else(|| DEFAULT_MODEL.to_owned()),
        })
    }
}
