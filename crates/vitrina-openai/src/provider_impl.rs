use std::sync::Arc;

use vitrina_core::{Result, TextGenerationProvider, VitrinaError};

use crate::{
    OpenAiAdapter,
    api::{ChatCompletionMessage, ChatCompletionRequest},
    error::OpenAiError,
};

impl TextGenerationProvider for OpenAiAdapter {
    fn generate<'a, 'p>(
        &'a self,
        prompt: String,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<String>> + Send + 'p>>
    where
        'a: 'p,
    {
        let client = Arc::clone(&self.client);
        let model = self.model.clone();

        Box::pin(async move {
            let request =
                ChatCompletionRequest::new(model, vec![ChatCompletionMessage::user(prompt)]);

            let mut response = client.chat_completion(request).await?;

            let Some(first_choice) = response.choices.pop() else {
                return Err(OpenAiError::Format("response has no choices".into()).into());
            };

            first_choice.message.content.ok_or_else(|| {
                VitrinaError::from(OpenAiError::Format(
                    "assistant message has no content".into(),
                ))
            })
        })
    }
}
