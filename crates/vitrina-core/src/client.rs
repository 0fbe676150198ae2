//! Generic, lightweight client that binds a caller to a single concrete
//! text-generation backend.
//!
//! The client is **generic over the backend type `B`**, so no dynamic
//! dispatch or object-safety hurdles appear in user code, and cloning is
//! always cheap because the backend lives behind an `Arc`.
//!
//! Any backend crate (e.g. `vitrina-openai`, a test stub) just implements
//! [`TextGenerationProvider`] and the same client works out of the box.

use std::sync::Arc;

use crate::{error::Result, provider::TextGenerationProvider};

/// A client bound to a single provider.
///
/// Clone the client freely; all clones share the same backend.
#[derive(Debug, Clone)]
pub struct VitrinaClient<B> {
    backend: Arc<B>,
}

impl<B> VitrinaClient<B>
where
    B: TextGenerationProvider,
{
    /// Create a new client that delegates all calls to `backend`.
    pub fn new(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Access the underlying backend (e.g. to tweak provider-specific settings).
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: TextGenerationProvider> TextGenerationProvider for VitrinaClient<B> {
    fn generate<'a, 'p>(
        &'a self,
        prompt: String,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<String>> + Send + 'p>>
    where
        'a: 'p,
    {
        let backend = Arc::clone(&self.backend);
        Box::pin(async move { backend.generate(prompt).await })
    }
}
