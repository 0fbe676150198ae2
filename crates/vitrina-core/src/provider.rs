//! The single capability the assistant needs from the outside world:
//! **text in, text out**.
//!
//! A *provider* turns a finished prompt into a network call against a
//! concrete text-generation service (OpenAI, a self-hosted model, a stub in
//! tests, …) and hands back the raw reply.  Everything downstream — fence
//! stripping, filter parsing, catalog matching — stays independently testable
//! because this boundary is just a string-to-string function.
//!
//! The trait is intentionally minimal:
//!
//! * **One method** – `generate`, a *single* non-streaming round-trip.
//! * The method returns a [`Pin<Box<dyn Future>>`] so the trait stays
//!   object-safe without pulling in `async_trait`.
//!
//! Any failure (network, quota, malformed upstream payload) surfaces as a
//! [`crate::error::VitrinaError`]; the orchestration layer decides how to
//! present it.

use std::{future::Future, pin::Pin};

use crate::error::Result;

/// Opaque text-generation capability.
///
/// Implementations must be cheap to share (`Send + Sync`); the orchestration
/// layer holds them behind an `Arc`.
pub trait TextGenerationProvider: Send + Sync {
    /// Send `prompt` to the model and resolve with its raw textual reply.
    fn generate<'a, 'p>(&'a self, prompt: String) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'p>>
    where
        'a: 'p;
}
