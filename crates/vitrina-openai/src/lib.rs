//! OpenAI backend for the **vitrina** storefront assistant: a thin,
//! non-streaming *chat/completions* client exposed through the
//! [`vitrina_core::TextGenerationProvider`] capability trait.

mod adapter;
mod provider_impl;

pub use adapter::{OpenAiAdapter, OpenAiAdapterBuilder};
pub mod api;
mod client;
pub mod error;

pub use client::OpenAiClient;
