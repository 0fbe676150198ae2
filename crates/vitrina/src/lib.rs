//! # `vitrina` – The umbrella crate
//!
//! A storefront chat assistant: customers describe what they want in free
//! text, an external model turns that into structured field filters, and a
//! cascading engine matches them against a bundled product catalog.
//!
//! | Crate                 | What it provides                                                       |
//! |-----------------------|------------------------------------------------------------------------|
//! | **`vitrina-core`**    | The `TextGenerationProvider` capability trait, generic client, errors  |
//! | **`vitrina-catalog`** | Product records, bundled dataset, schema descriptor, filter engine     |
//! | **`vitrina-prompt`**  | Markdown prompt builder and the filter-request prompt                  |
//! | **`vitrina-openai`**  | Thin HTTP backend for the OpenAI *chat/completions* API *(optional)*   |
//!
//! The [`chat`] module in this crate ties them together into a
//! request/response cycle with history, a thinking placeholder, stale-reply
//! discarding and an explicit call timeout.
//!
//! By default the crate enables the `openai` feature; disable default
//! features to stay fully provider-agnostic and plug in your own backend:
//!
//! ```toml
//! [dependencies]
//! vitrina = { version = "0.1", default-features = false }
//! ```
//!
//! ## Quick example
//!
//! ```rust,no_run
//! use vitrina::chat::ChatSession;
//! use vitrina::catalog::Catalog;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = vitrina::openai::OpenAiAdapterBuilder::new_from_env().build()?;
//!     let mut chat = ChatSession::new(backend, Catalog::bundled());
//!
//!     let reply = chat.ask("a red polo shirt in size M").await?;
//!     println!("{reply:?}");
//!     Ok(())
//! }
//! ```

pub use vitrina_core::*;

pub use vitrina_catalog as catalog;
pub use vitrina_prompt as prompt;

pub mod chat;

#[cfg(feature = "openai")]
pub use vitrina_openai as openai;
