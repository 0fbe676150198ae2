//! Provider-agnostic foundation of the **vitrina** workspace.
//!
//! * [`provider::TextGenerationProvider`] – the one capability the assistant
//!   needs from an external model: `generate(prompt) -> text`.
//! * [`client::VitrinaClient`] – a cheap-to-clone wrapper binding callers to
//!   a single backend.
//! * [`error::VitrinaError`] – the unified error type the whole workspace
//!   reports through.
//!
//! Concrete backends live in sibling crates (e.g. `vitrina-openai`); catalog
//! and filtering semantics live in `vitrina-catalog`.

pub mod client;
pub mod error;
pub mod provider;

pub use client::VitrinaClient;
pub use error::{Result, VitrinaError};
pub use provider::TextGenerationProvider;
