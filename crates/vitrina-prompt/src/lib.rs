//! Prompt construction for the **vitrina** workspace: a fluent markdown
//! [`builder::PromptBuilder`] and the [`filter_prompt::FilterPrompt`] that
//! asks the external model for structured product filters.

pub mod builder;
pub mod filter_prompt;

pub use builder::PromptBuilder;
pub use filter_prompt::FilterPrompt;
