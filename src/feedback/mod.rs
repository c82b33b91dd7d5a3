//! Survey-to-feedback pipeline: Likert context derivation and prompt
//! construction.

pub mod context;
pub mod prompt;

pub use context::derive_context;
pub use prompt::build_prompt;
