//! Model providers: identifier resolution, key lookup and completion calls.

pub mod anthropic;
pub mod client;
pub mod key;
pub mod model;
pub mod openai;

pub use client::{Completion, CompletionClient, CompletionRequest, HttpCompletionClient};
pub use key::lookup_key;
pub use model::{DEFAULT_MODEL, ModelSpec, Provider};
