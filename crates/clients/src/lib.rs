//! mentor-clients: blocking HTTP implementations of the service traits
//! declared in `mentor-core`.
//!
//! - [`openai::OpenAiClient`] -- chat completions ([`mentor_core::CompletionService`])
//! - [`translate::GoogleTranslateClient`] -- text translation ([`mentor_core::Translator`])
//! - [`github::GitHubClient`] -- file creation ([`mentor_core::HostingService`])

pub mod github;
pub mod openai;
pub mod translate;

mod http;

pub use github::GitHubClient;
pub use openai::OpenAiClient;
pub use translate::GoogleTranslateClient;
