//! mentor-core: design mentor core library.
//!
//! Holds everything that does not talk to the network:
//!
//! - [`components`] -- the component template library and markup composer
//! - [`versions`] -- append-only design history with a current pointer
//! - [`prompts`] / [`advice`] -- prompt builders and completion relays
//! - [`localize`] -- language selection and the translation pass-through
//! - [`publish`] -- PNG encoding and the hosting upload
//! - [`session`] -- session-scoped state tying the above together
//! - [`services`] -- traits implemented by the HTTP clients

pub mod advice;
pub mod components;
pub mod error;
pub mod localize;
pub mod prompts;
pub mod publish;
pub mod services;
pub mod session;
pub mod versions;

// ── Convenience re-exports ───────────────────────────────────────────

pub use components::{ComponentLibrary, ComponentTemplate, Composition};
pub use error::{
    ComposeError, MentorError, PersistenceError, ServiceError, ServiceKind, SessionError,
    VersionError,
};
pub use localize::{localize, Language};
pub use prompts::{EnhancementCategory, FeedbackCategory, Fidelity};
pub use publish::PublishReceipt;
pub use services::{
    CompletionRequest, CompletionService, FileUpload, HostingService, IdentityTranslator,
    Translator,
};
pub use session::{Session, SessionSummary};
pub use versions::{DesignSnapshot, VersionStore};
