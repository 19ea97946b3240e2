use std::fmt;

/// The external collaborator a [`ServiceError`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    Completion,
    Translation,
    Hosting,
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceKind::Completion => write!(f, "completion service"),
            ServiceKind::Translation => write!(f, "translation service"),
            ServiceKind::Hosting => write!(f, "hosting service"),
        }
    }
}

/// A composition request named a component the library does not hold.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComposeError {
    #[error("unknown component: '{name}'")]
    UnknownComponent { name: String },
}

/// A version index or display label outside the history.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionError {
    /// `index` is signed so that user-typed labels (`0`, `-3`) can be reported as given.
    #[error("version index {index} out of range: history holds {len} version(s)")]
    IndexOutOfRange { index: i64, len: usize },
}

/// A call to the completion, translation or hosting service failed.
///
/// Failures are never retried; callers surface them and let the user try again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error("{service}: missing credential ({hint})")]
    MissingCredential { service: ServiceKind, hint: String },

    #[error("{service}: request failed: {message}")]
    Network { service: ServiceKind, message: String },

    #[error("{service} returned 401 Unauthorized, check your credentials")]
    Unauthorized { service: ServiceKind },

    #[error("{service} returned 403 Forbidden, insufficient permissions")]
    Forbidden { service: ServiceKind },

    #[error("{service} returned 404 Not Found: {what}")]
    NotFound { service: ServiceKind, what: String },

    #[error("{service} rejected the request (422): {what}")]
    Rejected { service: ServiceKind, what: String },

    #[error("{service} rate limit or quota exceeded (429)")]
    RateLimited { service: ServiceKind },

    #[error("{service} server error ({status})")]
    Server { service: ServiceKind, status: u16 },

    #[error("{service} returned unexpected status {status}")]
    Status { service: ServiceKind, status: u16 },

    #[error("{service}: could not parse response: {message}")]
    Parse { service: ServiceKind, message: String },
}

impl ServiceError {
    /// The service that produced this error.
    pub fn service(&self) -> ServiceKind {
        match self {
            ServiceError::MissingCredential { service, .. }
            | ServiceError::Network { service, .. }
            | ServiceError::Unauthorized { service }
            | ServiceError::Forbidden { service }
            | ServiceError::NotFound { service, .. }
            | ServiceError::Rejected { service, .. }
            | ServiceError::RateLimited { service }
            | ServiceError::Server { service, .. }
            | ServiceError::Status { service, .. }
            | ServiceError::Parse { service, .. } => *service,
        }
    }

    /// Map an HTTP error status to the matching variant.
    ///
    /// `what` describes the resource for 404 and 422 responses.
    pub fn from_status(service: ServiceKind, status: u16, what: &str) -> Self {
        match status {
            401 => ServiceError::Unauthorized { service },
            403 => ServiceError::Forbidden { service },
            404 => ServiceError::NotFound {
                service,
                what: what.to_string(),
            },
            422 => ServiceError::Rejected {
                service,
                what: what.to_string(),
            },
            429 => ServiceError::RateLimited { service },
            500..=599 => ServiceError::Server { service, status },
            _ => ServiceError::Status { service, status },
        }
    }
}

/// Publishing a design to the hosting service failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PersistenceError {
    #[error("repository name cannot be empty")]
    EmptyRepository,

    #[error("could not encode design as PNG: {0}")]
    Encode(String),

    #[error("upload failed: {0}")]
    Upload(#[from] ServiceError),
}

/// A session-level action could not be carried out.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("no design image is loaded; upload one first")]
    NoActiveImage,

    #[error("unsupported image format: expected PNG or JPEG")]
    UnsupportedImage,

    #[error("could not decode image: {0}")]
    Decode(String),

    #[error("could not read '{path}': {message}")]
    Read { path: String, message: String },

    #[error(transparent)]
    Version(#[from] VersionError),
}

/// Any error raised by the core library.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MentorError {
    #[error(transparent)]
    Compose(#[from] ComposeError),

    #[error(transparent)]
    Version(#[from] VersionError),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error(transparent)]
    Session(#[from] SessionError),
}
