//! Error taxonomy for failed outcomes.
//!
//! This module provides the closed set of typed errors an
//! [`Outcome::Err`](crate::outcome::Outcome::Err) may carry:
//!
//! - [`ErrorKind`]: the six-kind discriminant, matched exhaustively
//! - [`OutcomeError`]: an immutable error value with a machine-readable
//!   code, a human-readable message, and an optional causal origin
//! - [`Origin`]: an explicit linked chain of causes back to the root fault
//!
//! # Examples
//!
//! ```rust
//! use outcome::error::{ErrorKind, OutcomeError};
//!
//! let error = OutcomeError::not_found("USER_MISSING", "no such user");
//! assert_eq!(error.kind(), ErrorKind::NotFound);
//! assert_eq!(error.code(), "USER_MISSING");
//! assert!(error.origin().is_none());
//! ```
//!
//! Errors are values. "Changing" one means rebuilding it:
//!
//! ```rust
//! use outcome::error::{Origin, OutcomeError};
//!
//! let base = OutcomeError::unknown("DB_DOWN", "database unreachable");
//! let enriched = base.with_origin(Origin::new("connection refused"));
//! assert_eq!(enriched.origin().unwrap().description(), "connection refused");
//! ```

use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Code carried by errors produced from a contained panic.
pub const UNEXPECTED_ERROR: &str = "UNEXPECTED_ERROR";

/// Message carried by errors produced from a contained panic.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "Failed to finish the operation";

// =============================================================================
// ErrorKind
// =============================================================================

/// The closed set of error kinds.
///
/// Five kinds are for callers to classify domain failures with;
/// [`ErrorKind::Unknown`] is reserved for faults captured from
/// caller-supplied closures and for failed recoveries.
///
/// The set is deliberately closed: adding a kind forces every consumer
/// `match` to handle it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The requested entity does not exist.
    NotFound,
    /// The input was well-formed but failed a domain rule.
    ValidationFailed,
    /// The caller is not allowed to perform the operation.
    PermissionDenied,
    /// The request itself was malformed.
    InvalidRequest,
    /// The operation was already performed.
    DuplicateRequest,
    /// An uncontrolled fault, captured at a combinator boundary.
    Unknown,
}

impl ErrorKind {
    /// Returns the stable name of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "NotFound",
            Self::ValidationFailed => "ValidationFailed",
            Self::PermissionDenied => "PermissionDenied",
            Self::InvalidRequest => "InvalidRequest",
            Self::DuplicateRequest => "DuplicateRequest",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

// =============================================================================
// Origin
// =============================================================================

/// One link in the causal chain attached to an [`OutcomeError`].
///
/// An `Origin` describes what happened at one level of a failure, and
/// optionally points at the preceding link. Links are shared via [`Arc`],
/// so cloning an error never copies its chain, and chaining a new link
/// onto an existing chain never discards the prior links.
///
/// # Examples
///
/// ```rust
/// use outcome::error::Origin;
///
/// let root = Origin::new("connection reset by peer");
/// let origin = Origin::with_cause("query aborted", root);
///
/// let descriptions: Vec<_> = origin.chain().map(Origin::description).collect();
/// assert_eq!(descriptions, ["query aborted", "connection reset by peer"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Origin {
    description: String,
    cause: Option<Arc<Origin>>,
}

impl Origin {
    /// Creates a root origin with no cause.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            cause: None,
        }
    }

    /// Creates an origin caused by a prior one.
    pub fn with_cause(description: impl Into<String>, cause: impl Into<Arc<Self>>) -> Self {
        Self {
            description: description.into(),
            cause: Some(cause.into()),
        }
    }

    pub(crate) fn chained(description: String, cause: Option<Arc<Self>>) -> Self {
        Self { description, cause }
    }

    /// Returns the description of this link.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the preceding link, if any.
    #[must_use]
    pub fn cause(&self) -> Option<&Self> {
        self.cause.as_deref()
    }

    /// Iterates the chain from this link to the root cause.
    pub fn chain(&self) -> OriginChain<'_> {
        OriginChain { next: Some(self) }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.description)
    }
}

impl Error for Origin {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause
            .as_ref()
            .map(|cause| &**cause as &(dyn Error + 'static))
    }
}

/// Iterator over an [`Origin`] chain, outermost link first.
///
/// Created by [`Origin::chain`].
#[derive(Clone, Debug)]
pub struct OriginChain<'a> {
    next: Option<&'a Origin>,
}

impl<'a> Iterator for OriginChain<'a> {
    type Item = &'a Origin;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.cause();
        Some(current)
    }
}

impl std::iter::FusedIterator for OriginChain<'_> {}

// =============================================================================
// OutcomeError
// =============================================================================

/// A typed, immutable error value.
///
/// Every error has a [`kind`](Self::kind) from the closed [`ErrorKind`]
/// set, a machine-readable [`code`](Self::code), a human-readable
/// [`message`](Self::message), and an optional [`origin`](Self::origin)
/// chain. Kind, code, and message are fixed at construction; only the
/// origin can be replaced, and only by producing a new value with
/// [`with_origin`](Self::with_origin).
///
/// # Examples
///
/// ```rust
/// use outcome::error::OutcomeError;
///
/// let error = OutcomeError::permission_denied("NOT_OWNER", "only the owner may delete");
/// assert!(error.is_permission_denied());
/// assert_eq!(error.to_string(), "PermissionDenied [NOT_OWNER]: only the owner may delete");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutcomeError {
    kind: ErrorKind,
    code: String,
    message: String,
    origin: Option<Arc<Origin>>,
}

impl OutcomeError {
    /// Creates an error of the given kind with no origin.
    pub fn new(kind: ErrorKind, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: code.into(),
            message: message.into(),
            origin: None,
        }
    }

    /// Creates the error used for a contained fault.
    ///
    /// Always [`ErrorKind::Unknown`] with code [`UNEXPECTED_ERROR`] and
    /// message [`UNEXPECTED_ERROR_MESSAGE`]; the fault itself travels in
    /// the origin.
    pub fn unexpected(origin: Origin) -> Self {
        Self::new(ErrorKind::Unknown, UNEXPECTED_ERROR, UNEXPECTED_ERROR_MESSAGE)
            .with_origin(origin)
    }

    /// Returns the kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the machine-readable code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the head of the origin chain, if any.
    #[must_use]
    pub fn origin(&self) -> Option<&Origin> {
        self.origin.as_deref()
    }

    pub(crate) fn origin_arc(&self) -> Option<Arc<Origin>> {
        self.origin.clone()
    }

    /// Returns a new error of the same kind, code, and message, with the
    /// origin replaced.
    #[must_use]
    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = Some(Arc::new(origin));
        self
    }

    /// Chains this error onto an older one.
    ///
    /// Builds an origin describing the older error's code and message whose
    /// own cause is the older error's origin, then rebinds via
    /// [`with_origin`](Self::with_origin). The older failure's identity is
    /// preserved in the chain rather than discarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::error::OutcomeError;
    ///
    /// let older = OutcomeError::not_found("USER_MISSING", "no such user");
    /// let newer = OutcomeError::invalid_request("BAD_REF", "dangling reference");
    ///
    /// let chained = newer.caused_by(&older);
    /// let origin = chained.origin().unwrap();
    /// assert_eq!(origin.description(), "caused by: USER_MISSING - no such user");
    /// ```
    #[must_use]
    pub fn caused_by(self, cause: &Self) -> Self {
        let link = Origin::chained(
            format!("caused by: {} - {}", cause.code, cause.message),
            cause.origin.clone(),
        );
        self.with_origin(link)
    }
}

impl fmt::Display for OutcomeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{} [{}]: {}",
            self.kind, self.code, self.message
        )
    }
}

impl Error for OutcomeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.origin
            .as_ref()
            .map(|origin| &**origin as &(dyn Error + 'static))
    }
}

macro_rules! kind_constructors {
    ($($variant:ident),+ $(,)?) => {
        paste::paste! {
            impl OutcomeError {
                $(
                    #[doc = concat!(
                        "Creates an [`ErrorKind::", stringify!($variant),
                        "`] error with the given code and message.",
                    )]
                    pub fn [<$variant:snake>](
                        code: impl Into<String>,
                        message: impl Into<String>,
                    ) -> Self {
                        Self::new(ErrorKind::$variant, code, message)
                    }

                    #[doc = concat!(
                        "Returns `true` if this error's kind is [`ErrorKind::",
                        stringify!($variant), "`].",
                    )]
                    #[must_use]
                    pub const fn [<is_ $variant:snake>](&self) -> bool {
                        matches!(self.kind, ErrorKind::$variant)
                    }
                )+
            }
        }
    };
}

kind_constructors!(
    NotFound,
    ValidationFailed,
    PermissionDenied,
    InvalidRequest,
    DuplicateRequest,
    Unknown,
);

// Immutable values with Arc-shared chains are safe to hand across threads.
static_assertions::assert_impl_all!(ErrorKind: Send, Sync, Copy);
static_assertions::assert_impl_all!(Origin: Send, Sync, Clone);
static_assertions::assert_impl_all!(OutcomeError: Send, Sync, Clone);
