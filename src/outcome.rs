//! The three-state outcome container and its combinator algebra.
//!
//! [`Outcome<T>`] represents the result of an operation as exactly one of:
//!
//! - `Ok(value)`: success with a value
//! - `Err(error)`: failure with a typed [`OutcomeError`]
//! - `None`: completion without a value
//!
//! Every combinator consumes its input and produces a new outcome; nothing
//! is mutated in place. Panics raised inside caller-supplied closures are
//! contained at the combinator boundary and surfaced as an
//! [`ErrorKind::Unknown`](crate::error::ErrorKind::Unknown) error instead of
//! unwinding through the caller.
//!
//! # Examples
//!
//! ```rust
//! use outcome::prelude::*;
//!
//! let shipped = Outcome::ok("order-17")
//!     .filter(
//!         |id| id.starts_with("order-"),
//!         OutcomeError::invalid_request("BAD_ID", "not an order id"),
//!     )
//!     .map(|id| format!("{id} shipped"));
//!
//! assert_eq!(shipped.unwrap(), "order-17 shipped");
//! ```
//!
//! ```rust
//! use outcome::prelude::*;
//!
//! // Failure is a value, matched like any other.
//! let outcome: Outcome<i32> = Outcome::err(OutcomeError::not_found("GONE", "nothing here"));
//! let summary = outcome.fold(
//!     |value| format!("got {value}"),
//!     |error| format!("failed with {}", error.code()),
//!     || "empty".to_string(),
//! );
//! assert_eq!(summary, "failed with GONE");
//! ```

use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::error::{Origin, OutcomeError};

// =============================================================================
// Fault Containment
// =============================================================================

/// Runs a caller-supplied operation, converting a panic into its message.
fn contain<R, F>(operation: F) -> Result<R, String>
where
    F: FnOnce() -> R,
{
    catch_unwind(AssertUnwindSafe(operation)).map_err(|payload| {
        if let Some(message) = payload.downcast_ref::<&str>() {
            (*message).to_string()
        } else if let Some(message) = payload.downcast_ref::<String>() {
            message.clone()
        } else {
            "unknown panic".to_string()
        }
    })
}

fn contained_error(context: &str, panic_message: String) -> OutcomeError {
    OutcomeError::unexpected(Origin::with_cause(context, Origin::new(panic_message)))
}

// =============================================================================
// Outcome
// =============================================================================

/// The result of an operation: a value, a typed error, or nothing.
///
/// Exactly one variant is active at any time, and every combinator
/// produces a new `Outcome` rather than mutating in place. `Ok` always
/// holds a value and `Err` always holds an error; absence is its own
/// variant, never a degenerate payload.
///
/// # Type Parameters
///
/// * `T` - The type of the success value
///
/// # Examples
///
/// ```rust
/// use outcome::prelude::*;
///
/// let found: Outcome<u32> = Outcome::ok(7);
/// let missing: Outcome<u32> = Outcome::none();
/// let failed: Outcome<u32> = Outcome::err(OutcomeError::not_found("NO_ROW", "row 7 missing"));
///
/// assert_eq!(found.unwrap_or(0), 7);
/// assert_eq!(missing.unwrap_or(0), 0);
/// assert_eq!(failed.unwrap_or(0), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<T> {
    /// Success, holding exactly one value.
    Ok(T),
    /// Failure, holding exactly one [`OutcomeError`].
    Err(OutcomeError),
    /// Completion without a value.
    None,
}

impl<T> Outcome<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates an `Ok` outcome holding `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// assert!(Outcome::ok(5).is_ok());
    /// ```
    #[inline]
    pub const fn ok(value: T) -> Self {
        Self::Ok(value)
    }

    /// Creates an `Err` outcome holding `error`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::prelude::*;
    ///
    /// let outcome: Outcome<i32> =
    ///     Outcome::err(OutcomeError::permission_denied("NOT_OWNER", "not yours"));
    /// assert!(outcome.is_err());
    /// ```
    #[inline]
    pub const fn err(error: OutcomeError) -> Self {
        Self::Err(error)
    }

    /// Creates a `None` outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let outcome: Outcome<i32> = Outcome::none();
    /// assert!(outcome.is_none());
    /// ```
    #[inline]
    pub const fn none() -> Self {
        Self::None
    }

    /// Builds an outcome from a value-producing closure.
    ///
    /// `Some(value)` becomes `Ok(value)` and `None` becomes the `None`
    /// outcome. A panic inside the producer is contained: the result is an
    /// `Err` of kind `Unknown` whose origin carries the panic message. This
    /// is the construction-side boundary where an uncontrolled fault turns
    /// into a plain value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let parsed = Outcome::from_fn(|| "42".parse::<i32>().ok());
    /// assert_eq!(parsed, Outcome::ok(42));
    ///
    /// let absent = Outcome::from_fn(|| "nope".parse::<i32>().ok());
    /// assert!(absent.is_none());
    ///
    /// let contained = Outcome::from_fn(|| -> Option<i32> { panic!("boom") });
    /// assert!(contained.is_err());
    /// ```
    pub fn from_fn<F>(producer: F) -> Self
    where
        F: FnOnce() -> Option<T>,
    {
        match contain(producer) {
            Ok(Some(value)) => Self::Ok(value),
            Ok(None) => Self::None,
            Err(panic_message) => {
                Self::Err(contained_error("outcome producer call failed", panic_message))
            }
        }
    }

    // =========================================================================
    // Aggregation
    // =========================================================================

    /// Converts a sequence of outcomes into one outcome of a sequence.
    ///
    /// Scans in order, accumulating `Ok` values. The first non-`Ok` element
    /// short-circuits the scan: an `Err` returns that error, a `None`
    /// returns `None`. Whichever failing shape appears first wins,
    /// regardless of which it is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::prelude::*;
    ///
    /// let all = Outcome::sequence(vec![Outcome::ok(1), Outcome::ok(2), Outcome::ok(3)]);
    /// assert_eq!(all, Outcome::ok(vec![1, 2, 3]));
    ///
    /// let error = OutcomeError::not_found("GONE", "missing");
    /// let failed = Outcome::sequence(vec![
    ///     Outcome::ok(1),
    ///     Outcome::err(error.clone()),
    ///     Outcome::none(),
    /// ]);
    /// assert_eq!(failed, Outcome::err(error));
    ///
    /// let emptied = Outcome::sequence(vec![
    ///     Outcome::ok(1),
    ///     Outcome::none(),
    ///     Outcome::err(OutcomeError::unknown("LATER", "never reached")),
    /// ]);
    /// assert!(emptied.is_none());
    /// ```
    pub fn sequence<I>(outcomes: I) -> Outcome<Vec<T>>
    where
        I: IntoIterator<Item = Self>,
    {
        let outcomes = outcomes.into_iter();
        let mut values = Vec::with_capacity(outcomes.size_hint().0);
        for outcome in outcomes {
            match outcome {
                Self::Ok(value) => values.push(value),
                Self::Err(error) => return Outcome::Err(error),
                Self::None => return Outcome::None,
            }
        }
        Outcome::Ok(values)
    }

    /// Maps every element through `mapper`, then [`sequence`](Self::sequence)s
    /// the results.
    ///
    /// The mapping itself is eager over the whole input; short-circuiting
    /// happens in the sequencing step.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let parsed = Outcome::traverse(vec!["1", "2", "3"], |raw| {
    ///     Outcome::from_fn(|| raw.parse::<i32>().ok())
    /// });
    /// assert_eq!(parsed, Outcome::ok(vec![1, 2, 3]));
    /// ```
    pub fn traverse<A, I, F>(items: I, mapper: F) -> Outcome<Vec<T>>
    where
        I: IntoIterator<Item = A>,
        F: FnMut(A) -> Self,
    {
        Self::sequence(items.into_iter().map(mapper).collect::<Vec<_>>())
    }

    // =========================================================================
    // Predicates
    // =========================================================================

    /// Returns `true` if this is an `Ok` outcome.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is an `Err` outcome.
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Returns `true` if this is a `None` outcome.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    // =========================================================================
    // Reference Extraction
    // =========================================================================

    /// Returns a reference to the value if this is `Ok`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// assert_eq!(Outcome::ok(3).ok_ref(), Some(&3));
    /// assert_eq!(Outcome::<i32>::none().ok_ref(), None);
    /// ```
    #[inline]
    pub const fn ok_ref(&self) -> Option<&T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) | Self::None => None,
        }
    }

    /// Returns a reference to the error if this is `Err`.
    #[inline]
    pub const fn err_ref(&self) -> Option<&OutcomeError> {
        match self {
            Self::Err(error) => Some(error),
            Self::Ok(_) | Self::None => None,
        }
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the value if `Ok`, otherwise the supplied default.
    ///
    /// The default is used verbatim for both `Err` and `None`. If the
    /// default is expensive to build, use
    /// [`unwrap_or_else`](Self::unwrap_or_else).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// assert_eq!(Outcome::ok(9).unwrap_or(0), 9);
    /// assert_eq!(Outcome::<i32>::none().unwrap_or(0), 0);
    /// ```
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) | Self::None => default,
        }
    }

    /// Returns the value if `Ok`, otherwise lazily produces a default.
    ///
    /// The supplier runs only when this is `Err` or `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// assert_eq!(Outcome::ok(9).unwrap_or_else(|| 0), 9);
    /// assert_eq!(Outcome::<i32>::none().unwrap_or_else(|| 0), 0);
    /// ```
    pub fn unwrap_or_else<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) | Self::None => supplier(),
        }
    }

    /// Returns the value, panicking on `Err` and `None`.
    ///
    /// This is the single deliberate escape hatch back into panic-based
    /// control flow, intended for integration edges rather than the middle
    /// of a pipeline.
    ///
    /// # Panics
    ///
    /// Panics if this is an `Err` (the message embeds the error) or a
    /// `None` outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// assert_eq!(Outcome::ok(5).unwrap(), 5);
    /// ```
    ///
    /// ```rust,should_panic
    /// use outcome::Outcome;
    ///
    /// let absent: Outcome<i32> = Outcome::none();
    /// absent.unwrap(); // panics
    /// ```
    pub fn unwrap(self) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => {
                panic!("called `Outcome::unwrap()` on an `Err` value: {error}")
            }
            Self::None => panic!("called `Outcome::unwrap()` on a `None` value"),
        }
    }

    /// Eliminates the outcome by applying exactly one of three functions.
    ///
    /// A total pattern match as a function: `on_ok` for the value, `on_err`
    /// for the error, `on_none` for absence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let label = Outcome::ok(3).fold(
    ///     |value| format!("value {value}"),
    ///     |error| format!("error {}", error.code()),
    ///     || "nothing".to_string(),
    /// );
    /// assert_eq!(label, "value 3");
    /// ```
    pub fn fold<U, F, G, H>(self, on_ok: F, on_err: G, on_none: H) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce(OutcomeError) -> U,
        H: FnOnce() -> U,
    {
        match self {
            Self::Ok(value) => on_ok(value),
            Self::Err(error) => on_err(error),
            Self::None => on_none(),
        }
    }

    /// Converts into an `Option`, discarding any error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// assert_eq!(Outcome::ok(4).into_option(), Some(4));
    /// assert_eq!(Outcome::<i32>::none().into_option(), None);
    /// ```
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) | Self::None => None,
        }
    }

    /// Converts into a `Result`, losslessly.
    ///
    /// `Ok` and `None` both land on the `Ok` side as an `Option`; the error
    /// side is reserved for `Err`.
    ///
    /// # Errors
    ///
    /// Returns the carried [`OutcomeError`] if this is an `Err` outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// assert_eq!(Outcome::ok(4).into_result(), Ok(Some(4)));
    /// assert_eq!(Outcome::<i32>::none().into_result(), Ok(None));
    /// ```
    pub fn into_result(self) -> Result<Option<T>, OutcomeError> {
        match self {
            Self::Ok(value) => Ok(Some(value)),
            Self::Err(error) => Err(error),
            Self::None => Ok(None),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Swaps the success value for a new one, keeping only the shape.
    ///
    /// `Err` propagates its error unchanged. `Ok` and `None` both become
    /// `Ok(new_value)` when a replacement is present, and `None` when it is
    /// absent — including the `Ok -> None` transition, which is the
    /// documented behavior.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// assert_eq!(Outcome::ok(1).replace(Some("next")), Outcome::ok("next"));
    /// assert!(Outcome::ok(1).replace(None::<&str>).is_none());
    /// assert_eq!(Outcome::<i32>::none().replace(Some(2)), Outcome::ok(2));
    /// ```
    pub fn replace<U>(self, new_value: Option<U>) -> Outcome<U> {
        match self {
            Self::Err(error) => Outcome::Err(error),
            Self::Ok(_) | Self::None => match new_value {
                Some(value) => Outcome::Ok(value),
                None => Outcome::None,
            },
        }
    }

    /// Applies a function to the `Ok` value, wrapping the result as `Ok`.
    ///
    /// `Err` and `None` propagate unchanged. Implemented via
    /// [`flat_map`](Self::flat_map), so a panic inside the mapper is
    /// contained the same way.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// assert_eq!(Outcome::ok(21).map(|x| x * 2), Outcome::ok(42));
    /// assert!(Outcome::<i32>::none().map(|x| x * 2).is_none());
    /// ```
    pub fn map<U, F>(self, mapper: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        self.flat_map(|value| Outcome::Ok(mapper(value)))
    }

    /// Chains an outcome-producing function over the `Ok` value.
    ///
    /// On `Ok`, invokes the mapper once and returns its outcome unchanged,
    /// flattening one nesting level by construction. On `Err` and `None`,
    /// propagates without invoking the mapper. A panic inside the mapper is
    /// contained as an `Unknown` error carrying the panic as its origin.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::prelude::*;
    ///
    /// fn half(n: i32) -> Outcome<i32> {
    ///     if n % 2 == 0 {
    ///         Outcome::ok(n / 2)
    ///     } else {
    ///         Outcome::err(OutcomeError::validation_failed("ODD", "not divisible"))
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::ok(8).flat_map(half), Outcome::ok(4));
    /// assert!(Outcome::ok(7).flat_map(half).is_err());
    ///
    /// let contained = Outcome::ok(1).flat_map(|_| -> Outcome<i32> { panic!("boom") });
    /// assert!(contained.is_err());
    /// ```
    pub fn flat_map<U, F>(self, mapper: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Self::Ok(value) => match contain(move || mapper(value)) {
                Ok(next) => next,
                Err(panic_message) => {
                    Outcome::Err(contained_error("flat_map mapper call failed", panic_message))
                }
            },
            Self::Err(error) => Outcome::Err(error),
            Self::None => Outcome::None,
        }
    }

    /// Transforms the error of an `Err` outcome.
    ///
    /// When the mapper returns an error equal to the original, it is kept
    /// verbatim. When it returns a different error, the new error is
    /// chained onto the old one via
    /// [`OutcomeError::caused_by`](crate::error::OutcomeError::caused_by),
    /// so the original failure stays reachable through the origin chain.
    /// `Ok` and `None` are returned unchanged without invoking the mapper.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::prelude::*;
    ///
    /// let outcome: Outcome<i32> =
    ///     Outcome::err(OutcomeError::unknown("LOW_LEVEL", "socket error"));
    /// let mapped = outcome.map_err(|_| OutcomeError::not_found("USER_MISSING", "no user"));
    ///
    /// let error = mapped.err_ref().unwrap();
    /// assert_eq!(error.code(), "USER_MISSING");
    /// assert_eq!(
    ///     error.origin().unwrap().description(),
    ///     "caused by: LOW_LEVEL - socket error",
    /// );
    /// ```
    pub fn map_err<F>(self, mapper: F) -> Self
    where
        F: FnOnce(&OutcomeError) -> OutcomeError,
    {
        match self {
            Self::Err(error) => {
                let mapped = mapper(&error);
                if mapped == error {
                    Self::Err(error)
                } else {
                    Self::Err(mapped.caused_by(&error))
                }
            }
            other => other,
        }
    }

    /// Turns a `None` outcome into an `Err`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::prelude::*;
    ///
    /// let required: Outcome<i32> = Outcome::none()
    ///     .or_else_err(OutcomeError::not_found("EMPTY", "value required"));
    /// assert!(required.is_err());
    /// ```
    pub fn or_else_err(self, new_error: OutcomeError) -> Self {
        match self {
            Self::None => Self::Err(new_error),
            other => other,
        }
    }

    /// Pairs two `Ok` values into one outcome.
    ///
    /// When both sides are `Ok` the result is `Ok` of the tuple. Otherwise
    /// this side's error wins, then the other side's; with no error present
    /// the result is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::prelude::*;
    ///
    /// assert_eq!(Outcome::ok(1).zip(Outcome::ok("a")), Outcome::ok((1, "a")));
    ///
    /// let left = OutcomeError::unknown("LEFT", "first");
    /// let right = OutcomeError::unknown("RIGHT", "second");
    /// let both: Outcome<(i32, i32)> =
    ///     Outcome::err(left.clone()).zip(Outcome::err(right));
    /// assert_eq!(both, Outcome::err(left));
    ///
    /// assert!(Outcome::<i32>::none().zip(Outcome::ok(1)).is_none());
    /// ```
    pub fn zip<U>(self, other: Outcome<U>) -> Outcome<(T, U)> {
        match (self, other) {
            (Self::Ok(first), Outcome::Ok(second)) => Outcome::Ok((first, second)),
            (Self::Err(error), _) => Outcome::Err(error),
            (_, Outcome::Err(error)) => Outcome::Err(error),
            _ => Outcome::None,
        }
    }

    /// Keeps an `Ok` value only if it satisfies a predicate.
    ///
    /// A failing predicate replaces the outcome with `Err(error_if_false)`;
    /// a panicking predicate is contained as an `Unknown` error. `Err` and
    /// `None` pass through untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::prelude::*;
    ///
    /// let error = OutcomeError::validation_failed("NEGATIVE", "must be positive");
    /// assert_eq!(Outcome::ok(3).filter(|n| *n > 0, error.clone()), Outcome::ok(3));
    /// assert_eq!(Outcome::ok(-3).filter(|n| *n > 0, error.clone()), Outcome::err(error));
    /// ```
    pub fn filter<P>(self, predicate: P, error_if_false: OutcomeError) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Ok(value) => match contain(|| predicate(&value)) {
                Ok(true) => Self::Ok(value),
                Ok(false) => Self::Err(error_if_false),
                Err(panic_message) => {
                    Self::Err(contained_error("filter predicate call failed", panic_message))
                }
            },
            other => other,
        }
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// Runs an action on the value if this is `Ok`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let mut seen = None;
    /// Outcome::ok(2).if_ok(|value| seen = Some(*value));
    /// assert_eq!(seen, Some(2));
    /// ```
    pub fn if_ok<F>(&self, action: F)
    where
        F: FnOnce(&T),
    {
        if let Self::Ok(value) = self {
            action(value);
        }
    }

    /// Runs an action on the error if this is `Err`.
    pub fn if_err<F>(&self, action: F)
    where
        F: FnOnce(&OutcomeError),
    {
        if let Self::Err(error) = self {
            action(error);
        }
    }

    /// Runs an action if this is `None`.
    pub fn if_none<F>(&self, action: F)
    where
        F: FnOnce(),
    {
        if let Self::None = self {
            action();
        }
    }

    /// Runs an action on the `Ok` value for its side effect, then returns
    /// the outcome unchanged.
    ///
    /// A panic inside the action is contained as an `Unknown` error. `Err`
    /// and `None` return unchanged without running the action.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let outcome = Outcome::ok(10).tap(|value| {
    ///     assert_eq!(*value, 10);
    /// });
    /// assert_eq!(outcome, Outcome::ok(10));
    /// ```
    pub fn tap<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Ok(value) = &self {
            if let Err(panic_message) = contain(|| action(value)) {
                return Self::Err(contained_error("tap action call failed", panic_message));
            }
        }
        self
    }

    /// Runs an outcome-producing side validation against the `Ok` value.
    ///
    /// The mapper's `Err` replaces this outcome; its `Ok` and `None` are
    /// discarded and the original value survives — only failure is
    /// observed. A panic inside the mapper is contained as an `Unknown`
    /// error. `Err` propagates and `None` stays `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::prelude::*;
    ///
    /// fn check_quota(user: &&str) -> Outcome<u32> {
    ///     if user.starts_with("admin") {
    ///         Outcome::ok(100)
    ///     } else {
    ///         Outcome::err(OutcomeError::permission_denied("QUOTA", "quota exhausted"))
    ///     }
    /// }
    ///
    /// // The side outcome's success payload (u32) is discarded.
    /// assert_eq!(Outcome::ok("admin-1").tap_with(check_quota), Outcome::ok("admin-1"));
    /// assert!(Outcome::ok("guest-1").tap_with(check_quota).is_err());
    /// ```
    pub fn tap_with<U, F>(self, mapper: F) -> Self
    where
        F: FnOnce(&T) -> Outcome<U>,
    {
        match self {
            Self::Ok(value) => match contain(|| mapper(&value)) {
                Ok(Outcome::Err(error)) => Self::Err(error),
                Ok(Outcome::Ok(_) | Outcome::None) => Self::Ok(value),
                Err(panic_message) => {
                    Self::Err(contained_error("tap_with mapper call failed", panic_message))
                }
            },
            Self::Err(error) => Self::Err(error),
            Self::None => Self::None,
        }
    }

    // =========================================================================
    // Recovery
    // =========================================================================

    /// Recovers from an `Err` by producing a replacement value.
    ///
    /// `Some(value)` recovers into `Ok(value)`; `None` empties into the
    /// `None` outcome. A panic during recovery does not fabricate a new
    /// error kind: the original error is returned with a combined origin
    /// whose description embeds the panic message and whose cause is the
    /// original origin. `Ok` and `None` return unchanged without invoking
    /// the recovery.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::prelude::*;
    ///
    /// let outcome: Outcome<i32> = Outcome::err(OutcomeError::unknown("FAIL", "lookup failed"));
    /// let recovered = outcome.recover(|error| {
    ///     if error.is_unknown() { Some(0) } else { None }
    /// });
    /// assert_eq!(recovered, Outcome::ok(0));
    /// ```
    pub fn recover<F>(self, recovery: F) -> Self
    where
        F: FnOnce(&OutcomeError) -> Option<T>,
    {
        match self {
            Self::Err(error) => match contain(|| recovery(&error)) {
                Ok(Some(value)) => Self::Ok(value),
                Ok(None) => Self::None,
                Err(panic_message) => {
                    let combined = Origin::chained(
                        format!("recovery call failed: {panic_message}"),
                        error.origin_arc(),
                    );
                    Self::Err(error.with_origin(combined))
                }
            },
            other => other,
        }
    }

    /// Recovers from an `Err` by producing a full replacement outcome.
    ///
    /// Allows recovering into `Ok`, re-failing into a different `Err`, or
    /// emptying into `None`. The panic policy matches
    /// [`recover`](Self::recover): the original error is re-wrapped with a
    /// combined origin rather than replaced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::prelude::*;
    ///
    /// let outcome: Outcome<i32> = Outcome::err(OutcomeError::not_found("GONE", "missing"));
    /// let refailed = outcome.recover_with(|error| {
    ///     Outcome::err(OutcomeError::invalid_request("STALE_REF", "reference is stale")
    ///         .caused_by(error))
    /// });
    /// assert_eq!(refailed.err_ref().unwrap().code(), "STALE_REF");
    /// ```
    pub fn recover_with<F>(self, mapper: F) -> Self
    where
        F: FnOnce(&OutcomeError) -> Self,
    {
        match self {
            Self::Err(error) => match contain(|| mapper(&error)) {
                Ok(next) => next,
                Err(panic_message) => {
                    let combined = Origin::chained(
                        format!("recovery mapper call failed: {panic_message}"),
                        error.origin_arc(),
                    );
                    Self::Err(error.with_origin(combined))
                }
            },
            other => other,
        }
    }
}

// =============================================================================
// Flattening
// =============================================================================

impl<T> Outcome<Outcome<T>> {
    /// Collapses one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::prelude::*;
    ///
    /// assert_eq!(Outcome::ok(Outcome::ok(5)).flatten(), Outcome::ok(5));
    ///
    /// let error = OutcomeError::unknown("INNER", "inner failure");
    /// assert_eq!(
    ///     Outcome::ok(Outcome::<i32>::err(error.clone())).flatten(),
    ///     Outcome::err(error),
    /// );
    /// assert!(Outcome::ok(Outcome::<i32>::none()).flatten().is_none());
    /// ```
    pub fn flatten(self) -> Outcome<T> {
        match self {
            Self::Ok(inner) => inner,
            Self::Err(error) => Outcome::Err(error),
            Self::None => Outcome::None,
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<T> From<Option<T>> for Outcome<T> {
    /// Converts an `Option` into an outcome: `Some` becomes `Ok`, `None`
    /// becomes the `None` outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// assert_eq!(Outcome::from(Some(3)), Outcome::ok(3));
    /// assert!(Outcome::<i32>::from(None).is_none());
    /// ```
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Ok(value),
            None => Self::None,
        }
    }
}

impl<T> From<Result<T, OutcomeError>> for Outcome<T> {
    /// Converts a `Result` into an outcome, variant for variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::prelude::*;
    ///
    /// let result: Result<i32, OutcomeError> = Ok(3);
    /// assert_eq!(Outcome::from(result), Outcome::ok(3));
    /// ```
    #[inline]
    fn from(result: Result<T, OutcomeError>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

// =============================================================================
// Iteration
// =============================================================================

/// Iterator over the `Ok` value of an [`Outcome`], yielding zero or one
/// items.
///
/// Created by [`Outcome::into_iter`].
#[derive(Clone, Debug)]
pub struct IntoIter<T> {
    value: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.value.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = usize::from(self.value.is_some());
        (count, Some(count))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> std::iter::FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Outcome<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Iterates over the `Ok` value; `Err` and `None` yield nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let values: Vec<i32> = Outcome::ok(3).into_iter().collect();
    /// assert_eq!(values, vec![3]);
    ///
    /// let empty: Vec<i32> = Outcome::<i32>::none().into_iter().collect();
    /// assert!(empty.is_empty());
    /// ```
    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            value: self.into_option(),
        }
    }
}

// Outcome is a plain immutable value; sharing it across threads needs no
// synchronization.
static_assertions::assert_impl_all!(Outcome<String>: Send, Sync, Clone);
