//! # outcome
//!
//! A three-state result type for representing the outcome of an operation
//! without using panics for control flow.
//!
//! ## Overview
//!
//! An [`Outcome<T>`] is always exactly one of three things:
//!
//! - [`Outcome::Ok`]: the operation produced a value
//! - [`Outcome::Err`]: the operation failed with a typed [`OutcomeError`]
//! - [`Outcome::None`]: the operation completed without a value
//!
//! Around this container the crate provides a closed combinator algebra:
//! transformation (`map`, `flat_map`, `filter`, `zip`, `replace`),
//! aggregation (`sequence`, `traverse`, `flatten`), recovery (`recover`,
//! `recover_with`, `map_err`, `or_else_err`), and side-effecting hooks
//! (`if_ok`, `if_err`, `if_none`, `tap`, `tap_with`).
//!
//! Failures carry an [`OutcomeError`] from a closed taxonomy of six
//! [`ErrorKind`]s, each with a machine-readable code, a human-readable
//! message, and an optional [`Origin`] chain linking back to the root cause.
//!
//! Panics raised by caller-supplied closures never escape a combinator:
//! they are contained and surfaced as an [`ErrorKind::Unknown`] error
//! carrying the panic as its origin. The single deliberate exit back into
//! panic-based control flow is [`Outcome::unwrap`].
//!
//! ## Example
//!
//! ```rust
//! use outcome::prelude::*;
//!
//! fn parse_age(raw: &str) -> Outcome<u8> {
//!     Outcome::from_fn(|| raw.trim().parse::<u8>().ok())
//!         .or_else_err(OutcomeError::invalid_request("AGE_INVALID", "age is not a number"))
//!         .filter(
//!             |age| *age >= 18,
//!             OutcomeError::validation_failed("AGE_TOO_LOW", "must be an adult"),
//!         )
//! }
//!
//! assert_eq!(parse_age("42").unwrap(), 42);
//! assert!(parse_age("seven").is_err());
//! assert!(parse_age("9").is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod error;
pub mod outcome;

pub use crate::error::{
    ErrorKind, Origin, OriginChain, OutcomeError, UNEXPECTED_ERROR, UNEXPECTED_ERROR_MESSAGE,
};
pub use crate::outcome::Outcome;

/// Prelude module for convenient imports.
///
/// Re-exports the public surface of the crate.
///
/// # Usage
///
/// ```rust
/// use outcome::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{ErrorKind, Origin, OutcomeError};
    pub use crate::outcome::Outcome;
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn prelude_exposes_the_core_surface() {
        let outcome = Outcome::ok(1).map_err(|_| unreachable!());
        assert_eq!(outcome, Outcome::ok(1));
        assert_eq!(ErrorKind::Unknown.to_string(), "Unknown");
        assert_eq!(Origin::new("root").description(), "root");
    }
}
