//! Checked-access policies for vector reads and writes.
//!
//! Every indexed access to a [`RealVector`](crate::RealVector) goes through an
//! [`AccessPolicy`]. Two policies are provided:
//!
//! - [`Strict`] panics on the first violation. It is the default whenever
//!   `debug_assertions` are enabled, so boundary arithmetic mistakes surface
//!   immediately during development.
//! - [`Lenient`] reports the violation through `tracing` and lets the caller
//!   continue: reads yield zero and writes are dropped. It is the default in
//!   release builds, where degenerate or hostile input must never take the
//!   process down.
//!
//! [`DefaultPolicy`] resolves to one of the two at compile time. Code that needs
//! a specific behaviour regardless of the build profile can name the policy
//! explicitly, e.g. `vector.get_with::<Lenient>(i)`.

use std::fmt;

use thiserror::Error;

/// A precondition violated by an indexed vector access.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessViolation {
    /// The index was not below the vector length.
    #[error("index {index} out of bounds for vector of length {length}")]
    OutOfBounds {
        /// Requested index.
        index: usize,
        /// Length of the accessed vector.
        length: usize,
    },
    /// The access went through an absent vector reference.
    #[error("access through an absent vector reference (index {index})")]
    NullReference {
        /// Requested index.
        index: usize,
    },
}

/// Decides what happens when an indexed access violates its precondition.
///
/// Implementations must either diverge (panic) or return normally; returning
/// means the accessor substitutes its sentinel (zero for reads, no-op for writes).
pub trait AccessPolicy {
    /// Human readable policy name, used in diagnostics.
    const NAME: &'static str;

    /// Handles a violation detected by a checked accessor.
    fn on_violation(violation: AccessViolation);
}

/// Fatal policy: any violation panics.
///
/// The panic unwinds by default, ending only the calling thread. Build with
/// `panic = "abort"` in the Cargo profile to terminate the process instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Strict;

/// Degraded-but-safe policy: violations are logged and a sentinel is used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lenient;

impl AccessPolicy for Strict {
    const NAME: &'static str = "strict";

    #[track_caller]
    fn on_violation(violation: AccessViolation) {
        tracing::error!(policy = Self::NAME, %violation, "vector access violation");
        panic!("vector access violation: {violation}");
    }
}

impl AccessPolicy for Lenient {
    const NAME: &'static str = "lenient";

    fn on_violation(violation: AccessViolation) {
        tracing::warn!(policy = Self::NAME, %violation, "vector access violation, using sentinel");
    }
}

/// The policy used by the unqualified accessors (`get`, `set`, ...).
#[cfg(debug_assertions)]
pub type DefaultPolicy = Strict;

/// The policy used by the unqualified accessors (`get`, `set`, ...).
#[cfg(not(debug_assertions))]
pub type DefaultPolicy = Lenient;

/// Validates `index` against `length`, reporting a violation through `P`.
///
/// Returns `true` when the access may proceed.
#[inline]
#[track_caller]
pub(crate) fn check_bounds<P: AccessPolicy>(index: usize, length: usize) -> bool {
    if index < length {
        true
    } else {
        P::on_violation(AccessViolation::OutOfBounds { index, length });
        false
    }
}

/// Reports an access through an absent reference.
#[inline]
#[track_caller]
pub(crate) fn report_null<P: AccessPolicy>(index: usize) {
    P::on_violation(AccessViolation::NullReference { index });
}

impl fmt::Display for Strict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::NAME)
    }
}

impl fmt::Display for Lenient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::NAME)
    }
}
