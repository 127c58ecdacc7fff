//! Domain error types.
//!
//! The core assumes validated input, so the only fatal condition is a trip
//! that violates the input contract outright. Missing command lookups and
//! missing stops are resolved by design (wildcard fallback, empty cell) and
//! are never errors.

/// Errors raised while deriving values from domain records.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A trip with no stops has no start time and cannot be laid out.
    #[error("trip {trip:?} has no stops")]
    EmptyTrip {
        /// Name of the offending trip.
        trip: String,
    },
}
