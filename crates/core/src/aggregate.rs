//! Aggregate root trait for the fleet domain model.

/// Aggregate root marker + minimal interface.
///
/// An aggregate exclusively owns its sub-entities; callers reach them only
/// through the aggregate's operations.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;

    /// Monotonically increasing version of the aggregate's state.
    ///
    /// Starts at 0 on construction and grows by one per successful mutation.
    /// Failed operations leave it untouched.
    fn version(&self) -> u64;
}
