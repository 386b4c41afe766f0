//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Passengers and tanks are entities: two of them with the same field values
/// are still distinct unless their identifiers match.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
