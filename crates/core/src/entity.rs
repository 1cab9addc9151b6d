//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Orders are entities: editing a shop name or a line item never changes
/// which order it is.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
