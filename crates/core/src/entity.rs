//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Record views of externally persisted master data (parties, products,
/// journals, ...) implement this so generic code can address them by id.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
