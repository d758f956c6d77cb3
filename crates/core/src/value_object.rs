//! Value object trait: equality by value, not identity.

/// Marker trait for immutable domain values compared by their attributes
/// rather than by identity (currency codes, addresses, ...).
///
/// To "modify" a value object, build a new one; the originals never change.
/// The bounds keep value objects cheap to copy, comparable, and debuggable.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
