//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and defined entirely by their attribute
/// values: two value objects with the same values are equal, and "modifying"
/// one means constructing a new one. Requiring `Clone + PartialEq + Debug`
/// keeps them cheap to copy, comparable by value, and debuggable in tests.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
