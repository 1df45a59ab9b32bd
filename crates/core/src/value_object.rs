//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity and are compared by their attribute values.
/// They are immutable: "changing" one means building a new value. Policy
/// objects handed to services at construction (such as the approval quorum)
/// are value objects.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
