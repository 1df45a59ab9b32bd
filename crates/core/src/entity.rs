//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// The identity is optional: an entity without one has not been persisted yet,
/// and handing it to a data service means "create". An entity that carries an
/// identity refers to an existing stored record, so handing it to a data
/// service means "replace".
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy
        + Eq
        + core::hash::Hash
        + core::fmt::Debug
        + core::fmt::Display
        + Send
        + Sync;

    /// Human-readable entity type name, used in error messages.
    const NAME: &'static str;

    /// Returns the entity identifier, if assigned.
    fn id(&self) -> Option<Self::Id>;

    /// Whether the entity has been assigned an identity by the persistence layer.
    fn is_persisted(&self) -> bool {
        self.id().is_some()
    }
}
