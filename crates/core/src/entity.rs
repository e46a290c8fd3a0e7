//! Identity contract for stored records.

/// Minimal interface shared by every record the store keeps.
///
/// Collections key their lookups off this rather than a field name, so a
/// table works the same for customers, vehicles, companies and invoices.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
