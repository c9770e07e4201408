//! The introspection capability mappable types implement.

use crate::field::Field;

/// A value that can describe itself as a sequence of named fields.
///
/// This replaces runtime reflection with an explicit contract: each
/// mappable type returns its fields in declaration order, pairing a
/// static [`FieldSpec`](crate::FieldSpec) with the instance's current
/// value. Implementations must be read-only.
///
/// The trait is object-safe, and references implement it too, so a
/// `Vec<&dyn Record>` of mixed shapes maps without error.
pub trait Record {
    /// The instance's fields, in declaration order
    fn fields(&self) -> Vec<Field>;
}

impl<T: Record + ?Sized> Record for &T {
    fn fields(&self) -> Vec<Field> {
        (**self).fields()
    }
}
