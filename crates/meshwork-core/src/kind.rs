//! The [`ElementKind`] storage dispatch table.

use std::any::{type_name, TypeId};
use std::fmt;

use crate::error::MeshError;

/// Storage representation of a mesh's elements.
///
/// The eight scalar kinds are listed in dispatch order: floating types
/// first, then integers from widest to narrowest, then `char` and `bool`.
/// Every other element type (complex numbers, vectors, strings, user
/// types) is an [`ElementKind::Object`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// `f64` storage.
    F64,
    /// `f32` storage.
    F32,
    /// `i64` storage.
    I64,
    /// `i32` storage.
    I32,
    /// `i16` storage.
    I16,
    /// `i8` storage.
    I8,
    /// `char` storage.
    Char,
    /// `bool` storage.
    Bool,
    /// Any non-scalar element type.
    Object,
}

impl ElementKind {
    /// Scalar kinds in the order runtime dispatch tries them.
    pub const SCALARS: [ElementKind; 8] = [
        Self::F64,
        Self::F32,
        Self::I64,
        Self::I32,
        Self::I16,
        Self::I8,
        Self::Char,
        Self::Bool,
    ];

    /// The Rust type backing a scalar kind. `None` for `Object`.
    fn type_id(self) -> Option<TypeId> {
        match self {
            Self::F64 => Some(TypeId::of::<f64>()),
            Self::F32 => Some(TypeId::of::<f32>()),
            Self::I64 => Some(TypeId::of::<i64>()),
            Self::I32 => Some(TypeId::of::<i32>()),
            Self::I16 => Some(TypeId::of::<i16>()),
            Self::I8 => Some(TypeId::of::<i8>()),
            Self::Char => Some(TypeId::of::<char>()),
            Self::Bool => Some(TypeId::of::<bool>()),
            Self::Object => None,
        }
    }

    /// Kind of `T`: the first scalar kind whose type matches, else `Object`.
    pub fn of<T: 'static>() -> Self {
        Self::scalar_of::<T>().unwrap_or(Self::Object)
    }

    /// Scalar kind of `T`.
    ///
    /// Returns `Err(MeshError::UnsupportedElementType)` if `T` is not one
    /// of the eight scalar storage types.
    pub fn scalar_of<T: 'static>() -> Result<Self, MeshError> {
        let id = TypeId::of::<T>();
        Self::SCALARS
            .iter()
            .copied()
            .find(|kind| kind.type_id() == Some(id))
            .ok_or(MeshError::UnsupportedElementType {
                type_name: type_name::<T>(),
            })
    }

    /// Whether this is `F64` or `F32`.
    pub fn is_floating(self) -> bool {
        matches!(self, Self::F64 | Self::F32)
    }

    /// Whether this is one of the four signed integer kinds.
    pub fn is_integral(self) -> bool {
        matches!(self, Self::I64 | Self::I32 | Self::I16 | Self::I8)
    }

    /// Whether arithmetic through [`Numeric`](crate::Numeric) applies.
    pub fn is_numeric(self) -> bool {
        self.is_floating() || self.is_integral()
    }

    /// Short lowercase name, e.g. `"f64"` or `"object"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::F64 => "f64",
            Self::F32 => "f32",
            Self::I64 => "i64",
            Self::I32 => "i32",
            Self::I16 => "i16",
            Self::I8 => "i8",
            Self::Char => "char",
            Self::Bool => "bool",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Complex64;

    #[test]
    fn scalars_resolve_to_their_kind() {
        assert_eq!(ElementKind::of::<f64>(), ElementKind::F64);
        assert_eq!(ElementKind::of::<f32>(), ElementKind::F32);
        assert_eq!(ElementKind::of::<i64>(), ElementKind::I64);
        assert_eq!(ElementKind::of::<i32>(), ElementKind::I32);
        assert_eq!(ElementKind::of::<i16>(), ElementKind::I16);
        assert_eq!(ElementKind::of::<i8>(), ElementKind::I8);
        assert_eq!(ElementKind::of::<char>(), ElementKind::Char);
        assert_eq!(ElementKind::of::<bool>(), ElementKind::Bool);
    }

    #[test]
    fn non_scalars_are_objects() {
        assert_eq!(ElementKind::of::<String>(), ElementKind::Object);
        assert_eq!(ElementKind::of::<Complex64>(), ElementKind::Object);
    }

    #[test]
    fn scalar_of_rejects_unsupported_types() {
        let err = ElementKind::scalar_of::<u8>().unwrap_err();
        assert_eq!(err, MeshError::UnsupportedElementType { type_name: "u8" });
    }

    #[test]
    fn dispatch_order_puts_floats_first() {
        let first_integral = ElementKind::SCALARS
            .iter()
            .position(|k| k.is_integral())
            .unwrap();
        assert!(ElementKind::SCALARS[..first_integral]
            .iter()
            .all(|k| k.is_floating()));
        assert_eq!(ElementKind::SCALARS[6..], [ElementKind::Char, ElementKind::Bool]);
    }
}
