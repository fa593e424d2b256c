//! [`AnyMesh`]: a mesh whose element type is known only at runtime.
//!
//! Parsing text or wrapping a type-erased nested array yields an
//! `AnyMesh`. The element kind is resolved once, at construction, against
//! the [`ElementKind`] dispatch table; after that every access goes to a
//! concretely typed [`Mesh`].

use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::str::FromStr;

use meshwork_core::{Complex64, ElementKind, MeshError, Numeric, Shape};
use tracing::debug;

use crate::data::MeshData;
use crate::format::{write_text, write_text_with, TextFormat};
use crate::mesh::Mesh;
use crate::nested::Nested;
use crate::parse::{parse_literal, Literal};

/// A mesh over one of the supported element types.
#[derive(Clone, Debug, PartialEq)]
pub enum AnyMesh {
    /// `f64` elements.
    F64(Mesh<f64>),
    /// `f32` elements.
    F32(Mesh<f32>),
    /// `i64` elements.
    I64(Mesh<i64>),
    /// `i32` elements.
    I32(Mesh<i32>),
    /// `i16` elements.
    I16(Mesh<i16>),
    /// `i8` elements.
    I8(Mesh<i8>),
    /// `char` elements.
    Char(Mesh<char>),
    /// `bool` elements.
    Bool(Mesh<bool>),
    /// Complex elements.
    Complex(Mesh<Complex64>),
    /// Free-form text elements.
    Text(Mesh<String>),
}

/// Run `$body` with `$mesh` bound to the inner mesh, whatever its type.
macro_rules! each_variant {
    ($value:expr, $mesh:ident => $body:expr) => {
        match $value {
            AnyMesh::F64($mesh) => $body,
            AnyMesh::F32($mesh) => $body,
            AnyMesh::I64($mesh) => $body,
            AnyMesh::I32($mesh) => $body,
            AnyMesh::I16($mesh) => $body,
            AnyMesh::I8($mesh) => $body,
            AnyMesh::Char($mesh) => $body,
            AnyMesh::Bool($mesh) => $body,
            AnyMesh::Complex($mesh) => $body,
            AnyMesh::Text($mesh) => $body,
        }
    };
}

fn parse_all<T: FromStr>(literal: &Literal) -> Option<Mesh<T>> {
    Mesh::from_literal(literal).ok()
}

/// Whether every leaf is an `f64` that survives a round trip through `f32`.
fn fits_f32(literal: &Literal) -> bool {
    literal.leaves().iter().all(|token| {
        token
            .parse::<f64>()
            .is_ok_and(|v| v.is_nan() || f64::from(v as f32) == v)
    })
}

fn unbox<T: 'static>(boxed: Box<dyn Any>) -> Result<Nested<T>, MeshError> {
    boxed
        .downcast::<Nested<T>>()
        .map(|nested| *nested)
        .map_err(|_| MeshError::UnsupportedElementType {
            type_name: type_name::<T>(),
        })
}

impl AnyMesh {
    /// Parse brace-literal text, choosing the narrowest element type that
    /// every leaf parses as.
    ///
    /// Candidates are tried in the order `bool`, `i8`, `i16`, `i32`,
    /// `i64`, `f32`, `f64`, complex, text. `f32` is chosen only when every
    /// value is exactly representable in it. A literal with no leaves is
    /// a `bool` mesh.
    pub fn parse(text: &str) -> Result<Self, MeshError> {
        Self::parse_with(text, &TextFormat::default())
    }

    /// [`parse`](Self::parse) with custom delimiters.
    pub fn parse_with(text: &str, format: &TextFormat) -> Result<Self, MeshError> {
        let literal = parse_literal(text, format)?;
        let mesh = Self::from_literal(&literal)?;
        debug!(kind = mesh.type_name(), shape = ?mesh.shape(), "parsed mesh literal");
        Ok(mesh)
    }

    fn from_literal(literal: &Literal) -> Result<Self, MeshError> {
        if let Some(mesh) = parse_all(literal) {
            return Ok(Self::Bool(mesh));
        }
        if let Some(mesh) = parse_all(literal) {
            return Ok(Self::I8(mesh));
        }
        if let Some(mesh) = parse_all(literal) {
            return Ok(Self::I16(mesh));
        }
        if let Some(mesh) = parse_all(literal) {
            return Ok(Self::I32(mesh));
        }
        if let Some(mesh) = parse_all(literal) {
            return Ok(Self::I64(mesh));
        }
        if fits_f32(literal) {
            if let Some(mesh) = parse_all(literal) {
                return Ok(Self::F32(mesh));
            }
        }
        if let Some(mesh) = parse_all(literal) {
            return Ok(Self::F64(mesh));
        }
        if let Some(mesh) = parse_all(literal) {
            return Ok(Self::Complex(mesh));
        }
        Mesh::from_literal(literal).map(Self::Text)
    }

    /// Wrap a nested array whose element type is resolved at runtime.
    ///
    /// Returns `Err(MeshError::UnsupportedElementType)` for element types
    /// with no variant, and `Err(MeshError::InvalidShape)` for ragged
    /// input.
    pub fn wrap_any<T: 'static>(nested: Nested<T>) -> Result<Self, MeshError> {
        let boxed: Box<dyn Any> = Box::new(nested);
        let mesh = match ElementKind::of::<T>() {
            ElementKind::F64 => Self::F64(Mesh::wrap(unbox(boxed)?)?),
            ElementKind::F32 => Self::F32(Mesh::wrap(unbox(boxed)?)?),
            ElementKind::I64 => Self::I64(Mesh::wrap(unbox(boxed)?)?),
            ElementKind::I32 => Self::I32(Mesh::wrap(unbox(boxed)?)?),
            ElementKind::I16 => Self::I16(Mesh::wrap(unbox(boxed)?)?),
            ElementKind::I8 => Self::I8(Mesh::wrap(unbox(boxed)?)?),
            ElementKind::Char => Self::Char(Mesh::wrap(unbox(boxed)?)?),
            ElementKind::Bool => Self::Bool(Mesh::wrap(unbox(boxed)?)?),
            ElementKind::Object if TypeId::of::<T>() == TypeId::of::<Complex64>() => {
                Self::Complex(Mesh::wrap(unbox(boxed)?)?)
            }
            ElementKind::Object if TypeId::of::<T>() == TypeId::of::<String>() => {
                Self::Text(Mesh::wrap(unbox(boxed)?)?)
            }
            ElementKind::Object => {
                return Err(MeshError::UnsupportedElementType {
                    type_name: type_name::<T>(),
                })
            }
        };
        Ok(mesh)
    }

    /// Zero- or default-initialised mesh of a scalar kind.
    ///
    /// Returns `Err(MeshError::Allocation)` for [`ElementKind::Object`],
    /// which cannot be instantiated as storage, plus the errors of
    /// [`Mesh::create`].
    pub fn create(kind: ElementKind, shape: &[usize]) -> Result<Self, MeshError> {
        Ok(match kind {
            ElementKind::F64 => Self::F64(Mesh::create(shape)?),
            ElementKind::F32 => Self::F32(Mesh::create(shape)?),
            ElementKind::I64 => Self::I64(Mesh::create(shape)?),
            ElementKind::I32 => Self::I32(Mesh::create(shape)?),
            ElementKind::I16 => Self::I16(Mesh::create(shape)?),
            ElementKind::I8 => Self::I8(Mesh::create(shape)?),
            ElementKind::Char => Self::Char(Mesh::create(shape)?),
            ElementKind::Bool => Self::Bool(Mesh::create(shape)?),
            ElementKind::Object => {
                return Err(MeshError::Allocation {
                    reason: format!("{} elements cannot be instantiated", ElementKind::Object.name()),
                })
            }
        })
    }

    /// Storage kind; complex and text meshes report
    /// [`ElementKind::Object`].
    pub fn element_kind(&self) -> ElementKind {
        each_variant!(self, m => m.element_kind())
    }

    /// Short name of the element type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::F64(_) => "f64",
            Self::F32(_) => "f32",
            Self::I64(_) => "i64",
            Self::I32(_) => "i32",
            Self::I16(_) => "i16",
            Self::I8(_) => "i8",
            Self::Char(_) => "char",
            Self::Bool(_) => "bool",
            Self::Complex(_) => "complex",
            Self::Text(_) => "text",
        }
    }

    /// Per-dimension extents.
    pub fn shape(&self) -> &[usize] {
        each_variant!(self, m => m.shape())
    }

    /// Owned copy of the shape.
    pub fn shape_vec(&self) -> Shape {
        Shape::from_slice(self.shape())
    }

    /// Number of dimensions.
    pub fn rank(&self) -> usize {
        self.shape().len()
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        each_variant!(self, m => m.len())
    }

    /// Whether the mesh has no cells.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the two meshes have the same shape, whatever their types.
    pub fn conforms_to(&self, other: &Self) -> bool {
        self.shape() == other.shape()
    }

    /// The inner mesh, if its element type is `T`.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&Mesh<T>> {
        each_variant!(self, m => (m as &dyn Any).downcast_ref::<Mesh<T>>())
    }

    /// The inner mesh, mutably, if its element type is `T`.
    pub fn downcast_mut<T: 'static>(&mut self) -> Option<&mut Mesh<T>> {
        each_variant!(self, m => (m as &mut dyn Any).downcast_mut::<Mesh<T>>())
    }

    /// Unwrap into the inner mesh, if its element type is `T`.
    pub fn into_mesh<T: 'static>(self) -> Option<Mesh<T>> {
        let boxed: Box<dyn Any> = each_variant!(self, m => Box::new(m));
        boxed.downcast::<Mesh<T>>().ok().map(|mesh| *mesh)
    }

    /// Promote a numeric mesh to `f64` elements; `None` for other kinds.
    pub fn to_f64_mesh(&self) -> Option<Mesh<f64>> {
        fn promote<T: Numeric>(mesh: &Mesh<T>) -> Mesh<f64> {
            mesh.map(|v| v.to_f64())
        }
        match self {
            Self::F64(m) => Some(m.clone()),
            Self::F32(m) => Some(promote(m)),
            Self::I64(m) => Some(promote(m)),
            Self::I32(m) => Some(promote(m)),
            Self::I16(m) => Some(promote(m)),
            Self::I8(m) => Some(promote(m)),
            Self::Char(_) | Self::Bool(_) | Self::Complex(_) | Self::Text(_) => None,
        }
    }

    /// Write as brace-literal text. Text leaves are quoted so delimiters
    /// inside them survive.
    ///
    /// [`parse_with`](Self::parse_with) reads the output back with the same
    /// shape and leaf tokens, but the element type is re-inferred: quoted
    /// leaves still go through the type ladder, so `{"true"}` comes back as
    /// `bool` and an `f64` mesh of whole numbers comes back as an integer
    /// mesh. Use [`Mesh::parse_with`] to keep a known element type.
    pub fn write_text<W: fmt::Write + ?Sized>(&self, out: &mut W, format: &TextFormat) -> fmt::Result {
        match self {
            Self::Text(m) => write_text_with(out, m.shape(), m.cells(), format, &mut |out, cell| {
                out.write_char(format.quote)?;
                out.write_str(cell)?;
                out.write_char(format.quote)
            }),
            Self::F64(m) => write_text(out, m.shape(), m.cells(), format),
            Self::F32(m) => write_text(out, m.shape(), m.cells(), format),
            Self::I64(m) => write_text(out, m.shape(), m.cells(), format),
            Self::I32(m) => write_text(out, m.shape(), m.cells(), format),
            Self::I16(m) => write_text(out, m.shape(), m.cells(), format),
            Self::I8(m) => write_text(out, m.shape(), m.cells(), format),
            Self::Char(m) => write_text(out, m.shape(), m.cells(), format),
            Self::Bool(m) => write_text(out, m.shape(), m.cells(), format),
            Self::Complex(m) => write_text(out, m.shape(), m.cells(), format),
        }
    }
}

impl fmt::Display for AnyMesh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_text(f, &TextFormat::default())
    }
}

impl FromStr for AnyMesh {
    type Err = MeshError;

    fn from_str(text: &str) -> Result<Self, MeshError> {
        Self::parse(text)
    }
}

macro_rules! impl_from_mesh {
    ($($t:ty => $variant:ident),* $(,)?) => {$(
        impl From<Mesh<$t>> for AnyMesh {
            fn from(mesh: Mesh<$t>) -> Self {
                Self::$variant(mesh)
            }
        }
    )*};
}

impl_from_mesh!(
    f64 => F64,
    f32 => F32,
    i64 => I64,
    i32 => I32,
    i16 => I16,
    i8 => I8,
    char => Char,
    bool => Bool,
    Complex64 => Complex,
    String => Text,
);
