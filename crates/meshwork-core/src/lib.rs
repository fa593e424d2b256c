//! Core types and traits for the Meshwork N-dimensional mesh engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by every other Meshwork crate: index and shape
//! aliases, the [`ElementKind`] dispatch table, the per-element algebra
//! traits the arithmetic layer is written against, and the error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod index;
pub mod kind;
pub mod linear;
pub mod numeric;
pub mod vector;

pub use error::{MeshError, ParseError};
pub use index::{cell_count, row_major_strides, Index, Shape};
pub use kind::ElementKind;
pub use linear::{Additive, Linear, Scalable};
pub use numeric::{Integral, Numeric};
pub use vector::Vector2D;

/// Complex element type used by parsed meshes and linear arithmetic.
pub use num_complex::Complex64;
