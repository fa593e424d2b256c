//! N-dimensional meshes and the crawler traversal engine.
//!
//! A [`Mesh`] is a rectangular array of any rank, stored row-major in one
//! contiguous buffer. Sub-arrays are borrowed as [`MeshView`] and
//! [`MeshViewMut`], so writes through a view land in the parent and the
//! borrow checker rules out conflicting aliases.
//!
//! # Traversal
//!
//! A [`Crawler`] walks every cell of a mesh, or a rectangular range of it,
//! in row-major order while tracking the full multi-dimensional position.
//! The protocol ([`Crawl`]) is the same for read-only crawlers and
//! [`CrawlerMut`].
//!
//! # Arithmetic
//!
//! Elementwise operations are mixin traits blanket-implemented over
//! [`MeshDataMut`], selected by element type:
//!
//! - [`NumberMesh`]: any [`Numeric`](meshwork_core::Numeric) scalar
//! - [`IntegralMesh`]: integer scalars
//! - [`AdditiveMesh`] and [`LinearMesh`]: vector-space elements such as
//!   [`Vector2D`](meshwork_core::Vector2D) and
//!   [`Complex64`](meshwork_core::Complex64)
//! - [`BooleanMesh`]: `bool`
//!
//! Binary operations check that every operand conforms (has the same
//! shape) before any cell changes.
//!
//! # Text
//!
//! Meshes print as nested brace literals (`{{1, 2}, {3, 4}}`).
//! [`AnyMesh::parse`] reads them back, inferring the narrowest element
//! type; [`TextFormat`] configures the delimiters.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod additive;
pub mod any;
pub mod boolean;
pub mod crawler;
pub mod cursor;
pub mod data;
pub mod format;
pub mod integral;
pub mod lockstep;
pub mod mesh;
pub mod nested;
pub mod number;
pub mod patch;
pub mod view;

mod parse;

pub use additive::{AdditiveMesh, LinearMesh};
pub use any::AnyMesh;
pub use boolean::BooleanMesh;
pub use crawler::{Crawler, CrawlerMut};
pub use cursor::{Crawl, Cursor};
pub use data::{MeshData, MeshDataMut};
pub use format::TextFormat;
pub use integral::IntegralMesh;
pub use mesh::Mesh;
pub use nested::Nested;
pub use number::NumberMesh;
pub use patch::PatchBounds;
pub use view::{MeshView, MeshViewMut};
