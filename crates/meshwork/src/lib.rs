//! Meshwork: N-dimensional meshes with row-major crawlers and elementwise
//! arithmetic.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Meshwork sub-crates. For most users, adding `meshwork` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use meshwork::prelude::*;
//!
//! // Parse a 2x2 literal; the narrowest fitting element type is inferred.
//! let parsed = AnyMesh::parse("{{1, 2}, {3, 4}}").unwrap();
//! assert_eq!(parsed.element_kind(), ElementKind::I8);
//!
//! let mut a = parsed.to_f64_mesh().unwrap();
//! a.scale(2.0);
//! let b = a.copy();
//! a.add(&b).unwrap();
//! assert_eq!(a.to_string(), "{{4, 8}, {12, 16}}");
//!
//! // Walk every cell in row-major order with its position.
//! let mut crawler = a.crawler();
//! let mut position = [0usize; 2];
//! while crawler.has_next() {
//!     crawler.advance().unwrap();
//!     crawler.position(&mut position).unwrap();
//!     assert_eq!(crawler.current(), a.element_at(&position));
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `meshwork-core` | Element kinds, element algebra traits, errors |
//! | [`mesh`] | `meshwork-mesh` | Meshes, views, crawlers, arithmetic, text |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Element kinds, element algebra, and errors (`meshwork-core`).
///
/// Contains [`types::ElementKind`], the [`types::Numeric`] and
/// [`types::Linear`] element traits, [`types::Vector2D`], and
/// [`types::MeshError`].
pub use meshwork_core as types;

/// Meshes, views, crawlers, and arithmetic (`meshwork-mesh`).
///
/// [`mesh::Mesh`] owns its cells; [`mesh::MeshView`] and
/// [`mesh::MeshViewMut`] borrow sub-arrays of it. [`mesh::AnyMesh`] holds
/// a mesh whose element type is only known at runtime.
pub use meshwork_mesh as mesh;

/// Common imports for typical Meshwork usage.
///
/// ```rust
/// use meshwork::prelude::*;
/// ```
///
/// Brings in the mesh types, the data and crawler traits, every
/// arithmetic mixin, and the element vocabulary.
pub mod prelude {
    // Element vocabulary
    pub use meshwork_core::{
        Additive, Complex64, ElementKind, Index, Integral, Linear, Numeric, Scalable, Shape,
        Vector2D,
    };

    // Errors
    pub use meshwork_core::{MeshError, ParseError};

    // Meshes and views
    pub use meshwork_mesh::{AnyMesh, Mesh, MeshView, MeshViewMut, Nested, TextFormat};

    // Data access and traversal
    pub use meshwork_mesh::{Crawl, Crawler, CrawlerMut, MeshData, MeshDataMut};

    // Arithmetic
    pub use meshwork_mesh::{AdditiveMesh, BooleanMesh, IntegralMesh, LinearMesh, NumberMesh};
}
