//! Test utilities for Meshwork development.
//!
//! - [`fixtures`]: deterministic meshes (ramps, seeded random fills) and
//!   kernels for patch tests.
//! - [`compliance`]: crawler protocol checks reusable against any shape.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod compliance;
pub mod fixtures;

pub use compliance::run_full_compliance;
pub use fixtures::{gaussian_kernel, ramp_mesh, random_f64_mesh, random_i32_mesh};
