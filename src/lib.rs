//! # arbor-mesh
//!
//! An engine-agnostic L-System interpretation layer that grows 3D polygon
//! meshes from textual grammar descriptors.
//!
//! A descriptor is parsed into an axiom and rewriting rules, the axiom is
//! expanded through repeated substitution, and a stack-based turtle
//! interpreter walks the expanded string, emitting branch segments and
//! leaves into a [`Mesh`] with derived face planes, vertex normals and
//! discrete curvature. The mesh can then be handed to renderers or format
//! writers read-only, or populated from outside through the same
//! vertex/face creation interface.

pub mod error;
pub mod generator;
pub mod grammar;
pub mod interpreter;
pub mod mesh;
pub mod turtle;

pub use error::*;
pub use generator::*;
pub use grammar::*;
pub use interpreter::*;
pub use mesh::*;
pub use turtle::*;
