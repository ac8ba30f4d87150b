//! A flat buffer of STL facets and the operations that keep it consistent:
//! per-facet normals, areas and unit normals, removal of zero-area facets and
//! removal of duplicate facets.
//!
//! ```
//! use facetbuf_mesh::{Mesh, MeshOptions, RemoveDuplicates};
//!
//! let facets = [
//!     [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
//!     [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
//!     [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]],
//! ];
//! let options = MeshOptions::default().with_remove_duplicate_polygons(RemoveDuplicates::Single);
//! let mesh = Mesh::new(facets, options);
//!
//! assert_eq!(mesh.len(), 1);
//! assert_eq!(mesh.areas(), &[0.5]);
//! ```

// Library code propagates instead of panicking; tests may unwrap.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod duplicates;
mod empty_areas;
mod error;
mod geometry;
mod mesh;
mod normals;

pub use duplicates::{remove_duplicate_polygons, surviving_indices, RemoveDuplicates};
pub use empty_areas::remove_empty_areas;
pub use error::{MeshError, MeshResult};
pub use geometry::*;
pub use mesh::{Mesh, MeshOptions, ReductionReport};
pub use normals::{area_of, compute_areas, cross_normal, unit_of, update_normals, DerivedFields};

/// A reasonable default mesh to select for unopinionated consumers.
pub type DefaultMesh = Mesh;

pub trait TriangleMesh: Sized {
    /// Creates a TriangleMesh from a list of triangles.
    ///
    /// # Arguments
    ///
    /// * `triangles` - A vector of the triangles of the mesh.
    fn from_triangles(triangles: Vec<Triangle>) -> Self;

    /// Returns the number of triangles that comprises this mesh.
    fn triangle_count(&self) -> usize;

    /// Returns a slice that represents a series of triangles.
    ///
    /// As this is returning a slice, this will only return `Some` if the
    /// implementation already stores the mesh in this format.
    fn as_triangle_slice(&self) -> Option<&[Triangle]>;
}
