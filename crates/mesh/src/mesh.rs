use std::ops::Index;

use log::debug;

use crate::duplicates::{remove_duplicate_polygons, RemoveDuplicates};
use crate::empty_areas::retain_nonempty;
use crate::error::MeshResult;
use crate::geometry::{Triangle, Vector3};
use crate::normals::DerivedFields;
use crate::TriangleMesh;

/// Cleanup applied while a [`Mesh`] is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshOptions {
    /// Duplicate facet policy. Default: [`RemoveDuplicates::None`]
    pub remove_duplicate_polygons: RemoveDuplicates,
    /// Drop facets with exactly zero area. Default: true
    pub remove_empty_areas: bool,
}

impl Default for MeshOptions {
    fn default() -> Self {
        Self {
            remove_duplicate_polygons: RemoveDuplicates::None,
            remove_empty_areas: true,
        }
    }
}

impl MeshOptions {
    /// Accepts a policy or one of its legacy forms (`bool`, `Option`).
    #[must_use]
    pub fn with_remove_duplicate_polygons(mut self, policy: impl Into<RemoveDuplicates>) -> Self {
        self.remove_duplicate_polygons = policy.into();
        self
    }

    /// Like [`MeshOptions::with_remove_duplicate_polygons`] for values that
    /// may not name a policy, such as `"single"` or `2`.
    pub fn try_with_remove_duplicate_polygons<P>(mut self, policy: P) -> MeshResult<Self>
    where
        P: TryInto<RemoveDuplicates, Error = crate::MeshError>,
    {
        self.remove_duplicate_polygons = policy.try_into()?;
        Ok(self)
    }

    #[must_use]
    pub fn with_remove_empty_areas(mut self, remove: bool) -> Self {
        self.remove_empty_areas = remove;
        self
    }
}

/// How many facets construction dropped, and why.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReductionReport {
    pub input: usize,
    pub duplicates_removed: usize,
    pub empty_removed: usize,
}

impl ReductionReport {
    pub fn retained(&self) -> usize {
        self.input
            .saturating_sub(self.duplicates_removed)
            .saturating_sub(self.empty_removed)
    }
}

/// A flat buffer of facets together with their areas and unit normals.
///
/// The buffer is built once and keeps its shape afterwards. The record
/// normals, `areas()` and `units()` always describe the current buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    name: Option<String>,
    data: Vec<Triangle>,
    derived: DerivedFields,
    options: MeshOptions,
    report: ReductionReport,
}

impl Mesh {
    /// Builds a mesh from raw facets.
    ///
    /// Input normals are ignored. The steps run in a fixed order: duplicate
    /// removal, geometry, empty area removal, and geometry again so the
    /// caches match the final buffer.
    pub fn new<I, T>(triangles: I, options: MeshOptions) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Triangle>,
    {
        let data: Vec<Triangle> = triangles.into_iter().map(Into::into).collect();
        let input = data.len();

        let mut data = match options.remove_duplicate_polygons {
            RemoveDuplicates::None => data,
            policy => remove_duplicate_polygons(&data, policy),
        };
        let duplicates_removed = input - data.len();

        let mut derived = DerivedFields::new();
        derived.recompute(&mut data);

        let before_empty = data.len();
        if options.remove_empty_areas {
            retain_nonempty(&mut data, derived.areas());
        }
        let empty_removed = before_empty - data.len();

        derived.recompute(&mut data);

        let report = ReductionReport {
            input,
            duplicates_removed,
            empty_removed,
        };
        debug!("built mesh: {:?}", report);

        Self {
            name: None,
            data,
            derived,
            options,
            report,
        }
    }

    /// Sets the solid name carried alongside the facets.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn options(&self) -> MeshOptions {
        self.options
    }

    pub fn report(&self) -> ReductionReport {
        self.report
    }

    /// Recomputes record normals, areas and unit normals from the vertices.
    ///
    /// Idempotent: the vertices are never touched, so repeated calls produce
    /// bit-identical results.
    pub fn update_units(&mut self) {
        self.derived.recompute(&mut self.data);
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Triangle> {
        self.data.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Triangle> {
        self.data.iter()
    }

    /// The raw record buffer, as handed to a file writer.
    pub fn as_slice(&self) -> &[Triangle] {
        &self.data
    }

    pub fn into_inner(self) -> Vec<Triangle> {
        let Mesh { data, .. } = self;
        data
    }

    /// One area per facet.
    pub fn areas(&self) -> &[f32] {
        self.derived.areas()
    }

    /// One unit normal per facet; zero for degenerate facets.
    pub fn units(&self) -> &[Vector3] {
        self.derived.units()
    }

    /// Area-scaled normals as stored in the records.
    pub fn normals(&self) -> impl ExactSizeIterator<Item = Vector3> + '_ {
        self.data.iter().map(|t| t.normal)
    }

    pub fn vertices(&self) -> impl ExactSizeIterator<Item = [Vector3; 3]> + '_ {
        self.data.iter().map(Triangle::vertices)
    }

    pub fn attributes(&self) -> impl ExactSizeIterator<Item = u16> + '_ {
        self.data.iter().map(|t| t.attribute)
    }

    /// The nine coordinates of each facet, vertex after vertex.
    pub fn points(&self) -> impl ExactSizeIterator<Item = [f32; 9]> + '_ {
        self.data.iter().map(|t| {
            [
                t.p0.x, t.p0.y, t.p0.z, t.p1.x, t.p1.y, t.p1.z, t.p2.x, t.p2.y, t.p2.z,
            ]
        })
    }

    pub fn v0(&self) -> impl ExactSizeIterator<Item = Vector3> + '_ {
        self.data.iter().map(|t| t.p0)
    }

    pub fn v1(&self) -> impl ExactSizeIterator<Item = Vector3> + '_ {
        self.data.iter().map(|t| t.p1)
    }

    pub fn v2(&self) -> impl ExactSizeIterator<Item = Vector3> + '_ {
        self.data.iter().map(|t| t.p2)
    }

    /// Component-wise minimum over all vertices, `None` when empty.
    pub fn min(&self) -> Option<Vector3> {
        self.fold_vertices(f32::min)
    }

    /// Component-wise maximum over all vertices, `None` when empty.
    pub fn max(&self) -> Option<Vector3> {
        self.fold_vertices(f32::max)
    }

    fn fold_vertices(&self, f: fn(f32, f32) -> f32) -> Option<Vector3> {
        self.data
            .iter()
            .flat_map(Triangle::vertices)
            .reduce(|a, b| Vector3::new(f(a.x, b.x), f(a.y, b.y), f(a.z, b.z)))
    }
}

impl TriangleMesh for Mesh {
    fn from_triangles(triangles: Vec<Triangle>) -> Self {
        Mesh::new(triangles, MeshOptions::default())
    }

    fn triangle_count(&self) -> usize {
        self.len()
    }

    fn as_triangle_slice(&self) -> Option<&[Triangle]> {
        Some(self.as_slice())
    }
}

impl Index<usize> for Mesh {
    type Output = Triangle;

    fn index(&self, index: usize) -> &Triangle {
        &self.data[index]
    }
}

impl<'a> IntoIterator for &'a Mesh {
    type Item = &'a Triangle;
    type IntoIter = std::slice::Iter<'a, Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
