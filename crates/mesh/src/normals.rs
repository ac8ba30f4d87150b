//! Per-facet normal, area and unit normal computation.
//!
//! Every facet is handled on its own; nothing here looks at a neighbour, so
//! results do not depend on buffer order.

use cgmath::{InnerSpace, Zero};

use crate::geometry::{Triangle, Vector3};

// The arithmetic runs in f64: the cross product of finite f32 coordinates
// can exceed f32::MAX, its squared length far sooner.
type WideVector = cgmath::Vector3<f64>;

fn widen(v: Vector3) -> WideVector {
    v.map(f64::from)
}

fn narrow(v: WideVector) -> Vector3 {
    v.map(|c| c as f32)
}

fn wide_normal(t: &Triangle) -> WideVector {
    let p0 = widen(t.p0);
    (widen(t.p1) - p0).cross(widen(t.p2) - p0)
}

fn wide_area(normal: WideVector) -> f32 {
    (0.5 * normal.magnitude()) as f32
}

fn wide_unit(normal: WideVector) -> Vector3 {
    let len = normal.magnitude();
    if len > 0.0 {
        narrow(normal / len)
    } else {
        Vector3::zero()
    }
}

/// Area-scaled normal `(p1 - p0) x (p2 - p0)`.
///
/// Not normalized: the magnitude is twice the area of the triangle. Saturates
/// to infinity when that does not fit in an f32.
#[inline]
pub fn cross_normal(t: &Triangle) -> Vector3 {
    narrow(wide_normal(t))
}

/// Area of the triangle whose area-scaled normal is `normal`.
#[inline]
pub fn area_of(normal: Vector3) -> f32 {
    wide_area(widen(normal))
}

/// Unit-length copy of `normal`, or the zero vector when `normal` has no
/// length (collinear or coincident vertices).
///
/// Any finite `normal` gives a finite result.
#[inline]
pub fn unit_of(normal: Vector3) -> Vector3 {
    wide_unit(widen(normal))
}

/// Overwrites the record normal of every facet with its area-scaled normal.
pub fn update_normals(triangles: &mut [Triangle]) {
    for t in triangles.iter_mut() {
        t.normal = cross_normal(t);
    }
}

/// Areas of every facet, without touching the records.
pub fn compute_areas(triangles: &[Triangle]) -> Vec<f32> {
    triangles.iter().map(|t| wide_area(wide_normal(t))).collect()
}

/// Areas and unit normals kept alongside a triangle buffer.
///
/// Both vectors always hold one entry per facet of the buffer they were last
/// recomputed from.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DerivedFields {
    areas: Vec<f32>,
    units: Vec<Vector3>,
}

impl DerivedFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes normals, areas and units for every facet in `triangles`.
    ///
    /// This is a full pass, not an incremental one: the record normals and
    /// both caches are overwritten for all facets. Vertices are never
    /// modified, so calling this again on the same buffer gives bit-identical
    /// output.
    pub fn recompute(&mut self, triangles: &mut [Triangle]) {
        self.areas.clear();
        self.units.clear();
        self.areas.reserve(triangles.len());
        self.units.reserve(triangles.len());

        for t in triangles.iter_mut() {
            let normal = wide_normal(t);
            t.normal = narrow(normal);
            self.areas.push(wide_area(normal));
            self.units.push(wide_unit(normal));
        }
    }

    pub fn areas(&self) -> &[f32] {
        &self.areas
    }

    pub fn units(&self) -> &[Vector3] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}
