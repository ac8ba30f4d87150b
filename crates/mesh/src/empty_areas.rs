use log::debug;

use crate::error::{MeshError, MeshResult};
use crate::geometry::Triangle;

/// Removes every facet whose area is exactly zero.
///
/// `areas` must be the areas of `triangles`, index for index (see
/// [`DerivedFields`](crate::DerivedFields)). There is no tolerance: a sliver
/// with a tiny positive area survives. Callers that want to collapse near
/// degenerate facets have to quantize the vertices first.
pub fn remove_empty_areas(triangles: &[Triangle], areas: &[f32]) -> MeshResult<Vec<Triangle>> {
    if triangles.len() != areas.len() {
        return Err(MeshError::LengthMismatch {
            triangles: triangles.len(),
            areas: areas.len(),
        });
    }

    let mut kept = triangles.to_vec();
    retain_nonempty(&mut kept, areas);
    Ok(kept)
}

/// In-place form of [`remove_empty_areas`] for a buffer whose areas are
/// known to match.
pub(crate) fn retain_nonempty(triangles: &mut Vec<Triangle>, areas: &[f32]) {
    let before = triangles.len();
    let mut areas = areas.iter();
    // `retain` visits every element exactly once, in order.
    triangles.retain(|_| areas.next().map_or(true, |&area| area != 0.0));
    debug!(
        "removed {} empty facets, {} left",
        before - triangles.len(),
        triangles.len()
    );
}
