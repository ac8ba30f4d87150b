//! Duplicate facet removal.
//!
//! Facets are grouped by their content key (the sum of their three
//! vertices). The keys are sorted once, equal neighbours form a group, and
//! the policy decides which members of each group survive. Survivors are
//! always emitted in their original buffer order.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use log::{debug, warn};
use ordered_float::OrderedFloat;

use crate::error::{MeshError, MeshResult};
use crate::geometry::{Triangle, Vector3};

/// What to do with facets that share a content key.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RemoveDuplicates {
    /// Keep every facet.
    #[default]
    None,
    /// Keep the first facet of every group.
    Single,
    /// Drop every facet whose key occurs more than once.
    ///
    /// When no key occurs exactly once this keeps one facet per group, the
    /// same as [`RemoveDuplicates::Single`].
    All,
}

impl RemoveDuplicates {
    pub fn as_str(self) -> &'static str {
        match self {
            RemoveDuplicates::None => "NONE",
            RemoveDuplicates::Single => "SINGLE",
            RemoveDuplicates::All => "ALL",
        }
    }
}

impl fmt::Display for RemoveDuplicates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `false` disables removal, `true` keeps one facet per group.
impl From<bool> for RemoveDuplicates {
    fn from(remove: bool) -> Self {
        if remove {
            RemoveDuplicates::Single
        } else {
            RemoveDuplicates::None
        }
    }
}

impl From<Option<RemoveDuplicates>> for RemoveDuplicates {
    fn from(policy: Option<RemoveDuplicates>) -> Self {
        policy.unwrap_or_default()
    }
}

impl From<Option<bool>> for RemoveDuplicates {
    fn from(remove: Option<bool>) -> Self {
        remove.map(RemoveDuplicates::from).unwrap_or_default()
    }
}

impl TryFrom<i64> for RemoveDuplicates {
    type Error = MeshError;

    fn try_from(value: i64) -> MeshResult<Self> {
        match value {
            0 => Ok(RemoveDuplicates::None),
            1 => Ok(RemoveDuplicates::Single),
            2 => Ok(RemoveDuplicates::All),
            other => Err(MeshError::UnknownDuplicatePolicy(other.to_string())),
        }
    }
}

impl FromStr for RemoveDuplicates {
    type Err = MeshError;

    fn from_str(s: &str) -> MeshResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "false" | "0" => Ok(RemoveDuplicates::None),
            "single" | "true" | "1" => Ok(RemoveDuplicates::Single),
            "all" | "2" => Ok(RemoveDuplicates::All),
            _ => Err(MeshError::UnknownDuplicatePolicy(s.to_string())),
        }
    }
}

impl TryFrom<&str> for RemoveDuplicates {
    type Error = MeshError;

    fn try_from(s: &str) -> MeshResult<Self> {
        s.parse()
    }
}

type SortKey = (OrderedFloat<f32>, OrderedFloat<f32>, OrderedFloat<f32>);

// z is the primary sort component, then y, then x.
fn sort_key(key: &Vector3) -> SortKey {
    (
        OrderedFloat(key.z),
        OrderedFloat(key.y),
        OrderedFloat(key.x),
    )
}

// Plain float equality: a NaN key never joins a group, and -0.0 matches 0.0.
fn same_key(a: &Vector3, b: &Vector3) -> bool {
    a.x == b.x && a.y == b.y && a.z == b.z
}

/// Sorts facet indices by content key and splits them into runs of equal
/// keys.
///
/// Returns the sorted indices and the runs as ranges into them. The sort is
/// stable, so the first index of every run is the smallest original index
/// carrying that key.
fn sorted_groups(triangles: &[Triangle]) -> (Vec<usize>, Vec<Range<usize>>) {
    let keys: Vec<Vector3> = triangles.iter().map(Triangle::content_key).collect();

    let mut order: Vec<usize> = (0..keys.len()).collect();
    order.sort_by_key(|&i| sort_key(&keys[i]));

    let mut runs = Vec::new();
    let mut start = 0;
    for i in 1..=order.len() {
        if i == order.len() || !same_key(&keys[order[i - 1]], &keys[order[i]]) {
            runs.push(start..i);
            start = i;
        }
    }
    (order, runs)
}

fn first_of<'a>(order: &[usize], runs: impl Iterator<Item = &'a Range<usize>>) -> Vec<usize> {
    runs.map(|run| order[run.start]).collect()
}

/// Indices of the facets that survive `policy`, in ascending order.
pub fn surviving_indices(triangles: &[Triangle], policy: RemoveDuplicates) -> Vec<usize> {
    let (order, runs) = match policy {
        RemoveDuplicates::None => return (0..triangles.len()).collect(),
        RemoveDuplicates::Single | RemoveDuplicates::All => sorted_groups(triangles),
    };

    let mut keep = match policy {
        RemoveDuplicates::All if runs.iter().any(|run| run.len() == 1) => {
            first_of(&order, runs.iter().filter(|run| run.len() == 1))
        }
        RemoveDuplicates::All if !runs.is_empty() => {
            warn!(
                "every one of {} facets is duplicated; keeping one per group",
                triangles.len()
            );
            first_of(&order, runs.iter())
        }
        _ => first_of(&order, runs.iter()),
    };
    keep.sort_unstable();

    debug!(
        "{} policy: {} groups, kept {} of {} facets",
        policy,
        runs.len(),
        keep.len(),
        triangles.len()
    );
    keep
}

/// Filters `triangles` according to `policy`.
///
/// The result is a subsequence of the input in the original order; it is
/// never longer than the input.
pub fn remove_duplicate_polygons(
    triangles: &[Triangle],
    policy: RemoveDuplicates,
) -> Vec<Triangle> {
    surviving_indices(triangles, policy)
        .into_iter()
        .map(|i| triangles[i])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyed(x: f32) -> Triangle {
        Triangle::from([[x, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]])
    }

    fn buffer(xs: &[f32]) -> Vec<Triangle> {
        xs.iter().copied().map(keyed).collect()
    }

    #[test]
    fn policy_from_legacy_forms() {
        assert_eq!(RemoveDuplicates::from(false), RemoveDuplicates::None);
        assert_eq!(RemoveDuplicates::from(true), RemoveDuplicates::Single);
        assert_eq!(RemoveDuplicates::from(None::<bool>), RemoveDuplicates::None);
        assert_eq!(RemoveDuplicates::from(Some(true)), RemoveDuplicates::Single);
        assert_eq!(
            RemoveDuplicates::from(None::<RemoveDuplicates>),
            RemoveDuplicates::None
        );
        assert_eq!(
            RemoveDuplicates::from(Some(RemoveDuplicates::All)),
            RemoveDuplicates::All
        );
        assert_eq!(RemoveDuplicates::default(), RemoveDuplicates::None);
    }

    #[test]
    fn policy_from_integer() {
        assert_eq!(RemoveDuplicates::try_from(0_i64), Ok(RemoveDuplicates::None));
        assert_eq!(RemoveDuplicates::try_from(1_i64), Ok(RemoveDuplicates::Single));
        assert_eq!(RemoveDuplicates::try_from(2_i64), Ok(RemoveDuplicates::All));
        assert_eq!(
            RemoveDuplicates::try_from(3_i64),
            Err(MeshError::UnknownDuplicatePolicy("3".to_string()))
        );
        assert!(RemoveDuplicates::try_from(-1_i64).is_err());
    }

    #[test]
    fn policy_from_str() {
        assert_eq!("none".parse::<RemoveDuplicates>(), Ok(RemoveDuplicates::None));
        assert_eq!("False".parse::<RemoveDuplicates>(), Ok(RemoveDuplicates::None));
        assert_eq!("SINGLE".parse::<RemoveDuplicates>(), Ok(RemoveDuplicates::Single));
        assert_eq!("true".parse::<RemoveDuplicates>(), Ok(RemoveDuplicates::Single));
        assert_eq!(" all ".parse::<RemoveDuplicates>(), Ok(RemoveDuplicates::All));
        assert_eq!("2".parse::<RemoveDuplicates>(), Ok(RemoveDuplicates::All));
        assert_eq!(
            "some".parse::<RemoveDuplicates>(),
            Err(MeshError::UnknownDuplicatePolicy("some".to_string()))
        );
        assert!("".parse::<RemoveDuplicates>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for policy in [
            RemoveDuplicates::None,
            RemoveDuplicates::Single,
            RemoveDuplicates::All,
        ] {
            assert_eq!(policy.to_string().parse::<RemoveDuplicates>(), Ok(policy));
        }
    }

    #[test]
    fn none_keeps_everything() {
        let ts = buffer(&[1.0, 1.0, 1.0]);
        assert_eq!(surviving_indices(&ts, RemoveDuplicates::None), vec![0, 1, 2]);
    }

    #[test]
    fn single_keeps_first_occurrence() {
        let ts = buffer(&[3.0, 1.0, 3.0, 2.0, 1.0]);
        assert_eq!(
            surviving_indices(&ts, RemoveDuplicates::Single),
            vec![0, 1, 3]
        );
    }

    #[test]
    fn all_drops_every_member_of_a_duplicated_group() {
        let ts = buffer(&[3.0, 1.0, 3.0, 2.0, 1.0, 5.0]);
        assert_eq!(surviving_indices(&ts, RemoveDuplicates::All), vec![3, 5]);
    }

    #[test]
    fn all_without_singletons_keeps_one_per_group() {
        let ts = buffer(&[1.0, 2.0, 2.0, 1.0]);
        assert_eq!(surviving_indices(&ts, RemoveDuplicates::All), vec![0, 1]);
    }

    #[test]
    fn all_with_one_singleton_drops_the_pair() {
        let ts = buffer(&[1.0, 1.0, 2.0]);
        assert_eq!(surviving_indices(&ts, RemoveDuplicates::All), vec![2]);
    }

    #[test]
    fn survivors_follow_input_order_not_key_order() {
        let ts = buffer(&[9.0, 4.0, 7.0, 1.0]);
        let out = remove_duplicate_polygons(&ts, RemoveDuplicates::Single);
        assert_eq!(out, ts);
    }

    #[test]
    fn key_compares_all_components() {
        // Same x-sum, different z-sum.
        let a = Triangle::from([[1.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]]);
        let b = Triangle::from([[1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0, 0.0]]);
        assert_eq!(
            surviving_indices(&[a, b, a], RemoveDuplicates::All),
            vec![1]
        );
    }

    #[test]
    fn permuted_vertices_share_a_key() {
        let a = Triangle::from([[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
        let b = Triangle::from([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]]);
        assert_eq!(surviving_indices(&[a, b], RemoveDuplicates::Single), vec![0]);
    }

    #[test]
    fn negative_zero_groups_with_zero() {
        let ts = vec![
            Triangle::from([[-0.0; 3]; 3]),
            keyed(0.5),
            Triangle::from([[0.0; 3]; 3]),
        ];
        assert_eq!(ts[0].content_key().x.to_bits(), (-0.0f32).to_bits());
        assert_eq!(surviving_indices(&ts, RemoveDuplicates::Single), vec![0, 1]);
        assert_eq!(surviving_indices(&ts, RemoveDuplicates::All), vec![1]);
    }

    #[test]
    fn nan_keys_never_group() {
        let ts = buffer(&[f32::NAN, f32::NAN, 1.0, 1.0]);
        assert_eq!(
            surviving_indices(&ts, RemoveDuplicates::Single),
            vec![0, 1, 2]
        );
        assert_eq!(surviving_indices(&ts, RemoveDuplicates::All), vec![0, 1]);
    }

    #[test]
    fn attribute_does_not_affect_grouping() {
        let ts = vec![keyed(1.0).with_attribute(7), keyed(1.0).with_attribute(9)];
        let out = remove_duplicate_polygons(&ts, RemoveDuplicates::Single);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].attribute, 7);
    }

    #[test]
    fn empty_buffer() {
        for policy in [
            RemoveDuplicates::None,
            RemoveDuplicates::Single,
            RemoveDuplicates::All,
        ] {
            assert!(remove_duplicate_polygons(&[], policy).is_empty());
        }
    }
}
