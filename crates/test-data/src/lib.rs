pub type RawTriangle = [[f32; 3]; 3];

pub struct TestModel {
    pub triangles: &'static [RawTriangle],
    /// Number of distinct vertex-sum keys among `triangles`.
    pub distinct_keys: usize,
}

/// Unit square in the z=0 plane, split into two triangles of opposite winding.
pub const FLAT_SQUARE: TestModel = TestModel {
    triangles: &[
        [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0]],
    ],
    distinct_keys: 2,
};

/// A single triangle lifted out of the z=0 plane.
///
/// Normal is (0, -1, 1), area is sqrt(2) / 2.
pub const TILTED: TestModel = TestModel {
    triangles: &[[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 1.0]]],
    distinct_keys: 1,
};

/// Three points on the x axis.
pub const COLLINEAR: TestModel = TestModel {
    triangles: &[[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]]],
    distinct_keys: 1,
};

/// Six triangles where every key occurs exactly twice.
///
/// First occurrences are at indices 0, 1 and 2.
pub const DUPLICATED_PAIRS: TestModel = TestModel {
    triangles: &[
        [[1.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]],
        [[2.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]],
        [[0.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]],
        [[2.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]],
        [[1.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]],
        [[0.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]],
    ],
    distinct_keys: 3,
};

/// Five triangles, four keys; only the last two share a key.
pub const ONE_DUPLICATED_PAIR: TestModel = TestModel {
    triangles: &[
        [[0.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]],
        [[1.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]],
        [[2.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]],
        [[3.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]],
        [[3.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]],
    ],
    distinct_keys: 4,
};

/// One real triangle followed by two collapsed copies with a repeated point.
pub const DEGENERATE_MIX: TestModel = TestModel {
    triangles: &[
        [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]],
        [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]],
    ],
    distinct_keys: 2,
};

/// Closed cube from 0 to 20 on every axis, 12 triangles.
pub const CUBE: TestModel = TestModel {
    triangles: &[
        [[0.0, 20.0, 20.0], [20.0, 0.0, 20.0], [20.0, 20.0, 20.0]],
        [[20.0, 0.0, 20.0], [0.0, 20.0, 20.0], [0.0, 0.0, 20.0]],
        [[0.0, 0.0, 0.0], [20.0, 20.0, 0.0], [20.0, 0.0, 0.0]],
        [[20.0, 20.0, 0.0], [0.0, 0.0, 0.0], [0.0, 20.0, 0.0]],
        [[0.0, 0.0, 0.0], [20.0, 0.0, 20.0], [0.0, 0.0, 20.0]],
        [[20.0, 0.0, 20.0], [0.0, 0.0, 0.0], [20.0, 0.0, 0.0]],
        [[20.0, 0.0, 20.0], [20.0, 20.0, 0.0], [20.0, 20.0, 20.0]],
        [[20.0, 20.0, 0.0], [20.0, 0.0, 20.0], [20.0, 0.0, 0.0]],
        [[20.0, 20.0, 0.0], [0.0, 20.0, 20.0], [20.0, 20.0, 20.0]],
        [[0.0, 20.0, 20.0], [20.0, 20.0, 0.0], [0.0, 20.0, 0.0]],
        [[0.0, 0.0, 0.0], [0.0, 20.0, 20.0], [0.0, 20.0, 0.0]],
        [[0.0, 20.0, 20.0], [0.0, 0.0, 0.0], [0.0, 0.0, 20.0]],
    ],
    distinct_keys: 12,
};
