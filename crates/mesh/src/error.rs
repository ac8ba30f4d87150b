use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MeshError {
    /// A duplicate policy value that does not map onto NONE, SINGLE or ALL.
    #[error("unknown duplicate polygon policy: {0:?} (expected none, single or all)")]
    UnknownDuplicatePolicy(String),

    /// An area slice was paired with a buffer it was not computed from.
    #[error("{areas} areas given for {triangles} triangles")]
    LengthMismatch { triangles: usize, areas: usize },
}

pub type MeshResult<T> = std::result::Result<T, MeshError>;
