use cgmath::Zero;

pub type Vector3 = cgmath::Vector3<f32>;

// We rely on Vector3 being repr(c).
static_assertions::assert_eq_size!(Vector3, [f32; 3]);
static_assertions::assert_eq_align!(Vector3, f32);

// 12 normal + 36 vertex + 2 attribute bytes, padded to the f32 alignment.
static_assertions::assert_eq_size!(Triangle, [u8; 52]);
static_assertions::assert_eq_align!(Triangle, f32);

/// A single facet record.
///
/// The field order follows a binary STL facet: normal, the three vertices
/// and the attribute word. Only `p0`, `p1` and `p2` are authoritative; the
/// normal is overwritten whenever the owning mesh recomputes its geometry.
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Triangle {
    pub normal: Vector3,
    pub p0: Vector3,
    pub p1: Vector3,
    pub p2: Vector3,
    /// Opaque "attribute byte count" word. Never interpreted, only carried.
    pub attribute: u16,
}

impl Triangle {
    pub fn new(p0: Vector3, p1: Vector3, p2: Vector3) -> Self {
        Self {
            normal: Vector3::zero(),
            p0,
            p1,
            p2,
            attribute: 0,
        }
    }

    pub fn with_attribute(mut self, attribute: u16) -> Self {
        self.attribute = attribute;
        self
    }

    /// The vertices in winding order.
    pub fn vertices(&self) -> [Vector3; 3] {
        [self.p0, self.p1, self.p2]
    }

    /// Sum of the three vertices.
    ///
    /// Two triangles listing the same points in the same order always share
    /// a key. Used to group duplicates.
    pub fn content_key(&self) -> Vector3 {
        self.p0 + self.p1 + self.p2
    }
}

impl std::default::Default for Triangle {
    fn default() -> Self {
        Self::new(Vector3::zero(), Vector3::zero(), Vector3::zero())
    }
}

impl From<[[f32; 3]; 3]> for Triangle {
    fn from([p0, p1, p2]: [[f32; 3]; 3]) -> Self {
        Self::new(p0.into(), p1.into(), p2.into())
    }
}
