//! Spatial anchor for representation placement

/// Position and orientation at which new representations are instantiated
///
/// Orientation is a unit quaternion stored as `[x, y, z, w]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: [f32; 3],
    pub orientation: [f32; 4],
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        position: [0.0, 0.0, 0.0],
        orientation: [0.0, 0.0, 0.0, 1.0],
    };

    pub fn new(position: [f32; 3], orientation: [f32; 4]) -> Self {
        Transform {
            position,
            orientation,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Transform::IDENTITY
    }
}
