use crate::geo_2d::Angle;

/// A vector in the plane.
/// Used for the directions from the triangulated point to the reference points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoVector {
    pub x: f64,
    pub y: f64,
}
impl GeoVector {
    /// Create a new vector.
    pub fn new(x: f64, y: f64) -> Self {
        GeoVector{x, y}
    }

    /// Get the z-component of the cross product of two planar vectors.
    /// Negative when `other` lies clockwise of `self`.
    pub fn cross(&self, other: &GeoVector) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Get the magnitude squared of the vector.
    pub fn norm_sq(&self) -> f64 {
        self.x*self.x + self.y*self.y
    }

    /// Get the magnitude of the vector.
    pub fn norm(&self) -> f64 {
        self.norm_sq().sqrt()
    }

    /// Polar angle of the vector from +x, in (-pi, pi].
    pub fn heading(&self) -> Angle {
        self.y.atan2(self.x)
    }
}
