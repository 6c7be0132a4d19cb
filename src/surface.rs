use crate::types::{Color, Float, Vec3};

#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: Float,
}

/// A drawing surface accepting 3D line segments. The caller owns the surface
/// lifecycle; this crate only issues draw commands.
pub trait Surface {
    fn draw_segment(&mut self, p1: Vec3, p2: Vec3, stroke: &Stroke);
}
