use cgmath::{num_traits::AsPrimitive, vec2, InnerSpace, Vector2};

use crate::{scene::CameraParams, types::{Float, Vec3}};

pub struct Camera {
    position: Vec3,
    right: Vec3,
    up: Vec3,
    forward: Vec3,
    tan_half_fov_x: Float,
    tan_half_fov_y: Float,
    width: Float,
    height: Float,
}

impl Camera {
    pub fn new(params: &CameraParams, width: usize, height: usize) -> Self {
        let fwidth = width.as_();
        let fheight = height.as_();
        let tan_half_fov_x = (params.fov_x / 2.0).tan();
        let aspect_ratio = fwidth / fheight;
        let tan_half_fov_y = tan_half_fov_x / aspect_ratio;
        Self {
            position: params.position,
            right: params.right,
            up: params.up,
            forward: params.forward,
            tan_half_fov_x,
            tan_half_fov_y,
            width: fwidth,
            height: fheight,
        }
    }

    /// Pixel coordinates of a world point, or `None` for points at or behind
    /// the camera plane.
    pub fn project(&self, point: Vec3) -> Option<Vector2<Float>> {
        let v = point - self.position;
        let depth = v.dot(self.forward);
        if depth <= 0.0 {
            return None;
        }
        let x = v.dot(self.right) / (depth * self.tan_half_fov_x);
        let y = v.dot(self.up) / (depth * self.tan_half_fov_y);
        Some(vec2((x + 1.0) / 2.0 * self.width, (1.0 - y) / 2.0 * self.height))
    }
}
