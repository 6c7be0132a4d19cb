use cgmath::Vector3;

pub type Float = f64;
pub type Vec3 = Vector3<Float>;
pub type Color = Vector3<Float>;
