use crate::types::{Float, Vec3};

/// Infinite line `point + d * dir` for real `d`.
#[derive(Debug, Clone)]
pub struct Line {
    pub dir: Vec3,
    pub point: Vec3,
}

impl Line {
    pub fn position_at(&self, d: Float) -> Vec3 {
        self.point + self.dir * d
    }
}
