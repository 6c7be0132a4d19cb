use cgmath::Vector2;

use crate::{camera::Camera, image::Image, surface::{Stroke, Surface}, types::{Float, Vec3}};

pub struct Canvas {
    image: Image,
    camera: Camera,
}

impl Canvas {
    pub fn new(image: Image, camera: Camera) -> Self {
        Self { image, camera }
    }

    pub fn into_image(self) -> Image {
        self.image
    }

    fn plot(&mut self, p: Vector2<Float>, stroke: &Stroke) {
        let radius = (stroke.width / 2.0).ceil() as isize;
        let cx = p.x.round() as isize;
        let cy = p.y.round() as isize;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                self.image.put(cx + dx, cy + dy, stroke.color);
            }
        }
    }
}

impl Surface for Canvas {
    fn draw_segment(&mut self, p1: Vec3, p2: Vec3, stroke: &Stroke) {
        // Segments reaching behind the camera are skipped rather than clipped.
        let (Some(a), Some(b)) = (self.camera.project(p1), self.camera.project(p2)) else {
            return;
        };
        let steps = (b.x - a.x).abs().max((b.y - a.y).abs()).ceil().max(1.0);
        let step = (b - a) / steps;
        let mut p = a;
        for _ in 0..=steps as usize {
            self.plot(p, stroke);
            p += step;
        }
    }
}
