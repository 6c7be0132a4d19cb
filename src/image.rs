use crate::types::Color;

pub struct Image {
    pub width: usize,
    pub height: usize,
    pub bytes: Vec<Color>,
}

impl Image {
    pub fn new(width: usize, height: usize, fill: Color) -> Self {
        Self { width, height, bytes: vec![fill; width * height] }
    }

    pub fn put(&mut self, x: isize, y: isize, color: Color) {
        if x < 0 || y < 0 || self.width as isize <= x || self.height as isize <= y {
            return;
        }
        self.bytes[y as usize * self.width + x as usize] = color;
    }

    pub fn at(&self, x: usize, y: usize) -> Color {
        self.bytes[y * self.width + x]
    }
}
