use cgmath::vec3;

use crate::{surface::{Stroke, Surface}, types::Vec3};

pub fn draw_line<'a, S: Surface>(surface: &'a mut S, p1: Vec3, p2: Vec3, stroke: &Stroke) -> &'a mut S {
    surface.draw_segment(p1, p2, stroke);
    surface
}

/// Draws the 12 edges of the axis-aligned box with opposite corners `p1` and
/// `p2`: the four edges along x, then the four along y, then the four along z.
pub fn draw_box<'a, S: Surface>(surface: &'a mut S, p1: Vec3, p2: Vec3, stroke: &Stroke) -> &'a mut S {
    let Vec3 { x: x1, y: y1, z: z1 } = p1;
    let Vec3 { x: x2, y: y2, z: z2 } = p2;

    draw_line(surface, vec3(x1, y1, z1), vec3(x2, y1, z1), stroke);
    draw_line(surface, vec3(x1, y2, z1), vec3(x2, y2, z1), stroke);
    draw_line(surface, vec3(x1, y1, z2), vec3(x2, y1, z2), stroke);
    draw_line(surface, vec3(x1, y2, z2), vec3(x2, y2, z2), stroke);

    draw_line(surface, vec3(x1, y1, z1), vec3(x1, y2, z1), stroke);
    draw_line(surface, vec3(x2, y1, z1), vec3(x2, y2, z1), stroke);
    draw_line(surface, vec3(x1, y1, z2), vec3(x1, y2, z2), stroke);
    draw_line(surface, vec3(x2, y1, z2), vec3(x2, y2, z2), stroke);

    draw_line(surface, vec3(x1, y1, z1), vec3(x1, y1, z2), stroke);
    draw_line(surface, vec3(x2, y1, z1), vec3(x2, y1, z2), stroke);
    draw_line(surface, vec3(x1, y2, z1), vec3(x1, y2, z2), stroke);
    draw_line(surface, vec3(x2, y2, z1), vec3(x2, y2, z2), stroke);

    surface
}
