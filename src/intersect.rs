use cgmath::{num_traits::zero, InnerSpace};

use crate::{line::Line, types::Vec3};

/// Intersection of an infinite line with the plane through `p0` with normal
/// `n`. `None` covers both parallel cases, the line lying in the plane
/// included.
pub fn line_plane(n: Vec3, p0: Vec3, line: &Line) -> Option<Vec3> {
    let mut l0 = line.point;
    // With both anchors at the origin, p0 - l0 vanishes and the formula below
    // degenerates; slide l0 one step along the line first.
    if p0 == zero::<Vec3>() && l0 == zero::<Vec3>() {
        l0 += line.dir;
    }

    let ln = line.dir.dot(n);
    if ln == 0.0 {
        return None;
    }

    let d = (p0 - l0).dot(n) / ln;
    Some(l0 + line.dir * d)
}

/// Intersection of an infinite line with the boundary of the axis-aligned box
/// spanned by `pmin` and `pmax`: the line is cut against all six bounding
/// planes and the result is kept only if exactly two distinct points survive.
/// The pair is unordered. The surviving points are not re-checked against the
/// box extents on the remaining axes.
pub fn line_box(pmin: Vec3, pmax: Vec3, line: &Line) -> Option<(Vec3, Vec3)> {
    let mut points: Vec<Vec3> = vec![];
    for n in [Vec3::unit_x(), Vec3::unit_y(), Vec3::unit_z()] {
        for p0 in [pmin, pmax] {
            let Some(p) = line_plane(n, p0, line) else { continue };
            if !points.contains(&p) {
                points.push(p);
            }
        }
    }

    match points[..] {
        [a, b] => Some((a, b)),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use cgmath::vec3;

    use crate::line::Line;

    use super::{line_box, line_plane};

    #[test]
    fn crossing() {
        let line = Line { dir: vec3(0.0, 1.0, 0.0), point: vec3(0.0, 0.0, 0.0) };
        let p = line_plane(vec3(0.0, 1.0, 0.0), vec3(0.0, 5.0, 0.0), &line);
        assert_eq!(p, Some(vec3(0.0, 5.0, 0.0)));
    }

    #[test]
    fn parallel() {
        let line = Line { dir: vec3(0.0, 1.0, 0.0), point: vec3(5.0, 0.0, 0.0) };
        assert_eq!(line_plane(vec3(1.0, 0.0, 0.0), vec3(0.0, 0.0, 0.0), &line), None);
    }

    #[test]
    fn contained_in_plane() {
        let line = Line { dir: vec3(0.0, 1.0, 0.0), point: vec3(0.0, 5.0, 0.0) };
        assert_eq!(line_plane(vec3(1.0, 0.0, 0.0), vec3(0.0, 0.0, 0.0), &line), None);
    }

    #[test]
    fn both_anchors_at_origin() {
        let line = Line { dir: vec3(1.0, 0.0, 0.0), point: vec3(0.0, 0.0, 0.0) };
        let p = line_plane(vec3(1.0, 0.0, 0.0), vec3(0.0, 0.0, 0.0), &line);
        assert_eq!(p, Some(vec3(0.0, 0.0, 0.0)));
    }

    #[test]
    fn box_diagonal() {
        let line = Line { dir: vec3(1.0, 1.0, 1.0), point: vec3(0.5, 0.5, 0.5) };
        let (a, b) = line_box(vec3(0.0, 0.0, 0.0), vec3(1.0, 1.0, 1.0), &line).unwrap();
        let expected = [vec3(0.0, 0.0, 0.0), vec3(1.0, 1.0, 1.0)];
        assert_ne!(a, b);
        assert!(expected.contains(&a));
        assert!(expected.contains(&b));
    }

    #[test]
    fn box_axis_parallel() {
        let line = Line { dir: vec3(0.0, 0.0, 1.0), point: vec3(0.5, 0.5, -1.0) };
        let (a, b) = line_box(vec3(0.0, 0.0, 0.0), vec3(1.0, 1.0, 1.0), &line).unwrap();
        let expected = [vec3(0.5, 0.5, 0.0), vec3(0.5, 0.5, 1.0)];
        assert_ne!(a, b);
        assert!(expected.contains(&a));
        assert!(expected.contains(&b));
    }

    #[test]
    fn box_missed() {
        // Four distinct plane hits survive, so no pair is reported.
        let line = Line { dir: vec3(1.0, 1.0, 1.0), point: vec3(0.5, 0.5, -1.0) };
        assert_eq!(line_box(vec3(0.0, 0.0, 0.0), vec3(1.0, 1.0, 1.0), &line), None);
    }
}
