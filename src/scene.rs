use std::f64::consts::PI;

use cgmath::{num_traits::zero, vec2, vec3, InnerSpace, Vector2};

use crate::{line::Line, surface::Stroke, types::{Color, Float, Vec3}};

#[derive(Debug, serde::Deserialize)]
pub struct SceneFile {
    pub dimensions: [usize; 2],
    pub bg_color: Option<[Float; 3]>,
    #[serde(default)]
    pub camera: CameraFile,
    #[serde(default)]
    pub regions: Vec<RegionFile>,
    #[serde(default)]
    pub lines: Vec<SampleLineFile>,
}

#[derive(Debug, Default, serde::Deserialize)]
pub struct CameraFile {
    pub position: Option<[Float; 3]>,
    pub right: Option<[Float; 3]>,
    pub up: Option<[Float; 3]>,
    pub forward: Option<[Float; 3]>,
    pub fov_x: Option<Float>,
}

#[derive(Debug, Default, serde::Deserialize)]
pub struct StrokeFile {
    pub color: Option<[Float; 3]>,
    pub width: Option<Float>,
}

#[derive(Debug, serde::Deserialize)]
pub struct RegionFile {
    pub pmin: [Float; 3],
    pub pmax: [Float; 3],
    #[serde(default)]
    pub stroke: StrokeFile,
}

#[derive(Debug, serde::Deserialize)]
pub struct SampleLineFile {
    pub dir: [Float; 3],
    pub point: [Float; 3],
    #[serde(default)]
    pub stroke: StrokeFile,
}

#[derive(Debug)]
pub struct CameraParams {
    pub position: Vec3,
    pub right: Vec3,
    pub up: Vec3,
    pub forward: Vec3,
    pub fov_x: Float,
}

#[derive(Debug)]
pub struct Region {
    pub pmin: Vec3,
    pub pmax: Vec3,
    pub stroke: Stroke,
}

#[derive(Debug)]
pub struct SampleLine {
    pub line: Line,
    pub stroke: Stroke,
}

#[derive(Debug)]
pub struct Scene {
    pub dimensions: Vector2<usize>,
    pub bg_color: Color,
    pub camera: CameraParams,
    pub regions: Vec<Region>,
    pub lines: Vec<SampleLine>,
}

impl StrokeFile {
    fn resolve(&self) -> Stroke {
        Stroke {
            color: self.color.map(to_vec3).unwrap_or(vec3(0.0, 0.0, 1.0)),
            width: self.width.unwrap_or(2.0),
        }
    }
}

impl CameraParams {
    fn new(camera: CameraFile) -> Self {
        Self {
            position: camera.position.map(to_vec3).unwrap_or(zero()),
            right: camera.right.map(to_vec3).unwrap_or(Vec3::unit_x()).normalize(),
            up: camera.up.map(to_vec3).unwrap_or(Vec3::unit_y()).normalize(),
            forward: camera.forward.map(to_vec3).unwrap_or(Vec3::unit_z()).normalize(),
            fov_x: camera.fov_x.unwrap_or(PI / 2.0),
        }
    }
}

impl Scene {
    pub fn new(file: SceneFile) -> Self {
        Self {
            dimensions: vec2(file.dimensions[0], file.dimensions[1]),
            bg_color: file.bg_color.map(to_vec3).unwrap_or(vec3(1.0, 1.0, 1.0)),
            camera: CameraParams::new(file.camera),
            regions: file.regions.into_iter().map(|region| Region {
                pmin: to_vec3(region.pmin),
                pmax: to_vec3(region.pmax),
                stroke: region.stroke.resolve(),
            }).collect(),
            lines: file.lines.into_iter().map(|line| SampleLine {
                line: Line { dir: to_vec3(line.dir), point: to_vec3(line.point) },
                stroke: line.stroke.resolve(),
            }).collect(),
        }
    }
}

fn to_vec3(v: [Float; 3]) -> Vec3 {
    vec3(v[0], v[1], v[2])
}

#[cfg(test)]
mod test {
    use cgmath::{vec2, vec3};

    use super::{Scene, SceneFile};

    #[test]
    fn defaults() {
        let file: SceneFile = serde_json::from_str(r#"{"dimensions": [640, 480]}"#).unwrap();
        let scene = Scene::new(file);
        assert_eq!(scene.dimensions, vec2(640, 480));
        assert_eq!(scene.bg_color, vec3(1.0, 1.0, 1.0));
        assert_eq!(scene.camera.position, vec3(0.0, 0.0, 0.0));
        assert_eq!(scene.camera.forward, vec3(0.0, 0.0, 1.0));
        assert!(scene.regions.is_empty());
        assert!(scene.lines.is_empty());
    }

    #[test]
    fn region_and_line() {
        let file: SceneFile = serde_json::from_str(r#"{
            "dimensions": [64, 64],
            "regions": [{"pmin": [0, 0, 0], "pmax": [1, 1, 1], "stroke": {"width": 3}}],
            "lines": [{"dir": [0, 0, 1], "point": [0.5, 0.5, 0.0], "stroke": {"color": [1, 0, 0]}}]
        }"#).unwrap();
        let scene = Scene::new(file);
        let region = &scene.regions[0];
        assert_eq!(region.pmax, vec3(1.0, 1.0, 1.0));
        assert_eq!(region.stroke.width, 3.0);
        assert_eq!(region.stroke.color, vec3(0.0, 0.0, 1.0));
        let sample = &scene.lines[0];
        assert_eq!(sample.line.dir, vec3(0.0, 0.0, 1.0));
        assert_eq!(sample.stroke.color, vec3(1.0, 0.0, 0.0));
        assert_eq!(sample.stroke.width, 2.0);
    }
}
