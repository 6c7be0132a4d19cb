//! Geometric helpers for field visualization: box wireframes, sampling lines
//! and line/plane/box intersection.

pub mod camera;
pub mod canvas;
pub mod draw;
pub mod image;
pub mod intersect;
pub mod line;
pub mod ppm;
pub mod scene;
pub mod surface;
pub mod types;
