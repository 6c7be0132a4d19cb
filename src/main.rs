use std::{fs::File, io};

use fieldviz::{camera::Camera, canvas::Canvas, draw, image::Image, intersect, ppm, scene::{Scene, SceneFile}};

fn main() {
    let Some(output_file_name) = std::env::args().nth(1) else {
        println!("You must specify the output file");
        return;
    };

    let file: SceneFile = serde_json::from_reader(io::stdin()).expect("Malformed scene description");
    let scene = Scene::new(file);
    let img = render(&scene);
    let out = File::create(output_file_name).expect("Cannot create output file");
    ppm::save_to_ppm(&img, out).expect("Cannot write output file");
}

fn render(scene: &Scene) -> Image {
    let camera = Camera::new(&scene.camera, scene.dimensions.x, scene.dimensions.y);
    let image = Image::new(scene.dimensions.x, scene.dimensions.y, scene.bg_color);
    let mut canvas = Canvas::new(image, camera);

    for region in &scene.regions {
        draw::draw_box(&mut canvas, region.pmin, region.pmax, &region.stroke);
    }

    // Sampling lines are shown only where they cross a region.
    for sample in &scene.lines {
        for region in &scene.regions {
            let Some((p1, p2)) = intersect::line_box(region.pmin, region.pmax, &sample.line) else {
                continue;
            };
            draw::draw_line(&mut canvas, p1, p2, &sample.stroke);
        }
    }

    canvas.into_image()
}
