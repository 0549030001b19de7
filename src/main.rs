//! Kart Course entry point
//!
//! Loads the bundled course and drives the camera hitbox forward on a slow
//! curve, nudging it back onto the track whenever it leaves the frame.

#[cfg(not(target_arch = "wasm32"))]
use kart_course::{
    Body, Camera, Course, Point3, Polygon, Vertex, Viewport,
    consts::{CANVAS_HEIGHT_PIXEL, CANVAS_WIDTH_PIXEL},
    heading_vector, render_scene,
    renderer::fill_path,
};

#[cfg(not(target_arch = "wasm32"))]
const BASIC_COURSE: &str = include_str!("../courses/basic.json");

/// Demo run length and driving inputs
#[cfg(not(target_arch = "wasm32"))]
const DEMO_TICKS: u32 = 600;
#[cfg(not(target_arch = "wasm32"))]
const SPEED_PER_TICK: f32 = 1.5;
#[cfg(not(target_arch = "wasm32"))]
const TURN_PER_TICK: f32 = 0.004;

/// Camera zoom on top of the canvas scale
#[cfg(not(target_arch = "wasm32"))]
const CAMERA_ZOOM: f32 = 1.5;

/// The player's 10x10 hitbox, anchored at its front edge
#[cfg(not(target_arch = "wasm32"))]
fn create_camera() -> Camera {
    let shape = Polygon::new(
        vec![
            Vertex::line(-5.0, 0.0, 5.0),
            Vertex::line(5.0, 0.0, 5.0),
            Vertex::line(5.0, 10.0, 5.0),
            Vertex::line(-5.0, 10.0, 5.0),
        ],
        Point3::ZERO,
        "black",
        Body::default(),
    );
    Camera::new(shape, CAMERA_ZOOM)
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Kart Course (native) starting...");

    let course = match Course::from_json(BASIC_COURSE) {
        Ok(course) => course,
        Err(e) => {
            log::error!("Failed to parse bundled course: {}", e);
            std::process::exit(1);
        }
    };

    let mut camera = create_camera();
    let canvas = Viewport::for_canvas(CANVAS_WIDTH_PIXEL, CANVAS_HEIGHT_PIXEL);
    let mut rebounds = 0;

    for tick in 0..DEMO_TICKS {
        camera.turn(TURN_PER_TICK);
        let step = heading_vector(camera.angle()) * SPEED_PER_TICK;
        camera.translate(Point3::new(step.x, step.y, 0.0));

        if !course.is_inside_camera(&camera) {
            let rebound = course.rebound_vector(&camera);
            camera.translate(rebound);
            rebounds += 1;
            log::info!(
                "Tick {}: off track, rebound ({:.2}, {:.2})",
                tick,
                rebound.x,
                rebound.y
            );
        }
    }

    let viewport = canvas.through(&camera);
    let shapes = std::iter::once(course.frame()).chain(course.paths());
    let outlines = render_scene(shapes, &camera, &viewport);
    let commands: usize = outlines.iter().map(|outline| fill_path(outline).len()).sum();

    log::info!(
        "Finished '{}' after {} ticks: {} rebounds, camera at ({:.1}, {:.1}), {} path commands for {} shapes",
        course.name(),
        DEMO_TICKS,
        rebounds,
        camera.position().x,
        camera.position().y,
        commands,
        outlines.len()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The library is driven by the host page on the web
}
