use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::path::Path;
use turtle_blooms::prelude::*;

/// The classic random-color grid: 10x8 cells of 30 units hung from
/// (-300, 300), each cell outlined in its own random color. This is the
/// absolute-coordinate variant; see grid_turtle.rs for the one that drives
/// the turtle around each cell instead.
fn main() {
    env_logger::init();

    let mut canvas = SvgCanvas::new();
    canvas.configure_window(1.0, 1.0);
    canvas.background(0.0, 0.0, 0.0);
    canvas.batched_refresh(true);

    // We're using a static random generator here so that our SVG files
    // don't get regenerated every time we run the examples.
    let mut colors = RngSource(SmallRng::seed_from_u64(12345));

    GridPainter::default()
        .paint(&mut canvas, &mut colors)
        .expect("Grid painting failed");

    // Turtle coordinates straight into the window, y flipped for SVG.
    let frame = canvas.last_frame().expect("Refreshed but no frame?!");
    let document = frame.to_document(&Arrangement::turtle_window(&canvas.window()));

    // Write it out to /images/$THIS_EXAMPLE_FILE.svg
    let fname = Path::new(file!()).file_stem().unwrap().to_str().unwrap();
    std::fs::create_dir_all("images").unwrap();
    svg::save(format!("images/{}.svg", fname), &document).unwrap();

    canvas
        .run_until_closed()
        .expect("Surface failed at teardown");
}
