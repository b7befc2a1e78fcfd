use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::path::Path;
use turtle_blooms::prelude::*;

/// Same grid as grid.rs, but each cell is drawn turtle-style: forward a
/// cell edge, hang a right, four times around. The two variants produce
/// identical squares; only the journey differs.
fn main() {
    env_logger::init();

    let mut canvas = SvgCanvas::new();
    canvas.configure_window(1.0, 1.0);
    canvas.background(0.0, 0.0, 0.0);
    canvas.batched_refresh(true);

    let mut colors = RngSource(SmallRng::seed_from_u64(12345));

    let painter = GridPainter {
        variant: GridVariant::Relative,
        ..GridPainter::default()
    };
    painter
        .paint(&mut canvas, &mut colors)
        .expect("Grid painting failed");

    let frame = canvas.last_frame().expect("Refreshed but no frame?!");
    let document = frame.to_document(&Arrangement::turtle_window(&canvas.window()));

    let fname = Path::new(file!()).file_stem().unwrap().to_str().unwrap();
    std::fs::create_dir_all("images").unwrap();
    svg::save(format!("images/{}.svg", fname), &document).unwrap();

    canvas
        .run_until_closed()
        .expect("Surface failed at teardown");
}
