use std::path::PathBuf;
use turtle_blooms::prelude::*;

/// The spiral bloom, rendered to a frame sequence: every frame is a fresh
/// sweep of 80 random-color circles, and each frame the whole bloom turns
/// one degree further than the last. Pass a .tpf pattern file to run your
/// own setup instead of the classic one.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let pattern_file = match std::env::args().nth(1) {
        Some(path) => PatternFile::from_file(&PathBuf::from(path))?,
        // The classic bloom, bounded to two seconds' worth of frames at
        // 60fps rather than the run-forever default.
        None => PatternFile {
            seed: Some(12345),
            pattern: Pattern::Spiro(SpiroPainter {
                frames: 120,
                ..SpiroPainter::default()
            }),
            ..PatternFile::default()
        },
    };

    let mut canvas = SvgCanvas::new();
    canvas.configure_window(1.0, 1.0);
    canvas.background(
        pattern_file.background[0],
        pattern_file.background[1],
        pattern_file.background[2],
    );
    let mut colors = pattern_file.color_source();

    match &pattern_file.pattern {
        Pattern::Grid(grid) => grid.paint(&mut canvas, &mut colors)?,
        Pattern::Spiro(spiro) => spiro.paint(&mut canvas, &mut colors)?,
    }

    std::fs::create_dir_all("images/spiro")?;
    let arrangement = Arrangement::turtle_window(&canvas.window());
    for frame in canvas.frames() {
        let document = frame.to_document(&arrangement);
        svg::save(format!("images/spiro/frame_{:04}.svg", frame.index), &document)?;
    }
    println!("Wrote {} frames to images/spiro/", canvas.frames().len());
    Ok(())
}
