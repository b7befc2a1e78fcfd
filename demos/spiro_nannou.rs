use nannou::color;
use nannou::lyon::lyon_tessellation::LineJoin;
use nannou::lyon::tessellation::LineCap;
use nannou::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use turtle_blooms::canvas::SvgCanvas;
use turtle_blooms::painters::SpiroPainter;
use turtle_blooms::random::RngSource;
use turtle_blooms::render::nannou::StrokeDrawer;

/// The spiral bloom, live: one painter frame per nannou update, drawn from
/// the freshest canvas snapshot. Runs until you close the window.
struct Model {
    painter: SpiroPainter,
    canvas: SvgCanvas,
    colors: RngSource<SmallRng>,
    frame_index: u32,
    bloom: Option<turtle_blooms::canvas::Frame>,
}

fn model(_app: &App) -> Model {
    Model {
        painter: SpiroPainter::default(),
        canvas: SvgCanvas::new(),
        colors: RngSource(SmallRng::seed_from_u64(12345)),
        frame_index: 0,
        bloom: None,
    }
}

fn update(_app: &App, model: &mut Model, _update: Update) {
    model
        .painter
        .frame(&mut model.canvas, &mut model.colors, model.frame_index)
        .expect("Surface failed mid-animation");
    model.frame_index = model.frame_index.wrapping_add(1);
    // Drain the canvas so the backlog never grows; only the freshest bloom
    // gets drawn anyway.
    if let Some(frame) = model.canvas.take_frames().pop() {
        model.bloom = Some(frame);
    }
}

fn view(_app: &App, model: &Model, frame: Frame) {
    let draw = _app.draw();
    frame.clear(BLACK);

    if let Some(bloom) = &model.bloom {
        for stroke in bloom.visible_strokes() {
            draw.polyline()
                .stroke_weight(1.0)
                .caps(LineCap::Round)
                .join(LineJoin::Round)
                .polyline_from_stroke(stroke)
                .color(color::rgb(stroke.color.r, stroke.color.g, stroke.color.b));
        }
    }

    draw.to_frame(_app, &frame).unwrap();
}

fn main() {
    env_logger::init();
    // Basic Nannou setup.
    nannou::app(model)
        .update(update)
        .simple_window(view)
        .run();
}
