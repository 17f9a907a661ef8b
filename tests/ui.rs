use airscriber::config::{StatusBarStyle, StatusPosition, UiConfig};
use airscriber::draw::{CairoCanvas, DrawingSurface, GREEN, Shape};
use cairo::{Context, ImageSurface};

fn surface_with_context(width: i32, height: i32) -> (ImageSurface, Context) {
    let surface = ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap();
    let ctx = Context::new(&surface).unwrap();
    (surface, ctx)
}

fn surface_has_pixels(surface: &mut ImageSurface) -> bool {
    surface
        .data()
        .map(|data| data.iter().any(|byte| *byte != 0))
        .unwrap_or(false)
}

#[test]
fn render_status_bar_draws_for_all_positions() {
    let style = StatusBarStyle::default();
    let positions = [
        StatusPosition::TopLeft,
        StatusPosition::TopRight,
        StatusPosition::BottomLeft,
        StatusPosition::BottomRight,
    ];

    for position in positions {
        let (mut surface, ctx) = surface_with_context(400, 200);
        airscriber::ui::render_status_bar(
            &ctx,
            "Status: Canvas cleared",
            position,
            &style,
            400,
            200,
        );
        drop(ctx);
        assert!(
            surface_has_pixels(&mut surface),
            "status bar should render pixels for {:?}",
            position
        );
    }
}

#[test]
fn exported_png_includes_status_bar_only_when_requested() {
    let canvas = CairoCanvas::new(320, 240).unwrap();
    let ui = UiConfig::default();

    let mut plain = canvas.composite(None).unwrap();
    assert!(!surface_has_pixels(&mut plain));

    let mut with_status = canvas.composite(Some(("Status: Ready", &ui))).unwrap();
    assert!(surface_has_pixels(&mut with_status));
}

#[test]
fn cleared_canvas_exports_transparent() {
    let mut canvas = CairoCanvas::new(320, 240).unwrap();
    canvas.draw(Shape::Segment {
        x1: 10.0,
        y1: 10.0,
        x2: 200.0,
        y2: 120.0,
        color: GREEN,
        thick: 3.0,
    });
    assert!(surface_has_pixels(&mut canvas.composite(None).unwrap()));

    canvas.clear();
    assert!(canvas.frame().is_empty());
    assert!(!surface_has_pixels(&mut canvas.composite(None).unwrap()));
}
