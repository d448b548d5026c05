//! End-to-end frame scenarios: configuration through layout cache through
//! renderer, inspected at the command level the way a backend consumes it.

use clock_face_lib::config::Config;
use clock_face_lib::eg::MonoFontMetrics;
use clock_face_lib::layout::Layout;
use clock_face_lib::renderer::{render, DrawCommand, Point2, REPAINT_INTERVAL};
use clock_face_lib::{SurfaceDimensions, TimeSample};

/// Run the full pipeline for a 400×400 surface at the given time.
fn pipeline_frame(time: TimeSample) -> Vec<DrawCommand> {
    let config = Config::default();
    let mut layout = Layout::new();
    let metrics = layout
        .metrics(SurfaceDimensions::new(400, 400))
        .expect("400x400 surface should lay out");
    render(&metrics, &config, time, &MonoFontMetrics)
}

fn hand_endpoints(frame: &[DrawCommand]) -> Vec<(Point2, Point2)> {
    frame
        .iter()
        .filter_map(|cmd| match cmd {
            DrawCommand::Segment { start, end, .. } => Some((*start, *end)),
            _ => None,
        })
        .collect()
}

/// At 03:00:00 the hour hand points right while the minute and second
/// hands point up.
#[test]
fn three_oclock_frame() {
    let frame = pipeline_frame(TimeSample::new(3, 0, 0));
    let hands = hand_endpoints(&frame);
    assert_eq!(hands.len(), 3);

    let (_, hour_end) = hands[0];
    assert!(hour_end.x > 200.0, "hour hand should reach right of center");
    assert!(
        (hour_end.y - 200.0).abs() < 1e-3,
        "hour hand should stay level"
    );

    for &(_, end) in &hands[1..] {
        assert!((end.x - 200.0).abs() < 1e-3);
        assert!(end.y < 200.0, "minute/second hands should reach upward");
    }
}

/// At midnight the 24-hour clock reduces to dial hour 0 and all three
/// hands coincide in direction, pointing up.
#[test]
fn midnight_frame() {
    let frame = pipeline_frame(TimeSample::new(0, 0, 0));
    for (start, end) in hand_endpoints(&frame) {
        assert!((end.x - 200.0).abs() < 1e-3);
        assert!(end.y < 200.0);
        assert!(start.y > 200.0, "tails should poke below center");
    }
}

/// The painter's-algorithm contract: face disc first, pin last, ring after
/// the dots, numerals before the hands.
#[test]
fn frame_layer_order() {
    let frame = pipeline_frame(TimeSample::new(3, 0, 0));

    let first_label = frame
        .iter()
        .position(|c| matches!(c, DrawCommand::Label { .. }))
        .expect("numerals enabled by default");
    let first_segment = frame
        .iter()
        .position(|c| matches!(c, DrawCommand::Segment { .. }))
        .expect("hands always draw");
    let ring = frame
        .iter()
        .position(|c| matches!(c, DrawCommand::Ring { .. }))
        .expect("ring always draws");

    assert!(matches!(frame.first(), Some(DrawCommand::Disc { .. })));
    assert!(matches!(frame.last(), Some(DrawCommand::Disc { .. })));
    assert!(ring < first_label, "ring must draw under the numerals");
    assert!(first_label < first_segment, "hands must draw over numerals");
}

/// Resizing the surface replaces the cached layout and shrinks the frame's
/// geometry with it.
#[test]
fn resize_replaces_layout() {
    let config = Config::default();
    let mut layout = Layout::new();

    let large = layout.metrics(SurfaceDimensions::new(400, 400)).unwrap();
    let small = layout.metrics(SurfaceDimensions::new(200, 200)).unwrap();
    assert!(small.radius < large.radius);

    let frame = render(&small, &config, TimeSample::new(3, 0, 0), &MonoFontMetrics);
    match frame.first() {
        Some(DrawCommand::Disc { radius, .. }) => assert_eq!(*radius, small.radius),
        other => panic!("expected face disc, got {other:?}"),
    }
}

/// A degenerate configured surface renders nothing rather than faulting.
#[test]
fn degenerate_surface_skips_frame() {
    let mut layout = Layout::new();
    assert!(layout.metrics(SurfaceDimensions::new(0, 0)).is_none());
}

/// Configuration round-trips through TOML and drives the frame: disabling
/// the dots removes exactly sixty discs.
#[test]
fn config_toggle_drives_frame() {
    let toml_str = "[face]\nborder_dots_enabled = false\n";
    let config: Config = toml::from_str(toml_str).expect("valid config");
    let mut layout = Layout::new();
    let metrics = layout.metrics(SurfaceDimensions::new(400, 400)).unwrap();

    let with_dots = render(
        &metrics,
        &Config::default(),
        TimeSample::new(3, 0, 0),
        &MonoFontMetrics,
    );
    let without = render(&metrics, &config, TimeSample::new(3, 0, 0), &MonoFontMetrics);
    assert_eq!(with_dots.len() - without.len(), 60);
}

/// The host loop contract: roughly 2 Hz.
#[test]
fn repaint_interval_is_half_a_second() {
    assert_eq!(REPAINT_INTERVAL.as_millis(), 500);
}
