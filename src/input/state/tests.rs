use super::*;
use crate::draw::{DrawingSurface, Frame, GREEN, RED, SKY, Shape};
use crate::gesture::landmark::{LANDMARK_COUNT, Landmark, index};
use crate::gesture::HandLandmarks;
use crate::input::MouseButton;

/// Surface double that records every command.
struct RecordingSurface {
    width: u32,
    height: u32,
    frame: Frame,
    clears: usize,
}

impl RecordingSurface {
    fn new() -> Self {
        Self {
            width: 640,
            height: 480,
            frame: Frame::new(),
            clears: 0,
        }
    }

    fn segments(&self) -> Vec<((f64, f64), (f64, f64))> {
        self.frame
            .segments()
            .filter_map(Shape::segment_points)
            .collect()
    }

    fn markers(&self) -> usize {
        self.frame.shapes.len() - self.frame.segments().count()
    }
}

impl DrawingSurface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn draw(&mut self, shape: Shape) {
        self.frame.add_shape(shape);
    }

    fn clear(&mut self) {
        self.frame.clear();
        self.clears += 1;
    }
}

fn create_test_input_state() -> InputState {
    InputState::new(StrokeStyle::default(), true)
}

/// Pointing hand with the index fingertip at normalized `(x, y)`.
fn pointing_at(x: f64, y: f64) -> HandLandmarks {
    let mut points = [Landmark::new(0.5, 0.5); LANDMARK_COUNT];
    points[index::INDEX_TIP] = Landmark::new(x, y);
    points[index::INDEX_PIP].y = y + 0.2;
    for (tip, pip) in [
        (index::MIDDLE_TIP, index::MIDDLE_PIP),
        (index::RING_TIP, index::RING_PIP),
        (index::PINKY_TIP, index::PINKY_PIP),
    ] {
        points[tip].y = 0.6;
        points[pip].y = 0.4;
    }
    HandLandmarks::new(points)
}

/// Open hand: every fingertip above its joint.
fn open_hand() -> HandLandmarks {
    let mut points = *pointing_at(0.5, 0.3).points();
    for tip in [index::MIDDLE_TIP, index::RING_TIP, index::PINKY_TIP] {
        points[tip].y = 0.2;
    }
    HandLandmarks::new(points)
}

#[test]
fn first_pointing_frame_starts_run_without_segment() {
    let mut state = create_test_input_state();
    let mut surface = RecordingSurface::new();

    state.on_hand_result(Some(&pointing_at(0.5, 0.5)), &mut surface);

    assert_eq!(
        state.pen,
        PenState::Drawing {
            last_x: 320.0,
            last_y: 240.0
        }
    );
    assert!(surface.segments().is_empty());
    assert_eq!(surface.markers(), 1);
    assert_eq!(
        state.status.message(),
        "Drawing started - move your finger to draw!"
    );
}

#[test]
fn consecutive_pointing_frames_emit_one_segment() {
    let mut state = create_test_input_state();
    let mut surface = RecordingSurface::new();

    state.on_hand_result(Some(&pointing_at(0.5, 0.5)), &mut surface);
    state.on_hand_result(Some(&pointing_at(0.6, 0.5)), &mut surface);

    assert_eq!(surface.segments(), vec![((320.0, 240.0), (384.0, 240.0))]);
    assert_eq!(
        state.pen,
        PenState::Drawing {
            last_x: 384.0,
            last_y: 240.0
        }
    );
}

#[test]
fn segment_then_marker_use_configured_style() {
    let mut state = create_test_input_state();
    let mut surface = RecordingSurface::new();

    state.on_hand_result(Some(&pointing_at(0.5, 0.5)), &mut surface);
    state.on_hand_result(Some(&pointing_at(0.6, 0.5)), &mut surface);

    let last_two = &surface.frame.shapes[surface.frame.shapes.len() - 2..];
    assert_eq!(
        last_two[0],
        Shape::Segment {
            x1: 320.0,
            y1: 240.0,
            x2: 384.0,
            y2: 240.0,
            color: GREEN,
            thick: 3.0,
        }
    );
    assert_eq!(
        last_two[1],
        Shape::Marker {
            cx: 384.0,
            cy: 240.0,
            radius: 8.0,
            color: RED,
        }
    );
}

#[test]
fn each_drawing_tick_emits_exactly_one_segment() {
    let mut state = create_test_input_state();
    let mut surface = RecordingSurface::new();

    let xs = [0.1, 0.2, 0.3, 0.4, 0.5];
    for x in xs {
        state.on_hand_result(Some(&pointing_at(x, 0.5)), &mut surface);
    }

    let segments = surface.segments();
    assert_eq!(segments.len(), xs.len() - 1);
    for pair in segments.windows(2) {
        assert_eq!(pair[0].1, pair[1].0, "segments must chain end to start");
    }
}

#[test]
fn losing_the_hand_notifies_once() {
    let mut state = create_test_input_state();
    let mut surface = RecordingSurface::new();

    state.on_hand_result(Some(&pointing_at(0.5, 0.5)), &mut surface);
    let before = state.status.updates();

    for _ in 0..5 {
        state.on_hand_result(None, &mut surface);
    }

    assert_eq!(state.pen, PenState::Idle);
    assert_eq!(state.status.updates(), before + 1);
    assert_eq!(
        state.status.message(),
        "No hand detected - show your hand to continue"
    );
}

#[test]
fn no_hand_while_idle_is_silent() {
    let mut state = create_test_input_state();
    let mut surface = RecordingSurface::new();

    state.on_hand_result(None, &mut surface);

    assert_eq!(state.status.updates(), 0);
    assert!(surface.frame.is_empty());
}

#[test]
fn open_hand_stops_the_run_without_drawing() {
    let mut state = create_test_input_state();
    let mut surface = RecordingSurface::new();

    state.on_hand_result(Some(&pointing_at(0.5, 0.5)), &mut surface);
    let shapes_before = surface.frame.shapes.len();
    state.on_hand_result(Some(&open_hand()), &mut surface);
    state.on_hand_result(Some(&open_hand()), &mut surface);

    assert_eq!(state.pen, PenState::Idle);
    assert_eq!(surface.frame.shapes.len(), shapes_before);
    assert_eq!(
        state.status.message(),
        "Drawing stopped - point with index finger to continue"
    );
}

#[test]
fn open_hand_while_idle_is_silent() {
    let mut state = create_test_input_state();
    let mut surface = RecordingSurface::new();

    state.on_hand_result(Some(&open_hand()), &mut surface);
    state.on_hand_result(Some(&open_hand()), &mut surface);

    assert_eq!(state.pen, PenState::Idle);
    assert_eq!(state.status.updates(), 0);
    assert!(surface.frame.is_empty());
}

#[test]
fn new_run_after_stop_does_not_connect_to_old_position() {
    let mut state = create_test_input_state();
    let mut surface = RecordingSurface::new();

    state.on_hand_result(Some(&pointing_at(0.1, 0.1)), &mut surface);
    state.on_hand_result(Some(&open_hand()), &mut surface);
    state.on_hand_result(Some(&pointing_at(0.9, 0.9)), &mut surface);

    assert!(surface.segments().is_empty());
}

#[test]
fn disabled_ticks_are_ignored_and_state_is_kept() {
    let mut state = create_test_input_state();
    let mut surface = RecordingSurface::new();

    state.on_hand_result(Some(&pointing_at(0.5, 0.5)), &mut surface);
    assert!(!state.toggle_drawing());
    let shapes_before = surface.frame.shapes.len();

    state.on_hand_result(Some(&pointing_at(0.6, 0.5)), &mut surface);
    state.on_hand_result(None, &mut surface);

    assert_eq!(surface.frame.shapes.len(), shapes_before);
    assert_eq!(
        state.pen,
        PenState::Drawing {
            last_x: 320.0,
            last_y: 240.0
        }
    );
}

#[test]
fn re_enabling_starts_a_fresh_run() {
    let mut state = create_test_input_state();
    let mut surface = RecordingSurface::new();

    state.on_hand_result(Some(&pointing_at(0.5, 0.5)), &mut surface);
    state.toggle_drawing();
    assert!(state.toggle_drawing());
    state.on_hand_result(Some(&pointing_at(0.9, 0.9)), &mut surface);

    assert!(surface.segments().is_empty());
    assert_eq!(
        state.pen,
        PenState::Drawing {
            last_x: 576.0,
            last_y: 432.0
        }
    );
}

#[test]
fn toggle_updates_label_and_status() {
    let mut state = create_test_input_state();
    assert_eq!(state.toggle_label(), "Toggle Drawing: ON");

    state.toggle_drawing();
    assert_eq!(state.toggle_label(), "Toggle Drawing: OFF");
    assert_eq!(state.status.message(), "Drawing disabled");

    state.toggle_drawing();
    assert_eq!(state.toggle_label(), "Toggle Drawing: ON");
    assert_eq!(state.status.message(), "Drawing enabled");
}

#[test]
fn mouse_drag_draws_one_segment() {
    let mut state = create_test_input_state();
    let mut surface = RecordingSurface::new();

    state.on_mouse_press(MouseButton::Left, 10.0, 10.0);
    state.on_mouse_motion(50.0, 50.0, &mut surface);
    state.on_mouse_release(MouseButton::Left);
    state.on_mouse_motion(90.0, 90.0, &mut surface);

    assert_eq!(surface.segments(), vec![((10.0, 10.0), (50.0, 50.0))]);
    assert!(matches!(
        surface.frame.shapes[0],
        Shape::Segment { color, .. } if color == SKY
    ));
}

#[test]
fn mouse_press_is_ignored_while_disabled() {
    let mut state = create_test_input_state();
    let mut surface = RecordingSurface::new();
    state.toggle_drawing();

    state.on_mouse_press(MouseButton::Left, 10.0, 10.0);
    state.on_mouse_motion(50.0, 50.0, &mut surface);

    assert!(state.mouse_drag.is_none());
    assert!(surface.frame.is_empty());
}

#[test]
fn disabling_mid_drag_stops_mouse_segments() {
    let mut state = create_test_input_state();
    let mut surface = RecordingSurface::new();

    state.on_mouse_press(MouseButton::Left, 10.0, 10.0);
    state.on_mouse_motion(50.0, 50.0, &mut surface);
    state.toggle_drawing();
    state.on_mouse_motion(90.0, 90.0, &mut surface);
    state.on_mouse_motion(120.0, 40.0, &mut surface);

    assert_eq!(surface.segments(), vec![((10.0, 10.0), (50.0, 50.0))]);
}

#[test]
fn mouse_path_does_not_touch_pen_state() {
    let mut state = create_test_input_state();
    let mut surface = RecordingSurface::new();

    state.on_hand_result(Some(&pointing_at(0.5, 0.5)), &mut surface);
    state.on_mouse_press(MouseButton::Left, 10.0, 10.0);
    state.on_mouse_motion(20.0, 20.0, &mut surface);
    state.on_mouse_release(MouseButton::Left);
    state.on_hand_result(Some(&pointing_at(0.6, 0.5)), &mut surface);

    assert_eq!(
        surface.segments(),
        vec![
            ((10.0, 10.0), (20.0, 20.0)),
            ((320.0, 240.0), (384.0, 240.0)),
        ]
    );
}

#[test]
fn right_button_does_not_start_a_drag() {
    let mut state = create_test_input_state();
    state.on_mouse_press(MouseButton::Right, 10.0, 10.0);
    assert!(state.mouse_drag.is_none());
}

#[test]
fn clear_wipes_surface_and_reports() {
    let mut state = create_test_input_state();
    let mut surface = RecordingSurface::new();

    state.on_mouse_press(MouseButton::Left, 0.0, 0.0);
    state.on_mouse_motion(5.0, 5.0, &mut surface);
    state.clear_canvas(&mut surface);

    assert!(surface.frame.is_empty());
    assert_eq!(surface.clears, 1);
    assert_eq!(state.status.text(), "Status: Canvas cleared");
}
