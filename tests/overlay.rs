//! What the debug overlay sends to the renderer

use physics_sandbox::{FrameInput, Module, ModulePhysics, RICK_HEAD, Renderer, Rgb};

const EPS: f32 = 1e-3;

#[derive(Debug, Clone, PartialEq)]
enum DrawCall {
    Circle { x: f32, y: f32, radius: f32, color: Rgb },
    Line { x1: f32, y1: f32, x2: f32, y2: f32, color: Rgb },
}

#[derive(Default)]
struct RecordingRenderer {
    calls: Vec<DrawCall>,
}

impl RecordingRenderer {
    fn lines_of(&self, wanted: Rgb) -> Vec<(f32, f32, f32, f32)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Line { x1, y1, x2, y2, color } if *color == wanted => Some((*x1, *y1, *x2, *y2)),
                _ => None,
            })
            .collect()
    }

    fn circles(&self) -> Vec<(f32, f32, f32)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Circle { x, y, radius, color } => {
                    assert_eq!(*color, Rgb::CIRCLE);
                    Some((*x, *y, *radius))
                }
                _ => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn draw_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgb) {
        self.calls.push(DrawCall::Circle { x, y, radius, color });
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Rgb) {
        self.calls.push(DrawCall::Line { x1, y1, x2, y2, color });
    }
}

fn started() -> ModulePhysics {
    let mut physics = ModulePhysics::default();
    physics.start().unwrap();
    physics
}

fn close(a: (f32, f32), b: (f32, f32)) -> bool {
    (a.0 - b.0).abs() < EPS && (a.1 - b.1).abs() < EPS
}

#[test]
fn test_ground_is_drawn_as_white_circle() {
    let mut physics = started();
    let mut renderer = RecordingRenderer::default();
    physics.post_update(&FrameInput::default(), &mut renderer);

    let circles = renderer.circles();
    assert_eq!(circles.len(), 1);
    let (x, y, radius) = circles[0];
    assert!(close((x, y), (512.0, 512.0)));
    assert!((radius - 256.0).abs() < EPS);
}

#[test]
fn test_hidden_overlay_draws_nothing() {
    let mut physics = started();
    physics.set_debug(false);
    physics.create_rectangle(100, 100, 50, 50).unwrap();

    let mut renderer = RecordingRenderer::default();
    physics.post_update(&FrameInput::default(), &mut renderer);
    assert!(renderer.calls.is_empty());
}

#[test]
fn test_toggle_on_same_frame_hides_overlay() {
    let mut physics = started();
    let mut renderer = RecordingRenderer::default();
    let toggle = FrameInput { toggle_debug: true, ..Default::default() };
    physics.post_update(&toggle, &mut renderer);
    assert!(renderer.calls.is_empty());
}

#[test]
fn test_box_is_closed_red_outline() {
    let mut physics = started();
    physics.create_rectangle(100, 100, 50, 50).unwrap();

    let mut renderer = RecordingRenderer::default();
    physics.post_update(&FrameInput::default(), &mut renderer);

    let lines = renderer.lines_of(Rgb::POLYGON);
    assert_eq!(lines.len(), 4);
    // Each line starts where the previous one ended and the last ends at the first
    for i in 0..4 {
        let (_, _, ex, ey) = lines[i];
        let (sx, sy, _, _) = lines[(i + 1) % 4];
        assert!(close((ex, ey), (sx, sy)));
    }
    for (x1, y1, _, _) in &lines {
        assert!(((x1 - 100.0).abs() - 25.0).abs() < EPS);
        assert!(((y1 - 100.0).abs() - 25.0).abs() < EPS);
    }
}

#[test]
fn test_loop_outline_has_one_line_per_vertex() {
    let mut physics = started();
    physics.create_loop(300, 200, &RICK_HEAD).unwrap();

    let mut renderer = RecordingRenderer::default();
    physics.post_update(&FrameInput::default(), &mut renderer);

    let lines = renderer.lines_of(Rgb::CHAIN);
    assert_eq!(lines.len(), 39);
    let (x1, y1, _, _) = lines[0];
    assert!(close((x1, y1), (284.0, 125.0)));
}

#[test]
fn test_open_chain_is_still_drawn_closed() {
    let mut physics = started();
    physics.create_chain(300, 200, &RICK_HEAD).unwrap();

    let mut renderer = RecordingRenderer::default();
    physics.post_update(&FrameInput::default(), &mut renderer);

    let lines = renderer.lines_of(Rgb::CHAIN);
    assert_eq!(lines.len(), 39);
    let (_, _, x2, y2) = lines[38];
    assert!(close((x2, y2), (284.0, 125.0)));
}

#[test]
fn test_edge_is_drawn_between_both_endpoints() {
    let mut physics = started();
    physics.create_edge(400, 100, (-50, -10), (50, 20)).unwrap();

    let mut renderer = RecordingRenderer::default();
    physics.post_update(&FrameInput::default(), &mut renderer);

    let lines = renderer.lines_of(Rgb::EDGE);
    assert_eq!(lines.len(), 1);
    let (x1, y1, x2, y2) = lines[0];
    assert!(close((x1, y1), (350.0, 90.0)));
    assert!(close((x2, y2), (450.0, 120.0)));
}

#[test]
fn test_spawn_is_drawn_on_the_same_frame() {
    let mut physics = started();
    let mut renderer = RecordingRenderer::default();
    let input = FrameInput { spawn_circle: true, ..FrameInput::at(700, 100) };
    physics.post_update(&input, &mut renderer);

    let circles = renderer.circles();
    assert_eq!(circles.len(), 2);
    assert!(circles.iter().any(|&(x, y, r)| close((x, y), (700.0, 100.0)) && (r - 25.0).abs() < EPS));
}
