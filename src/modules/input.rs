use macroquad::prelude::*;

/// Key-down edges and mouse position for one frame.
///
/// Every flag is true only on the frame the key goes down, never while it is held.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    pub spawn_circle: bool,
    pub spawn_box: bool,
    pub spawn_loop: bool,
    pub spawn_chain: bool,
    pub spawn_edge: bool,
    pub toggle_debug: bool,
    pub quit: bool,
    /// Mouse position in virtual screen pixels
    pub mouse: (i32, i32),
}

impl FrameInput {
    /// Idle frame with the mouse at (x, y)
    pub fn at(x: i32, y: i32) -> Self {
        Self { mouse: (x, y), ..Default::default() }
    }

    /// Read this frame's keys from macroquad; `mouse` is already mapped to virtual pixels
    pub fn poll(mouse: Vec2) -> Self {
        Self {
            spawn_circle: is_key_pressed(KeyCode::Key1),
            spawn_box: is_key_pressed(KeyCode::Key2),
            spawn_loop: is_key_pressed(KeyCode::Key3),
            spawn_chain: is_key_pressed(KeyCode::Key4),
            spawn_edge: is_key_pressed(KeyCode::Key5),
            toggle_debug: is_key_pressed(KeyCode::F1),
            quit: is_key_pressed(KeyCode::Escape),
            mouse: (mouse.x as i32, mouse.y as i32),
        }
    }
}
