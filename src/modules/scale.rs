/*
Virtual resolution: lay the game out at a fixed size (1024x768 here) and let
the window be any size. The picture is scaled to fit and centred, with bars
on the sides or top/bottom.

Call `use_virtual_resolution` at the top of every frame, before drawing, and
run mouse positions through `screen_to_virtual` before using them.
*/

use macroquad::prelude::*;

/// Where the virtual screen landed inside the real window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Letterbox {
    pub scale: f32,
    pub offset: Vec2,
}

impl Letterbox {
    /// Fit a `virtual_w` x `virtual_h` screen inside a `window_w` x `window_h` window
    pub fn fit(window_w: f32, window_h: f32, virtual_w: f32, virtual_h: f32) -> Self {
        let scale = (window_w / virtual_w).min(window_h / virtual_h);
        let offset = vec2(
            (window_w - virtual_w * scale) * 0.5,
            (window_h - virtual_h * scale) * 0.5,
        );
        Self { scale, offset }
    }

    pub fn to_virtual(&self, screen: Vec2) -> Vec2 {
        (screen - self.offset) / self.scale
    }
}

/// Set a camera showing exactly the virtual screen, letterboxed in the window
#[cfg(feature = "scale")]
pub fn use_virtual_resolution(width: f32, height: f32) -> Letterbox {
    let letterbox = Letterbox::fit(screen_width(), screen_height(), width, height);
    let viewport_w = width * letterbox.scale;
    let viewport_h = height * letterbox.scale;

    set_camera(&Camera2D {
        target: vec2(width * 0.5, height * 0.5),
        zoom: vec2(2.0 / width, 2.0 / height),
        viewport: Some((
            letterbox.offset.x as i32,
            letterbox.offset.y as i32,
            viewport_w as i32,
            viewport_h as i32,
        )),
        ..Default::default()
    });

    letterbox
}

/// Without the `scale` feature the window is used 1:1
#[cfg(not(feature = "scale"))]
pub fn use_virtual_resolution(_width: f32, _height: f32) -> Letterbox {
    set_default_camera();
    Letterbox { scale: 1.0, offset: Vec2::ZERO }
}

/// Window pixel position to virtual screen pixels
pub fn screen_to_virtual(letterbox: &Letterbox, screen: (f32, f32)) -> Vec2 {
    letterbox.to_virtual(vec2(screen.0, screen.1))
}
