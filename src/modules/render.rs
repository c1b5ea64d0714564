/*
Debug overlay for the physics world.

The overlay only talks to a `Renderer`, so the same drawing code runs
against macroquad in the game and against a recorder in the tests.

    let mut screen = ScreenRenderer::default();
    draw_debug(&world, &mut screen);
*/

use crate::modules::physics::PhysicsWorld;
use crate::modules::shapes::FixtureShape;
use crate::modules::units::{meters_to_pixels, point_to_pixels};
use macroquad::prelude::*;
use rapier2d::prelude::{Point, Real};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const CIRCLE: Rgb = Rgb(255, 255, 255);
    pub const POLYGON: Rgb = Rgb(255, 100, 100);
    pub const CHAIN: Rgb = Rgb(100, 255, 100);
    pub const EDGE: Rgb = Rgb(100, 100, 255);
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::from_rgba(rgb.0, rgb.1, rgb.2, 255)
    }
}

/// Anything that can draw outlines in screen pixels
pub trait Renderer {
    fn draw_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgb);
    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Rgb);
}

/// Draws straight to the macroquad window
pub struct ScreenRenderer {
    pub thickness: f32,
}

impl Default for ScreenRenderer {
    fn default() -> Self {
        Self { thickness: 1.5 }
    }
}

impl Renderer for ScreenRenderer {
    fn draw_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgb) {
        draw_circle_lines(x, y, radius, self.thickness, color.into());
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Rgb) {
        draw_line(x1, y1, x2, y2, self.thickness, color.into());
    }
}

/// Walk every body and every collider on it and draw its outline
pub fn draw_debug<R: Renderer>(world: &PhysicsWorld, renderer: &mut R) {
    for (_handle, body) in world.bodies().iter() {
        let pos = body.translation();

        for col_handle in body.colliders() {
            let Some(collider) = world.colliders().get(*col_handle) else {
                continue;
            };
            let Some(shape) = FixtureShape::from_collider(collider) else {
                continue;
            };

            match shape {
                FixtureShape::Circle { radius, .. } => {
                    renderer.draw_circle(
                        meters_to_pixels(pos.x),
                        meters_to_pixels(pos.y),
                        meters_to_pixels(radius),
                        Rgb::CIRCLE,
                    );
                }
                FixtureShape::Polygon { vertices } => {
                    draw_outline(renderer, &vertices, Rgb::POLYGON);
                }
                // Open chains are drawn closed as well
                FixtureShape::Chain { vertices, .. } => {
                    draw_outline(renderer, &vertices, Rgb::CHAIN);
                }
                FixtureShape::Edge { a, b } => {
                    let (x1, y1) = point_to_pixels(&a);
                    let (x2, y2) = point_to_pixels(&b);
                    renderer.draw_line(x1, y1, x2, y2, Rgb::EDGE);
                }
            }
        }
    }
}

/// Lines through every vertex, then one more from the last back to the first
fn draw_outline<R: Renderer>(renderer: &mut R, vertices: &[Point<Real>], color: Rgb) {
    let (Some(first), Some(last)) = (vertices.first(), vertices.last()) else {
        return;
    };

    for pair in vertices.windows(2) {
        let (x1, y1) = point_to_pixels(&pair[0]);
        let (x2, y2) = point_to_pixels(&pair[1]);
        renderer.draw_line(x1, y1, x2, y2, color);
    }

    let (x1, y1) = point_to_pixels(last);
    let (x2, y2) = point_to_pixels(first);
    renderer.draw_line(x1, y1, x2, y2, color);
}
