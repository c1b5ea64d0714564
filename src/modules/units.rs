/*
Pixel <-> meter conversion.

Rapier works best with objects between 0.1 and 10 meters, so every
pixel value that goes into the physics world passes through here first,
and every meter value that comes back out for drawing passes through
here too.

    use crate::modules::units::{pixels_to_meters, meters_to_pixels};
    let body_pos = vector![pixels_to_meters(mouse_x), pixels_to_meters(mouse_y)];
*/

use rapier2d::prelude::*;

/// How many screen pixels make up one physics meter
pub const PIXELS_PER_METER: f32 = 50.0;
pub const METERS_PER_PIXEL: f32 = 1.0 / PIXELS_PER_METER;

#[inline]
pub fn pixels_to_meters(pixels: f32) -> f32 {
    pixels * METERS_PER_PIXEL
}

#[inline]
pub fn meters_to_pixels(meters: f32) -> f32 {
    meters * PIXELS_PER_METER
}

/// Integer pixel pair (x, y) to a physics point
#[inline]
pub fn pixel_point(x: i32, y: i32) -> Point<Real> {
    point![pixels_to_meters(x as f32), pixels_to_meters(y as f32)]
}

/// Screen position (in pixels) to a physics translation
#[inline]
pub fn pixel_vector(x: f32, y: f32) -> Vector<Real> {
    vector![pixels_to_meters(x), pixels_to_meters(y)]
}

/// Physics point back to a screen position (x, y) in pixels
#[inline]
pub fn point_to_pixels(p: &Point<Real>) -> (f32, f32) {
    (meters_to_pixels(p.x), meters_to_pixels(p.y))
}
