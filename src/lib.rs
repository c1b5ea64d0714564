/*
By: <Draydon Levesque>
Date: 2026-10-19
Program Details: <Physics sandbox: spawn shapes with the keyboard and watch them fall>
*/

pub mod modules;

pub use crate::modules::config::{PhysicsConfig, SCREEN_HEIGHT, SCREEN_WIDTH};
pub use crate::modules::driver::{Module, ModulePhysics, RICK_HEAD, UpdateStatus};
pub use crate::modules::error::PhysicsError;
pub use crate::modules::input::FrameInput;
pub use crate::modules::physics::PhysicsWorld;
pub use crate::modules::render::{Renderer, Rgb, ScreenRenderer, draw_debug};
pub use crate::modules::shapes::FixtureShape;
