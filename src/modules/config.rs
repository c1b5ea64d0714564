use rapier2d::prelude::*;

/// Virtual screen size the sandbox is laid out for
pub const SCREEN_WIDTH: i32 = 1024;
pub const SCREEN_HEIGHT: i32 = 768;

/// Tuning values for the physics driver.
///
/// The defaults mirror the classic Box2D sample setup: a fixed 60 Hz step,
/// 6 velocity and 2 position iterations, and a gravity of 7 m/s² pointing
/// down the screen (positive Y is down in screen coordinates).
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsConfig {
    pub screen_width: i32,
    pub screen_height: i32,
    /// Gravity in meters per second squared
    pub gravity: Vector<Real>,
    /// Fixed step length in seconds
    pub timestep: f32,
    pub velocity_iterations: usize,
    pub position_iterations: usize,
    /// Density given to circles spawned with `create_circle`.
    /// Zero reproduces a fixture whose density was never set.
    pub circle_density: f32,
    /// Give massless dynamic bodies 1 kg so they still fall.
    pub unit_mass_fallback: bool,
    /// Whether the debug overlay starts visible
    pub debug_on_start: bool,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            gravity: vector![0.0, 7.0],
            timestep: 1.0 / 60.0,
            velocity_iterations: 6,
            position_iterations: 2,
            circle_density: 0.0,
            unit_mass_fallback: true,
            debug_on_start: true,
        }
    }
}

impl PhysicsConfig {
    pub fn with_screen(mut self, width: i32, height: i32) -> Self {
        self.screen_width = width;
        self.screen_height = height;
        self
    }

    pub fn with_gravity(mut self, x: f32, y: f32) -> Self {
        self.gravity = vector![x, y];
        self
    }

    pub fn with_timestep(mut self, timestep: f32) -> Self {
        self.timestep = timestep;
        self
    }

    pub fn with_iterations(mut self, velocity: usize, position: usize) -> Self {
        self.velocity_iterations = velocity;
        self.position_iterations = position;
        self
    }

    pub fn with_circle_density(mut self, density: f32) -> Self {
        self.circle_density = density;
        self
    }

    pub fn with_unit_mass_fallback(mut self, enabled: bool) -> Self {
        self.unit_mass_fallback = enabled;
        self
    }

    pub fn with_debug_on_start(mut self, visible: bool) -> Self {
        self.debug_on_start = visible;
        self
    }

    /// Rapier step settings derived from this config
    pub fn integration_parameters(&self) -> IntegrationParameters {
        let mut params = IntegrationParameters::default();
        params.dt = self.timestep;
        if let Some(iterations) = std::num::NonZeroUsize::new(self.velocity_iterations) {
            params.num_solver_iterations = iterations;
        }
        params.num_internal_pgs_iterations = self.position_iterations;
        params
    }

    /// Ground circle centre in pixels: middle of the screen, two thirds down
    pub fn ground_center(&self) -> (i32, i32) {
        (
            self.screen_width / 2,
            (self.screen_height as f32 / 1.5) as i32,
        )
    }

    /// Ground circle radius in pixels (diameter is half the screen width)
    pub fn ground_radius(&self) -> f32 {
        (self.screen_width / 2) as f32 * 0.5
    }
}
