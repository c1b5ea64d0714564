/*
The physics module of the game loop.

    let mut physics = ModulePhysics::new(PhysicsConfig::default());
    physics.start()?;
    loop {
        physics.pre_update();                        // step the world
        physics.post_update(&input, &mut renderer);  // spawn, toggle, draw
    }
    physics.clean_up()?;

Keys: 1 circle, 2 box, 3 Rick's head (closed loop), 4 Rick's head (open
chain), 5 edge, F1 debug overlay on/off, Escape quit.
*/

use crate::modules::config::PhysicsConfig;
use crate::modules::error::PhysicsError;
use crate::modules::input::FrameInput;
use crate::modules::physics::PhysicsWorld;
use crate::modules::render::{Renderer, draw_debug};
use log::{debug, info, warn};
use rapier2d::prelude::RigidBodyHandle;

/// What the game loop should do after an update phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateStatus {
    Continue,
    Stop,
    Error,
}

/// Lifecycle every game-loop module follows
pub trait Module {
    fn start(&mut self) -> Result<(), PhysicsError>;
    fn pre_update(&mut self) -> UpdateStatus;
    fn post_update<R: Renderer>(&mut self, input: &FrameInput, renderer: &mut R) -> UpdateStatus;
    fn clean_up(&mut self) -> Result<(), PhysicsError>;
}

pub const SPAWN_CIRCLE_RADIUS: f32 = 25.0;
pub const SPAWN_BOX_SIZE: i32 = 50;
/// Edge spawned with key 5, centred on the mouse
pub const SPAWN_EDGE_HALF_LENGTH: i32 = 50;

/// Outline of Rick's head as flat (x, y) pixel pairs around its centre
pub const RICK_HEAD: [i32; 78] = [
    -16, -75,
    -15, -35,
    -44, -38,
    -27, -12,
    -58, 2,
    -27, 16,
    -47, 28,
    -26, 40,
    -34, 50,
    -18, 51,
    -23, 62,
    -12, 58,
    -9, 63,
    -3, 69,
    4, 72,
    14, 74,
    27, 73,
    35, 66,
    40, 58,
    41, 52,
    46, 52,
    48, 48,
    44, 42,
    45, 31,
    53, 26,
    49, 19,
    53, 13,
    53, 3,
    51, -1,
    59, -8,
    49, -12,
    47, -16,
    54, -39,
    37, -34,
    36, -53,
    30, -70,
    24, -56,
    18, -42,
    4, -58,
];

pub struct ModulePhysics {
    config: PhysicsConfig,
    world: Option<PhysicsWorld>,
    ground: Option<RigidBodyHandle>,
    debug: bool,
}

impl ModulePhysics {
    pub fn new(config: PhysicsConfig) -> Self {
        let debug = config.debug_on_start;
        Self { config, world: None, ground: None, debug }
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    pub fn is_started(&self) -> bool {
        self.world.is_some()
    }

    pub fn world(&self) -> Option<&PhysicsWorld> {
        self.world.as_ref()
    }

    /// The big static circle created by `start`
    pub fn ground(&self) -> Option<RigidBodyHandle> {
        self.ground
    }

    pub fn body_count(&self) -> usize {
        self.world.as_ref().map_or(0, |w| w.body_count())
    }

    pub fn debug_enabled(&self) -> bool {
        self.debug
    }

    pub fn set_debug(&mut self, visible: bool) {
        self.debug = visible;
    }

    pub fn toggle_debug(&mut self) {
        self.debug = !self.debug;
        debug!("Debug overlay {}", if self.debug { "on" } else { "off" });
    }

    fn world_mut(&mut self) -> Result<&mut PhysicsWorld, PhysicsError> {
        self.world.as_mut().ok_or(PhysicsError::NotStarted)
    }

    /// Log what just landed in the world, by the kind of its collider
    fn log_spawn(&self, handle: RigidBodyHandle, x: i32, y: i32) {
        let Some(world) = self.world.as_ref() else {
            return;
        };
        for shape in world.fixtures(handle) {
            debug!("Spawned {} at ({x}, {y})", shape.kind());
        }
    }

    /// Dynamic circle; density comes from `PhysicsConfig::circle_density`
    pub fn create_circle(&mut self, x: i32, y: i32, radius: f32) -> Result<RigidBodyHandle, PhysicsError> {
        let density = self.config.circle_density;
        let handle = self.world_mut()?.create_circle(x, y, radius, density);
        self.log_spawn(handle, x, y);
        Ok(handle)
    }

    pub fn create_rectangle(&mut self, x: i32, y: i32, w: i32, h: i32) -> Result<RigidBodyHandle, PhysicsError> {
        let handle = self.world_mut()?.create_rectangle(x, y, w, h);
        self.log_spawn(handle, x, y);
        Ok(handle)
    }

    pub fn create_chain(&mut self, x: i32, y: i32, points: &[i32]) -> Result<RigidBodyHandle, PhysicsError> {
        let handle = self.world_mut()?.create_chain(x, y, points)?;
        self.log_spawn(handle, x, y);
        Ok(handle)
    }

    pub fn create_loop(&mut self, x: i32, y: i32, points: &[i32]) -> Result<RigidBodyHandle, PhysicsError> {
        let handle = self.world_mut()?.create_loop(x, y, points)?;
        self.log_spawn(handle, x, y);
        Ok(handle)
    }

    pub fn create_edge(
        &mut self,
        x: i32,
        y: i32,
        a: (i32, i32),
        b: (i32, i32),
    ) -> Result<RigidBodyHandle, PhysicsError> {
        let handle = self.world_mut()?.create_edge(x, y, a, b);
        self.log_spawn(handle, x, y);
        Ok(handle)
    }

    fn handle_spawn_keys(&mut self, input: &FrameInput) {
        let (mx, my) = input.mouse;

        if input.spawn_circle {
            report("circle", self.create_circle(mx, my, SPAWN_CIRCLE_RADIUS));
        }
        if input.spawn_box {
            report("box", self.create_rectangle(mx, my, SPAWN_BOX_SIZE, SPAWN_BOX_SIZE));
        }
        if input.spawn_loop {
            report("loop", self.create_loop(mx, my, &RICK_HEAD));
        }
        if input.spawn_chain {
            report("chain", self.create_chain(mx, my, &RICK_HEAD));
        }
        if input.spawn_edge {
            let half = SPAWN_EDGE_HALF_LENGTH;
            report("edge", self.create_edge(mx, my, (-half, 0), (half, 0)));
        }
    }
}

/// A failed spawn only costs the user that one shape
fn report(kind: &str, result: Result<RigidBodyHandle, PhysicsError>) {
    if let Err(err) = result {
        warn!("Could not spawn {kind}: {err}");
    }
}

impl Default for ModulePhysics {
    fn default() -> Self {
        Self::new(PhysicsConfig::default())
    }
}

impl Module for ModulePhysics {
    fn start(&mut self) -> Result<(), PhysicsError> {
        info!("Creating Physics 2D environment");

        let mut world = PhysicsWorld::new(&self.config);

        // Big static circle as "ground" in the middle of the screen
        let (x, y) = self.config.ground_center();
        let ground = world.create_static_circle(x, y, self.config.ground_radius());

        self.world = Some(world);
        self.ground = Some(ground);
        Ok(())
    }

    fn pre_update(&mut self) -> UpdateStatus {
        match self.world.as_mut() {
            Some(world) => {
                world.step();
                UpdateStatus::Continue
            }
            None => UpdateStatus::Error,
        }
    }

    fn post_update<R: Renderer>(&mut self, input: &FrameInput, renderer: &mut R) -> UpdateStatus {
        if self.world.is_none() {
            return UpdateStatus::Error;
        }

        self.handle_spawn_keys(input);

        if input.toggle_debug {
            self.toggle_debug();
        }

        if self.debug {
            if let Some(world) = self.world.as_ref() {
                draw_debug(world, renderer);
            }
        }

        if input.quit {
            return UpdateStatus::Stop;
        }
        UpdateStatus::Continue
    }

    fn clean_up(&mut self) -> Result<(), PhysicsError> {
        if self.world.take().is_some() {
            info!("Destroying physics world");
        }
        self.ground = None;
        Ok(())
    }
}
