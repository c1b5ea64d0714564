/*
The physics world: every rapier structure the pipeline needs, owned in one place.

Dropping a `PhysicsWorld` drops the body and collider sets with it, so
everything spawned in it goes away at the same time.

The `create_*` functions take screen pixels and do the pixel -> meter
conversion themselves, nothing else in the crate touches raw meters on
the way in.
*/

use crate::modules::config::PhysicsConfig;
use crate::modules::error::PhysicsError;
use crate::modules::shapes::{FixtureShape, polyline_indices};
use crate::modules::units::{pixel_point, pixel_vector, pixels_to_meters};
use rapier2d::prelude::*;

/// Density given to every spawned shape except circles
pub const DEFAULT_DENSITY: f32 = 1.0;

pub struct PhysicsWorld {
    gravity: Vector<Real>,
    integration_params: IntegrationParameters,
    pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: BroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd: CCDSolver,
    unit_mass_fallback: bool,
}

impl PhysicsWorld {
    pub fn new(config: &PhysicsConfig) -> Self {
        Self {
            // Positive Y points down in screen coordinates
            gravity: config.gravity,
            // Fixed 1/60 s step and solver iteration counts
            integration_params: config.integration_parameters(),
            // Orchestrates all physics computations each frame
            pipeline: PhysicsPipeline::new(),
            // Groups bodies that can interact, lets resting groups sleep
            island_manager: IslandManager::new(),
            // Coarse pass: throws out pairs that cannot possibly touch
            broad_phase: BroadPhase::new(),
            // Precise contacts for the pairs the broad phase kept
            narrow_phase: NarrowPhase::new(),
            // Ground plus everything spawned from the keyboard
            bodies: RigidBodySet::new(),
            // One collider per body here
            colliders: ColliderSet::new(),
            // Joints are never created but the pipeline wants both sets
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            // Continuous collision detection, keeps fast bodies from tunneling
            ccd: CCDSolver::new(),
            unit_mass_fallback: config.unit_mass_fallback,
        }
    }

    pub fn gravity(&self) -> Vector<Real> {
        self.gravity
    }

    /// Advance the simulation by one fixed timestep
    pub fn step(&mut self) {
        self.pipeline.step(
            &self.gravity,                // Pulls every dynamic body down the screen
            &self.integration_params,     // Timestep and solver iterations
            &mut self.island_manager,     // Groups of interacting bodies
            &mut self.broad_phase,        // Coarse collision detection
            &mut self.narrow_phase,       // Contact generation and resolution
            &mut self.bodies,             // Ground and spawned shapes
            &mut self.colliders,          // Their collision shapes
            &mut self.impulse_joints,     // Unused
            &mut self.multibody_joints,   // Unused
            &mut self.ccd,                // Continuous collision detection
            None,                         // No query pipeline, nothing raycasts
            &(),                          // No physics hooks
            &(),                          // No event handler
        );
    }

    pub fn bodies(&self) -> &RigidBodySet {
        &self.bodies
    }

    pub fn colliders(&self) -> &ColliderSet {
        &self.colliders
    }

    pub fn body(&self, handle: RigidBodyHandle) -> Option<&RigidBody> {
        self.bodies.get(handle)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Geometry of every collider attached to a body, in world meters
    pub fn fixtures(&self, handle: RigidBodyHandle) -> Vec<FixtureShape> {
        let Some(body) = self.bodies.get(handle) else {
            return Vec::new();
        };
        body.colliders()
            .iter()
            .filter_map(|h| self.colliders.get(*h))
            .filter_map(FixtureShape::from_collider)
            .collect()
    }

    /// Densities of every collider attached to a body
    pub fn densities(&self, handle: RigidBodyHandle) -> Vec<f32> {
        let Some(body) = self.bodies.get(handle) else {
            return Vec::new();
        };
        body.colliders()
            .iter()
            .filter_map(|h| self.colliders.get(*h))
            .map(|c| c.density())
            .collect()
    }

    /// Insert a body and attach one collider to it
    pub fn spawn(&mut self, body: RigidBodyBuilder, collider: Collider) -> RigidBodyHandle {
        // The collider follows its parent body from here on
        let handle = self.bodies.insert(body.build());
        self.colliders.insert_with_parent(collider, handle, &mut self.bodies);
        handle
    }

    /// Dynamic body at a pixel position carrying one collider.
    ///
    /// A collider with no mass (zero density, or a polyline, which has no
    /// area) gets 1 kg of extra mass on its body when the fallback is on,
    /// matching engines that refuse massless dynamic bodies.
    fn spawn_dynamic(&mut self, x: i32, y: i32, collider: ColliderBuilder) -> RigidBodyHandle {
        let collider = collider.build();
        let mut body = RigidBodyBuilder::dynamic().translation(pixel_vector(x as f32, y as f32));
        if self.unit_mass_fallback && collider.mass() <= 0.0 {
            body = body.additional_mass_properties(MassProperties::new(point![0.0, 0.0], 1.0, 0.0));
        }
        self.spawn(body, collider)
    }

    /// Fixed circle, used for the ground
    pub fn create_static_circle(&mut self, x: i32, y: i32, radius: f32) -> RigidBodyHandle {
        let body = RigidBodyBuilder::fixed().translation(pixel_vector(x as f32, y as f32));
        let collider = ColliderBuilder::ball(pixels_to_meters(radius)).build();
        self.spawn(body, collider)
    }

    pub fn create_circle(&mut self, x: i32, y: i32, radius: f32, density: f32) -> RigidBodyHandle {
        let collider = ColliderBuilder::ball(pixels_to_meters(radius)).density(density);
        self.spawn_dynamic(x, y, collider)
    }

    /// Box centred on (x, y); half extents use integer halving of the pixel size
    pub fn create_rectangle(&mut self, x: i32, y: i32, w: i32, h: i32) -> RigidBodyHandle {
        let collider = ColliderBuilder::cuboid(
            pixels_to_meters((w / 2) as f32),
            pixels_to_meters((h / 2) as f32),
        )
        .density(DEFAULT_DENSITY);
        self.spawn_dynamic(x, y, collider)
    }

    /// Open polyline through `points`, given as flat (x, y) pixel pairs relative to (x, y)
    pub fn create_chain(&mut self, x: i32, y: i32, points: &[i32]) -> Result<RigidBodyHandle, PhysicsError> {
        self.create_polyline(x, y, points, false)
    }

    /// Like `create_chain`, with the last vertex joined back to the first
    pub fn create_loop(&mut self, x: i32, y: i32, points: &[i32]) -> Result<RigidBodyHandle, PhysicsError> {
        self.create_polyline(x, y, points, true)
    }

    /// Single segment between two pixel points relative to (x, y)
    pub fn create_edge(&mut self, x: i32, y: i32, a: (i32, i32), b: (i32, i32)) -> RigidBodyHandle {
        let collider = ColliderBuilder::segment(pixel_point(a.0, a.1), pixel_point(b.0, b.1))
            .density(DEFAULT_DENSITY);
        self.spawn_dynamic(x, y, collider)
    }

    fn create_polyline(
        &mut self,
        x: i32,
        y: i32,
        points: &[i32],
        closed: bool,
    ) -> Result<RigidBodyHandle, PhysicsError> {
        // A trailing unpaired value is dropped, same as halving the length
        let vertices: Vec<Point<Real>> = points
            .chunks_exact(2)
            .map(|pair| pixel_point(pair[0], pair[1]))
            .collect();

        let needed = if closed { 3 } else { 2 };
        if vertices.len() < needed {
            return Err(PhysicsError::TooFewVertices { needed, got: vertices.len() });
        }

        let indices = polyline_indices(vertices.len(), closed);
        let collider = ColliderBuilder::polyline(vertices, Some(indices)).density(DEFAULT_DENSITY);
        Ok(self.spawn_dynamic(x, y, collider))
    }
}
