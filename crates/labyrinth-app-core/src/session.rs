// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! A generated maze plus one agent walking through it.

use labyrinth_core::math::{Mat4, Vec3};
use labyrinth_maze::{
    CollisionResolver, GridError, LayoutBuilder, LayoutError, MazeGenerator, Resolution,
    SpatialLayout, VolumeId,
};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::ConfigError;
use crate::settings::MazeSettings;

/// Mixed into the maze seed so scattering draws from its own stream.
const SAMPLER_SALT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Errors raised while setting up a session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Settings failed validation.
    #[error(transparent)]
    Settings(#[from] ConfigError),
    /// Grid generation failed.
    #[error(transparent)]
    Grid(#[from] GridError),
    /// Scattering or spawning found no open cell.
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// One simulated step.
#[derive(Debug, Clone)]
pub struct StepReport {
    /// Resolver outcome for the step.
    pub resolution: Resolution,
    /// Volumes whose collided flag rose on this step.
    pub new_contacts: Vec<VolumeId>,
}

/// Owns the layout, the resolver and the agent pose.
#[derive(Debug, Clone)]
pub struct MazeSession {
    settings: MazeSettings,
    layout: SpatialLayout,
    resolver: CollisionResolver,
    position: Vec3,
    heading: f32,
}

impl MazeSession {
    /// Generates a maze from `settings` and spawns the agent on a random open cell.
    pub fn new(settings: MazeSettings) -> Result<Self, SessionError> {
        settings.validate()?;
        let grid = MazeGenerator::new(settings.seed).generate(settings.width, settings.height)?;
        let mut builder = LayoutBuilder::new(grid)
            .with_sampler_seed(settings.seed ^ SAMPLER_SALT)
            .with_sampling_budget(settings.sampling_attempts);
        builder.scatter_obstacles(settings.obstacles)?;
        builder.scatter_triggers(settings.triggers)?;
        let mut layout = builder.build();
        let position = layout.random_open_position()?;
        info!(
            seed = settings.seed,
            volumes = layout.len(),
            spawn = ?position.to_array(),
            "session started"
        );
        Ok(Self::from_layout(settings, layout, position))
    }

    /// Wraps an existing layout with the agent at `position`.
    pub fn from_layout(settings: MazeSettings, layout: SpatialLayout, position: Vec3) -> Self {
        Self {
            resolver: CollisionResolver::new(settings.contact_policy),
            settings,
            layout,
            position,
            heading: 0.0,
        }
    }

    /// Active settings.
    pub fn settings(&self) -> &MazeSettings {
        &self.settings
    }

    /// The layout being walked.
    pub fn layout(&self) -> &SpatialLayout {
        &self.layout
    }

    /// Current agent position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Heading in radians about +Y; zero faces +Z.
    pub fn heading(&self) -> f32 {
        self.heading
    }

    /// Sets the heading in radians.
    pub fn set_heading(&mut self, radians: f32) {
        self.heading = radians;
    }

    /// Rotates the heading by `radians`.
    pub fn turn(&mut self, radians: f32) {
        self.heading += radians;
    }

    /// Unit vector the agent walks along.
    pub fn forward(&self) -> Vec3 {
        Mat4::rotation_y(self.heading).transform_direction(&Vec3::UNIT_Z)
    }

    /// Walks forward for `dt` seconds at the configured speed.
    pub fn step(&mut self, dt: f32) -> StepReport {
        let displacement = self.forward().scale(self.settings.walk_speed * dt);
        self.displace(displacement)
    }

    /// Applies an arbitrary displacement through the resolver.
    pub fn displace(&mut self, displacement: Vec3) -> StepReport {
        let half = self.settings.half_extent();
        let resolution = self.resolver.probe(&self.layout, self.position, displacement, half);
        let new_contacts = self.resolver.record_contacts(&mut self.layout, &resolution);
        self.position = resolution.position;
        debug!(
            position = ?self.position.to_array(),
            blocked = resolution.blocked(),
            "agent stepped"
        );
        StepReport { resolution, new_contacts }
    }
}
