//! Bevy integration.
//!
//! [`PendulumPlugin`] ticks a [`Simulation`] in the [`FixedUpdate`] schedule, with the
//! fixed timestep set to the simulation's frame period. The app must also include
//! bevy's time plugin (as in `DefaultPlugins` or `MinimalPlugins`) for the schedule
//! to run on its own.

use crate::{Frame, Simulation};
use bevy_app::{App, FixedUpdate, Plugin};
use bevy_ecs::prelude::*;
use bevy_time::{Fixed, Time};
use core::ops::{Deref, DerefMut};

/// Plugin to animate a [`Simulation`].
#[derive(Default)]
pub struct PendulumPlugin {
    simulation: Simulation,
}

impl PendulumPlugin {
    /// Create a new plugin animating `simulation`.
    pub fn new(simulation: Simulation) -> Self {
        Self { simulation }
    }
}

impl Plugin for PendulumPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_duration(
            self.simulation.frame_period(),
        ))
        .insert_resource(PendulumFrame(self.simulation.frame()))
        .insert_resource(Pendulum(self.simulation.clone()))
        .add_systems(FixedUpdate, tick_pendulum.in_set(PendulumSystems));
    }
}

/// System set containing the pendulum tick.
#[derive(Clone, Debug, PartialEq, Eq, Hash, SystemSet)]
pub struct PendulumSystems;

/// Resource holding the running [`Simulation`].
///
/// Systems toggle the run state and adjust parameters through this resource.
#[derive(Clone, Debug, Resource)]
pub struct Pendulum(pub Simulation);

impl Deref for Pendulum {
    type Target = Simulation;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Pendulum {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// Resource holding the latest [`Frame`], for rendering systems.
#[derive(Clone, Copy, Debug, PartialEq, Resource)]
pub struct PendulumFrame(pub Frame);

/// Advance the pendulum by one tick and publish its frame.
pub fn tick_pendulum(mut pendulum: ResMut<Pendulum>, mut frame: ResMut<PendulumFrame>) {
    frame.0 = pendulum.tick();
}
