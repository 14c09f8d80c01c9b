//! # pendulum
//! A driven, damped pendulum with live parameters.
//!
//! The pendulum obeys the normalized equation of motion
//! `theta'' = -sin(theta) - damping * theta' + drive_amp * sin(drive_freq * t)`,
//! integrated with the midpoint (Euler-Richardson) method in fixed micro-steps.
//!
//! ```
//! use pendulum::prelude::*;
//!
//! let mut simulation = Simulation::default();
//! simulation.params_mut().set("damping", 5.)?;
//! assert_eq!(simulation.params().get("damping")?, 1.);
//!
//! simulation.toggle();
//! let frame = simulation.tick();
//! assert_eq!(frame.tick, 1);
//! # Ok::<(), pendulum::Error>(())
//! ```
//!
//! ## Scheduling
//! [`Simulation::tick`] is one scheduler iteration. Drive it yourself, with the tokio
//! [`rt::Animator`] (feature `rt`), or from bevy with [`ecs::PendulumPlugin`]
//! (feature `ecs`).
//!
//! ## Features
//! - `rt`: Tokio animation task (enabled by default).
//! - `ecs`: Bevy plugin.
//! - `tracing`: Log events with `tracing` (enabled by default).

#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

/// Prelude of commonly-used types.
/// `use pendulum::prelude::*;`
pub mod prelude {
    pub use crate::{
        project, Error, Frame, Geometry, Integrator, Parameter, ParameterSpec, ParameterStore,
        PendulumState, PhysicalParameters, Projection, Result, RunController, RunState,
        Simulation,
    };

    #[cfg(feature = "rt")]
    #[cfg_attr(docsrs, doc(cfg(feature = "rt")))]
    pub use crate::rt::Animator;

    #[cfg(feature = "ecs")]
    #[cfg_attr(docsrs, doc(cfg(feature = "ecs")))]
    pub use crate::ecs::{Pendulum, PendulumFrame, PendulumPlugin};
}

mod error;
pub use self::error::{Error, Result};

pub mod integrator;
pub use self::integrator::{torque, Integrator};

mod params;
pub use self::params::{Parameter, ParameterSpec, ParameterStore, PhysicalParameters};

pub mod projection;
pub use self::projection::{project, Bounds, Geometry, Point, Projection};

mod run;
pub use self::run::{RunController, RunState};

mod simulation;
pub use self::simulation::{Builder, Frame, Simulation};

mod state;
pub use self::state::PendulumState;

#[cfg(feature = "ecs")]
#[cfg_attr(docsrs, doc(cfg(feature = "ecs")))]
pub mod ecs;

#[cfg(feature = "rt")]
#[cfg_attr(docsrs, doc(cfg(feature = "rt")))]
pub mod rt;
