use crate::{
    Geometry, Integrator, Parameter, ParameterSpec, ParameterStore, PendulumState,
    PhysicalParameters, Projection, Result, RunController, RunState,
};
use core::time::Duration;

/// Immutable snapshot of the simulation after one scheduler tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// Number of ticks that advanced the state.
    pub tick: u64,
    /// Pendulum state.
    pub state: PendulumState,
    /// Parameters in effect.
    pub params: PhysicalParameters,
    /// Run state at the end of the tick.
    pub run_state: RunState,
    /// Drawable positions for `state.theta`.
    pub projection: Projection,
}

/// A driven, damped pendulum with its parameters, run switch and geometry.
#[derive(Clone, Debug)]
pub struct Simulation {
    integrator: Integrator,
    state: PendulumState,
    params: ParameterStore,
    run: RunController,
    geometry: Geometry,
    frame_period: Duration,
    ticks: u64,
}

impl Simulation {
    /// Default wall-clock pause between ticks.
    pub const DEFAULT_FRAME_PERIOD: Duration = Duration::from_millis(10);

    /// Create a [`Builder`] for a new simulation.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Run one scheduler iteration.
    ///
    /// If running, this advances the pendulum by one macro-step with a single
    /// parameter snapshot. A paused tick leaves the state untouched.
    pub fn tick(&mut self) -> Frame {
        if self.run.is_running() {
            let params = self.params.snapshot();
            self.integrator.advance(&mut self.state, &params);
            self.ticks += 1;

            #[cfg(feature = "tracing")]
            tracing::trace!(
                tick = self.ticks,
                t = self.state.t,
                theta = self.state.theta,
                "advanced"
            );
        }

        self.frame()
    }

    /// Snapshot of the current state.
    pub fn frame(&self) -> Frame {
        Frame {
            tick: self.ticks,
            state: self.state,
            params: self.params.snapshot(),
            run_state: self.run.state(),
            projection: self.geometry.project(self.state.theta),
        }
    }

    /// Current pendulum state.
    pub fn state(&self) -> &PendulumState {
        &self.state
    }

    /// Parameter store.
    pub fn params(&self) -> &ParameterStore {
        &self.params
    }

    /// Mutable parameter store.
    pub fn params_mut(&mut self) -> &mut ParameterStore {
        &mut self.params
    }

    /// Run switch.
    pub fn run_controller(&self) -> &RunController {
        &self.run
    }

    /// Mutable run switch.
    pub fn run_controller_mut(&mut self) -> &mut RunController {
        &mut self.run
    }

    /// Switch between running and paused.
    pub fn toggle(&mut self) {
        self.run.toggle()
    }

    /// Returns `true` if ticks currently advance the simulation.
    pub fn is_running(&self) -> bool {
        self.run.is_running()
    }

    /// Integrator settings.
    pub fn integrator(&self) -> &Integrator {
        &self.integrator
    }

    /// Drawing geometry.
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Wall-clock pause between ticks.
    pub fn frame_period(&self) -> Duration {
        self.frame_period
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self {
            integrator: Integrator::default(),
            state: PendulumState::default(),
            params: ParameterStore::default(),
            run: RunController::default(),
            geometry: Geometry::default(),
            frame_period: Self::DEFAULT_FRAME_PERIOD,
            ticks: 0,
        }
    }
}

/// Builder for a [`Simulation`].
#[derive(Clone, Debug)]
pub struct Builder {
    dt: f64,
    interval: f64,
    frame_period: Duration,
    state: PendulumState,
    specs: Vec<(Parameter, ParameterSpec)>,
    values: Vec<(Parameter, f64)>,
    geometry: Geometry,
    run_state: RunState,
}

impl Builder {
    /// Set the integration micro-step (seconds).
    pub fn dt(&mut self, dt: f64) -> &mut Self {
        self.dt = dt;
        self
    }

    /// Set the simulated time covered by each tick (seconds).
    pub fn interval(&mut self, interval: f64) -> &mut Self {
        self.interval = interval;
        self
    }

    /// Set the wall-clock pause between ticks.
    pub fn frame_period(&mut self, frame_period: Duration) -> &mut Self {
        self.frame_period = frame_period;
        self
    }

    /// Set the initial pendulum state.
    pub fn initial_state(&mut self, state: PendulumState) -> &mut Self {
        self.state = state;
        self
    }

    /// Declare the range of a parameter.
    pub fn parameter_spec(&mut self, parameter: Parameter, spec: ParameterSpec) -> &mut Self {
        self.specs.push((parameter, spec));
        self
    }

    /// Set the initial value of a parameter, clamped to its range.
    pub fn parameter(&mut self, parameter: Parameter, value: f64) -> &mut Self {
        self.values.push((parameter, value));
        self
    }

    /// Set the drawing geometry.
    pub fn geometry(&mut self, geometry: Geometry) -> &mut Self {
        self.geometry = geometry;
        self
    }

    /// Start running instead of paused.
    pub fn running(&mut self, is_running: bool) -> &mut Self {
        self.run_state = if is_running {
            RunState::Running
        } else {
            RunState::Paused
        };
        self
    }

    /// Build the simulation.
    pub fn build(&mut self) -> Result<Simulation> {
        let integrator = Integrator::new(self.dt, self.interval)?;

        if self.frame_period.is_zero() {
            return Err(crate::Error::InvalidFramePeriod);
        }

        let mut params = ParameterStore::default();
        for (parameter, spec) in &self.specs {
            params.set_spec(*parameter, *spec)?;
        }
        for (parameter, value) in &self.values {
            params.set_parameter(*parameter, *value);
        }

        Ok(Simulation {
            integrator,
            state: self.state,
            params,
            run: RunController::new(self.run_state),
            geometry: self.geometry,
            frame_period: self.frame_period,
            ticks: 0,
        })
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dt: Integrator::DEFAULT_DT,
            interval: Integrator::DEFAULT_INTERVAL,
            frame_period: Simulation::DEFAULT_FRAME_PERIOD,
            state: PendulumState::default(),
            specs: Vec::new(),
            values: Vec::new(),
            geometry: Geometry::default(),
            run_state: RunState::Paused,
        }
    }
}
