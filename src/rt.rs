//! Fixed-rate animation on a tokio runtime.
//!
//! The [`Animator`] owns a [`Simulation`] inside a background task that ticks once per
//! frame period. Parameter and run-state changes travel to the task over
//! [`watch`] channels and every tick publishes an immutable [`Frame`] back, so readers
//! never observe a half-updated state.

use crate::{Frame, Parameter, ParameterStore, PhysicalParameters, Result, RunController, Simulation};
use futures::{stream, Stream};
use tokio::{
    runtime::Handle,
    sync::{oneshot, watch},
    task::JoinHandle,
    time::{self, MissedTickBehavior},
};

/// Handle to a running animation task.
///
/// Dropping the handle stops the task after its current tick.
pub struct Animator {
    params: watch::Sender<ParameterStore>,
    run: watch::Sender<RunController>,
    frames: watch::Receiver<Frame>,
    stop: oneshot::Sender<()>,
    task: JoinHandle<Simulation>,
}

impl Animator {
    /// Spawn the animation task on the current tokio runtime.
    ///
    /// # Panics
    /// Panics if called outside of a tokio runtime.
    pub fn spawn(simulation: Simulation) -> Self {
        Self::spawn_on(&Handle::current(), simulation)
    }

    /// Spawn the animation task on the runtime behind `handle`.
    pub fn spawn_on(handle: &Handle, simulation: Simulation) -> Self {
        let (params_tx, params_rx) = watch::channel(*simulation.params());
        let (run_tx, run_rx) = watch::channel(*simulation.run_controller());
        let (frame_tx, frame_rx) = watch::channel(simulation.frame());
        let (stop_tx, stop_rx) = oneshot::channel();

        let task = handle.spawn(animate(simulation, params_rx, run_rx, frame_tx, stop_rx));

        Self {
            params: params_tx,
            run: run_tx,
            frames: frame_rx,
            stop: stop_tx,
            task,
        }
    }

    /// Set a parameter by name, returning the stored (clamped) value.
    pub fn set(&self, name: &str, value: f64) -> Result<f64> {
        let parameter = name.parse()?;
        Ok(self.set_parameter(parameter, value))
    }

    /// Get a parameter by name.
    pub fn get(&self, name: &str) -> Result<f64> {
        self.params.borrow().get(name)
    }

    /// Set `parameter`, returning the stored (clamped) value.
    pub fn set_parameter(&self, parameter: Parameter, value: f64) -> f64 {
        let mut stored = value;
        self.params
            .send_modify(|params| stored = params.set_parameter(parameter, value));
        stored
    }

    /// Move `parameter` by a whole number of steps.
    pub fn nudge(&self, parameter: Parameter, steps: i32) -> f64 {
        let mut stored = 0.;
        self.params
            .send_modify(|params| stored = params.nudge(parameter, steps));
        stored
    }

    /// Current parameter values.
    pub fn parameters(&self) -> PhysicalParameters {
        self.params.borrow().snapshot()
    }

    /// Switch between running and paused.
    pub fn toggle(&self) {
        self.run.send_modify(RunController::toggle);
    }

    /// Returns `true` if the animation is advancing.
    pub fn is_running(&self) -> bool {
        self.run.borrow().is_running()
    }

    /// The most recently published frame.
    pub fn frame(&self) -> Frame {
        *self.frames.borrow()
    }

    /// Stream of published frames.
    ///
    /// Each item is the latest frame at the time it is polled; a slow consumer skips
    /// intermediate frames. The stream ends when the animation stops.
    pub fn frames(&self) -> impl Stream<Item = Frame> + Send + 'static {
        stream::unfold(self.frames.clone(), |mut rx| async move {
            rx.changed().await.ok()?;
            let frame = *rx.borrow_and_update();
            Some((frame, rx))
        })
    }

    /// Stop the animation and return the final simulation.
    pub async fn shutdown(self) -> Result<Simulation> {
        let Self { stop, task, .. } = self;
        let _ = stop.send(());
        Ok(task.await?)
    }
}

async fn animate(
    mut simulation: Simulation,
    mut params: watch::Receiver<ParameterStore>,
    mut run: watch::Receiver<RunController>,
    frames: watch::Sender<Frame>,
    mut stop: oneshot::Receiver<()>,
) -> Simulation {
    let mut interval = time::interval(simulation.frame_period());
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    #[cfg(feature = "tracing")]
    tracing::debug!(period = ?simulation.frame_period(), "animation started");

    loop {
        tokio::select! {
            biased;

            _ = &mut stop => break,
            _ = interval.tick() => {}
        }

        // Parameters are sampled once per macro-step.
        *simulation.params_mut() = *params.borrow_and_update();
        *simulation.run_controller_mut() = *run.borrow_and_update();

        frames.send_replace(simulation.tick());
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(ticks = simulation.frame().tick, "animation stopped");

    simulation
}
