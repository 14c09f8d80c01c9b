//! Euler-Richardson (midpoint) integration of the pendulum.
//!
//! The equation of motion is normalized so the small-angle natural frequency is one:
//!
//! ```text
//! theta'' = -sin(theta) - damping * theta' + drive_amp * sin(drive_freq * t)
//! ```

use crate::{Error, PendulumState, PhysicalParameters, Result};

/// Angular acceleration of the pendulum at `(theta, omega, t)`.
pub fn torque(theta: f64, omega: f64, t: f64, params: &PhysicalParameters) -> f64 {
    -theta.sin() - params.damping * omega + params.drive_amp * (params.drive_freq * t).sin()
}

/// Fixed-step midpoint integrator.
///
/// Each call to [`Integrator::advance`] runs a macro-step of `steps` micro-steps of
/// size `dt`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Integrator {
    dt: f64,
    steps: usize,
}

impl Integrator {
    /// Default micro-step (seconds).
    pub const DEFAULT_DT: f64 = 0.002;

    /// Default macro interval (seconds).
    pub const DEFAULT_INTERVAL: f64 = 0.1;

    /// Create an integrator covering `interval` seconds per macro-step in steps of `dt`.
    ///
    /// The number of micro-steps is `interval / dt` rounded to the nearest integer.
    pub fn new(dt: f64, interval: f64) -> Result<Self> {
        if !(dt.is_finite() && dt > 0.) {
            return Err(Error::InvalidTimeStep(dt));
        }

        let steps = (interval / dt).round();
        if !steps.is_finite() || steps < 1. {
            return Err(Error::InvalidInterval { interval, dt });
        }

        Ok(Self {
            dt,
            steps: steps as usize,
        })
    }

    /// Micro-step size (seconds).
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Micro-steps per macro-step.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Simulated time covered by one macro-step (seconds).
    pub fn interval(&self) -> f64 {
        self.dt * self.steps as f64
    }

    /// Run a single micro-step.
    pub fn step(&self, state: &mut PendulumState, params: &PhysicalParameters) {
        let dt = self.dt;
        let PendulumState { theta, omega, t } = *state;

        let alpha = torque(theta, omega, t, params);

        let theta_mid = theta + omega * 0.5 * dt;
        let omega_mid = omega + alpha * 0.5 * dt;
        let alpha_mid = torque(theta_mid, omega_mid, t + 0.5 * dt, params);

        state.theta = theta + omega_mid * dt;
        state.omega = omega + alpha_mid * dt;
        state.t = t + dt;
    }

    /// Run one macro-step with a fixed parameter snapshot.
    pub fn advance(&self, state: &mut PendulumState, params: &PhysicalParameters) {
        for _ in 0..self.steps {
            self.step(state, params);
        }
    }
}

impl Default for Integrator {
    fn default() -> Self {
        Self {
            dt: Self::DEFAULT_DT,
            steps: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_defaults_to_fifty_steps() {
        let integrator = Integrator::new(Integrator::DEFAULT_DT, Integrator::DEFAULT_INTERVAL)
            .unwrap();
        assert_eq!(integrator, Integrator::default());
        assert_eq!(integrator.steps(), 50);
    }

    #[test]
    fn it_rejects_bad_steps() {
        assert!(matches!(
            Integrator::new(0., 0.1),
            Err(Error::InvalidTimeStep(_))
        ));
        assert!(matches!(
            Integrator::new(f64::NAN, 0.1),
            Err(Error::InvalidTimeStep(_))
        ));
        assert!(matches!(
            Integrator::new(0.01, 0.001),
            Err(Error::InvalidInterval { .. })
        ));
        assert!(Integrator::new(0.01, f64::INFINITY).is_err());
    }

    #[test]
    fn it_stays_at_rest_when_free() {
        let mut state = PendulumState::at_rest(0.);
        Integrator::default().advance(&mut state, &PhysicalParameters::FREE);

        assert_eq!(state.theta, 0.);
        assert_eq!(state.omega, 0.);
        assert!((state.t - 0.1).abs() < 1e-12);
    }

    #[test]
    fn it_matches_reference_step() {
        let mut state = PendulumState::default();
        let params = PhysicalParameters::default();
        let integrator = Integrator::default();

        let mut thetas = Vec::new();
        for _ in 0..integrator.steps() {
            integrator.step(&mut state, &params);
            thetas.push(state.theta);
        }

        assert!(thetas.windows(2).all(|pair| pair[1] < pair[0]));
        assert!((state.theta - 0.5211964876467399).abs() < 1e-12);
        assert!((state.omega - -0.04706274822009946).abs() < 1e-12);
    }
}
