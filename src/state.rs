/// Angular state of the pendulum.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendulumState {
    /// Angle from the downward vertical (radians), not normalized.
    pub theta: f64,
    /// Angular velocity (radians per second).
    pub omega: f64,
    /// Simulated time (seconds).
    pub t: f64,
}

impl PendulumState {
    /// Create a state at rest at `theta`, at time zero.
    pub fn at_rest(theta: f64) -> Self {
        Self::new(theta, 0.)
    }

    /// Create a state at time zero.
    pub fn new(theta: f64, omega: f64) -> Self {
        Self { theta, omega, t: 0. }
    }

    /// Mechanical energy `omega^2 / 2 - cos(theta)` of the normalized pendulum.
    pub fn energy(&self) -> f64 {
        0.5 * self.omega * self.omega - self.theta.cos()
    }
}

impl Default for PendulumState {
    fn default() -> Self {
        Self::at_rest(30f64.to_radians())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_starts_at_thirty_degrees() {
        let state = PendulumState::default();
        assert_eq!(state.theta, core::f64::consts::PI / 6.);
        assert_eq!((state.omega, state.t), (0., 0.));
    }

    #[test]
    fn it_has_minimum_energy_hanging_at_rest() {
        assert_eq!(PendulumState::at_rest(0.).energy(), -1.);
        assert!(PendulumState::new(0., 0.1).energy() > -1.);
    }
}
