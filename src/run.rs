/// Run state of the simulation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RunState {
    /// Time advances on every tick.
    Running,
    /// Ticks leave the state untouched.
    #[default]
    Paused,
}

impl RunState {
    /// The opposite state.
    pub fn toggled(self) -> Self {
        match self {
            Self::Running => Self::Paused,
            Self::Paused => Self::Running,
        }
    }
}

/// Start/stop switch gating the integrator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunController {
    state: RunState,
}

impl RunController {
    /// Create a controller in `state`.
    pub fn new(state: RunState) -> Self {
        Self { state }
    }

    /// Switch between running and paused.
    pub fn toggle(&mut self) {
        self.set(self.state.toggled());
    }

    /// Resume the simulation.
    pub fn start(&mut self) {
        self.set(RunState::Running);
    }

    /// Pause the simulation.
    pub fn pause(&mut self) {
        self.set(RunState::Paused);
    }

    /// Set the run state directly.
    pub fn set(&mut self, state: RunState) {
        #[cfg(feature = "tracing")]
        if state != self.state {
            tracing::debug!(?state, "run state changed");
        }

        self.state = state;
    }

    /// Current run state.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Returns `true` if ticks currently advance the simulation.
    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_starts_paused() {
        assert!(!RunController::default().is_running());
    }

    #[test]
    fn it_toggles() {
        let mut run = RunController::default();
        run.toggle();
        assert!(run.is_running());
        run.toggle();
        assert_eq!(run.state(), RunState::Paused);

        run.start();
        run.start();
        assert!(run.is_running());
        run.pause();
        assert!(!run.is_running());
    }
}
