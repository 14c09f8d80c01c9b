use crate::{Error, Result};
use core::{fmt, str::FromStr};

/// Adjustable physical parameter of the pendulum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Parameter {
    /// Linear velocity damping coefficient.
    Damping,
    /// Amplitude of the sinusoidal drive torque.
    DriveAmp,
    /// Angular frequency of the drive torque.
    DriveFreq,
}

impl Parameter {
    /// Every parameter, in display order.
    pub const ALL: [Self; 3] = [Self::Damping, Self::DriveAmp, Self::DriveFreq];

    /// Name used to look this parameter up by string.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Damping => "damping",
            Self::DriveAmp => "driveAmp",
            Self::DriveFreq => "driveFreq",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Damping => 0,
            Self::DriveAmp => 1,
            Self::DriveFreq => 2,
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Parameter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "damping" => Ok(Self::Damping),
            "driveAmp" | "drive_amp" => Ok(Self::DriveAmp),
            "driveFreq" | "drive_freq" => Ok(Self::DriveFreq),
            _ => Err(Error::InvalidParameter { name: s.to_owned() }),
        }
    }
}

/// Declared range of a parameter.
///
/// The step mirrors a slider's resolution: [`ParameterSpec::snap`] rounds a value
/// onto the grid `min + k * step`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParameterSpec {
    /// Lower bound (inclusive).
    pub min: f64,
    /// Upper bound (inclusive).
    pub max: f64,
    /// Slider resolution.
    pub step: f64,
    /// Value at startup and after [`ParameterStore::reset`].
    pub default: f64,
}

impl ParameterSpec {
    /// Create a new parameter range.
    pub const fn new(min: f64, max: f64, step: f64, default: f64) -> Self {
        Self {
            min,
            max,
            step,
            default,
        }
    }

    /// Default range of `parameter`.
    pub const fn of(parameter: Parameter) -> Self {
        match parameter {
            Parameter::Damping => Self::new(0., 1., 0.01, 0.5),
            Parameter::DriveAmp => Self::new(0., 2., 0.01, 0.5),
            Parameter::DriveFreq => Self::new(0., 1., 0.01, 2. / 3.),
        }
    }

    /// Clamp `value` into `[min, max]`.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Round `value` to the nearest step and clamp it into range.
    pub fn snap(&self, value: f64) -> f64 {
        let steps = ((value - self.min) / self.step).round();
        self.clamp(self.min + steps * self.step)
    }

    pub(crate) fn validate(&self, parameter: Parameter) -> Result<()> {
        let is_valid = self.min.is_finite()
            && self.max.is_finite()
            && self.min <= self.max
            && self.step.is_finite()
            && self.step > 0.;

        if is_valid {
            Ok(())
        } else {
            Err(Error::InvalidRange {
                parameter,
                min: self.min,
                max: self.max,
                step: self.step,
            })
        }
    }
}

/// Snapshot of every parameter value, read by the integrator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicalParameters {
    /// Linear velocity damping coefficient.
    pub damping: f64,
    /// Amplitude of the drive torque.
    pub drive_amp: f64,
    /// Angular frequency of the drive torque.
    pub drive_freq: f64,
}

impl PhysicalParameters {
    /// Undamped, undriven pendulum.
    pub const FREE: Self = Self {
        damping: 0.,
        drive_amp: 0.,
        drive_freq: 0.,
    };

    /// Value of `parameter` in this snapshot.
    pub fn get(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::Damping => self.damping,
            Parameter::DriveAmp => self.drive_amp,
            Parameter::DriveFreq => self.drive_freq,
        }
    }
}

impl Default for PhysicalParameters {
    fn default() -> Self {
        ParameterStore::default().snapshot()
    }
}

/// Bounded storage for the pendulum's adjustable parameters.
///
/// Values written through [`ParameterStore::set`] are clamped to the declared range
/// rather than rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParameterStore {
    specs: [ParameterSpec; 3],
    values: [f64; 3],
}

impl ParameterStore {
    /// Create a store from a range for each parameter, starting at the defaults.
    pub fn new(specs: [ParameterSpec; 3]) -> Result<Self> {
        for parameter in Parameter::ALL {
            specs[parameter.index()].validate(parameter)?;
        }

        let values = specs.map(|spec| spec.clamp(spec.default));
        Ok(Self { specs, values })
    }

    /// Set a parameter by name, returning the stored (clamped) value.
    pub fn set(&mut self, name: &str, value: f64) -> Result<f64> {
        let parameter = name.parse()?;
        Ok(self.set_parameter(parameter, value))
    }

    /// Get a parameter by name.
    pub fn get(&self, name: &str) -> Result<f64> {
        name.parse().map(|parameter| self.parameter(parameter))
    }

    /// Set `parameter` to `value` clamped into its range, returning the stored value.
    ///
    /// A NaN `value` is ignored.
    pub fn set_parameter(&mut self, parameter: Parameter, value: f64) -> f64 {
        let slot = &mut self.values[parameter.index()];
        if value.is_nan() {
            return *slot;
        }

        let clamped = self.specs[parameter.index()].clamp(value);

        #[cfg(feature = "tracing")]
        if clamped != value {
            tracing::debug!(%parameter, requested = value, stored = clamped, "clamped parameter");
        }

        *slot = clamped;
        clamped
    }

    /// Current value of `parameter`.
    pub fn parameter(&self, parameter: Parameter) -> f64 {
        self.values[parameter.index()]
    }

    /// Declared range of `parameter`.
    pub fn spec(&self, parameter: Parameter) -> &ParameterSpec {
        &self.specs[parameter.index()]
    }

    /// Move `parameter` by a whole number of steps, snapping onto the step grid.
    pub fn nudge(&mut self, parameter: Parameter, steps: i32) -> f64 {
        let spec = self.specs[parameter.index()];
        let value = spec.snap(self.parameter(parameter) + f64::from(steps) * spec.step);
        self.values[parameter.index()] = value;
        value
    }

    /// Restore every parameter to its default.
    pub fn reset(&mut self) {
        self.values = self.specs.map(|spec| spec.clamp(spec.default));
    }

    /// Copy out the current values.
    pub fn snapshot(&self) -> PhysicalParameters {
        PhysicalParameters {
            damping: self.parameter(Parameter::Damping),
            drive_amp: self.parameter(Parameter::DriveAmp),
            drive_freq: self.parameter(Parameter::DriveFreq),
        }
    }

    pub(crate) fn set_spec(&mut self, parameter: Parameter, spec: ParameterSpec) -> Result<()> {
        spec.validate(parameter)?;
        self.specs[parameter.index()] = spec;
        self.values[parameter.index()] = spec.clamp(spec.default);
        Ok(())
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self {
            specs: Parameter::ALL.map(ParameterSpec::of),
            values: Parameter::ALL.map(|parameter| ParameterSpec::of(parameter).default),
        }
    }
}
