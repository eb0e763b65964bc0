use std::convert::Infallible;

use serde::Deserialize;

use crate::error::{ConfigError, ConfigResult};
use crate::random_stream::UniformBatch;
use crate::stats::AngularDistribution;

/// One draw from a source model, in the model's native units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceSample {
    /// Position in metres
    pub position: [f64; 3],
    /// Unit direction vector
    pub direction: [f64; 3],
    /// Energy in MeV
    pub energy: f64,
}

impl SourceSample {
    pub fn new(position: [f64; 3], direction: [f64; 3], energy: f64) -> Self {
        Self {
            position,
            direction,
            energy,
        }
    }
}

/// Anything that maps a batch of uniforms to a position, direction and energy.
///
/// Implementations must be pure functions of `randoms`: no hidden randomness
/// and no interior mutation, so one model can be shared read-only between
/// threads and seeded runs stay reproducible.
pub trait SourceModel: Send + Sync {
    /// Failure signal for inputs the model cannot represent. Passed through
    /// to the caller untouched.
    type Error: std::error::Error + Send + Sync + 'static;

    fn sample(&self, randoms: &UniformBatch) -> Result<SourceSample, Self::Error>;
}

impl<M: SourceModel + ?Sized> SourceModel for Box<M> {
    type Error = M::Error;

    fn sample(&self, randoms: &UniformBatch) -> Result<SourceSample, Self::Error> {
        (**self).sample(randoms)
    }
}

/// Construction from the parameter string a host passes to the plugin.
pub trait SourceFactory: Sized {
    fn from_parameters(parameters: &str) -> ConfigResult<Self>;
}

/// Monoenergetic point source.
///
/// Position in metres and energy in MeV, like any other source model. The
/// isotropic angle uses batch slots 0 (polar cosine) and 1 (azimuth); the
/// remaining slots are unused.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSource {
    pub position: [f64; 3],
    pub angle: AngularDistribution,
    pub energy: f64,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct PointSourceParameters {
    #[serde(default)]
    position: [f64; 3],
    #[serde(default = "default_angle")]
    angle: AngularDistribution,
    #[serde(default = "default_energy")]
    energy: f64,
}

fn default_angle() -> AngularDistribution {
    AngularDistribution::Isotropic
}

/// D-T fusion neutron energy in MeV
fn default_energy() -> f64 {
    14.06
}

impl PointSource {
    pub fn new(position: [f64; 3], angle: AngularDistribution, energy: f64) -> ConfigResult<Self> {
        if position.iter().any(|x| !x.is_finite()) {
            return Err(ConfigError::invalid(
                "position",
                format!("{:?} must be finite", position),
            ));
        }
        if !energy.is_finite() || energy <= 0.0 {
            return Err(ConfigError::invalid(
                "energy",
                format!("{} MeV must be positive and finite", energy),
            ));
        }
        Ok(Self {
            position,
            angle: angle.normalized()?,
            energy,
        })
    }
}

impl Default for PointSource {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
            angle: default_angle(),
            energy: default_energy(),
        }
    }
}

impl SourceFactory for PointSource {
    fn from_parameters(parameters: &str) -> ConfigResult<Self> {
        let raw: PointSourceParameters = serde_json::from_str(parameters)?;
        Self::new(raw.position, raw.angle, raw.energy)
    }
}

impl SourceModel for PointSource {
    type Error = Infallible;

    fn sample(&self, randoms: &UniformBatch) -> Result<SourceSample, Self::Error> {
        let direction = self.angle.sample(randoms[0], randoms[1]);
        Ok(SourceSample::new(self.position, direction, self.energy))
    }
}
