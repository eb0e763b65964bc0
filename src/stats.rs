use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Angular distribution of emitted particles.
///
/// Sampling is driven by caller-supplied uniforms rather than a generator so
/// that a source stays a pure function of its uniform batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngularDistribution {
    Isotropic,
    Monodirectional { reference_uvw: [f64; 3] },
}

impl AngularDistribution {
    /// Create a monodirectional distribution, normalising the reference direction.
    pub fn new_monodirectional(u: f64, v: f64, w: f64) -> ConfigResult<Self> {
        let mag = (u * u + v * v + w * w).sqrt();
        if !mag.is_finite() || mag == 0.0 {
            return Err(ConfigError::invalid(
                "angle",
                format!("reference direction ({}, {}, {}) cannot be normalised", u, v, w),
            ));
        }
        Ok(Self::Monodirectional {
            reference_uvw: [u / mag, v / mag, w / mag],
        })
    }

    pub fn new_isotropic() -> Self {
        Self::Isotropic
    }

    /// Re-run construction-time validation, e.g. after deserialising.
    pub fn normalized(self) -> ConfigResult<Self> {
        match self {
            Self::Isotropic => Ok(Self::Isotropic),
            Self::Monodirectional {
                reference_uvw: [u, v, w],
            } => Self::new_monodirectional(u, v, w),
        }
    }

    /// Sample a direction from two uniforms in [0, 1).
    pub fn sample(&self, xi_mu: f64, xi_phi: f64) -> [f64; 3] {
        match self {
            AngularDistribution::Isotropic => {
                let mu = 2.0 * xi_mu - 1.0; // cosine of polar angle
                let phi = 2.0 * std::f64::consts::PI * xi_phi;

                let sqrt_one_minus_mu2 = (1.0 - mu * mu).sqrt();
                [sqrt_one_minus_mu2 * phi.cos(), sqrt_one_minus_mu2 * phi.sin(), mu]
            }
            AngularDistribution::Monodirectional { reference_uvw } => *reference_uvw,
        }
    }
}
