//! Neutron source sampling for OpenMC-style Monte-Carlo transport hosts.
//!
//! A [`SourceModel`] turns eight uniforms into a position (m), direction and
//! energy (MeV). [`sample_one`] draws those uniforms from the host's
//! [`RandomStream`], calls the model and hands back a [`ParticleRecord`] in
//! host units (cm, eV). The [`plugin`] module exposes the same thing over a
//! C ABI for hosts that load sources with `dlopen`.

pub mod error;
pub mod fast_rng;
pub mod particle;
pub mod plugin;
pub mod random_stream;
pub mod sampler;
pub mod source;
pub mod stats;
pub mod units;

pub use error::{ConfigError, ConfigResult};
pub use fast_rng::{prn, FastRng};
pub use particle::{ParticleRecord, ParticleType};
pub use random_stream::{draw_batch, RandomStream, RngStream, UniformBatch, BATCH_SIZE};
pub use sampler::{sample_one, SampledSource};
pub use source::{PointSource, SourceFactory, SourceModel, SourceSample};
pub use stats::AngularDistribution;
pub use units::{MEV_TO_EV, METERS_TO_CENTIMETERS};

#[cfg(feature = "point-source-plugin")]
crate::declare_source_plugin!(crate::source::PointSource);
