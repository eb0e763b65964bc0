// Sampling adapter: one uniform batch in, one neutron source site out.
//
// The only mutable state touched is the caller's stream. Model failures are
// returned as the model's own error, never retried or rewritten.

use crate::error::ConfigResult;
use crate::particle::ParticleRecord;
use crate::random_stream::{draw_batch, RandomStream};
use crate::source::{SourceFactory, SourceModel};
use crate::units::{meters_to_centimeters, mev_to_ev};

/// Draw one batch from `stream`, sample `model`, and convert to host units.
///
/// Exactly eight uniforms are drawn, all before the model is called.
#[inline]
pub fn sample_one<M, S>(model: &M, stream: &mut S) -> Result<ParticleRecord, M::Error>
where
    M: SourceModel + ?Sized,
    S: RandomStream + ?Sized,
{
    let randoms = draw_batch(stream);
    let sample = model.sample(&randoms)?;

    Ok(ParticleRecord::neutron(
        meters_to_centimeters(sample.position),
        sample.direction,
        mev_to_ev(sample.energy),
    ))
}

/// A source model wrapped for a transport host.
#[derive(Debug, Clone)]
pub struct SampledSource<M> {
    model: M,
}

impl<M: SourceModel> SampledSource<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn into_inner(self) -> M {
        self.model
    }

    /// Sample a single source site.
    pub fn sample<S: RandomStream + ?Sized>(
        &self,
        stream: &mut S,
    ) -> Result<ParticleRecord, M::Error> {
        sample_one(&self.model, stream)
    }

    /// Sample `n` sites from one threaded stream, stopping at the first failure.
    pub fn sample_n<S: RandomStream + ?Sized>(
        &self,
        n: usize,
        stream: &mut S,
    ) -> Result<Vec<ParticleRecord>, M::Error> {
        let mut bank = Vec::with_capacity(n);
        for _ in 0..n {
            bank.push(self.sample(stream)?);
        }
        Ok(bank)
    }
}

impl<M: SourceModel + SourceFactory> SampledSource<M> {
    /// Build the wrapped model from a host parameter string.
    pub fn from_parameters(parameters: &str) -> ConfigResult<Self> {
        let model = M::from_parameters(parameters)?;
        log::info!(
            "created {} from {} bytes of parameters",
            std::any::type_name::<M>(),
            parameters.len()
        );
        Ok(Self::new(model))
    }
}
