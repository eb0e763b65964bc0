use rand::{Rng, RngCore};

/// Number of uniforms consumed by one sampling event.
pub const BATCH_SIZE: usize = 8;

/// Uniforms handed to a source model, in draw order.
///
/// Slot positions carry meaning for the model (radius, angle, energy bin,
/// ...), so the order must never be shuffled between drawing and sampling.
pub type UniformBatch = [f64; BATCH_SIZE];

/// A deterministic, stateful source of uniform doubles in [0, 1).
///
/// The same initial state and the same sequence of calls must reproduce the
/// same outputs. Implementations never need to be shared: every caller owns
/// its stream and threads it through explicitly.
pub trait RandomStream {
    /// Advance the state and return the next uniform in [0, 1).
    fn next_uniform(&mut self) -> f64;
}

impl<S: RandomStream + ?Sized> RandomStream for &mut S {
    #[inline(always)]
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

/// Draw exactly [`BATCH_SIZE`] uniforms, slot `i` holding the `i`-th draw.
#[inline]
pub fn draw_batch<S: RandomStream + ?Sized>(stream: &mut S) -> UniformBatch {
    // from_fn fills in increasing index order
    std::array::from_fn(|_| stream.next_uniform())
}

/// Adapts any `rand` generator into a [`RandomStream`].
#[derive(Debug, Clone)]
pub struct RngStream<R> {
    rng: R,
}

impl<R: RngCore> RngStream<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: RngCore> RandomStream for RngStream<R> {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        // Standard f64 distribution is [0, 1)
        self.rng.gen::<f64>()
    }
}
