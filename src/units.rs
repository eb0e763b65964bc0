//! Scale factors between the source model's native units and the host's.
//!
//! Source models work in metres and MeV; the transport host tracks
//! centimetres and eV. Every conversion in the crate goes through these.

/// Metres to centimetres, applied to every position component.
pub const METERS_TO_CENTIMETERS: f64 = 100.0;

/// MeV to eV, applied to the sampled energy.
pub const MEV_TO_EV: f64 = 1.0e6;

#[inline]
pub fn meters_to_centimeters(position: [f64; 3]) -> [f64; 3] {
    position.map(|x| x * METERS_TO_CENTIMETERS)
}

#[inline]
pub fn mev_to_ev(energy: f64) -> f64 {
    energy * MEV_TO_EV
}
