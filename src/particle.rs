use serde::{Deserialize, Serialize};

/// Particle species, discriminants matching the host's `Particle::Type`.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticleType {
    Neutron = 0,
    Photon = 1,
    Electron = 2,
    Positron = 3,
}

/// Source site handed to the transport host.
///
/// Laid out `#[repr(C)]` because the plugin shim writes it straight into
/// host memory. Position is in cm, energy in eV.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleRecord {
    pub r: [f64; 3],
    pub u: [f64; 3],
    #[serde(rename = "E")]
    pub e: f64,
    pub wgt: f64,
    pub delayed_group: i32,
    pub particle: ParticleType,
}

impl ParticleRecord {
    /// Prompt, unit-weight neutron. `r` in cm, `u` a unit vector, `e` in eV.
    pub fn neutron(r: [f64; 3], u: [f64; 3], e: f64) -> Self {
        Self {
            r,
            u,
            e,
            wgt: 1.0,
            delayed_group: 0,
            particle: ParticleType::Neutron,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutron_construction() {
        let p = ParticleRecord::neutron([0.0, 1.0, 2.0], [1.0, 0.0, 0.0], 1e6);
        assert_eq!(p.r, [0.0, 1.0, 2.0]);
        assert_eq!(p.u, [1.0, 0.0, 0.0]);
        assert_eq!(p.e, 1e6);
        assert_eq!(p.wgt, 1.0);
        assert_eq!(p.delayed_group, 0);
        assert_eq!(p.particle, ParticleType::Neutron);
    }

    #[test]
    fn test_record_layout_matches_host_bank() {
        use std::mem::{offset_of, size_of};

        assert_eq!(size_of::<ParticleType>(), 4);
        assert_eq!(size_of::<ParticleRecord>(), 72);
        assert_eq!(offset_of!(ParticleRecord, r), 0);
        assert_eq!(offset_of!(ParticleRecord, u), 24);
        assert_eq!(offset_of!(ParticleRecord, e), 48);
        assert_eq!(offset_of!(ParticleRecord, wgt), 56);
        assert_eq!(offset_of!(ParticleRecord, delayed_group), 64);
        assert_eq!(offset_of!(ParticleRecord, particle), 68);
    }

    #[test]
    fn test_particle_type_discriminants() {
        assert_eq!(ParticleType::Neutron as i32, 0);
        assert_eq!(ParticleType::Photon as i32, 1);
        assert_eq!(ParticleType::Electron as i32, 2);
        assert_eq!(ParticleType::Positron as i32, 3);
    }

    #[test]
    fn test_record_json_field_names() {
        let p = ParticleRecord::neutron([100.0, 0.0, 0.0], [0.0, 0.0, 1.0], 14.06e6);
        let value = serde_json::to_value(p).unwrap();
        assert_eq!(value["particle"], "neutron");
        assert_eq!(value["E"], 14.06e6);
        assert_eq!(value["wgt"], 1.0);
        assert_eq!(value["delayed_group"], 0);

        let back: ParticleRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back, p);
    }
}
