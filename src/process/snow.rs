use cgmath::{InnerSpace, Vector3};
use rand::Rng;

use crate::config::SnowConfig;
use crate::error::ScatterError;
use crate::primitives::material::Material;
use crate::primitives::sphere::SphereElement;


/// Acceptance predicate: strictly inside the unit ball and above the floor.
pub fn in_region(p: Vector3<f64>, floor: f64) -> bool {
    p.magnitude2() < 1.0 && p.y > floor
}

/// Rejection-samples a point of the unit ball lying above `floor`.
///
/// Each trial draws x, y, z in that order from `[-1, 1)`. Without
/// `max_trials` this loops until a sample is accepted.
pub fn sample_in_region<R: Rng + ?Sized>(
    rng: &mut R,
    floor: f64,
    max_trials: Option<u64>,
) -> Result<Vector3<f64>, ScatterError> {
    let mut trials: u64 = 0;
    loop {
        if let Some(max) = max_trials {
            if trials >= max {
                return Err(ScatterError::RejectionLimit(max));
            }
        }
        trials += 1;

        let p: Vector3<f64> = Vector3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );
        if in_region(p, floor) {
            log::trace!("accepted {:?} after {} trials", p, trials);
            return Ok(p);
        }
    }
}

/// One snow particle. The radius is drawn after the position.
///
/// The radius is drawn from `[radius_min, radius_max)`, but rounding to five
/// decimals can land it on `radius_max` itself.
pub fn particle<R: Rng + ?Sized>(rng: &mut R, config: &SnowConfig) -> Result<SphereElement, ScatterError> {
    let p = sample_in_region(rng, config.floor, config.max_trials)?;
    let position = p * config.scale + Vector3::from(config.center);
    let radius = rng.gen_range(config.radius_min..config.radius_max);
    SphereElement::new(position, radius, Material::snow())
}

/// `config.count` particles in generation order.
pub fn snow<R: Rng + ?Sized>(rng: &mut R, config: &SnowConfig) -> Result<Vec<SphereElement>, ScatterError> {
    config.validate()?;
    let mut particles = Vec::with_capacity(config.count);
    for _ in 0..config.count {
        particles.push(particle(rng, config)?);
    }
    log::debug!("generated {} snow particles", particles.len());
    Ok(particles)
}
