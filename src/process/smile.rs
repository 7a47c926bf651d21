use std::f64::consts::PI;

use cgmath::Vector3;

use crate::config::SmileConfig;
use crate::error::ScatterError;
use crate::primitives::material::Material;
use crate::primitives::sphere::SphereElement;


/// Polar angle of the smile curve at azimuth `phi`, peaking at `3pi/2`.
pub fn phi_to_theta(phi: f64) -> f64 {
    (phi - PI * 1.5).powi(2) * -3.0 / PI + (8.0 / 12.0) * PI
}

/// Physics convention, y up.
pub fn spherical_to_cartesian(r: f64, theta: f64, phi: f64) -> Vector3<f64> {
    Vector3::new(
        r * theta.sin() * phi.cos(),
        r * theta.cos(),
        r * theta.sin() * phi.sin(),
    )
}

/// Half-open azimuth range `pi * [start, stop)`. Empty when the range is
/// not finite or exceeds [`crate::config::MAX_BEADS`].
pub fn azimuths(config: &SmileConfig) -> impl Iterator<Item = f64> {
    let start = config.phi_start;
    let step = config.phi_step;
    let n = config.bead_count().unwrap_or(0);
    (0..n).map(move |i| PI * (start + i as f64 * step))
}

/// Beads along the smile, in azimuth order. Restartable: each call starts over.
pub fn smile(
    config: &SmileConfig,
) -> Result<impl Iterator<Item = Result<SphereElement, ScatterError>> + '_, ScatterError> {
    config.validate()?;
    let r = config.head_radius - config.inset;
    let offset = Vector3::from(config.offset);

    Ok(azimuths(config).map(move |phi| {
        let point = spherical_to_cartesian(r, phi_to_theta(phi), phi) + offset;
        SphereElement::new(point, config.bead_radius, Material::dark_gloss())
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::InnerSpace;

    fn beads() -> Vec<SphereElement> {
        smile(&SmileConfig::default()).unwrap().collect::<Result<Vec<_>, _>>().unwrap()
    }

    #[test]
    fn test_azimuth_count() {
        let phis: Vec<f64> = azimuths(&SmileConfig::default()).collect();
        assert_eq!(phis.len(), 7);
        assert!((phis[0] - 4.0 * PI / 3.0).abs() < 1e-12);
        assert!(phis.iter().all(|&p| p < 5.0 * PI / 3.0 + 1e-9));
    }

    #[test]
    fn test_theta_peak() {
        assert!((phi_to_theta(1.5 * PI) - 2.0 * PI / 3.0).abs() < 1e-12);
        let d = PI / 7.0;
        assert!((phi_to_theta(1.5 * PI - d) - phi_to_theta(1.5 * PI + d)).abs() < 1e-12);
        assert!(phi_to_theta(1.5 * PI - d) < phi_to_theta(1.5 * PI));
    }

    #[test]
    fn test_first_bead() {
        let first = &beads()[0];
        assert_eq!(
            first.to_string(),
            "<sphere x=\"-0.52486\" y=\"0.25988\" z=\"1.32034\" radius=\"0.014\" colour=\"#090909\" reflectivity=\"0.02\" alphaS=\"30\"/>"
        );
    }

    #[test]
    fn test_middle_bead() {
        let middle = &beads()[3];
        assert_eq!(middle.center(), Vector3::new(-0.45, 0.2225, 1.31577));
    }

    #[test]
    fn test_on_inset_sphere() {
        let offset = Vector3::from(SmileConfig::default().offset);
        for bead in beads() {
            let d = (bead.center() - offset).magnitude();
            assert!((d - 0.155).abs() < 2e-5, "distance {}", d);
        }
    }

    #[test]
    fn test_symmetric_arc() {
        let beads = beads();
        let n = beads.len();
        for i in 0..n / 2 {
            let a = beads[i].center();
            let b = beads[n - 1 - i].center();
            assert!((a.y - b.y).abs() < 1e-9);
            assert!((a.z - b.z).abs() < 1e-9);
            assert!(((a.x + 0.45) + (b.x + 0.45)).abs() < 2e-5);
        }
    }

    #[test]
    fn test_deterministic() {
        let a: Vec<String> = beads().iter().map(|s| s.to_string()).collect();
        let b: Vec<String> = beads().iter().map(|s| s.to_string()).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_range() {
        let config = SmileConfig { phi_stop: 1.0, ..SmileConfig::default() };
        assert_eq!(smile(&config).unwrap().count(), 0);
    }

    #[test]
    fn test_rejects_runaway_range() {
        let config = SmileConfig { phi_step: 1e-300, ..SmileConfig::default() };
        assert!(matches!(smile(&config), Err(ScatterError::InvalidConfig(_))));
        assert_eq!(azimuths(&config).count(), 0);

        let config = SmileConfig { phi_stop: f64::INFINITY, ..SmileConfig::default() };
        assert!(smile(&config).is_err());
    }
}
