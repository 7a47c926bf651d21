use std::fmt;

use cgmath::Vector3;

use crate::error::ScatterError;
use crate::primitives::material::Material;


/// Number of fractional digits kept in every emitted number.
pub const DECIMALS: i32 = 5;

/// Rounds to [`DECIMALS`] fractional digits.
pub fn round5(value: f64) -> f64 {
    let scale = 10f64.powi(DECIMALS);
    let rounded = (value * scale).round() / scale;
    // keep "-0" out of the output
    if rounded == 0.0 { 0.0 } else { rounded }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SphereElement {
    center: Vector3<f64>,
    radius: f64,
    material: Material,
}

impl SphereElement {
    /// Builds a sphere with its position and radius rounded for output.
    pub fn new(center: Vector3<f64>, radius: f64, material: Material) -> Result<Self, ScatterError> {
        let center = Vector3::new(round5(center.x), round5(center.y), round5(center.z));
        let radius = round5(radius);

        if !(center.x.is_finite() && center.y.is_finite() && center.z.is_finite()) {
            return Err(ScatterError::InvalidSphere(format!("non-finite center {:?}", center)));
        }
        if !(radius > 0.0) {
            return Err(ScatterError::InvalidSphere(format!("radius {} is not positive", radius)));
        }

        Ok(SphereElement { center, radius, material })
    }

    pub fn center(&self) -> Vector3<f64> {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn material(&self) -> &Material {
        &self.material
    }
}

impl fmt::Display for SphereElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.material;
        write!(
            f,
            "<sphere x=\"{}\" y=\"{}\" z=\"{}\" radius=\"{}\" colour=\"{}\" reflectivity=\"{}\"",
            self.center.x, self.center.y, self.center.z, self.radius, m.colour, round5(m.reflectivity),
        )?;
        if let Some([tr, tg, tb]) = m.transmission {
            write!(f, " tr=\"{}\" tg=\"{}\" tb=\"{}\"", round5(tr), round5(tg), round5(tb))?;
        }
        if let Some(ior) = m.refractive_index {
            write!(f, " refractive_index=\"{}\"", round5(ior))?;
        }
        if let Some(alpha_s) = m.alpha_s {
            write!(f, " alphaS=\"{}\"", round5(alpha_s))?;
        }
        write!(f, "/>")
    }
}
