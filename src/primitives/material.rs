#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub colour: String,
    pub reflectivity: f64,
    pub transmission: Option<[f64; 3]>,
    pub refractive_index: Option<f64>,
    pub alpha_s: Option<f64>,
}

impl Material {
    pub fn new(colour: &str, reflectivity: f64) -> Self {
        Material {
            colour: colour.to_string(),
            reflectivity,
            transmission: None,
            refractive_index: None,
            alpha_s: None,
        }
    }

    /// Near-black, slightly glossy. Used for the smile.
    pub fn dark_gloss() -> Self {
        Self::new("#090909", 0.02).with_alpha_s(30.0)
    }

    /// Translucent white used for snow particles.
    pub fn snow() -> Self {
        Self::new("#fffafa", 0.2)
            .with_transmission([0.82, 0.82, 0.82])
            .with_refractive_index(1.31)
    }

    pub fn with_transmission(mut self, transmission: [f64; 3]) -> Self {
        self.transmission = Some(transmission);
        self
    }

    pub fn with_refractive_index(mut self, ior: f64) -> Self {
        self.refractive_index = Some(ior);
        self
    }

    pub fn with_alpha_s(mut self, alpha_s: f64) -> Self {
        self.alpha_s = Some(alpha_s);
        self
    }
}
