pub mod sphere;
pub mod material;
