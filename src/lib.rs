//! Procedural `<sphere/>` fragments for a scene file.
//!
//! [`process::smile`] traces a fixed arc of dark beads; [`process::snow`]
//! scatters translucent particles by rejection sampling. Each element
//! prints as one self-closing tag via `Display`.

pub mod config;
pub mod error;
pub mod primitives;
pub mod process;

use std::io::Write;

use primitives::sphere::SphereElement;


/// Writes one tag per line.
pub fn write_spheres<'a, W, I>(out: &mut W, spheres: I) -> std::io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a SphereElement>,
{
    let mut n = 0;
    for sphere in spheres {
        writeln!(out, "{}", sphere)?;
        n += 1;
    }
    Ok(n)
}
