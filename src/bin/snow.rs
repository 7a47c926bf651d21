use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use sphere_scatter::config::{self, SnowConfig};
use sphere_scatter::process::snow::snow;
use sphere_scatter::write_spheres;

const SEED_VAR: &str = "SNOW_SEED";


/// Parses the value of [`SEED_VAR`]. Unparseable values are logged and ignored.
fn parse_seed(raw: Option<String>) -> Option<u64> {
    let raw = raw?;
    match raw.trim().parse() {
        Ok(seed) => Some(seed),
        Err(e) => {
            log::warn!("ignoring {}={:?}: {}", SEED_VAR, raw, e);
            None
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let mut config: SnowConfig = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => config::load_from_path(&path)
            .with_context(|| format!("loading snow config {}", path.display()))?,
        None => SnowConfig::default(),
    };
    if config.seed.is_none() {
        config.seed = parse_seed(std::env::var(SEED_VAR).ok());
    }
    log::debug!("{:#?}", config);

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let particles = snow(&mut rng, &config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_spheres(&mut out, &particles).context("writing to stdout")?;
    out.flush().context("flushing stdout")?;
    Ok(())
}
