use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};

use sphere_scatter::config::{self, SmileConfig};
use sphere_scatter::process::smile::smile;
use sphere_scatter::write_spheres;


fn main() -> Result<()> {
    env_logger::init();

    let config: SmileConfig = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => config::load_from_path(&path)
            .with_context(|| format!("loading smile config {}", path.display()))?,
        None => SmileConfig::default(),
    };
    log::debug!("{:#?}", config);

    let beads = smile(&config)?.collect::<Result<Vec<_>, _>>()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let n = write_spheres(&mut out, &beads).context("writing to stdout")?;
    out.flush().context("flushing stdout")?;

    log::debug!("wrote {} beads", n);
    Ok(())
}
