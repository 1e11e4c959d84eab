use anyhow::Context;
use beacon_config::BeaconConfig;

/// Load layered config (dotenv, user, project, env) and apply `--backend`.
pub fn load_config(backend: Option<&str>) -> anyhow::Result<BeaconConfig> {
    let config = BeaconConfig::load_with_dotenv().context("failed to load beacon configuration")?;

    match backend {
        Some(url) => {
            tracing::debug!(url, "backend overridden from command line");
            config
                .with_backend_url(url)
                .context("invalid --backend value")
        }
        None => Ok(config),
    }
}
