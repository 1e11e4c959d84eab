use std::sync::Arc;

use beacon_config::BeaconConfig;
use beacon_gateway::HttpGateway;
use beacon_session::Directory;

use crate::notify::ConsoleSink;

/// Everything a command handler needs: one directory over one HTTP gateway.
pub struct AppContext {
    pub directory: Directory<HttpGateway>,
}

impl AppContext {
    pub fn init(config: &BeaconConfig) -> anyhow::Result<Self> {
        let gateway = HttpGateway::new(&config.backend)
            .map_err(|error| anyhow::anyhow!("failed to build directory gateway: {error}"))?;
        tracing::debug!(base_url = gateway.base_url(), "directory gateway ready");

        Ok(Self {
            directory: Directory::new(gateway, Arc::new(ConsoleSink::new())),
        })
    }
}
