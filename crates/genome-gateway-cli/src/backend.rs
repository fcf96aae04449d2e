//! Backend selection for CLI commands.

use std::path::PathBuf;
use std::time::Duration;

use genome_gateway::{
    HttpMetadataBackend, MetadataBackend, MetadataConfig, RegionDescriptor, StaticMetadataBackend,
};

/// Backend flags shared by every command.
#[derive(Debug, Clone, Default)]
pub struct BackendOptions {
    pub backend_url: Option<String>,
    pub regions: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
}

/// The backend a command runs against.
pub enum Backend {
    Http(HttpMetadataBackend),
    Static(StaticMetadataBackend),
}

impl Backend {
    /// Build the backend: a region fixture if one was given, otherwise the
    /// metadata service configured from the environment and flags.
    pub fn from_options(options: &BackendOptions) -> genome_gateway::Result<Self> {
        if let Some(path) = &options.regions {
            let backend = StaticMetadataBackend::from_path(path)?;
            tracing::info!(
                path = %path.display(),
                genomes = backend.genome_count(),
                regions = backend.region_count(),
                "loaded region fixture"
            );
            return Ok(Backend::Static(backend));
        }

        let mut config = MetadataConfig::from_env()?;
        if let Some(url) = &options.backend_url {
            config = config.with_base_url(url.clone());
        }
        if let Some(secs) = options.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }

        tracing::info!(base_url = %config.base_url, "using metadata service");
        Ok(Backend::Http(HttpMetadataBackend::with_config(config)?))
    }
}

impl MetadataBackend for Backend {
    async fn describe_region(
        &self,
        genome_id: &str,
        region_name: &str,
    ) -> genome_gateway::Result<RegionDescriptor> {
        match self {
            Backend::Http(backend) => backend.describe_region(genome_id, region_name).await,
            Backend::Static(backend) => backend.describe_region(genome_id, region_name).await,
        }
    }

    fn name(&self) -> &str {
        match self {
            Backend::Http(backend) => backend.name(),
            Backend::Static(backend) => backend.name(),
        }
    }
}
