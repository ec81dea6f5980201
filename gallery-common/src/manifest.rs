//! Gallery manifest: site settings plus the project registry, read from YAML

use crate::project::{ProjectDescriptor, Registry, RegistryError};
use crate::site::SiteConfig;
use serde::Deserialize;

#[derive(Deserialize)]
struct ManifestYaml {
    #[serde(default)]
    site: SiteConfig,
    #[serde(default)]
    projects: Vec<ProjectDescriptor>,
}

/// Everything the app is configured with at startup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gallery {
    pub site: SiteConfig,
    pub registry: Registry,
}

impl Gallery {
    pub fn from_yaml(source: &str) -> Result<Self, RegistryError> {
        let manifest: ManifestYaml =
            serde_yaml::from_str(source).map_err(|e| RegistryError::Manifest(e.to_string()))?;
        Ok(Self {
            site: manifest.site,
            registry: Registry::new(manifest.projects)?,
        })
    }
}
