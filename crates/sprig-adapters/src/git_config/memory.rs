//! In-memory configuration source for testing and embedding.

use std::path::Path;

use sprig_core::{application::ports::ConfigSource, domain::GitConfig, error::SprigResult};

/// Returns the same mapping for every path.
#[derive(Debug, Clone, Default)]
pub struct MemoryConfigSource {
    config: GitConfig,
}

impl MemoryConfigSource {
    pub fn new(config: GitConfig) -> Self {
        Self { config }
    }
}

impl ConfigSource for MemoryConfigSource {
    fn parse_config(&self, _path: &Path) -> SprigResult<GitConfig> {
        Ok(self.config.clone())
    }
}
