//! Command handlers. One module per subcommand; each exposes `execute`.

pub mod check;
pub mod completions;
pub mod config;
pub mod init;
pub mod new;

use sprig_adapters::{GitCommand, GitConfigFile, LocalFilesystem, ManualHost, SimpleRenderer};
use sprig_core::application::GenerateService;

/// Wire the service to the real adapters.
pub(crate) fn service() -> GenerateService {
    GenerateService::new(
        Box::new(GitConfigFile::new()),
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
        Box::new(GitCommand::new()),
        Box::new(ManualHost::new()),
    )
}
