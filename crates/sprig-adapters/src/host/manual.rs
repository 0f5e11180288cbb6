use sprig_core::{
    application::{HostedRepository, ports::RepositoryHost},
    error::SprigResult,
};
use tracing::info;

use super::github_url;

pub const NEW_REPOSITORY_URL: &str = "https://github.com/new";

/// Describes the manual steps instead of calling the GitHub API.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualHost;

impl ManualHost {
    pub fn new() -> Self {
        Self
    }
}

impl RepositoryHost for ManualHost {
    fn create_repository(
        &self,
        owner: &str,
        _token: &str,
        name: &str,
    ) -> SprigResult<HostedRepository> {
        info!(owner, name, "remote repository must be created by hand");

        Ok(HostedRepository {
            html_url: github_url(owner, name),
            created: false,
            instructions: Some(format!(
                "Create the repository '{name}' under '{owner}' at {NEW_REPOSITORY_URL}, \
                 then run: git push -u origin HEAD"
            )),
        })
    }
}
