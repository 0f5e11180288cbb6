use std::sync::{Arc, Mutex};

use sprig_core::{
    application::{ApplicationError, HostedRepository, ports::RepositoryHost},
    error::SprigResult,
};

use super::github_url;

/// One `create_repository` call. The token is never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostCall {
    pub owner: String,
    pub name: String,
}

/// Test double that records calls and reports success.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    calls: Arc<Mutex<Vec<HostCall>>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl RepositoryHost for RecordingHost {
    fn create_repository(
        &self,
        owner: &str,
        _token: &str,
        name: &str,
    ) -> SprigResult<HostedRepository> {
        self.calls
            .lock()
            .map_err(|_| ApplicationError::LockPoisoned)?
            .push(HostCall {
                owner: owner.to_owned(),
                name: name.to_owned(),
            });

        Ok(HostedRepository {
            html_url: github_url(owner, name),
            created: true,
            instructions: None,
        })
    }
}
