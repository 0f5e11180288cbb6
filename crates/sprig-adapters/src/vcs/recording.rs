//! Version control double that records calls instead of running git.

use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use sprig_core::{
    application::{ApplicationError, ports::VersionControl},
    error::SprigResult,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VcsCall {
    Init(PathBuf),
    AddRemote {
        dir: PathBuf,
        name: String,
        url: String,
    },
}

/// Clones share the same call log.
#[derive(Debug, Clone, Default)]
pub struct RecordingVcs {
    calls: Arc<Mutex<Vec<VcsCall>>>,
    fail_init: bool,
}

impl RecordingVcs {
    pub fn new() -> Self {
        Self::default()
    }

    /// A recorder whose `init` always fails.
    pub fn failing() -> Self {
        Self {
            fail_init: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<VcsCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, call: VcsCall) -> SprigResult<()> {
        self.calls
            .lock()
            .map_err(|_| ApplicationError::LockPoisoned)?
            .push(call);
        Ok(())
    }
}

impl VersionControl for RecordingVcs {
    fn init(&self, dir: &Path) -> SprigResult<()> {
        self.record(VcsCall::Init(dir.to_path_buf()))?;
        if self.fail_init {
            return Err(ApplicationError::ExternalCommand {
                command: "git init".into(),
                reason: "simulated failure".into(),
            }
            .into());
        }
        Ok(())
    }

    fn add_remote(&self, dir: &Path, name: &str, url: &str) -> SprigResult<()> {
        self.record(VcsCall::AddRemote {
            dir: dir.to_path_buf(),
            name: name.to_owned(),
            url: url.to_owned(),
        })
    }
}
