//! Adapter that shells out to the `git` executable.

use std::{
    ffi::OsString,
    path::Path,
    process::{Command, Output},
};

use sprig_core::{
    application::{ApplicationError, ports::VersionControl},
    error::SprigResult,
};
use tracing::{debug, instrument};

/// Runs `git` as a child process.
#[derive(Debug, Clone)]
pub struct GitCommand {
    program: OsString,
}

impl GitCommand {
    pub fn new() -> Self {
        Self::with_program("git")
    }

    /// Use a different executable, e.g. an absolute path to git.
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run(&self, dir: &Path, args: &[&str]) -> SprigResult<()> {
        let command = format!("git {}", args.join(" "));
        debug!(dir = %dir.display(), %command, "running");

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(dir)
            .output()
            .map_err(|e| ApplicationError::ExternalCommand {
                command: command.clone(),
                reason: e.to_string(),
            })?;

        check_status(command, &output)
    }
}

impl Default for GitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionControl for GitCommand {
    #[instrument(skip(self), fields(dir = %dir.display()))]
    fn init(&self, dir: &Path) -> SprigResult<()> {
        self.run(dir, &["init", "--quiet"])
    }

    #[instrument(skip(self), fields(dir = %dir.display()))]
    fn add_remote(&self, dir: &Path, name: &str, url: &str) -> SprigResult<()> {
        self.run(dir, &["remote", "add", name, url])
    }
}

fn check_status(command: String, output: &Output) -> SprigResult<()> {
    if output.status.success() {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_owned();
    let reason = if stderr.is_empty() {
        format!("exited with {}", output.status)
    } else {
        stderr
    };

    Err(ApplicationError::ExternalCommand { command, reason }.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprig_core::error::SprigError;

    #[test]
    fn missing_program_is_external_command_error() {
        let dir = tempfile::tempdir().unwrap();
        let git = GitCommand::with_program("sprig-definitely-not-git");

        let err = git.init(dir.path()).unwrap_err();
        match err {
            SprigError::Application(ApplicationError::ExternalCommand { command, .. }) => {
                assert_eq!(command, "git init --quiet");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = GitCommand::new().init(&dir.path().join("missing"));
        assert!(result.is_err());
    }
}
