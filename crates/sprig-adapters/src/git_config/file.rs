//! Git config file adapter backed by libgit2.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use git2::{Config, ErrorClass, ErrorCode};
use sprig_core::{
    application::{ApplicationError, ports::ConfigSource},
    domain::{
        GitConfig,
        git_config::{GITHUB_TOKEN, GITHUB_USER, USER_EMAIL, USER_NAME},
    },
    error::{SprigError, SprigResult},
};
use tracing::{debug, instrument};

/// Entries the generator reads.
const IDENTITY_KEYS: [&str; 4] = [USER_NAME, USER_EMAIL, GITHUB_USER, GITHUB_TOKEN];

/// Reads git configuration from a file on disk.
///
/// The file is opened on its own, without the system or XDG levels, and
/// `include`/`includeIf` directives are followed the same way `git` does.
/// A missing file is not an error: it yields an empty config so that
/// identity validation reports exactly which keys are absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitConfigFile;

impl GitConfigFile {
    pub fn new() -> Self {
        Self
    }
}

impl ConfigSource for GitConfigFile {
    #[instrument(skip(self), fields(path = %path.display()))]
    fn parse_config(&self, path: &Path) -> SprigResult<GitConfig> {
        let path = expand_home(path);

        match fs::metadata(&path) {
            Ok(meta) if meta.is_dir() => {
                return Err(ApplicationError::ConfigUnreadable {
                    path,
                    reason: "is a directory".into(),
                }
                .into());
            }
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "git config not found, using empty config");
                return Ok(GitConfig::new());
            }
            Err(e) => {
                return Err(ApplicationError::ConfigUnreadable {
                    path,
                    reason: e.to_string(),
                }
                .into());
            }
        }

        let config = Config::open(&path).map_err(|e| config_error(&path, e))?;

        let mut identity = GitConfig::new();
        for key in IDENTITY_KEYS {
            if let Some(value) = read_entry(&config, key).map_err(|e| config_error(&path, e))? {
                identity.insert(key, value);
            }
        }

        debug!(entries = identity.len(), "git config read");
        Ok(identity)
    }
}

/// Last value of `key`, or `None` when unset or given without a value.
fn read_entry(config: &Config, key: &str) -> Result<Option<String>, git2::Error> {
    match config.get_entry(key) {
        Ok(entry) if entry.has_value() => Ok(entry.value().map(str::to_owned)),
        Ok(_) => Ok(None),
        Err(err) if err.code() == ErrorCode::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}

fn config_error(path: &Path, err: git2::Error) -> SprigError {
    let located = (err.class() == ErrorClass::Config)
        .then(|| parse_location(err.message()))
        .flatten();

    match located {
        Some((line, reason)) => ApplicationError::ConfigParse {
            path: path.to_path_buf(),
            line,
            reason,
        },
        None => ApplicationError::ConfigUnreadable {
            path: path.to_path_buf(),
            reason: err.message().to_owned(),
        },
    }
    .into()
}

/// Split libgit2's `"<reason> (in <file>:<line>[, column <n>])"` message.
fn parse_location(message: &str) -> Option<(usize, String)> {
    let (reason, location) = message.rsplit_once(" (in ")?;
    let location = location.strip_suffix(')')?;
    let location = location
        .split_once(", column")
        .map_or(location, |(file_line, _)| file_line);
    let line = location.rsplit_once(':')?.1.parse().ok()?;

    let reason = reason
        .strip_prefix("failed to parse config file: ")
        .unwrap_or(reason);
    Some((line, reason.to_owned()))
}

/// Expand a leading `~` to the user's home directory.
pub(crate) fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };

    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}
