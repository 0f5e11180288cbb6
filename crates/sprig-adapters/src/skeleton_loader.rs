//! Filesystem-based skeleton loader.
//!
//! Turns a directory tree into a [`Skeleton`]. Every file and directory under
//! the root becomes a node; file contents containing `{{`/`}}` are treated as
//! parameterized, everything else is copied verbatim. Paths may contain
//! placeholders too (`src/{{PROJECT_NAME_SNAKE}}.rs`).
//!
//! An optional `skeleton.toml` at the root tunes the result:
//!
//! ```toml
//! name        = "rust-cli"           # defaults to the directory name
//! description = "Rust CLI starter"
//! executable  = ["bin/setup"]        # marked executable after writing
//! ignore      = ["target", "notes.md"]
//! ```
//!
//! `.git` and the manifest itself are never part of the skeleton.

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use sprig_core::{
    application::ApplicationError,
    domain::{DirectorySpec, FileSpec, RelativePath, Skeleton, SkeletonContent, SkeletonNode},
    error::SprigResult,
};
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

pub const MANIFEST_FILE: &str = "skeleton.toml";

/// Deserialised `skeleton.toml`.
#[derive(Debug, Default, Deserialize, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SkeletonManifest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub executable: Vec<String>,
    pub ignore: Vec<String>,
}

/// Loads a [`Skeleton`] from a directory.
#[derive(Debug, Clone)]
pub struct DirectorySkeletonLoader {
    root: PathBuf,
}

impl DirectorySkeletonLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    #[instrument(skip(self), fields(dir = %self.root.display()))]
    pub fn load(&self) -> SprigResult<Skeleton> {
        if !self.root.is_dir() {
            return Err(self.error("not a directory"));
        }

        let manifest = self.read_manifest()?;
        let name = manifest.name.clone().unwrap_or_else(|| self.default_name());
        let executable: HashSet<String> =
            manifest.executable.iter().map(|p| normalize(p)).collect();
        let ignore: Vec<String> = manifest.ignore.iter().map(|p| normalize(p)).collect();

        let mut skeleton = Skeleton::new(name);
        if let Some(description) = &manifest.description {
            skeleton = skeleton.description(description.clone());
        }

        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.file_name() != ".git");

        let mut marked = HashSet::new();
        for entry in walker {
            let entry = entry.map_err(|e| self.error(format!("directory walk error: {e}")))?;
            let rel = entry
                .path()
                .strip_prefix(&self.root)
                .map_err(|e| self.error(e.to_string()))?;
            let rel_str = normalize(&rel.to_string_lossy());

            if rel_str == MANIFEST_FILE || is_ignored(&rel_str, &ignore) {
                continue;
            }

            let path = RelativePath::try_new(rel)?;

            if entry.file_type().is_dir() {
                skeleton.push(SkeletonNode::Directory(DirectorySpec::new(path)));
                continue;
            }

            if !entry.file_type().is_file() {
                debug!(path = %rel_str, "skipping non-regular file");
                continue;
            }

            let content = fs::read_to_string(entry.path())
                .map_err(|e| self.error(format!("failed to read '{rel_str}': {e}")))?;

            let mut spec = FileSpec::new(path, SkeletonContent::detect(content));
            if executable.contains(&rel_str) || is_executable_on_disk(entry.path()) {
                marked.insert(rel_str.clone());
                spec = spec.executable();
            }
            skeleton.push(SkeletonNode::File(spec));
        }

        for missing in executable.difference(&marked) {
            warn!(path = %missing, "executable entry does not match any file");
        }

        skeleton.validate()?;
        debug!(name = skeleton.name(), nodes = skeleton.len(), "skeleton loaded");
        Ok(skeleton)
    }

    fn read_manifest(&self) -> SprigResult<SkeletonManifest> {
        let path = self.root.join(MANIFEST_FILE);
        if !path.exists() {
            return Ok(SkeletonManifest::default());
        }

        let raw = fs::read_to_string(&path)
            .map_err(|e| self.error(format!("failed to read {MANIFEST_FILE}: {e}")))?;
        toml::from_str(&raw).map_err(|e| self.error(format!("invalid {MANIFEST_FILE}: {e}")))
    }

    fn default_name(&self) -> String {
        self.root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "custom".into())
    }

    fn error(&self, reason: impl Into<String>) -> sprig_core::error::SprigError {
        ApplicationError::SkeletonLoad {
            path: self.root.clone(),
            reason: reason.into(),
        }
        .into()
    }
}

/// Forward slashes, no leading `./`, no trailing `/`.
fn normalize(path: &str) -> String {
    let path = path.replace('\\', "/");
    let path = path.strip_prefix("./").unwrap_or(&path);
    path.trim_end_matches('/').to_owned()
}

fn is_ignored(rel: &str, ignore: &[String]) -> bool {
    ignore
        .iter()
        .any(|pattern| rel == pattern || rel.starts_with(&format!("{pattern}/")))
}

#[cfg(unix)]
fn is_executable_on_disk(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    fs::metadata(path)
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable_on_disk(_path: &Path) -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprig_core::error::SprigError;
    use tempfile::TempDir;

    fn make_skeleton_dir(files: &[(&str, &str)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for (path, content) in files {
            let full = dir.path().join(path);
            fs::create_dir_all(full.parent().unwrap()).unwrap();
            fs::write(full, content).unwrap();
        }
        dir
    }

    fn file_spec<'a>(skeleton: &'a Skeleton, path: &str) -> &'a FileSpec {
        skeleton
            .nodes()
            .iter()
            .find_map(|node| match node {
                SkeletonNode::File(spec) if spec.path.to_string_lossy() == path => Some(spec),
                _ => None,
            })
            .unwrap_or_else(|| panic!("no file node {path}"))
    }

    #[test]
    fn loads_files_and_directories() {
        let dir = make_skeleton_dir(&[
            ("README.md", "# {{PROJECT_NAME}}"),
            ("src/main.rs", "fn main() {}"),
        ]);

        let skeleton = DirectorySkeletonLoader::new(dir.path()).load().unwrap();

        assert_eq!(skeleton.len(), 3);
        assert!(matches!(
            file_spec(&skeleton, "README.md").content,
            SkeletonContent::Parameterized(_)
        ));
        assert!(matches!(
            file_spec(&skeleton, "src/main.rs").content,
            SkeletonContent::Literal(_)
        ));
    }

    #[test]
    fn manifest_sets_name_and_executables() {
        let dir = make_skeleton_dir(&[
            (
                "skeleton.toml",
                "name = \"starter\"\ndescription = \"A starter\"\nexecutable = [\"bin/setup\"]\n",
            ),
            ("bin/setup", "#!/bin/sh\n"),
        ]);

        let skeleton = DirectorySkeletonLoader::new(dir.path()).load().unwrap();

        assert_eq!(skeleton.name(), "starter");
        assert_eq!(skeleton.summary(), "A starter");
        assert!(file_spec(&skeleton, "bin/setup").permissions.executable_flag());
        assert!(
            skeleton
                .nodes()
                .iter()
                .all(|n| n.path().to_string_lossy() != MANIFEST_FILE)
        );
    }

    #[test]
    fn ignore_skips_subtrees() {
        let dir = make_skeleton_dir(&[
            ("skeleton.toml", "ignore = [\"target\"]\n"),
            ("target/debug/junk", "x"),
            ("src/lib.rs", ""),
        ]);

        let skeleton = DirectorySkeletonLoader::new(dir.path()).load().unwrap();
        assert!(
            skeleton
                .nodes()
                .iter()
                .all(|n| !n.path().to_string_lossy().starts_with("target"))
        );
    }

    #[test]
    fn name_defaults_to_directory_name() {
        let root = TempDir::new().unwrap();
        let dir = root.path().join("my-skeleton");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("a.txt"), "a").unwrap();

        let skeleton = DirectorySkeletonLoader::new(&dir).load().unwrap();
        assert_eq!(skeleton.name(), "my-skeleton");
    }

    #[test]
    fn missing_directory_is_an_error() {
        let root = TempDir::new().unwrap();
        let err = DirectorySkeletonLoader::new(root.path().join("nope"))
            .load()
            .unwrap_err();
        assert!(matches!(
            err,
            SprigError::Application(ApplicationError::SkeletonLoad { .. })
        ));
    }

    #[test]
    fn unknown_manifest_keys_are_rejected() {
        let dir = make_skeleton_dir(&[("skeleton.toml", "nmae = \"typo\"\n"), ("a", "a")]);
        assert!(DirectorySkeletonLoader::new(dir.path()).load().is_err());
    }

    #[test]
    fn manifest_only_directory_is_empty_skeleton() {
        let dir = make_skeleton_dir(&[("skeleton.toml", "name = \"bare\"\n")]);
        let err = DirectorySkeletonLoader::new(dir.path()).load().unwrap_err();
        assert!(matches!(err, SprigError::Domain(_)));
    }
}
