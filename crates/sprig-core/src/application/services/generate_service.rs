//! Generate Service - main application orchestrator.
//!
//! This service coordinates the whole generation workflow:
//! 1. Load git configuration through [`ConfigSource`]
//! 2. Validate identity by constructing a [`Generator`] (fail fast)
//! 3. Render the skeleton with the generator's context
//! 4. Write to the filesystem, rolling back on failure
//! 5. Initialise the local repository and its `origin` remote
//! 6. Ask the [`RepositoryHost`] for the remote repository, if requested

use std::path::{Path, PathBuf};

use chrono::Datelike;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{
            ConfigSource, Filesystem, HostedRepository, RepositoryHost, SkeletonRenderer,
            VersionControl,
        },
    },
    domain::{
        DomainError, DomainValidator as validator, FsEntry, Generator, GeneratorOptions,
        ProjectStructure, Skeleton,
    },
    error::SprigResult,
};

/// Conventional location of the per-user git settings.
pub const DEFAULT_GITCONFIG: &str = "~/.gitconfig";

const ORIGIN: &str = "origin";

/// Everything needed to generate one project.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub project_name: Option<String>,
    pub options: GeneratorOptions,
    pub gitconfig_path: PathBuf,
    /// Parent directory; the project lands in `output_dir/target_dir`.
    pub output_dir: PathBuf,
    pub skeleton: Skeleton,
    pub init_git: bool,
    pub force: bool,
}

impl GenerationRequest {
    pub fn new(project_name: impl Into<String>, skeleton: Skeleton) -> Self {
        Self {
            project_name: Some(project_name.into()),
            options: GeneratorOptions::default(),
            gitconfig_path: PathBuf::from(DEFAULT_GITCONFIG),
            output_dir: PathBuf::from("."),
            skeleton,
            init_git: true,
            force: false,
        }
    }

    pub fn options(mut self, options: GeneratorOptions) -> Self {
        self.options = options;
        self
    }

    pub fn gitconfig(mut self, path: impl Into<PathBuf>) -> Self {
        self.gitconfig_path = path.into();
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn init_git(mut self, init_git: bool) -> Self {
        self.init_git = init_git;
        self
    }

    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}

/// A validated and rendered, but not yet written, project.
#[derive(Debug, Clone)]
pub struct GenerationPlan {
    pub generator: Generator,
    pub project_path: PathBuf,
    pub structure: ProjectStructure,
}

/// What `generate` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub project_path: PathBuf,
    pub files_written: usize,
    pub git_remote: String,
    pub git_initialized: bool,
    pub hosted: Option<HostedRepository>,
}

/// Main generation service.
pub struct GenerateService {
    config_source: Box<dyn ConfigSource>,
    renderer: Box<dyn SkeletonRenderer>,
    filesystem: Box<dyn Filesystem>,
    vcs: Box<dyn VersionControl>,
    host: Box<dyn RepositoryHost>,
    year: Option<i32>,
}

impl GenerateService {
    /// Create a new generate service with the given adapters.
    pub fn new(
        config_source: Box<dyn ConfigSource>,
        renderer: Box<dyn SkeletonRenderer>,
        filesystem: Box<dyn Filesystem>,
        vcs: Box<dyn VersionControl>,
        host: Box<dyn RepositoryHost>,
    ) -> Self {
        Self {
            config_source,
            renderer,
            filesystem,
            vcs,
            host,
            year: None,
        }
    }

    /// Pin the `{{YEAR}}` variable instead of reading the clock.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Load the git config and validate identity. No other side effects.
    #[instrument(skip_all, fields(gitconfig = %gitconfig.display()))]
    pub fn validate(
        &self,
        project_name: Option<&str>,
        options: GeneratorOptions,
        gitconfig: &Path,
    ) -> SprigResult<Generator> {
        let config = self.config_source.parse_config(gitconfig)?;
        debug!(entries = config.len(), "git config loaded");

        Ok(Generator::new(project_name, options, &config)?)
    }

    /// Validate and render without touching the filesystem.
    #[instrument(skip_all, fields(project = request.project_name.as_deref().unwrap_or("")))]
    pub fn plan(&self, request: &GenerationRequest) -> SprigResult<GenerationPlan> {
        let generator = self.validate(
            request.project_name.as_deref(),
            request.options.clone(),
            &request.gitconfig_path,
        )?;

        validator::validate_skeleton(&request.skeleton)?;

        let project_path = request.output_dir.join(generator.target_dir());
        let context = generator.render_context(self.current_year());
        let structure = self
            .renderer
            .render(&request.skeleton, &context, &project_path)?;

        info!(
            skeleton = request.skeleton.name(),
            files = structure.file_count(),
            "Skeleton rendered"
        );

        Ok(GenerationPlan {
            generator,
            project_path,
            structure,
        })
    }

    /// Generate a new project.
    #[instrument(skip_all, fields(project = request.project_name.as_deref().unwrap_or("")))]
    pub fn generate(&self, request: GenerationRequest) -> SprigResult<GenerationReport> {
        let plan = self.plan(&request)?;
        let GenerationPlan {
            generator,
            project_path,
            structure,
        } = plan;

        if self.filesystem.exists(&project_path) {
            if !request.force {
                return Err(ApplicationError::ProjectExists { path: project_path }.into());
            }
            warn!(path = %project_path.display(), "Removing existing directory (--force)");
            self.filesystem.remove_dir_all(&project_path)?;
        }

        self.write_structure(&structure)?;

        if request.init_git {
            if let Err(e) = self.init_repository(&project_path, generator.git_remote()) {
                warn!("Repository initialisation failed, attempting rollback");
                self.rollback(&project_path);
                return Err(e);
            }
        }

        let hosted = if generator.create_repo() {
            Some(self.create_remote(&generator)?)
        } else {
            None
        };

        info!(path = %project_path.display(), "Generation completed successfully");

        Ok(GenerationReport {
            files_written: structure.file_count(),
            project_path,
            git_remote: generator.git_remote().to_owned(),
            git_initialized: request.init_git,
            hosted,
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn current_year(&self) -> i32 {
        self.year.unwrap_or_else(|| chrono::Local::now().year())
    }

    fn init_repository(&self, dir: &Path, remote: &str) -> SprigResult<()> {
        self.vcs.init(dir)?;
        self.vcs.add_remote(dir, ORIGIN, remote)?;
        info!(remote, "Repository initialised");
        Ok(())
    }

    fn create_remote(&self, generator: &Generator) -> SprigResult<HostedRepository> {
        let token = generator
            .github_token()
            .ok_or(DomainError::NoHostingToken)?;

        let hosted = self.host.create_repository(
            generator.github_username(),
            token,
            generator.project_name(),
        )?;
        info!(url = %hosted.html_url, created = hosted.created, "Remote repository requested");
        Ok(hosted)
    }

    /// Write project structure to filesystem with rollback on failure.
    fn write_structure(&self, structure: &ProjectStructure) -> SprigResult<()> {
        match self.write_all(structure) {
            Ok(()) => {
                info!("Successfully wrote all files");
                Ok(())
            }
            Err(e) => {
                warn!("Write failed, attempting rollback");
                self.rollback(structure.root());
                Err(e)
            }
        }
    }

    fn write_all(&self, structure: &ProjectStructure) -> SprigResult<()> {
        self.filesystem.create_dir_all(structure.root())?;

        for entry in structure.entries() {
            match entry {
                FsEntry::Directory(dir) => {
                    let path = structure.root().join(&dir.path);
                    self.filesystem.create_dir_all(&path)?;
                }
                FsEntry::File(file) => {
                    let path = structure.root().join(&file.path);

                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }

                    self.filesystem.write_file(&path, &file.content)?;

                    if file.permissions.executable_flag() {
                        self.filesystem.set_permissions(&path, true)?;
                    }
                }
            }
        }

        Ok(())
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, root: &Path) {
        if let Err(e) = self.filesystem.remove_dir_all(root) {
            warn!(
                error = %e,
                path = %root.display(),
                "Rollback failed"
            );
        } else {
            info!("Rollback successful");
        }
    }
}
