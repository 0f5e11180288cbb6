//! Implementation of the `sprig new` command.
//!
//! Translates CLI arguments and config defaults into a `GenerationRequest`,
//! calls the core service, and reports the result.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use sprig_adapters::{DirectorySkeletonLoader, builtin_skeleton};
use sprig_core::{
    application::{
        GenerationPlan, GenerationReport, GenerationRequest, services::DEFAULT_GITCONFIG,
    },
    domain::{FsEntry, GeneratorOptions, Skeleton},
};

use crate::{
    cli::NewArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `sprig new` command.
///
/// 1. Merge flags with config defaults
/// 2. Load the skeleton
/// 3. Plan only (`--dry-run`) or generate; core validates the name and identity
/// 4. Print the report and next steps
#[instrument(skip_all, fields(project = args.name.as_deref().unwrap_or("")))]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let skeleton_dir = args.skeleton.clone().or(config.generator.skeleton.clone());
    let skeleton = load_skeleton(skeleton_dir.as_deref())?;
    let request = build_request(&args, &config, skeleton);

    debug!(
        gitconfig = %request.gitconfig_path.display(),
        output = %request.output_dir.display(),
        create_repo = request.options.create_repo,
        init_git = request.init_git,
        "Request resolved"
    );

    let service = super::service();

    if args.dry_run {
        let plan = service.plan(&request)?;
        return show_plan(&plan, &output);
    }

    if !output.is_json() {
        output.header(&format!(
            "Creating '{}'...",
            request.project_name.as_deref().unwrap_or_default()
        ))?;
    }

    let report = service.generate(request)?;
    info!(path = %report.project_path.display(), "Project generated");

    show_report(&report, &output)
}

// ── Request construction ──────────────────────────────────────────────────────

/// Flags win over config; `--create-repo` can only switch creation on.
fn build_request(args: &NewArgs, config: &AppConfig, skeleton: Skeleton) -> GenerationRequest {
    let mut options =
        GeneratorOptions::new().create_repo(args.create_repo || config.generator.create_repo);
    if let Some(summary) = args.summary.as_ref().or(config.generator.summary.as_ref()) {
        options = options.summary(summary.clone());
    }

    let gitconfig = args
        .gitconfig
        .clone()
        .or_else(|| config.generator.gitconfig.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_GITCONFIG));

    GenerationRequest {
        project_name: args.name.clone(),
        options,
        gitconfig_path: gitconfig,
        output_dir: args.output.clone().unwrap_or_else(|| PathBuf::from(".")),
        skeleton,
        init_git: !args.no_git && config.generator.init_git,
        force: args.force,
    }
}

fn load_skeleton(dir: Option<&Path>) -> CliResult<Skeleton> {
    match dir {
        Some(dir) => {
            debug!(dir = %dir.display(), "Loading skeleton directory");
            Ok(DirectorySkeletonLoader::new(dir).load()?)
        }
        None => builtin_skeleton::rust_library().map_err(|e| CliError::Core(e.into())),
    }
}

// ── Reporting ─────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct PlanOutput<'a> {
    dry_run: bool,
    project: &'a str,
    path: String,
    git_remote: &'a str,
    files: Vec<String>,
    directories: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ReportOutput<'a> {
    path: String,
    files_written: usize,
    git_remote: &'a str,
    git_initialized: bool,
    repository: Option<RepositoryOutput<'a>>,
}

#[derive(Debug, Serialize)]
struct RepositoryOutput<'a> {
    url: &'a str,
    created: bool,
    instructions: Option<&'a str>,
}

fn show_plan(plan: &GenerationPlan, out: &OutputManager) -> CliResult<()> {
    let relative = |p: &Path| {
        p.strip_prefix(&plan.project_path)
            .unwrap_or(p)
            .display()
            .to_string()
    };
    let (mut files, mut directories) = (Vec::new(), Vec::new());
    for entry in plan.structure.entries() {
        match entry {
            FsEntry::File(f) => files.push(relative(&f.path)),
            FsEntry::Directory(d) => directories.push(relative(&d.path)),
        }
    }

    if out.is_json() {
        out.json(&PlanOutput {
            dry_run: true,
            project: plan.generator.project_name(),
            path: plan.project_path.display().to_string(),
            git_remote: plan.generator.git_remote(),
            files,
            directories,
        })?;
        return Ok(());
    }

    out.info(&format!(
        "Dry run: would create '{}' at {}",
        plan.generator.project_name(),
        plan.project_path.display(),
    ))?;
    out.print(&format!("  Author:  {} <{}>", plan.generator.user_name(), plan.generator.user_email()))?;
    out.print(&format!("  Remote:  {}", plan.generator.git_remote()))?;
    for dir in &directories {
        out.print(&format!("  {dir}/"))?;
    }
    for file in &files {
        out.print(&format!("  {file}"))?;
    }
    if plan.project_path.exists() {
        out.warning("Directory already exists; generation would need --force")?;
    }
    Ok(())
}

fn show_report(report: &GenerationReport, out: &OutputManager) -> CliResult<()> {
    if out.is_json() {
        out.json(&ReportOutput {
            path: report.project_path.display().to_string(),
            files_written: report.files_written,
            git_remote: &report.git_remote,
            git_initialized: report.git_initialized,
            repository: report.hosted.as_ref().map(|h| RepositoryOutput {
                url: &h.html_url,
                created: h.created,
                instructions: h.instructions.as_deref(),
            }),
        })?;
        return Ok(());
    }

    out.success(&format!(
        "Created {} ({} files)",
        report.project_path.display(),
        report.files_written
    ))?;
    if report.git_initialized {
        out.info(&format!("origin -> {}", report.git_remote))?;
    }

    if let Some(hosted) = &report.hosted {
        if hosted.created {
            out.success(&format!("Repository created: {}", hosted.html_url))?;
        } else if let Some(steps) = &hosted.instructions {
            out.warning(steps)?;
        }
    }

    out.print("")?;
    out.print("Next steps:")?;
    out.print(&format!("  cd {}", report.project_path.display()))?;
    out.print("  cargo test")?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
