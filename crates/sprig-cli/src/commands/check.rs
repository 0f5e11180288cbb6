//! `sprig check`: validate the git identity without generating anything.

use std::path::PathBuf;

use serde::Serialize;
use tracing::instrument;

use sprig_core::{
    application::services::DEFAULT_GITCONFIG,
    domain::{Generator, GeneratorOptions},
};

use crate::{cli::CheckArgs, config::AppConfig, error::CliResult, output::OutputManager};

#[derive(Debug, Serialize)]
struct CheckOutput<'a> {
    gitconfig: String,
    user_name: &'a str,
    user_email: &'a str,
    github_user: &'a str,
    github_token: bool,
    git_remote: &'a str,
    homepage: String,
}

#[instrument(skip_all)]
pub fn execute(args: CheckArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let gitconfig = args
        .gitconfig
        .or(config.generator.gitconfig)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_GITCONFIG));
    let options =
        GeneratorOptions::new().create_repo(args.create_repo || config.generator.create_repo);

    let generator = super::service().validate(Some(&args.name), options, &gitconfig)?;

    let report = summarize(&generator, gitconfig.display().to_string());
    if output.is_json() {
        output.json(&report)?;
        return Ok(());
    }

    output.success(&format!("{} is ready for sprig", report.gitconfig))?;
    output.print(&format!("  user.name    {}", report.user_name))?;
    output.print(&format!("  user.email   {}", report.user_email))?;
    output.print(&format!("  github.user  {}", report.github_user))?;
    output.print(&format!(
        "  github.token {}",
        if report.github_token { "set" } else { "not set" }
    ))?;
    output.print(&format!("  remote       {}", report.git_remote))?;
    if !report.github_token {
        output.info("Set github.token to use --create-repo")?;
    }
    Ok(())
}

fn summarize(generator: &Generator, gitconfig: String) -> CheckOutput<'_> {
    CheckOutput {
        gitconfig,
        user_name: generator.user_name(),
        user_email: generator.user_email(),
        github_user: generator.github_username(),
        github_token: generator.github_token().is_some(),
        git_remote: generator.git_remote(),
        homepage: generator.homepage(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprig_core::domain::GitConfig;

    fn identity() -> GitConfig {
        [
            ("user.name", "foo"),
            ("user.email", "bar@example.com"),
            ("github.user", "technicalpickles"),
            ("github.token", "zomgtoken"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn summary_never_contains_the_token() {
        let generator =
            Generator::new(Some("gem"), GeneratorOptions::default(), &identity()).unwrap();
        let report = summarize(&generator, "~/.gitconfig".into());

        assert!(report.github_token);
        let json = serde_json::to_string(&report).unwrap();
        assert!(!json.contains("zomgtoken"));
        assert!(json.contains("git@github.com:technicalpickles/gem.git"));
    }
}
