//! Identity-validated generator.
//!
//! [`Generator::new`] is the single gate every generation passes through: it
//! checks the project name and the git identity entries in a fixed order and
//! fails on the first one that is missing. A constructed `Generator` is
//! immutable and carries everything later steps need (author, remote, target
//! directory), so nothing downstream re-validates.

use std::path::{Component, Path};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{
    entities::render_context::RenderContext,
    error::DomainError,
    git_config::{GITHUB_TOKEN, GITHUB_USER, GitConfig, USER_EMAIL, USER_NAME},
};

const DEFAULT_SUMMARY: &str = "A new project";

/// Options recognised by [`Generator::new`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Create the remote GitHub repository. Makes `github.token` mandatory.
    pub create_repo: bool,
    /// One-line description rendered into the skeleton.
    pub summary: Option<String>,
}

impl GeneratorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_repo(mut self, create_repo: bool) -> Self {
        self.create_repo = create_repo;
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }
}

/// A validated project generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generator {
    project_name: String,
    user_name: String,
    user_email: String,
    github_username: String,
    github_token: Option<String>,
    git_remote: String,
    options: GeneratorOptions,
}

impl Generator {
    /// Validate `project_name` and `config` and build a generator.
    ///
    /// Checks run in this order and the first failure is returned:
    ///
    /// 1. project name present and non-empty ([`DomainError::NoRepoNameGiven`]),
    ///    then usable as one directory name ([`DomainError::InvalidProjectName`])
    /// 2. `user.name` ([`DomainError::NoUserName`])
    /// 3. `user.email` ([`DomainError::NoUserEmail`])
    /// 4. `github.user` ([`DomainError::NoHostingUser`])
    /// 5. `github.token`, only when `options.create_repo`
    ///    ([`DomainError::NoHostingToken`])
    ///
    /// A key whose value is empty counts as missing.
    pub fn new(
        project_name: Option<&str>,
        options: GeneratorOptions,
        config: &GitConfig,
    ) -> Result<Self, DomainError> {
        let project_name = project_name
            .filter(|name| !name.trim().is_empty())
            .ok_or(DomainError::NoRepoNameGiven)?
            .to_owned();
        check_directory_name(&project_name)?;

        let user_name = required(config, USER_NAME, DomainError::NoUserName)?;
        let user_email = required(config, USER_EMAIL, DomainError::NoUserEmail)?;
        let github_username = required(config, GITHUB_USER, DomainError::NoHostingUser)?;

        let github_token = config.get_non_empty(GITHUB_TOKEN).map(str::to_owned);
        if options.create_repo && github_token.is_none() {
            return Err(DomainError::NoHostingToken);
        }

        let git_remote = format!("git@github.com:{github_username}/{project_name}.git");

        debug!(
            project = %project_name,
            github_user = %github_username,
            create_repo = options.create_repo,
            "Generator identity validated"
        );

        Ok(Self {
            project_name,
            user_name,
            user_email,
            github_username,
            github_token,
            git_remote,
            options,
        })
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Author name, from `user.name`.
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// Author email, from `user.email`.
    pub fn user_email(&self) -> &str {
        &self.user_email
    }

    /// GitHub login, from `github.user`.
    pub fn github_username(&self) -> &str {
        &self.github_username
    }

    /// GitHub token, from `github.token`. Always `Some` when
    /// `create_repo` was requested.
    pub fn github_token(&self) -> Option<&str> {
        self.github_token.as_deref()
    }

    /// SSH remote: `git@github.com:{github_username}/{project_name}.git`.
    pub fn git_remote(&self) -> &str {
        &self.git_remote
    }

    /// Directory the skeleton is written into. Mirrors the project name.
    pub fn target_dir(&self) -> &Path {
        Path::new(&self.project_name)
    }

    /// Browser URL of the repository.
    pub fn homepage(&self) -> String {
        format!(
            "https://github.com/{}/{}",
            self.github_username, self.project_name
        )
    }

    pub fn summary(&self) -> &str {
        self.options.summary.as_deref().unwrap_or(DEFAULT_SUMMARY)
    }

    pub fn create_repo(&self) -> bool {
        self.options.create_repo
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Build the variables used to render the skeleton.
    pub fn render_context(&self, year: i32) -> RenderContext {
        RenderContext::new(&self.project_name)
            .with_variable("USER_NAME", &self.user_name)
            .with_variable("USER_EMAIL", &self.user_email)
            .with_variable("GITHUB_USER", &self.github_username)
            .with_variable("GIT_REMOTE", &self.git_remote)
            .with_variable("HOMEPAGE", self.homepage())
            .with_variable("SUMMARY", self.summary())
            .with_variable("YEAR", year.to_string())
    }
}

/// The project lands in `output_dir.join(name)`, so the name must be exactly
/// one plain path component.
fn check_directory_name(name: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidProjectName {
        name: name.to_owned(),
        reason: reason.to_owned(),
    };

    if name.contains(['/', '\\']) {
        return Err(invalid("name cannot contain path separators"));
    }
    if name.starts_with('.') {
        return Err(invalid("name cannot start with '.'"));
    }

    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(invalid("name must be a single directory name")),
    }
}

fn required(config: &GitConfig, key: &str, missing: DomainError) -> Result<String, DomainError> {
    config
        .get_non_empty(key)
        .map(str::to_owned)
        .ok_or(missing)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROJECT: &str = "the-perfect-gem";
    const GIT_NAME: &str = "foo";
    const GIT_EMAIL: &str = "bar@example.com";
    const GITHUB_LOGIN: &str = "technicalpickles";
    const TOKEN: &str = "zomgtoken";

    fn config(entries: &[(&str, &str)]) -> GitConfig {
        entries.iter().copied().collect()
    }

    fn full_config() -> GitConfig {
        config(&[
            (USER_NAME, GIT_NAME),
            (USER_EMAIL, GIT_EMAIL),
            (GITHUB_USER, GITHUB_LOGIN),
            (GITHUB_TOKEN, TOKEN),
        ])
    }

    // ── failure order ──────────────────────────────────────────────────────

    #[test]
    fn missing_project_name_fails_before_config_is_checked() {
        let err = Generator::new(None, GeneratorOptions::default(), &GitConfig::new()).unwrap_err();
        assert_eq!(err, DomainError::NoRepoNameGiven);
    }

    #[test]
    fn empty_project_name_is_treated_as_missing() {
        for name in ["", "   "] {
            let err = Generator::new(Some(name), GeneratorOptions::default(), &full_config())
                .unwrap_err();
            assert_eq!(err, DomainError::NoRepoNameGiven);
        }
    }

    #[test]
    fn names_that_escape_the_output_directory_are_rejected() {
        for name in ["..", ".", "../sibling", "a/b", "a\\b", "/abs", ".hidden"] {
            let err = Generator::new(Some(name), GeneratorOptions::default(), &full_config())
                .unwrap_err();
            assert!(
                matches!(err, DomainError::InvalidProjectName { .. }),
                "accepted {name:?}"
            );
        }
    }

    #[test]
    fn invalid_name_is_reported_before_identity() {
        let err = Generator::new(Some(".."), GeneratorOptions::default(), &GitConfig::new())
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidProjectName { .. }));
    }

    #[test]
    fn ordinary_names_are_accepted() {
        for name in ["the-perfect-gem", "my_app", "project123", "MyApp", "v1.2"] {
            assert!(
                Generator::new(Some(name), GeneratorOptions::default(), &full_config()).is_ok(),
                "rejected {name:?}"
            );
        }
    }

    #[test]
    fn missing_user_name() {
        let cfg = config(&[(USER_EMAIL, GIT_EMAIL)]);
        let err = Generator::new(Some(PROJECT), GeneratorOptions::default(), &cfg).unwrap_err();
        assert_eq!(err, DomainError::NoUserName);
    }

    #[test]
    fn missing_user_name_wins_regardless_of_other_fields() {
        let cfg = config(&[
            (USER_EMAIL, GIT_EMAIL),
            (GITHUB_USER, GITHUB_LOGIN),
            (GITHUB_TOKEN, TOKEN),
        ]);
        let opts = GeneratorOptions::new().create_repo(true);
        assert_eq!(
            Generator::new(Some(PROJECT), opts, &cfg).unwrap_err(),
            DomainError::NoUserName
        );
    }

    #[test]
    fn missing_user_email() {
        let cfg = config(&[(USER_NAME, GIT_NAME)]);
        let err = Generator::new(Some(PROJECT), GeneratorOptions::default(), &cfg).unwrap_err();
        assert_eq!(err, DomainError::NoUserEmail);
    }

    #[test]
    fn missing_github_user() {
        let cfg = config(&[(USER_EMAIL, GIT_EMAIL), (USER_NAME, GIT_NAME)]);
        let err = Generator::new(Some(PROJECT), GeneratorOptions::default(), &cfg).unwrap_err();
        assert_eq!(err, DomainError::NoHostingUser);
    }

    #[test]
    fn missing_token_when_creating_repo() {
        let cfg = config(&[
            (USER_NAME, GIT_NAME),
            (USER_EMAIL, GIT_EMAIL),
            (GITHUB_USER, GITHUB_LOGIN),
        ]);
        let opts = GeneratorOptions::new().create_repo(true);
        assert_eq!(
            Generator::new(Some(PROJECT), opts, &cfg).unwrap_err(),
            DomainError::NoHostingToken
        );
    }

    #[test]
    fn missing_token_is_fine_without_repo_creation() {
        let cfg = config(&[
            (USER_NAME, GIT_NAME),
            (USER_EMAIL, GIT_EMAIL),
            (GITHUB_USER, GITHUB_LOGIN),
        ]);
        let generator = Generator::new(Some(PROJECT), GeneratorOptions::default(), &cfg).unwrap();
        assert_eq!(generator.github_token(), None);
        assert!(!generator.create_repo());
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let cfg = config(&[(USER_NAME, GIT_NAME), (USER_EMAIL, "")]);
        let err = Generator::new(Some(PROJECT), GeneratorOptions::default(), &cfg).unwrap_err();
        assert_eq!(err, DomainError::NoUserEmail);
    }

    // ── derived properties ─────────────────────────────────────────────────

    #[test]
    fn valid_configuration_assigns_identity() {
        let generator =
            Generator::new(Some(PROJECT), GeneratorOptions::default(), &full_config()).unwrap();

        assert_eq!(generator.user_name(), GIT_NAME);
        assert_eq!(generator.user_email(), GIT_EMAIL);
        assert_eq!(generator.github_username(), GITHUB_LOGIN);
        assert_eq!(generator.github_token(), Some(TOKEN));
    }

    #[test]
    fn valid_configuration_derives_remote_and_target() {
        let generator =
            Generator::new(Some(PROJECT), GeneratorOptions::default(), &full_config()).unwrap();

        assert_eq!(
            generator.git_remote(),
            "git@github.com:technicalpickles/the-perfect-gem.git"
        );
        assert_eq!(generator.project_name(), PROJECT);
        assert_eq!(generator.target_dir(), Path::new(generator.project_name()));
        assert_eq!(
            generator.homepage(),
            "https://github.com/technicalpickles/the-perfect-gem"
        );
    }

    #[test]
    fn summary_defaults_when_not_given() {
        let generator =
            Generator::new(Some(PROJECT), GeneratorOptions::default(), &full_config()).unwrap();
        assert_eq!(generator.summary(), DEFAULT_SUMMARY);

        let generator = Generator::new(
            Some(PROJECT),
            GeneratorOptions::new().summary("Gems, perfected"),
            &full_config(),
        )
        .unwrap();
        assert_eq!(generator.summary(), "Gems, perfected");
    }

    #[test]
    fn render_context_exposes_identity() {
        let generator =
            Generator::new(Some(PROJECT), GeneratorOptions::default(), &full_config()).unwrap();
        let ctx = generator.render_context(2031);

        assert_eq!(ctx.get("USER_NAME"), Some(GIT_NAME));
        assert_eq!(ctx.get("GITHUB_USER"), Some(GITHUB_LOGIN));
        assert_eq!(ctx.get("PROJECT_NAME_SNAKE"), Some("the_perfect_gem"));
        assert_eq!(ctx.get("YEAR"), Some("2031"));
        assert_eq!(
            ctx.render("Copyright (c) {{YEAR}} {{USER_NAME}}"),
            "Copyright (c) 2031 foo"
        );
    }
}
