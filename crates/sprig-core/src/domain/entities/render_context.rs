use std::collections::HashMap;

/// Context for skeleton rendering.
///
/// A **Value Object** holding every variable a parameterized file or path
/// can reference. Immutable after creation; `with_variable` returns a new
/// instance.
///
/// ## Built-in Variables
///
/// | Variable | Example | Source |
/// |----------|---------|--------|
/// | `PROJECT_NAME` | "the-perfect-gem" | User input |
/// | `PROJECT_NAME_SNAKE` | "the_perfect_gem" | Computed |
/// | `PROJECT_NAME_PASCAL` | "ThePerfectGem" | Computed |
///
/// The generator adds `USER_NAME`, `USER_EMAIL`, `GITHUB_USER`,
/// `GIT_REMOTE`, `HOMEPAGE`, `SUMMARY` and `YEAR` on top of these
/// (see [`crate::domain::Generator::render_context`]).
#[derive(Debug, Clone)]
pub struct RenderContext {
    project_name: String,
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new(project_name: impl Into<String>) -> Self {
        let project_name = project_name.into();
        let parts = words(&project_name);
        let pascal: String = parts.iter().map(|w| capitalize(w)).collect();

        let variables = HashMap::from([
            ("PROJECT_NAME".to_owned(), project_name.clone()),
            ("PROJECT_NAME_SNAKE".to_owned(), parts.join("_")),
            ("PROJECT_NAME_PASCAL".to_owned(), pascal),
        ]);

        Self {
            project_name,
            variables,
        }
    }

    /// Add a variable, consuming self. Overrides built-ins of the same name.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Replace `{{VARIABLE}}` placeholders in one left-to-right pass.
    ///
    /// Unknown placeholders are kept verbatim. Substituted values are not
    /// scanned again, so a summary containing `{{X}}` stays as typed.
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find("{{") {
            out.push_str(&rest[..open]);
            let after = &rest[open + 2..];
            match after.find("}}") {
                Some(close) => {
                    let key = &after[..close];
                    match self.variables.get(key) {
                        Some(value) => out.push_str(value),
                        None => {
                            out.push_str("{{");
                            out.push_str(key);
                            out.push_str("}}");
                        }
                    }
                    rest = &after[close + 2..];
                }
                None => {
                    out.push_str(&rest[open..]);
                    rest = "";
                }
            }
        }

        out.push_str(rest);
        out
    }
}

// ── Name casing ───────────────────────────────────────────────────────────

/// Lower-cased words of a project name.
///
/// Separators are `_`, `-`, `.` and whitespace; a new word also starts at a
/// lower-to-upper transition (`myApp`) and before the last capital of an
/// acronym run followed by lowercase (`HTTPServer` → `http`, `server`).
fn words(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if matches!(c, '_' | '-' | '.') || c.is_whitespace() {
            flush(&mut current, &mut words);
            continue;
        }

        let prev = i.checked_sub(1).map(|p| chars[p]);
        let next = chars.get(i + 1).copied();
        let camel_break = prev.is_some_and(char::is_lowercase) && c.is_uppercase();
        let acronym_end = prev.is_some_and(char::is_uppercase)
            && c.is_uppercase()
            && next.is_some_and(char::is_lowercase);
        if camel_break || acronym_end {
            flush(&mut current, &mut words);
        }

        current.extend(c.to_lowercase());
    }
    flush(&mut current, &mut words);

    words
}

fn flush(current: &mut String, words: &mut Vec<String>) {
    if !current.is_empty() {
        words.push(std::mem::take(current));
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}
