//! Simple variable substitution renderer.

use std::path::{Path, PathBuf};

use sprig_core::{
    application::ports::SkeletonRenderer,
    domain::{
        DomainValidator as validator, ProjectStructure, RelativePath, RenderContext, Skeleton,
        SkeletonContent, SkeletonNode,
    },
    error::SprigResult,
};
use tracing::{instrument, trace};

/// Renderer using `{{VARIABLE}}` substitution in file contents and paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRenderer;

impl SimpleRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl SkeletonRenderer for SimpleRenderer {
    #[instrument(skip_all, fields(skeleton = skeleton.name()))]
    fn render(
        &self,
        skeleton: &Skeleton,
        context: &RenderContext,
        output_root: &Path,
    ) -> SprigResult<ProjectStructure> {
        validator::validate_skeleton(skeleton)?;

        let mut structure = ProjectStructure::new(output_root);

        for node in skeleton.nodes() {
            match node {
                SkeletonNode::File(spec) => {
                    let path = render_path(&spec.path, context);
                    let content = render_content(&spec.content, context);
                    trace!(path = %path.display(), "render file");
                    structure.add_file(path, content, spec.permissions);
                }
                SkeletonNode::Directory(spec) => {
                    structure.add_directory(render_path(&spec.path, context), spec.permissions);
                }
            }
        }

        // Rendered paths may collide or become absolute.
        validator::validate_project_structure(&structure)?;

        Ok(structure)
    }
}

fn render_path(path: &RelativePath, ctx: &RenderContext) -> PathBuf {
    PathBuf::from(ctx.render(&path.to_string_lossy()))
}

fn render_content(content: &SkeletonContent, ctx: &RenderContext) -> String {
    match content {
        SkeletonContent::Literal(source) => source.as_str().to_owned(),
        SkeletonContent::Parameterized(source) => ctx.render(source.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprig_core::domain::{DirectorySpec, DomainError, FileSpec, FsEntry};
    use sprig_core::error::SprigError;

    fn file(path: &str, body: &'static str) -> SkeletonNode {
        SkeletonNode::File(FileSpec::new(
            RelativePath::try_new(path).unwrap(),
            SkeletonContent::detect(body),
        ))
    }

    fn ctx() -> RenderContext {
        RenderContext::new("the-perfect-gem").with_variable("USER_NAME", "foo")
    }

    #[test]
    fn substitutes_content_and_paths() {
        let skeleton = Skeleton::new("t")
            .with_node(SkeletonNode::Directory(DirectorySpec::new(
                RelativePath::try_new("tests").unwrap(),
            )))
            .with_node(file("tests/{{PROJECT_NAME_SNAKE}}.rs", "// {{USER_NAME}}"));

        let structure = SimpleRenderer::new()
            .render(&skeleton, &ctx(), Path::new("/out/the-perfect-gem"))
            .unwrap();

        assert_eq!(structure.root(), Path::new("/out/the-perfect-gem"));
        let rendered = structure.files().next().unwrap();
        assert_eq!(rendered.path, PathBuf::from("tests/the_perfect_gem.rs"));
        assert_eq!(rendered.content, "// foo");
        assert!(matches!(structure.entries()[0], FsEntry::Directory(_)));
    }

    #[test]
    fn literal_content_is_untouched() {
        let skeleton = Skeleton::new("t").with_node(SkeletonNode::File(FileSpec::new(
            RelativePath::try_new("Makefile").unwrap(),
            SkeletonContent::Literal("all: {{PROJECT_NAME}}".into()),
        )));

        let structure = SimpleRenderer::new()
            .render(&skeleton, &ctx(), Path::new("/out"))
            .unwrap();
        assert_eq!(
            structure.files().next().unwrap().content,
            "all: {{PROJECT_NAME}}"
        );
    }

    #[test]
    fn colliding_rendered_paths_are_rejected() {
        let skeleton = Skeleton::new("t")
            .with_node(file("{{PROJECT_NAME}}.md", "a"))
            .with_node(file("the-perfect-gem.md", "b"));

        let err = SimpleRenderer::new()
            .render(&skeleton, &ctx(), Path::new("/out"))
            .unwrap_err();
        assert!(matches!(
            err,
            SprigError::Domain(DomainError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn empty_skeleton_is_rejected() {
        let err = SimpleRenderer::new()
            .render(&Skeleton::new("bare"), &ctx(), Path::new("/out"))
            .unwrap_err();
        assert!(matches!(
            err,
            SprigError::Domain(DomainError::EmptySkeleton { .. })
        ));
    }
}
