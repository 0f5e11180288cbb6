//! Skeleton: the files and directories a new project starts with.
//!
//! ```text
//! Skeleton
//! ├── name / description      (display)
//! └── nodes                   (ordered)
//!     ├── Directory(DirectorySpec)
//!     └── File(FileSpec)
//!         └── SkeletonContent::Literal | Parameterized
//! ```
//!
//! Node paths may themselves contain placeholders
//! (`tests/{{PROJECT_NAME_SNAKE}}.rs`); the renderer substitutes them.

use std::collections::HashSet;

use crate::domain::{
    entities::common::{Permissions, RelativePath},
    error::DomainError,
};

/// A project skeleton, independent of where it was loaded from.
#[derive(Debug, Clone)]
pub struct Skeleton {
    name: String,
    description: String,
    nodes: Vec<SkeletonNode>,
}

impl Skeleton {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            nodes: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add a node (maintains insertion order).
    pub fn push(&mut self, node: SkeletonNode) {
        self.nodes.push(node);
    }

    /// Fluent variant of `push`.
    pub fn with_node(mut self, node: SkeletonNode) -> Self {
        self.push(node);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn summary(&self) -> &str {
        &self.description
    }

    pub fn nodes(&self) -> &[SkeletonNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Validate all invariants.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidSkeleton(
                "Skeleton name cannot be empty".into(),
            ));
        }

        if self.nodes.is_empty() {
            return Err(DomainError::EmptySkeleton {
                name: self.name.clone(),
            });
        }

        let mut seen = HashSet::new();
        for node in &self.nodes {
            let path = node.path().to_string_lossy();
            if !seen.insert(path.clone()) {
                return Err(DomainError::DuplicatePath { path });
            }
        }

        Ok(())
    }
}

/// A single node: either a file or a directory.
#[derive(Debug, Clone)]
pub enum SkeletonNode {
    File(FileSpec),
    Directory(DirectorySpec),
}

impl SkeletonNode {
    pub fn path(&self) -> &RelativePath {
        match self {
            Self::File(f) => &f.path,
            Self::Directory(d) => &d.path,
        }
    }
}

/// Specification for a file to create.
#[derive(Debug, Clone)]
pub struct FileSpec {
    /// Relative path from project root (e.g., "src/lib.rs")
    pub path: RelativePath,
    pub content: SkeletonContent,
    pub permissions: Permissions,
}

impl FileSpec {
    /// Create a new file spec with default read-write permissions.
    pub fn new(path: RelativePath, content: SkeletonContent) -> Self {
        Self {
            path,
            content,
            permissions: Permissions::read_write(),
        }
    }

    /// Mark this file as executable (scripts, hooks).
    pub fn executable(mut self) -> Self {
        self.permissions = Permissions::executable();
        self
    }
}

#[derive(Debug, Clone)]
pub struct DirectorySpec {
    pub path: RelativePath,
    pub permissions: Permissions,
}

impl DirectorySpec {
    pub fn new(path: RelativePath) -> Self {
        Self {
            path,
            permissions: Permissions::read_write(),
        }
    }
}

/// Content specification for a file.
#[derive(Debug, Clone)]
pub enum SkeletonContent {
    /// Content used exactly as provided.
    Literal(SkeletonSource),

    /// Content with `{{VARIABLE}}` placeholders to be substituted.
    Parameterized(SkeletonSource),
}

impl SkeletonContent {
    /// Pick `Parameterized` when the text has placeholder syntax.
    pub fn detect(source: impl Into<SkeletonSource>) -> Self {
        let source = source.into();
        if source.contains_placeholder() {
            Self::Parameterized(source)
        } else {
            Self::Literal(source)
        }
    }
}

/// Source of skeleton content: compile-time or loaded at runtime.
#[derive(Debug, Clone)]
pub enum SkeletonSource {
    Static(&'static str),
    Owned(String),
}

impl From<&'static str> for SkeletonSource {
    fn from(s: &'static str) -> Self {
        Self::Static(s)
    }
}

impl From<String> for SkeletonSource {
    fn from(s: String) -> Self {
        Self::Owned(s)
    }
}

impl SkeletonSource {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            Self::Owned(s) => s,
        }
    }

    pub fn contains_placeholder(&self) -> bool {
        self.as_str().contains("{{") && self.as_str().contains("}}")
    }
}
