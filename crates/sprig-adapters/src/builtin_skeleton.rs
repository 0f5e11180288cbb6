//! The skeleton that ships with Sprig.
//!
//! A minimal Rust library package whose manifest, README and license are
//! filled in from the author's git identity:
//!
//! ```text
//! <project>/
//! ├── Cargo.toml
//! ├── README.md
//! ├── LICENSE
//! ├── .gitignore
//! ├── src/lib.rs
//! └── tests/<project_snake>.rs
//! ```

use sprig_core::domain::{
    DirectorySpec, DomainError, FileSpec, RelativePath, Skeleton, SkeletonContent, SkeletonNode,
};

pub const BUILTIN_NAME: &str = "rust-lib";

const CARGO_TOML: &str = r#"[package]
name = "{{PROJECT_NAME}}"
version = "0.1.0"
edition = "2024"
authors = ["{{USER_NAME}} <{{USER_EMAIL}}>"]
description = "{{SUMMARY}}"
homepage = "{{HOMEPAGE}}"
repository = "{{HOMEPAGE}}"
license = "MIT"

[dependencies]
"#;

const README: &str = "# {{PROJECT_NAME}}

{{SUMMARY}}

## Contributing

1. Fork it ( {{HOMEPAGE}}/fork )
2. Create your feature branch (`git checkout -b my-new-feature`)
3. Commit your changes (`git commit -am 'Add some feature'`)
4. Push to the branch (`git push origin my-new-feature`)
5. Create a new Pull Request

## Copyright

Copyright (c) {{YEAR}} {{USER_NAME}}. See LICENSE for details.
";

const LICENSE: &str = "MIT License

Copyright (c) {{YEAR}} {{USER_NAME}}

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the \"Software\"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
";

const GITIGNORE: &str = "/target
Cargo.lock
*.swp
.DS_Store
";

const LIB_RS: &str = "//! {{SUMMARY}}

/// Returns the crate name.
pub fn name() -> &'static str {
    \"{{PROJECT_NAME}}\"
}
";

const TEST_RS: &str = "#[test]
fn it_has_a_name() {
    assert_eq!({{PROJECT_NAME_SNAKE}}::name(), \"{{PROJECT_NAME}}\");
}
";

/// Build the built-in Rust library skeleton.
pub fn rust_library() -> Result<Skeleton, DomainError> {
    let files: [(&str, &'static str); 6] = [
        ("Cargo.toml", CARGO_TOML),
        ("README.md", README),
        ("LICENSE", LICENSE),
        (".gitignore", GITIGNORE),
        ("src/lib.rs", LIB_RS),
        ("tests/{{PROJECT_NAME_SNAKE}}.rs", TEST_RS),
    ];

    let mut skeleton = Skeleton::new(BUILTIN_NAME)
        .description("Rust library with MIT license and GitHub metadata")
        .with_node(SkeletonNode::Directory(DirectorySpec::new(
            RelativePath::try_new("src")?,
        )))
        .with_node(SkeletonNode::Directory(DirectorySpec::new(
            RelativePath::try_new("tests")?,
        )));

    for (path, body) in files {
        skeleton.push(SkeletonNode::File(FileSpec::new(
            RelativePath::try_new(path)?,
            SkeletonContent::detect(body),
        )));
    }

    Ok(skeleton)
}
