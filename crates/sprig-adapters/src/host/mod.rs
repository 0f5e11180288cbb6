//! Repository hosting adapters.
//!
//! No adapter talks to a hosting API. [`ManualHost`] tells the user how to
//! create the repository by hand; [`RecordingHost`] is a test double.

mod manual;
mod recording;

pub use manual::ManualHost;
pub use recording::{HostCall, RecordingHost};

/// Browser address of a repository on GitHub.
pub fn github_url(owner: &str, name: &str) -> String {
    format!("https://github.com/{owner}/{name}")
}
