//! Version control adapters.

mod git_command;
mod recording;

pub use git_command::GitCommand;
pub use recording::{RecordingVcs, VcsCall};
