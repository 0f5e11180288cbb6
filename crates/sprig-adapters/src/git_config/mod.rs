//! Git configuration sources.

mod file;
mod memory;

pub use file::GitConfigFile;
pub use memory::MemoryConfigSource;
