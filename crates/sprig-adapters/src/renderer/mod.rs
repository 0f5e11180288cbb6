//! Skeleton renderers.

mod simple;

pub use simple::SimpleRenderer;
